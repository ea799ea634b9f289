use std::fs::File;
use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Frame, RgbaImage};
use tempfile::TempDir;
use veilkit_core::keygen::{load_source, sample_entropy, AnimatedImageSource};
use veilkit_core::VeilError;
use veilkit_crypto::{KdfOptions, Seed};

fn fast() -> KdfOptions {
    KdfOptions::default().with_iterations(1_000)
}

fn write_gif(path: &Path, frame_count: u8) {
    let frames = (0..frame_count).map(|f| {
        Frame::new(RgbaImage::from_fn(12, 9, |x, y| {
            image::Rgba([(x * 20) as u8, (y * 25) as u8, f * 60, 255])
        }))
    });
    let mut encoder = GifEncoder::new(File::create(path).expect("Cannot create gif"));
    encoder.encode_frames(frames).expect("Cannot encode gif");
}

fn key_of(path: &Path, seed: &str) -> veilkit_core::Result<String> {
    veilkit_core::commands::generate_key(Some(path), None, Seed::from(seed), 100, fast())
}

#[test]
fn animated_gif_keys_are_reproducible() -> veilkit_core::Result<()> {
    let out_dir = TempDir::new()?;
    let gif = out_dir.path().join("animation.gif");
    let copy = out_dir.path().join("renamed-copy.gif");
    write_gif(&gif, 3);
    std::fs::copy(&gif, &copy)?;

    let source = AnimatedImageSource::from_file(&gif)?;
    assert_eq!(source.frame_count(), 3);
    assert_eq!(sample_entropy(&source, &Seed::from("42"), 100).len(), 300);

    let key = key_of(&gif, "42")?;
    assert_eq!(key.len(), 64);
    assert_eq!(key, key_of(&gif, "42")?);
    assert_eq!(key, key_of(&copy, "42")?, "path must not matter");
    assert_ne!(key, key_of(&gif, "43")?);

    Ok(())
}

#[test]
fn still_gif_is_not_animated() -> veilkit_core::Result<()> {
    let out_dir = TempDir::new()?;
    let gif = out_dir.path().join("still.gif");
    write_gif(&gif, 1);

    assert!(matches!(
        load_source(&gif),
        Err(VeilError::UnsupportedCarrier(_))
    ));

    Ok(())
}

#[test]
fn audio_png_and_text_carriers_give_keys() -> veilkit_core::Result<()> {
    let out_dir = TempDir::new()?;
    let wav = out_dir.path().join("carrier.wav");
    let png = out_dir.path().join("carrier.png");
    let txt = out_dir.path().join("book.txt");
    std::fs::write(&wav, (0..=255u8).cycle().take(4_096).collect::<Vec<u8>>())?;
    RgbaImage::from_fn(30, 30, |x, y| image::Rgba([x as u8, y as u8, 7, 255]))
        .save(&png)
        .unwrap();
    std::fs::write(&txt, "It was a bright cold day.\n\nThe clocks were striking.\x0cPage two.")?;

    for carrier in [&wav, &png, &txt] {
        let key = key_of(carrier, "seed")?;
        assert_eq!(key.len(), 64);
        assert_eq!(key, key_of(carrier, "seed")?);
    }

    Ok(())
}

#[test]
fn broken_and_empty_carriers_are_rejected() -> veilkit_core::Result<()> {
    let out_dir = TempDir::new()?;
    let broken = out_dir.path().join("broken.gif");
    let empty = out_dir.path().join("empty.wav");
    std::fs::write(&broken, b"GIF89a but nothing else")?;
    std::fs::write(&empty, b"")?;

    assert!(matches!(
        load_source(&broken),
        Err(VeilError::CarrierUnreadable(_))
    ));
    assert!(matches!(
        load_source(&empty),
        Err(VeilError::UnsupportedCarrier(_))
    ));
    assert!(matches!(
        load_source(out_dir.path().join("missing.png")),
        Err(VeilError::CarrierUnreadable(_))
    ));

    Ok(())
}
