use tempfile::TempDir;
use veilkit_core::{api, CodecOptions, VeilError};
use veilkit_crypto::{KdfOptions, Seed};

const KEY: &str = "6b6579206d6174657269616c20666f722074686520746573742073756974652e";

fn carrier(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("carrier.png");
    image::RgbaImage::from_fn(48, 48, |x, y| image::Rgba([(x * 5) as u8, (y * 5) as u8, 99, 255]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn encrypted_messages_round_trip() -> veilkit_core::Result<()> {
    let out_dir = TempDir::new()?;
    let secret = out_dir.path().join("secret.png");

    api::hide::prepare()
        .with_message("attack at dawn")
        .with_key(KEY)
        .with_media(carrier(out_dir.path()))
        .with_output(&secret)
        .execute()?;

    let data = api::unveil::prepare()
        .from_secret_file(&secret)
        .with_key(KEY)
        .execute()?;
    assert_eq!(data, b"attack at dawn");

    // without the key only the ciphertext comes out, framed with a length header
    let raw = api::unveil::prepare()
        .from_secret_file(&secret)
        .with_options(CodecOptions::default().with_format(veilkit_core::PayloadFormat::LengthHeader))
        .execute()?;
    assert_eq!(raw.len(), 12 + 14 + 16);
    assert_ne!(&raw[12..26], b"attack at dawn");

    Ok(())
}

#[test]
fn wrong_key_never_yields_plaintext() -> veilkit_core::Result<()> {
    let out_dir = TempDir::new()?;
    let secret = out_dir.path().join("secret.png");
    api::hide::prepare()
        .with_message("attack at dawn")
        .with_key(KEY)
        .with_media(carrier(out_dir.path()))
        .with_output(&secret)
        .execute()?;

    let wrong = "00".repeat(32);
    assert!(matches!(
        api::unveil::prepare().from_secret_file(&secret).with_key(&wrong).execute(),
        Err(VeilError::AuthenticationFailure)
    ));
    assert!(matches!(
        api::unveil::prepare().from_secret_file(&secret).with_key("0011").execute(),
        Err(VeilError::InvalidKeyLength(4))
    ));

    Ok(())
}

#[test]
fn derived_keys_encrypt_payloads() -> veilkit_core::Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = carrier(out_dir.path());
    let secret = out_dir.path().join("secret.png");
    let key = api::keygen::prepare()
        .from_carrier(&carrier)
        .with_seed(Seed::from("42"))
        .with_kdf_options(KdfOptions::default().with_iterations(1_000))
        .execute()?;

    api::hide::prepare()
        .with_message("keyed by the carrier")
        .with_key(&key)
        .with_media(&carrier)
        .with_output(&secret)
        .execute()?;

    let data = api::unveil::prepare()
        .from_secret_file(&secret)
        .with_key(&key)
        .execute()?;
    assert_eq!(data, b"keyed by the carrier");

    Ok(())
}
