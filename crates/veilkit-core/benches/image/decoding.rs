use criterion::{criterion_group, criterion_main, Criterion};
use veilkit_core::{CodecOptions, Media};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let plain_image = image::RgbaImage::from_fn(512, 512, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
        });
        let options = CodecOptions::default();
        let mut media = Media::from_image(plain_image);
        media
            .hide_data(b"Hello World!", &options)
            .expect("Cannot hide secret message");

        b.iter(|| {
            media
                .unveil_data(&options)
                .expect("Cannot unveil secret message")
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
