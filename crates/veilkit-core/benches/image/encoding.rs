use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Write;
use veilkit_core::media::image::LsbCodec;
use veilkit_core::LsbCodecOptions;

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image = image::RgbaImage::from_fn(512, 512, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
        });
        let secret_message = b"Hello World!";
        let options = LsbCodecOptions::default();

        b.iter(|| {
            LsbCodec::encoder(&mut plain_image, &options)
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
