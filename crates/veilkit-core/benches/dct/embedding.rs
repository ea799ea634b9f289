use criterion::{criterion_group, criterion_main, Criterion};
use veilkit_core::bitstream::{encode, Terminator};
use veilkit_core::media::image::DctCodec;

fn gray_carrier() -> image::GrayImage {
    image::GrayImage::from_fn(256, 256, |x, y| image::Luma([(64 + (x * 7 + y * 13) % 128) as u8]))
}

pub fn dct_embedding(c: &mut Criterion) {
    let bits = encode(b"Hello World!", Terminator::Ones);

    c.bench_function("DCT Embedding", |b| {
        let plain_image = gray_carrier();

        b.iter(|| {
            let mut image = plain_image.clone();
            DctCodec::hide_bits(&mut image, &bits).expect("Cannot hide bits");
        })
    });

    c.bench_function("DCT Extraction", |b| {
        let mut image = gray_carrier();
        DctCodec::hide_bits(&mut image, &bits).expect("Cannot hide bits");

        b.iter(|| DctCodec::decoder(&image).take(bits.len()).count())
    });
}

criterion_group!(benches, dct_embedding);
criterion_main!(benches);
