use criterion::{criterion_group, criterion_main, Criterion};
use std::io::{Read, Write};
use veilkit_core::media::audio::LsbCodec;
use veilkit_core::Samples;

pub fn audio_decoding(c: &mut Criterion) {
    c.bench_function("Audio Decoding", |b| {
        let mut samples = Samples::Float(
            (0..44_100)
                .map(|i| (i as f32 * 0.05).sin() * 0.4)
                .collect(),
        );
        LsbCodec::encoder(&mut samples)
            .write_all(b"Hello World!")
            .expect("Cannot write secret message");
        let mut buf = [0; 12];

        b.iter(|| {
            LsbCodec::decoder(&samples)
                .read_exact(&mut buf)
                .expect("Cannot read 12 bytes from decoder");
        })
    });
}

criterion_group!(benches, audio_decoding);
criterion_main!(benches);
