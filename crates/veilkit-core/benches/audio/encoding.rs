use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Write;
use veilkit_core::media::audio::LsbCodec;
use veilkit_core::Samples;

pub fn audio_encoding(c: &mut Criterion) {
    c.bench_function("Audio Encoding", |b| {
        let mut samples = Samples::Int(
            (0..44_100)
                .map(|i| ((i as f32 * 0.05).sin() * 12_000.0) as i32)
                .collect(),
        );
        let secret_message = b"Hello World!";

        b.iter(|| {
            LsbCodec::encoder(&mut samples)
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
