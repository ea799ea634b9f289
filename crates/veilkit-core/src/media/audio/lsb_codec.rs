use super::wav_iter::{AudioWavIter, AudioWavIterMut};
use crate::media::Samples;
use crate::universal_decoder::{OneBitUnveil, UniversalDecoder};
use crate::universal_encoder::{OneBitHide, UniversalEncoder};

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Audio Decoder that implements Read and yields bits
    pub fn decoder(input: &Samples) -> UniversalDecoder<AudioWavIter<'_>, OneBitUnveil> {
        UniversalDecoder::new(AudioWavIter::new(input), OneBitUnveil)
    }

    /// builds a LSB Audio Encoder that implements Write
    pub fn encoder(input: &mut Samples) -> UniversalEncoder<AudioWavIterMut<'_>, OneBitHide> {
        UniversalEncoder::new(AudioWavIterMut::new(input), OneBitHide)
    }

    /// one bit per sample, every channel counts
    pub fn capacity(input: &Samples) -> usize {
        input.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use hound::{WavReader, WavWriter};
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::{sine_samples, wav_spec_16bit};

    #[test]
    fn it_should_encode_and_decode_in_chunks_by_using_read_to_end() {
        let out_dir = TempDir::new().unwrap();
        let audio_with_secret_p = out_dir.path().join("audio-with-secret.wav");
        let audio_with_secret = audio_with_secret_p.as_path();

        let secret_to_hide = include_bytes!("lsb_codec.rs").to_vec();
        let spec = wav_spec_16bit();
        let mut samples = Samples::Int(sine_samples(secret_to_hide.len() * 8 + 1000));
        {
            let mut codec = LsbCodec::encoder(&mut samples);
            let half_the_buffer = secret_to_hide.len() / 2;
            codec
                .write_all(&secret_to_hide[..half_the_buffer])
                .expect("Cannot write half the buffer to codec");
            codec
                .write_all(&secret_to_hide[half_the_buffer..])
                .expect("Cannot write the other half of the buffer to codec");
        }
        {
            let mut writer =
                WavWriter::create(audio_with_secret, spec).expect("Cannot create writer");
            if let Samples::Int(samples) = &samples {
                samples
                    .iter()
                    .for_each(|s| writer.write_sample(*s as i16).unwrap());
            }
            writer.finalize().expect("Cannot finalize");
        }

        let mut reader =
            WavReader::open(audio_with_secret).expect("carrier audio file was not readable");
        let samples = Samples::Int(reader.samples::<i32>().map(|s| s.unwrap()).collect());
        let mut codec = LsbCodec::decoder(&samples);
        let mut unveiled_secret = Vec::new();
        let total_read = codec
            .read_to_end(&mut unveiled_secret)
            .expect("Cannot read all data from codec");
        assert!(
            total_read > secret_to_hide.len(),
            "Total read should be way more than the original secret"
        );
        assert_eq!(&unveiled_secret[..secret_to_hide.len()], &secret_to_hide[..]);
    }

    #[test]
    fn capacity_is_one_bit_per_sample() {
        assert_eq!(LsbCodec::capacity(&Samples::Int(vec![0; 60])), 60);
        assert_eq!(LsbCodec::capacity(&Samples::Float(vec![0.0; 64])), 64);
    }
}
