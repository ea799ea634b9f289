use crate::result::Result;

/// Fixed scale applied to normalized float samples before their LSB is used
pub const AUDIO_FLOAT_SCALE: f32 = 32768.0;

/// wrap the low level data types that carries information
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
    AudioSample(i32),
}

impl From<u8> for MediaPrimitive {
    fn from(value: u8) -> Self {
        MediaPrimitive::ImageColorChannel(value)
    }
}

impl From<i32> for MediaPrimitive {
    fn from(value: i32) -> Self {
        MediaPrimitive::AudioSample(value)
    }
}

/// mutable primitive for storing hidden data
#[derive(Debug, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
    AudioSample(&'a mut i32),
    FloatAudioSample(&'a mut f32),
}

/// Integer representation of a float sample, truncated towards zero
pub fn scale_float_sample(sample: f32) -> i32 {
    (sample * AUDIO_FLOAT_SCALE) as i32
}

pub trait HideBit {
    fn hide_bit(self, bit: bool) -> Result<()>;
}

impl HideBit for MediaPrimitiveMut<'_> {
    fn hide_bit(self, bit: bool) -> Result<()> {
        match self {
            MediaPrimitiveMut::ImageColorChannel(c) => {
                *c = (*c & !1) | u8::from(bit);
            }
            MediaPrimitiveMut::AudioSample(s) => {
                *s = (*s & !1) | i32::from(bit);
            }
            MediaPrimitiveMut::FloatAudioSample(s) => {
                let scaled = (scale_float_sample(*s) & !1) | i32::from(bit);
                *s = scaled as f32 / AUDIO_FLOAT_SCALE;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carrier_item_mut_should_allow_to_mutate_colors() {
        let mut color: u8 = 8;
        let c = MediaPrimitiveMut::ImageColorChannel(&mut color);

        if let MediaPrimitiveMut::ImageColorChannel(i) = c {
            *i = 9;
        }

        assert_eq!(color, 9);
    }

    #[test]
    fn should_only_touch_the_least_significant_bit() {
        let mut color: u8 = 0b1010_1010;
        MediaPrimitiveMut::ImageColorChannel(&mut color)
            .hide_bit(true)
            .unwrap();
        assert_eq!(color, 0b1010_1011);

        let mut sample: i32 = -3;
        MediaPrimitiveMut::AudioSample(&mut sample)
            .hide_bit(false)
            .unwrap();
        assert_eq!(sample, -4);

        let mut sample: i32 = i32::MAX - 1;
        MediaPrimitiveMut::AudioSample(&mut sample)
            .hide_bit(true)
            .unwrap();
        assert_eq!(sample, i32::MAX);
    }

    #[test]
    fn float_samples_keep_their_bit_through_the_shared_scale() {
        for (sample, bit) in [(0.25f32, true), (-0.5, true), (0.123_456, false), (-0.999, false)] {
            let mut s = sample;
            MediaPrimitiveMut::FloatAudioSample(&mut s)
                .hide_bit(bit)
                .unwrap();

            assert_eq!(scale_float_sample(s) & 1 == 1, bit, "sample {sample}");
            assert!((s - sample).abs() <= 2.0 / AUDIO_FLOAT_SCALE);
        }
    }
}
