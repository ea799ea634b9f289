use std::slice::{Iter, IterMut};

use crate::media::{scale_float_sample, MediaPrimitive, MediaPrimitiveMut, Samples};

/// Iterating wav audio samples, based on the samples read by `hound`
///
/// Float samples are yielded in their scaled integer representation.
pub enum AudioWavIter<'a> {
    Int(Iter<'a, i32>),
    Float(Iter<'a, f32>),
}

impl<'a> AudioWavIter<'a> {
    pub fn new(samples: &'a Samples) -> Self {
        match samples {
            Samples::Int(s) => AudioWavIter::Int(s.iter()),
            Samples::Float(s) => AudioWavIter::Float(s.iter()),
        }
    }
}

/// Audio samples iterator that yields immutable MediaPrimitives `MediaPrimitive`
impl Iterator for AudioWavIter<'_> {
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            AudioWavIter::Int(s) => s.next().map(|s| MediaPrimitive::AudioSample(*s)),
            AudioWavIter::Float(s) => s
                .next()
                .map(|s| MediaPrimitive::AudioSample(scale_float_sample(*s))),
        }
    }
}

/// Iterating mutable wav audio samples
pub enum AudioWavIterMut<'a> {
    Int(IterMut<'a, i32>),
    Float(IterMut<'a, f32>),
}

impl<'a> AudioWavIterMut<'a> {
    pub fn new(samples: &'a mut Samples) -> Self {
        match samples {
            Samples::Int(s) => AudioWavIterMut::Int(s.iter_mut()),
            Samples::Float(s) => AudioWavIterMut::Float(s.iter_mut()),
        }
    }
}

/// Audio samples iterator that yields mutable MediaPrimitives `MediaPrimitiveMut`
impl<'a> Iterator for AudioWavIterMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            AudioWavIterMut::Int(s) => s.next().map(MediaPrimitiveMut::AudioSample),
            AudioWavIterMut::Float(s) => s.next().map(MediaPrimitiveMut::FloatAudioSample),
        }
    }
}
