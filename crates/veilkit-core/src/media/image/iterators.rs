use std::iter::Enumerate;

/// Walks the interleaved channel values of an image buffer in row-major pixel order.
///
/// Alpha values are left out when requested, `steps` then counts only the remaining channels.
pub(crate) struct ChannelIter<I> {
    channels: Enumerate<I>,
    channels_per_pixel: usize,
    alpha_index: Option<usize>,
    steps: usize,
}

impl<I: Iterator> ChannelIter<I> {
    pub fn new(channels: I, channels_per_pixel: usize, skip_alpha_channel: bool, steps: usize) -> Self {
        let has_alpha = channels_per_pixel == 2 || channels_per_pixel == 4;
        Self {
            channels: channels.enumerate(),
            channels_per_pixel,
            alpha_index: (skip_alpha_channel && has_alpha).then(|| channels_per_pixel - 1),
            steps: steps.max(1),
        }
    }

    fn next_usable(&mut self) -> Option<I::Item> {
        let (per_pixel, alpha) = (self.channels_per_pixel, self.alpha_index);
        self.channels
            .by_ref()
            .find(|(i, _)| Some(i % per_pixel) != alpha)
            .map(|(_, c)| c)
    }
}

impl<I: Iterator> Iterator for ChannelIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let res = self.next_usable();
        for _ in 1..self.steps {
            self.next_usable();
        }
        res
    }
}

/// Number of items a [`ChannelIter`] yields for `channel_count` interleaved values
pub(crate) fn usable_channel_count(
    channel_count: usize,
    channels_per_pixel: usize,
    skip_alpha_channel: bool,
    steps: usize,
) -> usize {
    let has_alpha = channels_per_pixel == 2 || channels_per_pixel == 4;
    let usable = if skip_alpha_channel && has_alpha {
        channel_count / channels_per_pixel * (channels_per_pixel - 1)
    } else {
        channel_count
    };

    usable.div_ceil(steps.max(1))
}
