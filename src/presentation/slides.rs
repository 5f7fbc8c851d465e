use super::sequencer::SLIDE_COUNT;

/// The nine slides, in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    Intro,
    Greeting,
    Origin,
    Scale,
    MonthlyTrend,
    StarProduct,
    ChannelReach,
    Highlight,
    Closing,
}

impl Slide {
    pub const ALL: [Slide; SLIDE_COUNT] = [
        Slide::Intro,
        Slide::Greeting,
        Slide::Origin,
        Slide::Scale,
        Slide::MonthlyTrend,
        Slide::StarProduct,
        Slide::ChannelReach,
        Slide::Highlight,
        Slide::Closing,
    ];

    pub fn from_index(index: usize) -> Option<Slide> {
        Slide::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Intro and closing slides render without a record.
    pub fn needs_record(self) -> bool {
        !matches!(self, Slide::Intro | Slide::Closing)
    }
}
