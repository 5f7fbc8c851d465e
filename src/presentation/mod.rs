pub mod charts;
pub mod format;
pub mod particles;
pub mod sequencer;
pub mod slides;

pub use sequencer::{Event, FetchRequest, FetchTicket, Phase, SessionState};
pub use slides::Slide;
