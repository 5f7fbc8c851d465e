// Template context structures for Askama templates.
// Every slide template extends `base.html`, which reads `chrome` for the
// progress bar, navigation buttons and background sparkles.

use actix_session::Session;
use askama::Template;

use crate::session::csrf;
use crate::presentation::particles::{self, Sparkle, SPARKLE_COUNT};
use crate::presentation::sequencer::{LAST_SLIDE, SLIDE_COUNT};
use crate::presentation::{Phase, SessionState};

/// Common context shared by all slides.
/// Templates access these as `chrome.csrf_token`, `chrome.progress`, etc.
pub struct DeckChrome {
    pub csrf_token: String,
    pub viewing: bool,
    pub counter: String,
    pub progress: Vec<&'static str>,
    pub at_last: bool,
    pub sparkles: Vec<Sparkle>,
}

impl DeckChrome {
    pub fn build(session: &Session, state: &SessionState) -> Self {
        let index = state.slide_index();
        DeckChrome {
            csrf_token: csrf::get_or_create_token(session),
            viewing: state.phase() == Phase::Viewing,
            counter: format!("{} / {}", index + 1, SLIDE_COUNT),
            progress: (0..SLIDE_COUNT).map(|i| if i <= index { "seg lit" } else { "seg" }).collect(),
            at_last: index == LAST_SLIDE,
            sparkles: particles::scatter(&mut rand::rng(), SPARKLE_COUNT),
        }
    }
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundPage {
    pub path: String,
}

mod api;
mod slides;

pub use self::api::ApiErrorResponse;
pub use self::slides::{
    ChannelSlide, ClosingSlide, GreetingSlide, HighlightSlide, IntroSlide, OriginSlide, ScaleSlide,
    StarProductSlide, TrendSlide,
};
