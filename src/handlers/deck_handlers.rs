use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::models::review::{self, ReviewSource};
use crate::presentation::{Event, Phase, SessionState, Slide};
use crate::session::{csrf, load_state, store_state};
use crate::templates_structs::{
    ChannelSlide, ClosingSlide, DeckChrome, GreetingSlide, HighlightSlide, IntroSlide, OriginSlide,
    ScaleSlide, StarProductSlide, TrendSlide,
};

#[derive(Deserialize)]
pub struct StartForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct NavForm {
    #[serde(default)]
    pub csrf_token: String,
}

fn back_to_deck() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

/// GET / - render the slide the session is on.
///
/// The cookie only carries the name, so a viewing session looks its record
/// up again before rendering a record slide.
pub async fn show<S: ReviewSource + 'static>(source: web::Data<S>, session: Session) -> Result<HttpResponse, AppError> {
    let mut state = load_state(&session);
    let mut slide = Slide::from_index(state.slide_index()).unwrap_or(Slide::Intro);

    if slide.needs_record() && state.record().is_none() {
        if state.needs_restore() {
            let outcome = review::fetch_record(source.get_ref(), state.name_input()).await;
            state = state.apply(Event::Restored(outcome)).0;
        } else {
            log::warn!("Slide {} requested without a record, starting over", slide.index());
            state = state.apply(Event::Reset).0;
        }
        if state.record().is_none() {
            store_state(&session, &state)?;
            slide = Slide::Intro;
        }
    }
    render_slide(&session, &state, slide)
}

/// POST /start - look up the typed name and open the deck on success.
pub async fn start<S: ReviewSource + 'static>(
    source: web::Data<S>,
    session: Session,
    form: web::Form<StartForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let (state, request) = load_state(&session).apply(Event::Submit(form.name));
    let state = match request {
        Some(request) => {
            let outcome = review::fetch_record(source.get_ref(), &request.name).await;
            state.apply(Event::FetchCompleted { ticket: request.ticket, outcome }).0
        }
        None => state,
    };

    store_state(&session, &state)?;
    Ok(back_to_deck())
}

/// POST /next - advance, or start over from the closing slide.
pub async fn next(session: Session, form: web::Form<NavForm>) -> Result<HttpResponse, AppError> {
    navigate(&session, &form.csrf_token, SessionState::forward_event)
}

/// POST /prev - retreat, or start over from the input slide.
pub async fn prev(session: Session, form: web::Form<NavForm>) -> Result<HttpResponse, AppError> {
    navigate(&session, &form.csrf_token, SessionState::back_event)
}

/// POST /reset
pub async fn reset(session: Session, form: web::Form<NavForm>) -> Result<HttpResponse, AppError> {
    navigate(&session, &form.csrf_token, |_| Event::Reset)
}

fn navigate(
    session: &Session,
    csrf_token: &str,
    pick: impl FnOnce(&SessionState) -> Event,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(session, csrf_token)?;
    let state = load_state(session);
    let event = pick(&state);
    let (state, _) = state.apply(event);
    store_state(session, &state)?;
    Ok(back_to_deck())
}

fn render_slide(session: &Session, state: &SessionState, slide: Slide) -> Result<HttpResponse, AppError> {
    let chrome = DeckChrome::build(session, state);
    match (slide, state.record()) {
        (Slide::Intro, _) => render(IntroSlide {
            chrome,
            name_input: state.name_input().to_string(),
            error: state.error().map(str::to_string),
            loading: state.phase() == Phase::Loading,
            locked: state.phase() != Phase::Idle,
        }),
        (Slide::Closing, _) => render(ClosingSlide { chrome }),
        (_, None) => Err(AppError::Session(format!("slide {} needs a record", slide.index()))),
        (Slide::Greeting, Some(record)) => render(GreetingSlide::new(chrome, record)),
        (Slide::Origin, Some(record)) => render(OriginSlide::new(chrome, record)),
        (Slide::Scale, Some(record)) => render(ScaleSlide::new(chrome, record)),
        (Slide::MonthlyTrend, Some(record)) => render(TrendSlide::new(chrome, record)),
        (Slide::StarProduct, Some(record)) => render(StarProductSlide::new(chrome, record)),
        (Slide::ChannelReach, Some(record)) => render(ChannelSlide::new(chrome, record)),
        (Slide::Highlight, Some(record)) => render(HighlightSlide::new(chrome, record)),
    }
}
