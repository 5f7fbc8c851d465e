pub mod csrf;

use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::errors::AppError;
use crate::presentation::SessionState;

const STATE_KEY: &str = "review_session";

/// Load the deck state from the session cookie, or a fresh one.
///
/// A cookie that no longer deserializes (for example after a record shape
/// change) starts the visitor over instead of failing the request.
pub fn load_state(session: &Session) -> SessionState {
    match session.get::<SessionState>(STATE_KEY) {
        Ok(Some(state)) => state,
        Ok(None) => SessionState::default(),
        Err(e) => {
            log::warn!("Discarding unreadable session state: {e}");
            session.remove(STATE_KEY);
            SessionState::default()
        }
    }
}

pub fn store_state(session: &Session, state: &SessionState) -> Result<(), AppError> {
    session
        .insert(STATE_KEY, state)
        .map_err(|e| AppError::Session(format!("Failed to store session state: {e}")))
}

/// Encrypted cookie sessions carrying the deck state and CSRF token.
pub fn middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build()
}
