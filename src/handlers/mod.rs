pub mod api_v1;
pub mod deck_handlers;

use actix_web::{HttpRequest, HttpResponse, web};
use askama::Template;

use crate::errors::AppError;
use crate::models::review::ReviewSource;
use crate::templates_structs::NotFoundPage;

/// Register the deck and API routes for a given review source.
///
/// The source itself is supplied by the caller as `web::Data<S>`.
pub fn configure<S: ReviewSource + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(deck_handlers::show::<S>))
        .route("/start", web::post().to(deck_handlers::start::<S>))
        .route("/next", web::post().to(deck_handlers::next))
        .route("/prev", web::post().to(deck_handlers::prev))
        .route("/reset", web::post().to(deck_handlers::reset))
        .service(web::scope("/api/v1").configure(api_v1::configure::<S>));
}

/// Fallback for unknown routes.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    log::debug!("No route for {} {}", req.method(), req.path());
    let html = NotFoundPage { path: req.path().to_string() }.render()?;
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
