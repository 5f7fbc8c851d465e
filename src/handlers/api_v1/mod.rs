pub mod reviews;

use actix_web::web;

use crate::models::review::ReviewSource;

/// Configure API v1 routes.
pub fn configure<S: ReviewSource + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/reviews/{name}", web::get().to(reviews::read::<S>));
}
