use actix_web::{web, HttpResponse};

use crate::models::review::{self, FetchError, ReviewSource};
use crate::templates_structs::ApiErrorResponse;

/// GET /api/v1/reviews/{name} - the normalized record as JSON
pub async fn read<S: ReviewSource + 'static>(source: web::Data<S>, path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    if name.trim().is_empty() {
        return HttpResponse::BadRequest().json(ApiErrorResponse {
            error: "Name must not be blank".to_string(),
            details: None,
        });
    }

    match review::fetch_record(source.get_ref(), &name).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e @ FetchError::NotFound) => HttpResponse::NotFound().json(ApiErrorResponse {
            error: e.user_message().to_string(),
            details: Some(format!("No single review matches '{}'", name.trim())),
        }),
        Err(e) => HttpResponse::BadGateway().json(ApiErrorResponse {
            error: e.user_message().to_string(),
            details: None,
        }),
    }
}
