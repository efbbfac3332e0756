//! Fallback handlers so unmatched requests still get the JSON error body.

use actix_web::{HttpRequest, HttpResponse};

use crate::middleware::error::{AppError, AppResult};

/// Any path no route matches.
pub async fn route_not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}

/// A known path requested with a method it does not serve.
pub async fn method_not_allowed(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed(format!(
        "Method {} is not allowed on {}",
        req.method(),
        req.path()
    )))
}
