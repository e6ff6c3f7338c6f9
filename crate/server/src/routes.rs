use actix_web::{
    HttpMessage, HttpRequest, HttpResponse, HttpResponseBuilder, get, http::StatusCode, web::Json,
};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::{error::SkError, middlewares::AuthenticatedUser, result::SkResult};

impl actix_web::error::ResponseError for SkError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let message = self.to_string();

        if status_code >= StatusCode::INTERNAL_SERVER_ERROR {
            error!("{status_code} - {message}");
        } else {
            warn!("{status_code} - {message}");
        }

        HttpResponseBuilder::new(status_code).json(json!({ "error": message }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SkError::Unauthorized(_)
            | SkError::TokenMalformed(_)
            | SkError::TokenExpired
            | SkError::TokenAudienceMismatch
            | SkError::TokenSignatureInvalid(_) => StatusCode::UNAUTHORIZED,

            SkError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,

            SkError::ConfigurationMissing(_) | SkError::ServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// The single protected route.
///
/// Only reachable through the authorization gate: the gate placed the
/// authenticated user in the request extensions on allow.
#[get("/")]
pub(crate) async fn get_private(req: HttpRequest) -> SkResult<Json<Value>> {
    let user = req
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| {
            SkError::ServerError("No authenticated user attached to the request".to_owned())
        })?;
    info!("GET / as {}", user.username);

    Ok(Json(json!({ "message": "This is private" })))
}
