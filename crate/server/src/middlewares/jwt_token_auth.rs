use std::{rc::Rc, sync::Arc};

use actix_service::Service;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::{BoxBody, EitherBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header,
};
use serde_json::json;
use tracing::{debug, trace, warn};

use crate::{error::SkError, middlewares::JwtConfig, result::SkResult};

/// The identity the authorization gate attaches to an allowed request.
///
/// The wrapped handlers read it back from the request extensions.
#[derive(Debug, Clone)]
pub(crate) struct AuthenticatedUser {
    pub username: String,
}

/// Run the authorization gate on `req`, then either call the wrapped
/// service or answer 401 with the deny reason.
pub(crate) async fn manage_jwt_request<S, B>(
    service: Rc<S>,
    jwt_config: Arc<JwtConfig>,
    req: ServiceRequest,
) -> Result<ServiceResponse<EitherBody<B, BoxBody>>, Error>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    trace!("Starting JWT Authentication...");
    match manage_jwt(&jwt_config, &req) {
        Ok(authenticated_user) => {
            req.extensions_mut().insert(authenticated_user);
            Ok(service.call(req).await?.map_into_left_body())
        }
        Err(e) => {
            warn!("{:?} {} 401 unauthorized: {e}", req.method(), req.path());
            Ok(req
                .into_response(
                    HttpResponse::Unauthorized().json(json!({ "error": e.to_string() })),
                )
                .map_into_right_body())
        }
    }
}

/// Extract the bearer token from the authorization header and validate it.
///
/// Fails closed: any missing, malformed or invalid token is a deny, with
/// the reason carried by the returned error.
pub(crate) fn manage_jwt(
    jwt_config: &JwtConfig,
    req: &ServiceRequest,
) -> SkResult<AuthenticatedUser> {
    let authorization_content = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| SkError::Unauthorized("Missing authorization header".to_owned()))?;

    let user_claim = jwt_config.decode_bearer_header(authorization_content)?;

    // `sub` is a required claim of the validation; a token without it
    // has already been rejected at this point
    match user_claim.sub {
        Some(sub) => {
            debug!("JWT access granted to {sub}");
            Ok(AuthenticatedUser { username: sub })
        }
        None => Err(SkError::Unauthorized("No subject in JWT".to_owned())),
    }
}
