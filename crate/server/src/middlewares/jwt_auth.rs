use std::{
    pin::Pin,
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::{BoxBody, EitherBody},
    dev::{ServiceRequest, ServiceResponse},
};
use futures::{
    Future,
    future::{Ready, ok},
};
use tracing::debug;

use crate::middlewares::{JwtConfig, manage_jwt_request};

/// `JwtAuth` is the authorization gate of the server.
///
/// In Actix web, middlewares consist of two parts:
/// 1. A transformer (this struct), which is used during service configuration
/// 2. A middleware service (`JwtAuthMiddleware`) that processes each request
///
/// Every request goes through `manage_jwt_request` before reaching a route
/// handler: the bearer token is validated against the issuer keys and the
/// configured audience, and the request is rejected with a 401 otherwise.
#[derive(Clone)]
pub(crate) struct JwtAuth {
    jwt_config: Arc<JwtConfig>,
}

impl JwtAuth {
    #[must_use]
    pub(crate) const fn new(jwt_config: Arc<JwtConfig>) -> Self {
        Self { jwt_config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Transform = JwtAuthMiddleware<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        debug!("JWT Authentication enabled");
        ok(JwtAuthMiddleware {
            service: Rc::new(service),
            jwt_config: self.jwt_config.clone(),
        })
    }
}

pub(crate) struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    jwt_config: Arc<JwtConfig>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
{
    type Error = Error;
    #[allow(clippy::type_complexity)]
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;

    fn poll_ready(&self, cx: &mut Context) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let jwt_config = self.jwt_config.clone();
        Box::pin(async move { manage_jwt_request(service, jwt_config, req).await })
    }
}
