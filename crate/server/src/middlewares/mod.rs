mod jwt;
pub(crate) use jwt::JwtConfig;

mod jwt_auth;
pub(crate) use jwt_auth::JwtAuth;

mod jwt_token_auth;
pub(crate) use jwt_token_auth::{AuthenticatedUser, manage_jwt_request};
