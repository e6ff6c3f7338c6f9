use jsonwebtoken::{
    Algorithm, DecodingKey, Validation, decode, decode_header, errors::ErrorKind, jwk::JwkSet,
};
use serde::{Deserialize, Serialize};

use crate::{error::SkError, result::SkResult, sk_ensure};

/// The validation material of one identity provider:
/// the expected issuer and audience, and the issuer's published keys.
#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_issuer_uri: String,
    pub jwks: JwkSet,
    pub jwt_audience: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserClaim {
    pub iss: Option<String>,
    pub sub: Option<String>,
    pub aud: Option<serde_json::Value>,
    pub iat: Option<usize>,
    pub exp: Option<usize>,
    // Auth0 specific: the granted scopes
    pub scope: Option<String>,
    // Auth0 specific: the authorized party (the client id)
    pub azp: Option<String>,
    // Auth0 specific: the grant type, `client-credentials` for machine to machine tokens
    pub gty: Option<String>,
}

impl JwtConfig {
    /// Decode a JWT bearer header
    pub(crate) fn decode_bearer_header(&self, authorization_content: &str) -> SkResult<UserClaim> {
        let bearer: Vec<&str> = authorization_content.splitn(2, ' ').collect();
        sk_ensure!(
            bearer.len() == 2 && bearer[0] == "Bearer",
            SkError::Unauthorized("Bad authorization header content (bad bearer)".to_owned())
        );

        let token: &str = bearer[1];
        self.decode_authentication_token(token)
    }

    /// Decode a json web token (JWT)
    pub(crate) fn decode_authentication_token(&self, token: &str) -> SkResult<UserClaim> {
        sk_ensure!(
            !token.is_empty(),
            SkError::TokenMalformed("token is empty".to_owned())
        );
        tracing::trace!(
            "validating token, expected issuer: {}",
            &self.jwt_issuer_uri
        );

        // If a JWKS contains multiple keys, the correct key first
        // needs to be selected using the `kid` of the token headers.
        let header = decode_header(token)
            .map_err(|e| SkError::TokenMalformed(format!("Failed to decode token headers: {e}")))?;
        let kid = header
            .kid
            .ok_or_else(|| SkError::TokenMalformed("No 'kid' claim present in token".to_owned()))?;
        let jwk = self.jwks.find(&kid).ok_or_else(|| {
            SkError::TokenSignatureInvalid("Specified key not found in set".to_owned())
        })?;
        let decoding_key = DecodingKey::from_jwk(jwk)
            .map_err(|e| SkError::ServerError(format!("Cannot build a decoding key: {e}")))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.jwt_issuer_uri]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        match &self.jwt_audience {
            Some(jwt_audience) => validation.set_audience(&[jwt_audience]),
            None => validation.validate_aud = false,
        }

        let token_data = decode::<UserClaim>(token, &decoding_key, &validation)
            .map_err(|e| convert_jwt_error(&e))?;

        Ok(token_data.claims)
    }
}

/// Convert a `jsonwebtoken` validation failure into the deny reason taxonomy.
fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> SkError {
    match e.kind() {
        ErrorKind::ExpiredSignature => SkError::TokenExpired,
        ErrorKind::InvalidAudience => SkError::TokenAudienceMismatch,
        ErrorKind::InvalidSignature => {
            SkError::TokenSignatureInvalid("Signature verification failed".to_owned())
        }
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => SkError::TokenMalformed(e.to_string()),
        _ => SkError::Unauthorized(format!("Cannot validate token: {e}")),
    }
}
