use std::fmt;

use jsonwebtoken::jwk::JwkSet;

use crate::{config::ClapConfig, result::SkResult};

/// This structure is the context used by the server while it is running.
/// There is a singleton instance shared between all request handlers.
pub struct ServerParams {
    /// The JWT issuer URI inbound tokens must have been issued by
    pub jwt_issuer_uri: String,

    /// The issuer's published signing keys, fetched once at startup
    pub jwks: JwkSet,

    /// The JWT audience, validated against the `aud` claim if set
    pub jwt_audience: Option<String>,

    pub hostname: String,

    pub port: u16,
}

impl ServerParams {
    /// Build the running server context from the command line / environment
    /// configuration. This fetches the issuer JWKS and therefore fails when
    /// the identity provider is not reachable or not configured.
    pub async fn try_from(conf: &ClapConfig) -> SkResult<Self> {
        Ok(Self {
            jwks: conf.auth.fetch_jwks().await?,
            jwt_issuer_uri: conf.auth.jwt_issuer_uri()?,
            jwt_audience: conf.auth.jwt_audience.clone(),
            hostname: conf.http.hostname.clone(),
            port: conf.http.port,
        })
    }
}

impl fmt::Debug for ServerParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("")
            .field(
                "server_url",
                &format!("http://{}:{}", &self.hostname, &self.port),
            )
            .field("jwt_issuer_uri", &self.jwt_issuer_uri)
            .field("jwt_audience", &self.jwt_audience)
            .field("jwks", &format!("<{} key(s)>", self.jwks.keys.len()))
            .finish()
    }
}
