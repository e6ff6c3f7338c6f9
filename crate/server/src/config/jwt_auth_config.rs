use clap::Args;
use jsonwebtoken::jwk::JwkSet;

use crate::{
    error::SkError,
    result::{SkResult, SkResultHelper},
    sk_ensure, sk_error,
};

// Support for JWT tokens issued through the OAuth2 client-credentials grant.
// See https://auth0.com/docs/get-started/authentication-and-authorization-flow/client-credentials-flow
#[derive(Debug, Args, Default, Clone)]
pub struct JwtAuthConfig {
    /// The Auth0 tenant domain, for instance `<your-tenant>.<region>.auth0.com`
    ///
    /// The JWT issuer URI is derived from it: `https://<domain>/`
    #[clap(long, env = "AUTH0_DOMAIN", default_value = "")]
    pub auth0_domain: String,

    /// The JWKS (Json Web Key Set) URI of the JWT token
    ///
    /// Defaults to `https://<auth0-domain>/.well-known/jwks.json` if not set
    #[clap(long, env = "AUTH0_JWKS_URI")]
    pub jwks_uri: Option<String>,

    /// The audience of the JWT token
    ///
    /// Optional: the server will validate the JWT `aud` claim against this value if set
    #[clap(long, env = "AUTH0_AUDIENCE")]
    pub jwt_audience: Option<String>,
}

impl JwtAuthConfig {
    /// The issuer URI the `iss` claim of inbound tokens must match.
    pub fn jwt_issuer_uri(&self) -> SkResult<String> {
        let domain = self.auth0_domain.trim_end_matches('/');
        sk_ensure!(
            !domain.is_empty(),
            SkError::ConfigurationMissing("AUTH0_DOMAIN is not set".to_owned())
        );
        Ok(format!("https://{domain}/"))
    }

    /// Fetch the issuer's published signing keys.
    ///
    /// This is done once at startup; the key set is then shared read-only
    /// between all request handlers.
    pub async fn fetch_jwks(&self) -> SkResult<JwkSet> {
        let jwt_issuer_uri = self.jwt_issuer_uri()?;
        let jwks_uri = match &self.jwks_uri {
            None => format!("{}.well-known/jwks.json", jwt_issuer_uri),
            Some(jwks_uri) => jwks_uri.clone(),
        };
        tracing::debug!("fetching JWKS at {jwks_uri}");
        reqwest::get(&jwks_uri)
            .await
            .context("Unable to connect to retrieve JWKS")?
            .json::<JwkSet>()
            .await
            .map_err(|e| sk_error!("Unable to get JWKS as a JSON: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::JwtAuthConfig;
    use crate::error::SkError;

    #[test]
    fn issuer_uri_is_derived_from_the_domain() {
        let config = JwtAuthConfig {
            auth0_domain: "dev-tenant.eu.auth0.com".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            "https://dev-tenant.eu.auth0.com/",
            config.jwt_issuer_uri().unwrap()
        );

        // a trailing slash in the domain is tolerated
        let config = JwtAuthConfig {
            auth0_domain: "dev-tenant.eu.auth0.com/".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            "https://dev-tenant.eu.auth0.com/",
            config.jwt_issuer_uri().unwrap()
        );
    }

    #[test]
    fn empty_domain_is_a_configuration_error() {
        let config = JwtAuthConfig::default();
        assert!(matches!(
            config.jwt_issuer_uri(),
            Err(SkError::ConfigurationMissing(_))
        ));
    }
}
