use reqwest::header;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::ClientConf,
    error::{ClientError, ClientResult},
};

const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
    grant_type: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Request a bearer token from the identity provider using the OAuth2
/// client-credentials grant.
///
/// A single synchronous exchange: no retry, and the returned token is not
/// cached across calls.
///
/// # Errors
///
/// Fails with [`ClientError::TokenRequestFailed`] if the provider cannot
/// be reached, answers with a non-success status or an unparseable body.
pub async fn get_token(conf: &ClientConf) -> ClientResult<String> {
    let url = format!("https://{}/oauth/token", conf.domain);
    debug!("requesting a client-credentials token from {url}");

    let response = reqwest::Client::new()
        .post(&url)
        .json(&TokenRequest {
            client_id: &conf.client_id,
            client_secret: &conf.client_secret,
            audience: &conf.audience,
            grant_type: GRANT_TYPE_CLIENT_CREDENTIALS,
        })
        .send()
        .await
        .map_err(|e| {
            ClientError::TokenRequestFailed(format!("unable to reach the identity provider: {e}"))
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::TokenRequestFailed(format!(
            "the identity provider answered {status}: {body}"
        )));
    }

    let token_response: TokenResponse = response.json().await.map_err(|e| {
        ClientError::TokenRequestFailed(format!("unparseable token response: {e}"))
    })?;
    Ok(token_response.access_token)
}

/// Call the protected route with the bearer token and return the JSON body.
///
/// # Errors
///
/// Fails if the server cannot be reached, denies the request or does not
/// answer with JSON.
pub async fn call_private_route(server_url: &str, token: &str) -> ClientResult<Value> {
    debug!("GET {server_url}");

    let response = reqwest::Client::new()
        .get(server_url)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::RequestFailed(format!(
            "the server answered {status}: {body}"
        )));
    }

    Ok(response.json().await?)
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::{call_private_route, get_token};
    use crate::{config::ClientConf, error::ClientError};

    #[tokio::test]
    async fn unreachable_provider_is_an_error_without_retry() {
        let conf = ClientConf {
            // nothing listens there
            domain: "127.0.0.1:1".to_owned(),
            ..Default::default()
        };

        let err = get_token(&conf)
            .await
            .expect_err("the provider is unreachable");
        assert!(matches!(err, ClientError::TokenRequestFailed(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        let err = call_private_route("http://127.0.0.1:1/", "token")
            .await
            .expect_err("the server is unreachable");
        assert!(matches!(err, ClientError::RequestFailed(_)));
    }
}
