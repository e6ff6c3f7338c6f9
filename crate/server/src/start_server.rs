//! Server startup: builds the authorization gate from the running
//! parameters and mounts it in front of the routes.

use std::sync::Arc;

use actix_web::{App, HttpServer};
use tracing::info;

use crate::{
    config::ServerParams,
    middlewares::{JwtAuth, JwtConfig},
    result::SkResult,
    routes,
};

/// Start the HTTP server and serve requests until it is stopped.
///
/// # Errors
///
/// Fails if the socket cannot be bound or the server terminates abnormally.
pub async fn start_server(server_params: ServerParams) -> SkResult<()> {
    let jwt_config = Arc::new(JwtConfig {
        jwt_issuer_uri: server_params.jwt_issuer_uri.clone(),
        jwks: server_params.jwks.clone(),
        jwt_audience: server_params.jwt_audience.clone(),
    });

    let address = format!("{}:{}", server_params.hostname, server_params.port);
    info!(
        "Starting the server on {address}, tokens issued by {}",
        server_params.jwt_issuer_uri
    );

    HttpServer::new(move || {
        App::new()
            .wrap(JwtAuth::new(jwt_config.clone()))
            .service(routes::get_private)
    })
    .bind(&address)?
    .run()
    .await
    .map_err(Into::into)
}
