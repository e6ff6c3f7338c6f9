use std::fmt;

use clap::Parser;

/// The provider credentials and the target server, sourced from the
/// command line or the environment, built once at startup.
///
/// The `AUTH0_*` variables default to empty strings: when they are absent
/// the provider call fails with the provider's own error.
#[derive(Parser, Default, Clone)]
#[clap(version, about, long_about = None)]
pub struct ClientConf {
    /// The client id of the Auth0 machine-to-machine application
    #[clap(long, env = "AUTH0_CLIENT_ID", default_value = "")]
    pub client_id: String,

    /// The client secret of the Auth0 machine-to-machine application
    #[clap(long, env = "AUTH0_CLIENT_SECRET", default_value = "")]
    pub client_secret: String,

    /// The Auth0 tenant domain, for instance `<your-tenant>.<region>.auth0.com`
    #[clap(long, env = "AUTH0_DOMAIN", default_value = "")]
    pub domain: String,

    /// The audience the token is requested for; must match the audience
    /// configured on the server
    #[clap(long, env = "AUTH0_AUDIENCE", default_value = "")]
    pub audience: String,

    /// The URL of the protected server
    #[clap(long, env = "SKYKIP_SERVER_URL", default_value = "http://127.0.0.1:8000")]
    pub server_url: String,
}

impl fmt::Debug for ClientConf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the client secret is redacted from the logs
        f.debug_struct("")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[****]")
            .field("domain", &self.domain)
            .field("audience", &self.audience)
            .field("server_url", &self.server_url)
            .finish()
    }
}
