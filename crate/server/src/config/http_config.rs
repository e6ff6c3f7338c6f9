use clap::Args;

#[derive(Debug, Args, Clone)]
pub struct HttpConfig {
    /// The server http port
    #[clap(long, env = "SKYKIP_PORT", default_value = "8000")]
    pub port: u16,

    /// The server http hostname
    #[clap(long, env = "SKYKIP_HOSTNAME", default_value = "0.0.0.0")]
    pub hostname: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            hostname: "0.0.0.0".to_owned(),
        }
    }
}
