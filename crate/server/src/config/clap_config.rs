use std::fmt;

use clap::Parser;

use super::{HttpConfig, JwtAuthConfig};

#[derive(Parser, Default)]
#[clap(version, about, long_about = None)]
pub struct ClapConfig {
    #[clap(flatten)]
    pub auth: JwtAuthConfig,

    #[clap(flatten)]
    pub http: HttpConfig,
}

impl fmt::Debug for ClapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut x = f.debug_struct("");
        let x = if self.auth.auth0_domain.is_empty() {
            &mut x
        } else {
            x.field("auth0", &self.auth)
        };
        let x = x.field("http", &self.http);
        x.finish()
    }
}
