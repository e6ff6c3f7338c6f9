mod clap_config;
pub use clap_config::ClapConfig;

mod http_config;
pub use http_config::HttpConfig;

mod jwt_auth_config;
pub use jwt_auth_config::JwtAuthConfig;

mod server_params;
pub use server_params::ServerParams;
