//! Client side of the skykip demo: obtain a machine-to-machine token from
//! the identity provider with the OAuth2 client-credentials grant, then
//! call the protected route with it.

mod config;
pub use config::ClientConf;

mod error;
pub use error::{ClientError, ClientResult};

mod token;
pub use token::{call_private_route, get_token};
