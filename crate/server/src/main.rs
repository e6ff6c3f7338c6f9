use clap::Parser;
use dotenvy::dotenv;
use skykip_server::{
    config::{ClapConfig, ServerParams},
    result::SkResult,
    start_server::start_server,
};
use tracing::debug;

/// The main entrypoint of the program.
///
/// Sets up the environment variables and logging options, parses the
/// command line arguments and starts the server.
#[tokio::main]
async fn main() -> SkResult<()> {
    if std::env::var("RUST_BACKTRACE").is_err() {
        unsafe {
            std::env::set_var("RUST_BACKTRACE", "full");
        }
    }

    // Load variables from a .env file
    dotenv().ok();

    skykip_logger::log_init(Some("info,skykip_server=info,actix_web=info"));

    let clap_config = ClapConfig::parse();
    debug!("Command line config: {clap_config:#?}");

    let server_params = ServerParams::try_from(&clap_config).await?;
    debug!("Server parameters: {server_params:#?}");

    start_server(server_params).await
}
