use clap::Parser;
use dotenvy::dotenv;
use skykip_client::{ClientConf, ClientResult, call_private_route, get_token};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> ClientResult<()> {
    // Load variables from a .env file
    dotenv().ok();

    skykip_logger::log_init(Some("info,skykip_client=info"));

    let conf = ClientConf::parse();
    debug!("Client config: {conf:#?}");

    let token = get_token(&conf).await?;
    info!("obtained a bearer token from https://{}", conf.domain);

    let response = call_private_route(&conf.server_url, &token).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
