use std::net::TcpListener;

use company_lookup::{configuration::get_configuration, services::TavilyClient, startup::run};
use env_logger::Env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;

    let tavily_api_key = match configuration.api_keys.tavily_api_key() {
        Ok(key) => key.to_string(),
        Err(e) => {
            log::error!("{}", e);
            return Err(e.into());
        }
    };
    let tavily_client = TavilyClient::new(tavily_api_key, &configuration.search);

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    log::info!("Listening on {}", address);

    run(listener, tavily_client)?.await?;

    Ok(())
}
