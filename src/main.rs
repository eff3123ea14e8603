use cardsearch::models::config::ServerConfig;
use cardsearch::run;
use config::{Config, Environment, File};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    log::info!(
        "Starting server at http://{}:{}",
        server_config.address,
        server_config.port
    );

    run(server_config).await
}
