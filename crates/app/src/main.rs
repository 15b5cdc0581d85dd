use clap::Parser;
use settings::Storage;

mod settings;

#[derive(Debug, Parser)]
#[command(name = "dollarbot", version)]
struct Args {
    /// Settings file, with or without the `.toml` extension.
    #[arg(long, default_value = "settings")]
    config: String,
    /// Override the configured port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let mut settings = settings::Settings::new(&args.config)?;
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "dollarbot={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let server = settings.server;
    let engine = engine::Engine::builder()
        .storage(parse_storage(server.storage))
        .date_format(&server.format.date)
        .build()
        .await
        .inspect_err(|err| tracing::error!("failed to build engine: {err}"))?;

    let bind = server.bind.unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, server.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .inspect_err(|err| tracing::error!("failed to bind server listener: {err}"))?;

    server::run_with_listener(engine, listener).await?;
    Ok(())
}

fn parse_storage(storage: Storage) -> engine::Storage {
    match storage {
        Storage::Memory => engine::Storage::Memory,
        Storage::Json(path) => {
            tracing::info!("using expense store {path}");
            engine::Storage::Json(path.into())
        }
    }
}
