//! Server entry point for the amity social graph API.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use amity_api::router::create_router;
use amity_api::state::AppState;
use amity_graph::{GraphClient, GraphConfig};

#[derive(Parser)]
#[command(name = "amity-api")]
#[command(about = "REST API over the amity social graph")]
struct Cli {
    /// Address to bind the HTTP listener on.
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    bind: String,

    /// Config file prefix (default: amity).
    #[arg(short, long, default_value = "amity")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();

    // Connect to Neo4j once; the client is pooled and shared.
    let graph_config = load_graph_config(&cli.config);
    let graph = GraphClient::connect(&graph_config).await?;

    let app = create_router(AppState::new(graph));

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    tracing::info!(addr = %cli.bind, "amity-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_graph_config(file_prefix: &str) -> GraphConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("AMITY")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => GraphConfig {
            host: c
                .get_string("neo4j.host")
                .unwrap_or_else(|_| "neo4j".to_string()),
            port: c
                .get_int("neo4j.port")
                .ok()
                .and_then(|p| u16::try_from(p).ok())
                .unwrap_or(7687),
            user: c
                .get_string("neo4j.user")
                .unwrap_or_else(|_| "neo4j".to_string()),
            password: c
                .get_string("neo4j.password")
                .unwrap_or_else(|_| "password123".to_string()),
            ..Default::default()
        },
        Err(_) => GraphConfig::default(),
    }
}
