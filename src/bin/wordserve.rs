use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use tracing::{error, info};

use wordmatch::{analyze, AnalyzeRequest, AnalyzeResponse, VocabularyStore};

#[derive(Parser)]
#[command(name = "wordserve", about = "Vocabulary word-matching service")]
struct Cli {
    /// Path to the append-only word log
    #[arg(long, default_value = "wordstore.txt")]
    store: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordserve=info,wordmatch=info")),
        )
        .init();

    let cli = Cli::parse();
    let store = Arc::new(VocabularyStore::open(&cli.store)?);
    info!(words = store.len(), store = %cli.store.display(), "vocabulary ready");

    let app = Router::new()
        .route("/", get(health))
        .route("/analyze", post(handle_analyze))
        .with_state(store);

    let addr = format!("0.0.0.0:{}", cli.port);
    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handle_analyze(
    State(store): State<Arc<VocabularyStore>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, StatusCode> {
    match analyze(&store, &request.text) {
        Ok(analysis) => Ok(Json(analysis.into())),
        Err(e) => {
            error!(word = %request.text, error = %e, "analyze failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
