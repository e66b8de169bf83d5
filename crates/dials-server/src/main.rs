//! Dials server binary.
//!
//! # Usage
//!
//! ```bash
//! # Development defaults: loopback bind, database in the working directory
//! dials-server
//!
//! # Explicit bind address and database path
//! dials-server --bind 0.0.0.0:3000 --db /var/lib/dials/dials.redb
//! ```

use std::sync::Arc;

use clap::Parser;
use dials_core::SystemClock;
use dials_server::router;
use dials_store::DialStore;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Dials HTTP API server
#[derive(Parser, Debug)]
#[command(name = "dials-server")]
#[command(about = "Dial management HTTP API server")]
#[command(version)]
struct Args {
    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: String,

    /// Path to the dial database file
    #[arg(short, long, default_value = "dials.redb")]
    db: std::path::PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    tracing::info!("Dials server starting");
    tracing::info!("Database at {}", args.db.display());

    // The store owns the database handle; it fails fast here if another
    // process holds the file lock.
    let store = DialStore::open(&args.db, Arc::new(SystemClock::new()))?;
    let app = router(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
