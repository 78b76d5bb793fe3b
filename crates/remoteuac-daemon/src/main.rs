//! RemoteUAC Backend Daemon
//!
//! Serves the install request approval gRPC API: devices submit install
//! requests, an administrator approves or denies them with a bearer
//! credential, and anyone can poll a request's status by id.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tonic::transport::Server;
use tracing::{info, warn};

use remoteuac_core::tracing_init::init_tracing;
use remoteuac_proto::v1::health_server::HealthServer;
use remoteuac_proto::v1::install_request_service_server::InstallRequestServiceServer;

use remoteuac_daemon::auth::TokenManager;
use remoteuac_daemon::lifecycle::LifecycleEngine;
use remoteuac_daemon::server::{HealthService, InstallRequestServiceImpl};
use remoteuac_daemon::storage::Database;

/// Placeholder secret for local development only.
const DEV_JWT_SECRET: &str = "dev-secret-change-me";

#[derive(Parser, Debug)]
#[command(name = "remoteuac-daemon")]
#[command(version, about = "RemoteUAC backend - install request approval server")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:50061", env = "REMOTEUAC_ADDR")]
    addr: SocketAddr,

    /// Path to SQLite database file.
    #[arg(long, env = "REMOTEUAC_DB_PATH")]
    db_path: Option<PathBuf>,

    /// JWT signing secret. The sole trust root: anyone holding it can mint
    /// administrator credentials.
    #[arg(long, env = "REMOTEUAC_JWT_SECRET", default_value = DEV_JWT_SECRET)]
    jwt_secret: String,

    /// Default credential TTL in seconds.
    #[arg(long, default_value_t = 3600, env = "REMOTEUAC_TOKEN_TTL")]
    token_ttl: i64,

    /// Output logs as JSON (for structured log aggregation).
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mint an administrator credential from the configured secret and
    /// print it to stdout.
    MintAdminToken {
        /// Credential TTL in seconds (defaults to --token-ttl).
        #[arg(long)]
        ttl: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing("remoteuac_daemon=info", args.log_json);

    if args.jwt_secret == DEV_JWT_SECRET {
        warn!("Using the built-in development JWT secret; set REMOTEUAC_JWT_SECRET in production");
    }

    let tokens = Arc::new(TokenManager::new(
        args.jwt_secret.as_bytes(),
        args.token_ttl,
    ));

    if let Some(Command::MintAdminToken { ttl }) = args.command {
        let (token, expires_at) = tokens.issue_admin(ttl)?;
        info!(expires_at, "Minted administrator credential");
        #[allow(clippy::print_stdout)]
        {
            println!("{token}");
        }
        return Ok(());
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %args.addr,
        "Starting remoteuac-daemon"
    );

    let db = match &args.db_path {
        Some(path) => {
            info!(path = %path.display(), "Opening database");
            Database::open(path).await?
        }
        None => {
            let default_path = default_db_path()?;
            info!(path = %default_path.display(), "Opening database (default path)");
            Database::open(&default_path).await?
        }
    };

    let engine = Arc::new(LifecycleEngine::new(db, Arc::clone(&tokens)));
    let install = InstallRequestServiceImpl::new(engine);

    info!(addr = %args.addr, "RemoteUAC backend listening");

    Server::builder()
        .add_service(InstallRequestServiceServer::new(install))
        .add_service(HealthServer::new(HealthService::new()))
        .serve(args.addr)
        .await?;

    Ok(())
}

/// Default database location: `~/.remoteuac/remoteuac.db`.
fn default_db_path() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".remoteuac").join("remoteuac.db"))
}
