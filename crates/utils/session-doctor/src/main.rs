//! # Session Doctor Utility
//!
//! This binary walks a scripted wallet provider through the full session
//! lifecycle (mount probe, connect, disconnect) and prints the session view
//! after each step. Useful for reproducing render-surface scenarios from
//! the command line without a browser or wallet extension.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package session-doctor --bin session_doctor
//! ```
//!
//! ## Environment
//!
//! - `WALLET_IDENTITY` - provider already holds a session for this identity
//! - `WALLET_OUTAGE=1` - every provider call fails as unreachable
//! - `WALLET_DECLINE=1` - the user cancels the connect flow
//! - `LOG_LEVEL` - tracing filter (`trace`..`error`, default `info`)

use std::env;
use std::sync::Arc;

use lib_session::provider::mock::MockProvider;
use lib_session::{SessionController, WalletSession};

/// Fallback identity yielded by a successful scripted connect.
const DEMO_IDENTITY: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZOKOI2XJB263RBB6DHPUPS";

/// Provider scenario assembled from environment variables.
struct DoctorConfig {
    identity: Option<String>,
    outage: bool,
    decline: bool,
}

impl DoctorConfig {
    fn from_env() -> Self {
        Self {
            identity: env::var("WALLET_IDENTITY").ok().filter(|v| !v.is_empty()),
            outage: env_flag("WALLET_OUTAGE"),
            decline: env_flag("WALLET_DECLINE"),
        }
    }

    fn describe(&self) -> String {
        if self.outage {
            "provider unreachable".to_string()
        } else if self.decline {
            "user declines the connect flow".to_string()
        } else if let Some(identity) = &self.identity {
            format!("provider session already established for {}", identity)
        } else {
            "no stored session, connect succeeds".to_string()
        }
    }

    fn provider(&self) -> MockProvider {
        let mut provider = MockProvider::new();
        if let Some(identity) = &self.identity {
            provider = provider.with_stored_identity(identity.clone());
        }
        if self.outage {
            return provider.unavailable();
        }
        if self.decline {
            return provider.declining();
        }
        let connect_identity = self
            .identity
            .clone()
            .unwrap_or_else(|| DEMO_IDENTITY.to_string());
        provider.with_connect_identity(connect_identity)
    }
}

fn env_flag(name: &str) -> bool {
    matches!(env::var(name).as_deref(), Ok("1") | Ok("true") | Ok("yes"))
}

fn init_tracing() {
    let log_level = env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" => tracing_subscriber::EnvFilter::new("trace"),
        "debug" => tracing_subscriber::EnvFilter::new("debug"),
        "warn" => tracing_subscriber::EnvFilter::new("warn"),
        "error" => tracing_subscriber::EnvFilter::new("error"),
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_session(session: &WalletSession) -> anyhow::Result<()> {
    println!("  status: {}", session.status().label());
    println!("{}", serde_json::to_string_pretty(&session.view())?);
    println!();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    println!("============================================");
    println!("  Wallet Session Doctor");
    println!("============================================");
    println!();

    let config = DoctorConfig::from_env();
    println!("Scenario: {}", config.describe());
    println!();

    let controller = SessionController::new(Arc::new(config.provider()));

    println!("Mount:");
    print_session(&controller.session())?;

    println!("Step 1: probe for an existing session...");
    let probed = controller.probe().await;
    print_session(&probed)?;

    println!("Step 2: request connect...");
    if probed.is_signed_in() {
        println!("  (already signed in, connect is a no-op)");
    }
    let session = controller.request_connect().await;
    print_session(&session)?;

    println!("Step 3: request disconnect...");
    let session = controller.request_disconnect().await;
    print_session(&session)?;

    println!("Done. The session never sticks on initializing and always");
    println!("lands signed-out after a disconnect, whatever the provider did.");

    Ok(())
}
