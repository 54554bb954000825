//! allowgate CLI
//!
//! Loads the proxy config (`ALLOWGATE_CONFIG`, default `allowgate.yaml`),
//! seeds the proxy, and prints one decision per identity argument:
//!
//! ```text
//! allowgate [--metrics] <identity>...
//! ```

use std::env;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use allowgate_core::Address;
use allowgate_proxy::{app_state::AppState, config};

const DEFAULT_CONFIG: &str = "allowgate.yaml";

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = env::var("ALLOWGATE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());

    let mut show_metrics = false;
    let mut accounts = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--metrics" {
            show_metrics = true;
        } else {
            accounts.push(arg);
        }
    }

    let state = match config::load_from_file(&path).and_then(|cfg| AppState::new(&cfg)) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(%path, kind = e.kind().as_str(), error = %e, "config load failed");
            return ExitCode::from(2);
        }
    };

    let proxy = state.proxy();
    tracing::info!(
        name = %proxy.name(),
        version = proxy.version(),
        registries = proxy.total_registry(),
        "allowgate ready"
    );

    for raw in accounts {
        let account = match Address::parse(&raw) {
            Ok(a) => a,
            Err(e) => {
                tracing::error!(identity = %raw, error = %e, "invalid identity");
                return ExitCode::from(1);
            }
        };
        println!("{account}\t{}", proxy.check(&account));
    }

    if show_metrics {
        print!("{}", proxy.render_metrics());
    }

    ExitCode::SUCCESS
}
