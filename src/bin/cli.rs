use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pickline::{follow, FollowConfig, OrderEngine, RunOutcome};

/// Simulate order fulfillment by tailing an order stream against a
/// fixed-product inventory.
#[derive(Parser, Debug)]
#[command(name = "pickline", version, about)]
struct Args {
    /// File whose first line is the initial inventory stocking
    inventory: PathBuf,

    /// Order stream file; may keep growing while we read it
    orders: PathBuf,

    /// Poll interval in milliseconds when the stream is exhausted
    #[arg(long, default_value_t = 50)]
    poll_ms: u64,
}

/// First line of the inventory file; missing or unreadable input
/// silently stocks nothing.
fn read_stock_line(path: &PathBuf) -> String {
    let Ok(file) = File::open(path) else {
        warn!(path = %path.display(), "inventory file unreadable, starting empty");
        return String::new();
    };
    let mut line = String::new();
    let _ = BufReader::new(file).read_line(&mut line);
    line
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut engine = OrderEngine::with_stock_line(&read_stock_line(&args.inventory));
    info!(
        products = engine.warehouse().product_count(),
        units = engine.warehouse().total(),
        "inventory loaded"
    );

    let config = FollowConfig {
        poll_interval: Duration::from_millis(args.poll_ms),
    };
    let shutdown = Arc::new(AtomicBool::new(false));

    // The tailing loop blocks on file polling; run it off the runtime and
    // turn Ctrl-C into the loop's shutdown signal.
    let flag = Arc::clone(&shutdown);
    let orders = args.orders.clone();
    let mut worker = tokio::task::spawn_blocking(move || {
        let outcome = follow(&mut engine, &orders, &config, &flag);
        (engine, outcome)
    });

    let (engine, outcome) = loop {
        tokio::select! {
            joined = &mut worker => break joined?,
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, stopping after current line");
                shutdown.store(true, Ordering::Relaxed);
            }
        }
    };

    match outcome? {
        RunOutcome::Depleted | RunOutcome::Cancelled => {
            engine.dump_report(&mut io::stdout().lock())?;
        }
        RunOutcome::SourceUnavailable => {
            warn!(path = %args.orders.display(), "order stream unavailable, nothing processed");
        }
    }
    Ok(())
}
