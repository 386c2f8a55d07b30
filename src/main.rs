use clap::Parser;

use cli::Cli;
use ws_submit::{SendResult, Sender};

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        if e.is_connection_error() {
            eprintln!("  Hint: check that a listener is running at {}", cli.endpoint);
        }
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> SendResult<()> {
    let payload = cli.payload()?;
    let sender = Sender::new(cli.config())?;
    log::debug!("Submitting {} to {}", payload.url, sender.addr());
    let report = sender.send(&payload).await?;
    println!("sent {} bytes to {}", report.bytes, report.endpoint);
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(format!("ws_submit={}", level)),
    )
    .init();
}
