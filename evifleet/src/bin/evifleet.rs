//! synthesizes an electric vehicle fleet and its charging activity from a pool of
//! simulated vehicle charging sessions. set RUST_LOG=info to follow progress.
use clap::Parser;
use evifleet::app::FleetApp;

fn main() {
    env_logger::init();
    let args = FleetApp::parse();
    log::info!("evifleet started at {}", chrono::Local::now().to_rfc3339());
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
