//! room-modal - compare the resonant modes of a rectangular room as
//! rendered by an exact image-source model and a digital waveguide.
//!
//! With no arguments it analyses the omnidirectional siltanen2013 renders
//! up to 120 Hz for a 5.56 x 3.97 x 2.81 m room.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use room_modal::analysis::ModalAnalyzer;
use room_modal::cli::Args;
use room_modal::driver::Driver;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args
        .run_config()
        .context("Failed to load configuration")?;

    let driver = Driver::new(config.driver);
    let mut analyzer = ModalAnalyzer::new(config.spectrum, config.output);

    tracing::info!(recordings = driver.fnames().len(), "Starting modal analysis");
    let report = driver.run(&mut analyzer)?;

    println!("{}", report);
    Ok(())
}
