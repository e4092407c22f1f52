use std::env;
use std::error::Error;

use input_core::{HostConfig, PlatformRunner};
use tracing::Level;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = HostConfig::from_args(env::args().skip(1));
    tracing::info!(?config, "host config");

    PlatformRunner::new(config).start()
}
