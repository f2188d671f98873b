use anyhow::Result;
use clap::Parser;
use log::debug;

use rgba2png::converter::{Converter, ConverterConfig};
use stellar_shared::{config::ToolConfig, constants::LIBRARY_NAME, logging, util::prog};

fn main() -> Result<()> {
    let config = ConverterConfig::parse();
    let tool_config = ToolConfig::from_env();
    logging::init(config.debug || tool_config.debug_mode);
    debug!("{} {} v{}", LIBRARY_NAME, prog().unwrap_or_else(|| "rgba2png".to_owned()), env!("CARGO_PKG_VERSION"));
    debug!("Loaded config: {:?}", config);
    let converter = Converter::new(config, tool_config);
    converter.run()?;
    Ok(())
}
