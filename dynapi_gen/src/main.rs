use anyhow::Result;
use clap::Parser;
use log::debug;

use dynapi_gen::generator::{Generator, GeneratorConfig};
use stellar_shared::{config::ToolConfig, constants::LIBRARY_NAME, logging, util::prog};

fn main() -> Result<()> {
    let config = GeneratorConfig::parse();
    let tool_config = ToolConfig::from_env();
    logging::init(config.debug || tool_config.debug_mode);
    debug!("{} {} v{}", LIBRARY_NAME, prog().unwrap_or_else(|| "dynapi_gen".to_owned()), env!("CARGO_PKG_VERSION"));
    debug!("Loaded config: {:?}", config);
    let generator = Generator::new(config);
    generator.run()?;
    Ok(())
}
