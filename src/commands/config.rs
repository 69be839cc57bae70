use std::path::Path;

use anyhow::Result;
use holical_core::HolicalConfig;
use owo_colors::OwoColorize;

pub fn run(config: &HolicalConfig, config_override: Option<&Path>) -> Result<()> {
    let config_path = match config_override {
        Some(path) => path.to_path_buf(),
        None => HolicalConfig::config_path()?,
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Output:  {}", config.output_path().display());
    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {line}");
    }

    Ok(())
}
