//! Config command - show the effective configuration.

use anyhow::Result;
use killport_core::config::LSOF_ENV_VAR;
use killport_core::KillPortEngine;

pub fn show(engine: &KillPortEngine, json: bool) -> Result<bool> {
    let config = engine.config();

    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(true);
    }

    println!("lsof path: {}", config.lsof_path);
    println!("\nOverride with {} or --lsof.", LSOF_ENV_VAR);
    Ok(true)
}
