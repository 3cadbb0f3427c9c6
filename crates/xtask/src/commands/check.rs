//! Validate an addon configuration
//!
//! Loads the addon config and its rate file exactly like the addon does at
//! startup and prints what award events would see.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

/// Load an addon config and print the resulting rate snapshot
#[derive(Parser, Debug)]
pub struct Check {
    /// Addon configuration file (JSON or TOML)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let (config, snapshot) = super::load_snapshot(&self.config)?;

        println!("{}", style("📋 Dynamic Rate Configuration").green().bold());
        println!("  Config:     {}", style(self.config.display()).dim());
        println!("  Rate file:  {}", style(config.config_path.display()).dim());
        println!("  Log file:   {}", style(config.log_file().display()).dim());
        println!();

        if !snapshot.is_activated() {
            let reason = if !config.activated {
                "disabled in config"
            } else if !config.config_path.exists() {
                "force disabled (rate file not found)"
            } else {
                "force disabled (rate file corrupted)"
            };
            println!("  Status:     {}", style(reason).yellow().bold());
            return Ok(());
        }

        println!("  Status:     {}", style("activated").green().bold());
        println!("  Max level:  {}", snapshot.config.max_level);
        println!(
            "  Base rates: {} default / {} premium",
            snapshot.config.base_default_rate, snapshot.config.base_premium_rate
        );
        println!();

        if snapshot.table.is_empty() {
            println!("  {}", style("No level records; every level uses 1.0").yellow());
            return Ok(());
        }

        println!(
            "  {:>5}  {:>10}  {:>10}",
            style("lv").bold(),
            style("default").bold(),
            style("premium").bold()
        );
        let mut seen = Vec::new();
        for record in snapshot.table.records() {
            let shadowed = seen.contains(&record.level);
            seen.push(record.level);

            let line = format!(
                "  {:>5}  {:>10}  {:>10}",
                record.level, record.default_multiplier, record.premium_multiplier
            );
            if shadowed {
                println!("{}  {}", style(line).dim(), style("(duplicate, ignored)").dim());
            } else {
                println!("{}", line);
            }
        }

        Ok(())
    }
}
