//! Simulate one experience award
//!
//! Runs a single award through the rate policy using a real addon
//! configuration, without a host process.

use anyhow::Result;
use clap::Parser;
use console::style;
use rate_core::{AwardDecision, ExpAward, SubjectView, resolve};
use std::path::PathBuf;

/// Run one experience award through the rate policy
#[derive(Parser, Debug)]
pub struct Simulate {
    /// Addon configuration file (JSON or TOML)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Player level
    #[arg(short, long)]
    level: i32,

    /// Proposed experience amount
    #[arg(short, long, allow_hyphen_values = true)]
    amount: f64,

    /// Player has a premium account
    #[arg(long)]
    premium: bool,

    /// Award is a quest/event reward
    #[arg(long)]
    reward: bool,

    /// An experience recovery item was used
    #[arg(long)]
    recovery_item: bool,

    /// An experience addition item is active
    #[arg(long)]
    addition_item: bool,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let (_, snapshot) = super::load_snapshot(&self.config)?;

        let subject = SubjectView::new(self.level, self.premium);
        let award = ExpAward::new(self.amount)
            .with_reward(self.reward)
            .with_recovery_item(self.recovery_item)
            .with_addition_item(self.addition_item);

        let decision = resolve(&snapshot, &subject, &award);

        println!("{}", style("🎲 Experience Award").green().bold());
        println!(
            "  Player:    lv {} ({})",
            self.level,
            if self.premium { "premium" } else { "default" }
        );
        println!("  Proposed:  {}", award.amount);
        println!("  Decision:  {}", style(decision.kind()).cyan().bold());

        if let AwardDecision::Scaled {
            base, multiplier, ..
        } = decision
        {
            println!(
                "  Formula:   ({} / {}) * {} = {}",
                award.amount,
                snapshot.config.base_rate(self.premium),
                multiplier,
                base * multiplier
            );
        }

        println!("  Forwarded: {}", style(decision.amount()).bold());

        Ok(())
    }
}
