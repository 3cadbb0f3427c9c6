//! Tail addon logs command
//!
//! Follows the addon's `DynamicRate.txt` in real-time, similar to `tail -f`.
//! The log location is taken from the same addon config the host loads.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use rate_content::{AddonConfig, AddonConfigLoader};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Monitor the addon log file in real-time
#[derive(Parser, Debug)]
pub struct TailLogs {
    /// Addon configuration file; compiled-in log location when omitted
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of lines to show from history before tailing
    #[arg(short = 'n', long, default_value = "10")]
    pub lines: usize,

    /// Poll interval in milliseconds
    #[arg(long, default_value = "100")]
    pub poll_interval: u64,
}

impl TailLogs {
    pub fn execute(self) -> Result<()> {
        let config = match self.config {
            Some(ref path) => AddonConfigLoader::load(path)
                .with_context(|| format!("Failed to load addon config: {}", path.display()))?,
            None => AddonConfig::default(),
        };
        let log_path = config.log_file();

        if !log_path.exists() {
            eprintln!("{}", style("✗ Log file not found").red().bold());
            eprintln!("  Path: {}", style(log_path.display()).dim());
            eprintln!();
            eprintln!("  The host creates it when it installs the addon's file logger:");
            eprintln!("    {}", style("rate_runtime::init_file_logging(&config)").cyan());
            anyhow::bail!("Log file does not exist");
        }

        println!("{}", style("📝 Monitoring Dynamic Rate Logs").green().bold());
        println!("  Log file: {}", style(log_path.display()).dim());
        println!();

        self.tail_file(&log_path)
    }

    /// Tail a log file, printing the last N lines and then following new content
    fn tail_file(&self, path: &Path) -> Result<()> {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        for line in self.read_last_n_lines(&mut file, self.lines)? {
            println!("{}", line);
        }

        // Follow from the end; earlier content was already printed
        file.seek(SeekFrom::End(0))?;
        let mut reader = BufReader::new(file);
        let poll_interval = Duration::from_millis(self.poll_interval);

        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => std::thread::sleep(poll_interval),
                Ok(_) => print!("{}", line),
                Err(e) => {
                    eprintln!("{}", style(format!("Error reading log file: {}", e)).red());
                    anyhow::bail!("Failed to read log file");
                }
            }
        }
    }

    /// Read the last N lines from a file
    ///
    /// The addon appends to a single file per process, so reading it whole is fine.
    fn read_last_n_lines(&self, file: &mut File, n: usize) -> Result<Vec<String>> {
        file.seek(SeekFrom::Start(0))?;

        let reader = BufReader::new(&mut *file);
        let lines: Vec<String> = reader
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("Failed to read lines from log file")?;

        let start = lines.len().saturating_sub(n);
        Ok(lines[start..].to_vec())
    }
}
