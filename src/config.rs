use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

pub const MAX_WIRES: usize = 16;
pub const MAX_COLUMNS: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("wire count must be between 1 and {max}, got {0}", max = MAX_WIRES)]
    Wires(usize),
    #[error("column count must be between 1 and {max}, got {0}", max = MAX_COLUMNS)]
    Columns(usize),
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Place and edit quantum gates on a circuit grid", long_about = None)]
pub struct Args {
    /// Number of wires (qubits)
    #[arg(short, long, default_value_t = 4)]
    pub wires: usize,

    /// Number of columns (time steps)
    #[arg(short, long, default_value_t = 12)]
    pub columns: usize,

    /// Directory for the rotating log file
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Start with a sample controlled gate on the grid
    #[arg(long)]
    pub demo: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub wires: usize,
    pub columns: usize,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub demo: bool,
}

impl Args {
    pub fn validate(self) -> Result<GridConfig, ConfigError> {
        if !(1..=MAX_WIRES).contains(&self.wires) {
            return Err(ConfigError::Wires(self.wires));
        }
        if !(1..=MAX_COLUMNS).contains(&self.columns) {
            return Err(ConfigError::Columns(self.columns));
        }
        Ok(GridConfig {
            wires: self.wires,
            columns: self.columns,
            log_dir: self
                .log_dir
                .unwrap_or_else(|| std::env::temp_dir().join("circuit-grid")),
            log_level: self.log_level,
            demo: self.demo,
        })
    }
}
