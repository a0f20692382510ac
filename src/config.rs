//! Runtime configuration for the `klotski` binary.
//!
//! Every flag can also be set through a `KLOTSKI_*` environment variable;
//! an explicit flag wins over the environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::term::{PuzzleView, MAX_CELL_SIZE};
use crate::types::FRAME_MS;

/// Smallest cell width that still fits a block outline.
pub const MIN_CELL_WIDTH: u16 = 2;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "klotski", version, about = "Sliding-block puzzle in the terminal")]
pub struct Config {
    /// Terminal columns per board cell.
    #[arg(long, env = "KLOTSKI_CELL_WIDTH", default_value_t = 6)]
    pub cell_width: u16,

    /// Terminal rows per board cell.
    #[arg(long, env = "KLOTSKI_CELL_HEIGHT", default_value_t = 3)]
    pub cell_height: u16,

    /// Input poll timeout between redraws, in milliseconds.
    #[arg(long, env = "KLOTSKI_FRAME_MS", default_value_t = FRAME_MS)]
    pub frame_ms: u32,

    /// Append log records to this file. Logging is off without it.
    #[arg(long, env = "KLOTSKI_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter (env_logger syntax, e.g. `debug` or `klotski_core=trace`).
    #[arg(long, env = "KLOTSKI_LOG", default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_width: 6,
            cell_height: 3,
            frame_ms: FRAME_MS,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Cell size clamped to what the view can draw.
    pub fn cell_size(&self) -> (u16, u16) {
        (
            self.cell_width.clamp(MIN_CELL_WIDTH, MAX_CELL_SIZE),
            self.cell_height.clamp(1, MAX_CELL_SIZE),
        )
    }

    pub fn view(&self) -> PuzzleView {
        let (w, h) = self.cell_size();
        PuzzleView::new(w, h)
    }

    pub fn frame_timeout(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cfg = Config::try_parse_from([
            "klotski",
            "--cell-width",
            "4",
            "--cell-height",
            "2",
            "--frame-ms",
            "50",
            "--log-file",
            "/tmp/klotski.log",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cfg.cell_size(), (4, 2));
        assert_eq!(cfg.frame_timeout(), Duration::from_millis(50));
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/klotski.log")));
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn clamps_cell_size_and_frame_time() {
        let cfg = Config {
            cell_width: 0,
            cell_height: 100,
            frame_ms: 0,
            ..Config::default()
        };
        assert_eq!(cfg.cell_size(), (MIN_CELL_WIDTH, MAX_CELL_SIZE));
        assert_eq!(cfg.frame_timeout(), Duration::from_millis(1));
        assert_eq!(cfg.view().cell_size(), (MIN_CELL_WIDTH, MAX_CELL_SIZE));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Config::try_parse_from(["klotski", "--cell-width", "wide"]).is_err());
        assert!(Config::try_parse_from(["klotski", "--bogus"]).is_err());
    }
}
