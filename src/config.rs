use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::WmError;

#[derive(Parser, Debug)]
#[command(
    name = "retro-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Retro text-mode window manager demo"
)]
pub struct DesktopCli {
    /// Number of windows to open at startup.
    #[arg(short = 'w', long = "windows", value_name = "N", default_value_t = 3)]
    pub windows: usize,

    /// Start with mouse capture turned off (toggle with `m`).
    #[arg(long = "no-mouse")]
    pub no_mouse: bool,

    /// Append debug logs to this file. Logs are discarded otherwise.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Input poll interval; also the idle redraw period.
    #[arg(long = "poll-ms", value_name = "MS", default_value_t = 16)]
    pub poll_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    pub initial_windows: usize,
    pub mouse_capture: bool,
    pub log_file: Option<PathBuf>,
    pub poll_interval: Duration,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            initial_windows: 3,
            mouse_capture: true,
            log_file: None,
            poll_interval: Duration::from_millis(16),
        }
    }
}

impl TryFrom<&DesktopCli> for DesktopConfig {
    type Error = WmError;

    fn try_from(cli: &DesktopCli) -> Result<Self, Self::Error> {
        if cli.windows > 16 {
            return Err(WmError::Config(
                "windows must be between 0 and 16".to_string(),
            ));
        }
        if !(1..=1000).contains(&cli.poll_ms) {
            return Err(WmError::Config(
                "poll-ms must be between 1 and 1000".to_string(),
            ));
        }
        Ok(Self {
            initial_windows: cli.windows,
            mouse_capture: !cli.no_mouse,
            log_file: cli.log_file.clone(),
            poll_interval: Duration::from_millis(cli.poll_ms),
        })
    }
}
