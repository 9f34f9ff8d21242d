use std::process::ExitCode;

use clap::Parser;

use retro_wm::config::{DesktopCli, DesktopConfig};
use retro_wm::desktop::Desktop;
use retro_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use retro_wm::runner::run_desktop;
use retro_wm::{Result, Viewport, tracing_sub};

fn main() -> ExitCode {
    let cli = DesktopCli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("retro-wm: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &DesktopCli) -> Result<()> {
    let config = DesktopConfig::try_from(cli)?;
    tracing_sub::init(config.log_file.as_deref())?;
    tracing::info!(?config, "starting desktop");

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;

    let result = {
        let terminal = output.terminal_mut();
        let size = terminal.size()?;
        let mut desktop = Desktop::new(config.mouse_capture);
        desktop.open_cascade(
            config.initial_windows,
            Viewport::new(size.width, size.height),
        );
        run_desktop(
            terminal,
            ConsoleInputDriver::new(),
            &mut desktop,
            config.poll_interval,
        )
    };

    // restore the terminal before anything is printed
    output.exit()?;
    tracing::info!(ok = result.is_ok(), "desktop stopped");
    result
}
