use std::process::ExitCode;

use log::error;
use mandelbrot_viewer::{PixelsPresenterFactory, RunGuiCommand, ViewerConfig};

fn main() -> ExitCode {
    env_logger::init();

    let command = RunGuiCommand::new(PixelsPresenterFactory::default(), ViewerConfig::default());

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
