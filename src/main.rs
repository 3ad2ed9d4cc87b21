use std::io;
use std::process::ExitCode;

use log::error;

use city_trunfo::core::logging;
use city_trunfo::MatchConfig;

fn main() -> ExitCode {
    let config = MatchConfig::default();
    let logger = logging::init(config.log_level);
    if let Err(e) = &logger {
        eprintln!("warning: {e}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match city_trunfo::run(&config, stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if logger.is_ok() {
                error!("{e}");
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
