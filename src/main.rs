use clap::Parser;
use console_katas::utils::logger;
use console_katas::{app, CliConfig, LogFormat};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    app::finish(config.kata, app::launch(config.kata))
}
