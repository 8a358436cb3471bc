use console_katas::utils::logger;
use console_katas::{app, KataKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_cli_logger(false);
    app::finish(KataKind::Circle, app::launch(KataKind::Circle))
}
