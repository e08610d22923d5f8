use datetimefield::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    pretty_env_logger::init();
    cli::run()
}
