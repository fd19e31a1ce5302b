use std::process::ExitCode;

fn main() -> ExitCode {
    skincircuit_cli::run()
}
