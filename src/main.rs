//! Main entry point for the `tee` binary.

fn main() -> std::process::ExitCode {
    tee::logging::init();
    tee::cli_runner::run_cli_app(std::env::args_os().skip(1))
}
