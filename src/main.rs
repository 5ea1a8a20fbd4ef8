use std::process::ExitCode;

fn main() -> ExitCode {
    pcp::cli::init_tracing();
    pcp::cli::run(std::env::args_os())
}
