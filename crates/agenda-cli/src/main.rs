use agenda::{Cli, run};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // `agenda demo | head -1` must end quietly instead of panicking on EPIPE
    #[cfg(unix)]
    restore_default_sigpipe();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(unix)]
fn restore_default_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
