//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use georoute_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    match georoute_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("georoute: {err}");
            std::process::exit(1);
        }
    }
}
