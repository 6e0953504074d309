pub mod aggregate;
pub mod cli;
pub mod config;
pub mod driver;
pub mod runtime;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
