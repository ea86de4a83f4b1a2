use clap::Parser;

use doc8::cli::Cli;
use doc8::commands::run_check;

const fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose)),
    )
    .init();

    std::process::exit(run_check(&cli));
}
