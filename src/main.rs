use buffettbot::adapter::inbound::cli::{run, Cli};
use clap::Parser;

fn main() {
    let _ = dotenvy::dotenv();
    let _cli = Cli::parse();

    let status = run::execute();
    std::process::exit(status.code());
}
