use clap::Parser;
use dotenvy::dotenv;
use wm_cli::{Cli, run};
use wm_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};

const APP_NAME: &str = "wm-cli";

fn main() {
    dotenv().ok();
    init_tracing_subscriber(APP_NAME);
    install_tracing_panic_hook(APP_NAME);

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::error!(error = %err, "wm-cli failed");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
