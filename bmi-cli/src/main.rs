mod config;
mod render;
mod session;

use std::error::Error;
use std::io;

use bmi_form::{FormHandler, Page};
use clap::Parser;
use dotenv::dotenv;
use log::{debug, info};

use config::Cli;

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled: {}", e);
    }

    let format = cli.format();
    debug!("Using {:?}, output {:?}", cli.stale_message, format);

    let handler = FormHandler::new(cli.stale_message.into());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some((height, weight)) = cli.submission() {
        return session::submit(&handler, &mut Page::new(), height, weight, format, &mut out);
    }

    info!("Reading submissions from stdin");
    session::run(io::stdin().lock(), &mut out, &handler, format)
}
