use clap::Parser;
use foodmap_core::{application::create_form_controller, domain::common::FoodmapConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::{
    args::{Args, LogArgs},
    form::FormSession,
};

mod args;
mod form;

fn init_logger(args: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.filter.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if args.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(&args.log);

    let config = FoodmapConfig::try_from(args)?;
    let controller = create_form_controller(config)?;

    let input = BufReader::new(tokio::io::stdin()).lines();
    let mut session = FormSession::new(controller, input, tokio::io::stdout());

    session.run().await
}
