use std::time::Duration;

use clap::Parser;
use foodmap_core::domain::common::{
    ApiConfig, FoodmapConfig, FormConfig, entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodmap", version, about = "Submit a restaurant to the campus food map")]
pub struct Args {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(flatten)]
    pub form: FormArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ApiArgs {
    /// Base address of the food map API. Falls back to the hosted instance.
    #[arg(long = "api-base-url", env = "API_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(
        long = "request-timeout-ms",
        env = "REQUEST_TIMEOUT_MS",
        default_value_t = 10_000,
        value_parser = clap::value_parser!(u64).range(1..=600_000)
    )]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct FormArgs {
    /// Seconds the thank-you view stays up before the form comes back.
    #[arg(
        long = "reset-delay-secs",
        env = "RESET_DELAY_SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..=86_400)
    )]
    pub reset_delay_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl TryFrom<Args> for FoodmapConfig {
    type Error = CoreError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(Self {
            api: ApiConfig::from_base_url(
                args.api.base_url.as_deref(),
                Duration::from_millis(args.api.timeout_ms),
            )?,
            form: FormConfig {
                reset_delay: Duration::from_secs(args.form.reset_delay_secs),
            },
        })
    }
}
