use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{Config, Startup, config::DEFAULT_BASE_URL};
use inquire::Text;
use tracing::info;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Weather forecast client")]
pub struct Cli {
    /// Override the configured backend base URL for this run.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the backend address and request timeout.
    Configure {
        /// Request timeout in seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Fetch forecasts and render the app.
    Show {
        /// Print the raw forecast array as JSON instead of the table.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure { timeout_secs } => {
                let base_url = match self.base_url {
                    Some(url) => url,
                    None => prompt_base_url(&config)?,
                };

                config.set_base_url(&base_url)?;
                if timeout_secs.is_some() {
                    config.timeout_secs = timeout_secs;
                }
                config.save()?;

                info!(path = %Config::config_file_path()?.display(), "configuration saved");
                println!("Backend set to {}", config.base_url()?);
            }
            Command::Show { json } => {
                if let Some(url) = self.base_url.as_deref() {
                    config.set_base_url(url)?;
                }

                let app = Startup::build(config.http_client()?);

                if json {
                    let forecasts = app
                        .services()
                        .weather_forecasts()
                        .weather_forecasts()
                        .await
                        .context("Failed to fetch weather forecasts")?;
                    println!("{}", serde_json::to_string_pretty(&forecasts)?);
                } else {
                    for element in app.render().await {
                        info!(selector = %element.selector, "rendered component");
                        print!("{}", element.content);
                    }
                }
            }
        }

        Ok(())
    }
}

fn prompt_base_url(config: &Config) -> anyhow::Result<String> {
    let current = config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    Text::new("Backend base URL:")
        .with_default(&current)
        .prompt()
        .context("Failed to read base URL")
}
