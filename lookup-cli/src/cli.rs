use clap::{Parser, Subcommand};
use inquire::Text;
use lookup_core::{Config, OpenWeatherSource, WeatherLookup};

use crate::surface::WriteSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store an OpenWeatherMap API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London".
        city: String,
    },

    /// Prompt for city names in a loop; empty input exits.
    Prompt,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let widget = build_widget()?;
                widget.submit_query(&city).await;
                Ok(())
            }
            Command::Prompt => {
                let widget = build_widget()?;
                loop {
                    let city = Text::new("City:").prompt()?;
                    if city.trim().is_empty() {
                        break;
                    }

                    widget.submit_query(&city).await;
                }
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeatherMap API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Wire the widget to the real source and a stdout surface. Credential
/// problems are not an error here: the widget renders them per submission.
fn build_widget() -> anyhow::Result<WeatherLookup<WriteSurface<std::io::Stdout>>> {
    let config = Config::load()?;
    let source = OpenWeatherSource::from_config(&config);
    let surface = WriteSurface::new(std::io::stdout());

    Ok(WeatherLookup::new(config, Box::new(source), surface))
}
