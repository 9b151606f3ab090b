use anyhow::Context;
use clap::{Parser, Subcommand};
use clothing_core::{
    ClothingAdvisor, Config, OutputFormat, PrecipitationInput, Recommendation, Request,
    RequestFields, TracingEventSink,
};
use inquire::{Select, Text};
use std::{
    fs,
    io::{self, Read},
    sync::Arc,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clothing", version, about = "Clothing recommendations for the weather")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recommend clothing for the given conditions.
    Suggest {
        /// Temperature in degrees Celsius.
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,

        /// Weather description, e.g. "light rain" or "clear sky".
        #[arg(long)]
        description: String,

        /// `true`/`false`, or precipitation JSON such as '{"3h": 6}'.
        #[arg(long)]
        rain: Option<PrecipitationInput>,

        /// `true`/`false`, or precipitation JSON such as '{"1h": 12}'.
        #[arg(long)]
        snow: Option<PrecipitationInput>,

        /// spring, summer, autumn or winter; defaults to today's season.
        #[arg(long)]
        season: Option<String>,

        /// Free-form region, e.g. "tropical", "arctic", "desert".
        #[arg(long)]
        region: Option<String>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Recommend clothing for a JSON request read from a file or stdin.
    Request {
        /// Path to the request document, or "-" for stdin.
        path: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the season for today's date.
    Season,

    /// Interactively set the default region and output format.
    Configure,
}

impl Cli {
    pub async fn run(self, mut config: Config) -> anyhow::Result<()> {
        match self.command {
            Command::Suggest {
                temperature,
                description,
                rain,
                snow,
                season,
                region,
                json,
            } => {
                let fields = RequestFields {
                    rain,
                    snow,
                    season,
                    region,
                    ..RequestFields::new(temperature, description)
                };
                suggest(&config, Request::from(fields), json).await?;
            }
            Command::Request { path, json } => {
                let request = read_request(&path)?;
                suggest(&config, request, json).await?;
            }
            Command::Season => {
                println!("{}", ClothingAdvisor::new().season_today());
            }
            Command::Configure => configure(&mut config)?,
        }

        Ok(())
    }
}

async fn suggest(config: &Config, mut request: Request, json: bool) -> anyhow::Result<()> {
    config.apply_defaults(request.fields_mut());

    let advisor = ClothingAdvisor::new().with_sink(Arc::new(TracingEventSink));
    let recommendation = advisor.suggest(request).await?;

    let format = if json { OutputFormat::Json } else { config.output };
    print_recommendation(&recommendation, format)
}

fn print_recommendation(recommendation: &Recommendation, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render::TextView(recommendation)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(recommendation)
                .context("Failed to serialize recommendation to JSON")?
        ),
    }

    Ok(())
}

fn read_request(path: &str) -> anyhow::Result<Request> {
    let contents = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read request file: {path}"))?
    };

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse request JSON from {path}"))
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let current_region = config.default_region.clone().unwrap_or_default();
    let region = Text::new("Default region (leave empty for none):")
        .with_initial_value(&current_region)
        .prompt()
        .context("Failed to read default region")?;
    config.set_default_region(Some(region));

    let formats = OutputFormat::all().to_vec();
    let cursor = formats.iter().position(|f| *f == config.output).unwrap_or(0);
    config.output = Select::new("Default output format:", formats)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read output format")?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
