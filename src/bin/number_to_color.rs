use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use number_to_color::{ColorInput, GradientConfig};

/// Print the heatmap colour of each value within a domain.
#[derive(Parser, Debug)]
#[command(name = "number_to_color")]
#[command(about = "Map numbers onto a start/middle/end colour gradient")]
struct Args {
    /// Values to colour
    #[arg(required = true, allow_hyphen_values = true)]
    values: Vec<f64>,

    /// Two or three comma separated breakpoints, e.g. `-20,0,20`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    domain: Option<Vec<f64>>,

    /// JSON gradient config; command line options take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Colour at the low end of the domain
    #[arg(long, alias = "negative-color")]
    start_color: Option<String>,

    /// Colour at the midpoint
    #[arg(long, alias = "neutral-color")]
    middle_color: Option<String>,

    /// Colour at the high end of the domain
    #[arg(long, alias = "positive-color")]
    end_color: Option<String>,
}

fn load_config(args: &Args) -> anyhow::Result<GradientConfig> {
    let mut config = match (&args.config, &args.domain) {
        (Some(path), _) => GradientConfig::from_path(path)
            .with_context(|| format!("Could not load config {:?}", path))?,
        (None, Some(domain)) => GradientConfig {
            domain: domain.clone(),
            start_color: None,
            middle_color: None,
            end_color: None,
        },
        (None, None) => bail!("Either --domain or --config is required"),
    };

    if let Some(domain) = &args.domain {
        config.domain = domain.clone();
    }
    if let Some(color) = &args.start_color {
        config.start_color = Some(ColorInput::from(color.as_str()));
    }
    if let Some(color) = &args.middle_color {
        config.middle_color = Some(ColorInput::from(color.as_str()));
    }
    if let Some(color) = &args.end_color {
        config.end_color = Some(ColorInput::from(color.as_str()));
    }
    Ok(config)
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    log::debug!("Using gradient config {:?}", config);
    let gradient = config.gradient()?;

    for hex in gradient.hex_colors(args.values.as_slice())? {
        println!("{}", hex);
    }
    Ok(())
}
