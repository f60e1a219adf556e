use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::{Args, Parser, Subcommand};
use lifecalc::OutputFormat;
use lifecalc::commands;
use lifecalc::commands::show::ShowOptions;
use lifecalc::config;
use lifecalc::lifespan::boundary;
use lifecalc::utils::logger;

#[derive(Parser)]
#[command(name = "lifecalc")]
#[command(about = "How much of a projected lifespan has passed, in years, quarters, months, weeks and days")]
#[command(version)]
struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show time lived, time remaining and progress
    Show {
        #[arg(long, value_parser = parse_date, help = "Start date (YYYY-MM-DD), overrides the stored one")]
        start: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date, help = "Projected end date (YYYY-MM-DD), overrides the stored one")]
        end: Option<NaiveDate>,
        #[arg(long, value_parser = parse_instant, help = "Evaluate at this instant (RFC 3339) instead of now")]
        at: Option<DateTime<FixedOffset>>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Remember the start and/or end date
    Set {
        #[arg(long, value_parser = parse_date, required_unless_present = "end", help = "Start date (YYYY-MM-DD)")]
        start: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date, help = "Projected end date (YYYY-MM-DD)")]
        end: Option<NaiveDate>,
        #[arg(long, value_parser = parse_instant, help = "Check the stored dates at this instant (RFC 3339) instead of now")]
        at: Option<DateTime<FixedOffset>>,
    },
    /// Forget the stored dates
    Clear,
    /// Inspect or change configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    Set { key: String, value: String },
    /// Print the config file location
    Path,
}

fn parse_date(input: &str) -> Result<NaiveDate, String> {
    boundary::parse_date(input).map_err(|e| e.to_string())
}

fn parse_instant(input: &str) -> Result<DateTime<FixedOffset>, String> {
    boundary::parse_instant(input).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = config::load()?;

    match cli.command {
        Commands::Show {
            start,
            end,
            at,
            format,
        } => {
            commands::show::show(
                &config,
                ShowOptions {
                    start,
                    end,
                    at,
                    format,
                },
            )?;
        }
        Commands::Set { start, end, at } => {
            commands::dates::set(&config, start, end, at)?;
        }
        Commands::Clear => {
            commands::dates::clear(&config)?;
        }
        Commands::Config(args) => match args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(&key, &config)?,
            ConfigAction::Set { key, value } => commands::config::set(&config, &key, &value)?,
            ConfigAction::Path => commands::config::path()?,
        },
    }

    Ok(())
}
