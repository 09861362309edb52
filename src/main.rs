use clap::{Parser, Subcommand, builder::styling};
use eyre::Result;
use loadlines::{BulkReloader, Collection, ConsoleReporter, Registry, Settings};
use owo_colors::OwoColorize;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Loadlines: atomically reload collections from JSON Lines fixture files
#[derive(Parser)]
#[command(name = "loadlines", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source settings from
    #[arg(short, long, global = true, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace a model's contents with the records in its fixture file
    Load {
        /// The label of the model to be populated with the fixture,
        /// in the form <app_label>.<model_name>
        model_label: String,
    },

    /// List the models registered in models.json
    Models,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // A missing dotenv file is fine, settings fall back to defaults
    let _ = dotenvy::from_filename(&cli.env);

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    let settings = Settings::from_env()?;
    let registry = Registry::open(&settings.base_dir)?;

    match cli.command {
        Commands::Load { model_label } => {
            let (mut collection, fixture) = registry.resolve(&model_label)?;
            log::info!(
                "Loading {} from {}",
                collection.label().cyan(),
                fixture.path().display().bright_black()
            );

            let mut reloader = BulkReloader::new(ConsoleReporter);
            let report = reloader.reload(&mut collection, &fixture)?;

            log::info!(
                "Loaded {} record(s) into {}, skipped {}",
                report.loaded.cyan(),
                report.label.cyan(),
                report.skipped().cyan()
            );
        }
        Commands::Models => {
            for spec in registry.models() {
                println!(
                    "{}  {}",
                    spec.label().cyan(),
                    registry.fixture_path(spec).display().bright_black()
                );
            }
        }
    }

    Ok(())
}
