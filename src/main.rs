//! PowerCost Calculator - Main entry point
//!
//! Terminal front end for comparing household electricity costs under a
//! renewable and a fossil tariff.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use powercost_calculator_lib::calculator::CostCalculator;
use powercost_calculator_lib::core::{Config, Period};
use powercost_calculator_lib::i18n::I18n;
use powercost_calculator_lib::render::Renderer;
use powercost_calculator_lib::session::{Command as SessionCommand, Outcome, Session};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
struct Args {
    /// Path to the configuration file (defaults to the user config directory)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read commands from stdin and redraw the dashboard after every change (default).
    Interactive,

    /// Evaluate a selection once and print the dashboard.
    Calculate(CalculateArgs),

    /// List the device catalog.
    Devices,

    /// List the tariff presets.
    Presets,

    /// Inspect or create the configuration file.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args)]
struct CalculateArgs {
    /// Device to add, optionally with a quantity: `fridge` or `tv=2`. Repeatable.
    #[clap(long = "device", short = 'd')]
    devices: Vec<String>,

    /// Tariff preset to apply, in order. Repeatable.
    #[clap(long = "preset", short = 'p')]
    presets: Vec<String>,

    /// Evaluation period: month, year or decade.
    #[clap(long)]
    period: Option<Period>,

    /// Print the dashboard snapshot as JSON.
    #[clap(long)]
    json: bool,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the configuration file path.
    Path,

    /// Print the effective configuration.
    Show,

    /// Write the default configuration unless the file already exists.
    Init,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    let i18n = I18n::new();
    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let config = load_config(&config_path)?;
            let renderer = Renderer::new(&i18n, &config.general);
            let session = Session::new(CostCalculator::from_config(&config));
            run_interactive(session, &renderer, &i18n)
        }
        Command::Calculate(args) => {
            let config = load_config(&config_path)?;
            let renderer = Renderer::new(&i18n, &config.general);
            let session = Session::new(CostCalculator::from_config(&config));
            run_calculate(session, &renderer, &args)
        }
        Command::Devices => {
            let config = load_config(&config_path)?;
            let renderer = Renderer::new(&i18n, &config.general);
            println!("{}", renderer.devices_table(&CostCalculator::from_config(&config)));
            Ok(())
        }
        Command::Presets => {
            let config = load_config(&config_path)?;
            let renderer = Renderer::new(&i18n, &config.general);
            println!("{}", renderer.presets_table(&CostCalculator::from_config(&config)));
            Ok(())
        }
        Command::Config { command } => run_config_command(&command, &config_path),
    }
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load_from(path).with_context(|| format!("failed to load {}", path.display()))
}

fn run_interactive(mut session: Session, renderer: &Renderer<'_>, i18n: &I18n) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\n\n{}", renderer.dashboard(session.calculator()), renderer.help())?;
    write!(stdout, "{}", i18n.get("session.prompt"))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match session.handle_line(&line) {
            Ok(None) => {}
            Ok(Some(Outcome::Quit)) => {
                writeln!(stdout, "{}", i18n.get("session.bye"))?;
                return Ok(());
            }
            Ok(Some(Outcome::Changed | Outcome::Show)) => {
                writeln!(stdout, "{}", renderer.dashboard(session.calculator()))?;
            }
            Ok(Some(Outcome::Unchanged)) => {
                writeln!(stdout, "{}", i18n.get("session.unchanged"))?;
            }
            Ok(Some(Outcome::Devices)) => {
                writeln!(stdout, "{}", renderer.devices_table(session.calculator()))?;
            }
            Ok(Some(Outcome::Presets)) => {
                writeln!(stdout, "{}", renderer.presets_table(session.calculator()))?;
            }
            Ok(Some(Outcome::Help)) => {
                writeln!(stdout, "{}", renderer.help())?;
            }
            Err(e) => {
                log::warn!("Rejected command {:?}: {}", line, e);
                writeln!(stdout, "{}: {}", i18n.get("session.error"), e)?;
            }
        }
        write!(stdout, "{}", i18n.get("session.prompt"))?;
        stdout.flush()?;
    }

    Ok(())
}

fn run_calculate(
    mut session: Session,
    renderer: &Renderer<'_>,
    args: &CalculateArgs,
) -> Result<()> {
    for device in &args.devices {
        let (name, quantity) = match device.split_once('=') {
            Some((name, quantity)) => (
                name,
                quantity
                    .trim()
                    .parse::<u32>()
                    .with_context(|| format!("invalid quantity in {:?}", device))?,
            ),
            None => (device.as_str(), 1),
        };
        let id = session.calculator().catalog().resolve(name)?;
        for _ in 0..quantity {
            session.execute(SessionCommand::Add(id.to_string()))?;
        }
    }

    for preset in &args.presets {
        session.execute(SessionCommand::Preset(preset.clone()))?;
    }

    if let Some(period) = args.period {
        session.execute(SessionCommand::Period(period))?;
    }

    if args.json {
        let dashboard = session.calculator().dashboard();
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        println!("{}", renderer.dashboard(session.calculator()));
    }
    Ok(())
}

fn run_config_command(command: &ConfigCommand, path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Path => println!("{}", path.display()),
        ConfigCommand::Show => {
            let config = load_config(path)?;
            print!("{}", config.to_toml()?);
        }
        ConfigCommand::Init => {
            if path.exists() {
                println!("{} already exists", path.display());
            } else {
                Config::default().save_to(path)?;
                log::info!("Wrote default config to {}", path.display());
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_subcommand_parses() {
        let args = Args::try_parse_from(["powercost-calculator", "config", "path"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Config {
                command: ConfigCommand::Path
            })
        ));
    }

    #[test]
    fn test_missing_config_loads_defaults() {
        let path = std::env::temp_dir().join("powercost-calculator-missing/config.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config.general.chart_height, Config::default().general.chart_height);
        assert!(!path.exists());
    }
}
