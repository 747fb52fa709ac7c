//! # FitStance CLI Application
//!
//! Terminal front end for the fitness metrics calculator. Field values are
//! taken from flags (or prompted for with `--interactive`), parsed through
//! the same validation step a web form uses, and rendered as a text report
//! or JSON.

mod report;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fit_core::metrics::{compute, MetricsDisplay, RawMetricsForm};
use fit_core::preferences::{FileStore, Theme, ThemePreference};

#[derive(Parser)]
#[command(name = "fitstance", version, about = "Fitness metrics calculator", long_about = None)]
struct Cli {
    /// preferences file (defaults to the platform data directory)
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// compute BMR, TDEE, BMI, water and macro targets
    Calc(CalcArgs),

    /// show or change the colour theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommands>,
    },
}

#[derive(Args)]
struct CalcArgs {
    /// age in years
    #[arg(long)]
    age: Option<String>,

    /// male or female
    #[arg(long)]
    sex: Option<String>,

    /// activity multiplier (e.g. 1.55) or level name (sedentary, light, moderate, active, very_active)
    #[arg(long)]
    activity: Option<String>,

    /// gain, lose or maintain
    #[arg(long)]
    goal: Option<String>,

    /// body weight in kilograms
    #[arg(long)]
    weight_kg: Option<String>,

    /// height in centimetres
    #[arg(long)]
    height_cm: Option<String>,

    /// height in feet (combined with --height-in, overrides --height-cm)
    #[arg(long)]
    height_ft: Option<String>,

    /// additional inches of height
    #[arg(long)]
    height_in: Option<String>,

    /// print JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// prompt for any field not given as a flag
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// print the saved theme
    Show,

    /// save a theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },

    /// switch between dark and light
    Toggle,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Calc(args) => calc(args),
        Commands::Theme { action } => {
            let path = cli.prefs.unwrap_or_else(default_prefs_path);
            theme(path, action.unwrap_or(ThemeCommands::Show))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn calc(args: CalcArgs) -> Result<ExitCode> {
    let json = args.json;
    let form = collect_form(args)?;

    // Validation failures print nothing but the error
    let computed = form.parse().and_then(|input| Ok((input, compute(&input)?)));
    let (input, result) = match computed {
        Ok(pair) => pair,
        Err(e) => {
            tracing::info!(code = e.error_code(), "rejected input");
            eprintln!("Please fill in all fields correctly: {e}");
            if json {
                let error_json =
                    serde_json::to_string_pretty(&e).context("serializing error")?;
                eprintln!("{error_json}");
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let display = MetricsDisplay::from_result(&result);

    if json {
        let doc = serde_json::json!({
            "input": input,
            "result": result,
            "display": display,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", report::render_text(&input, &display));
    }

    Ok(ExitCode::SUCCESS)
}

fn collect_form(args: CalcArgs) -> Result<RawMetricsForm> {
    let mut form = RawMetricsForm {
        age: args.age,
        sex: args.sex,
        activity: args.activity,
        goal: args.goal,
        weight_kg: args.weight_kg,
        weight: None,
        height_ft: args.height_ft,
        height_in: args.height_in,
        height_cm: args.height_cm,
    };

    if !args.interactive {
        return Ok(form);
    }

    fill_missing(&mut form.age, "Age (years): ")?;
    fill_missing(&mut form.sex, "Sex (male/female): ")?;
    fill_missing(&mut form.activity, "Activity (1.2-1.9 or level name): ")?;
    fill_missing(&mut form.goal, "Goal (gain/lose/maintain): ")?;
    fill_missing(&mut form.weight_kg, "Weight (kg): ")?;

    let has_imperial = form.height_ft.is_some() || form.height_in.is_some();
    if form.height_cm.is_none() && !has_imperial {
        fill_missing(&mut form.height_cm, "Height (cm, blank for feet/inches): ")?;
        if form.height_cm.is_none() {
            fill_missing(&mut form.height_ft, "Height (ft): ")?;
            fill_missing(&mut form.height_in, "Height (in): ")?;
        }
    }

    Ok(form)
}

fn fill_missing(slot: &mut Option<String>, label: &str) -> Result<()> {
    if slot.is_none() {
        *slot = prompt(label)?;
    }
    Ok(())
}

/// Blank answers come back as `None`.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading answer")?;

    let answer = line.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}

fn theme(path: PathBuf, action: ThemeCommands) -> Result<()> {
    let store = FileStore::new(&path);
    let mut prefs = ThemePreference::init(store)
        .with_context(|| format!("reading preferences from {}", path.display()))?;

    match action {
        ThemeCommands::Show => {}
        ThemeCommands::Set { theme } => prefs
            .set(theme.into())
            .with_context(|| format!("saving preferences to {}", path.display()))?,
        ThemeCommands::Toggle => {
            prefs
                .toggle()
                .with_context(|| format!("saving preferences to {}", path.display()))?;
        }
    }

    println!("{}", prefs.current());
    Ok(())
}

fn default_prefs_path() -> PathBuf {
    directories::ProjectDirs::from("com", "fitstance", "FitStance")
        .map(|dirs| dirs.data_dir().join("preferences.json"))
        .unwrap_or_else(|| PathBuf::from("preferences.json"))
}
