//! `calendarium` CLI — print the Roman Catholic liturgical calendar.
//!
//! ## Usage
//!
//! ```sh
//! # Today's celebration (same as `calendarium today`)
//! calendarium
//!
//! # Every day of the liturgical year 2025 (Advent 2024 through November 2025)
//! calendarium year 2025
//!
//! # The same as JSON
//! calendarium year 2025 --json
//!
//! # One date, keeping the Epiphany on January 6
//! calendarium --epiphany january-6 day 2025-01-06
//!
//! # Observance options from a file
//! calendarium --options options.json year 2026
//!
//! # Easter Sunday
//! calendarium easter 2027
//! ```
//!
//! Set `RUST_LOG=debug` to see transfers as the calendar is built.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use liturgical::options::{AscensionRule, CorpusChristiRule, EpiphanyRule};
use liturgical::{liturgical_year_of, Calendar, CalendarDay, CalendarOptions, Disposition};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "calendarium",
    version,
    about = "Roman Catholic liturgical calendar"
)]
struct Cli {
    /// Defaults to `today`
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with observance options; flags below override it
    #[arg(long, global = true, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Where the Epiphany is kept
    #[arg(long, global = true, value_enum)]
    epiphany: Option<EpiphanyArg>,

    /// Where the Ascension is kept
    #[arg(long, global = true, value_enum)]
    ascension: Option<WeekdayOrSunday>,

    /// Where Corpus Christi is kept
    #[arg(long, global = true, value_enum)]
    corpus_christi: Option<WeekdayOrSunday>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every day of the liturgical year ending in YEAR
    Year {
        year: i32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved celebration of one date
    Day {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved celebration of today's local date
    Today {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the date of Easter Sunday
    Easter { year: i32 },
}

#[derive(Clone, Copy, ValueEnum)]
enum EpiphanyArg {
    /// Always January 6
    #[value(name = "january-6")]
    January6,
    /// The Sunday between January 2 and 8
    Sunday,
}

#[derive(Clone, Copy, ValueEnum)]
enum WeekdayOrSunday {
    Thursday,
    Sunday,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = load_options(&cli)?;

    match cli.command.unwrap_or(Commands::Today { json: false }) {
        Commands::Year { year, json } => {
            let calendar = Calendar::with_options(year, options)
                .with_context(|| format!("Failed to build the liturgical calendar for {year}"))?;
            if json {
                let out = serde_json::to_string_pretty(&calendar)
                    .context("Failed to serialize calendar")?;
                println!("{out}");
            } else {
                print_year(&calendar);
            }
        }
        Commands::Day { date, json } => show_day(date, options, json)?,
        Commands::Today { json } => show_day(Local::now().date_naive(), options, json)?,
        Commands::Easter { year } => {
            let easter = liturgical::easter_sunday(year)
                .with_context(|| format!("Failed to compute Easter for {year}"))?;
            println!("{easter}");
        }
    }

    Ok(())
}

/// Resolve `date` within its own liturgical year and print it.
fn show_day(date: NaiveDate, options: CalendarOptions, json: bool) -> Result<()> {
    let year = liturgical_year_of(date);
    let calendar = Calendar::with_options(year, options)
        .with_context(|| format!("Failed to build the liturgical calendar for {year}"))?;
    let day = calendar
        .day_on(date)
        .with_context(|| format!("Failed to look up {date}"))?;
    if json {
        let out = serde_json::to_string_pretty(day).context("Failed to serialize day")?;
        println!("{out}");
    } else {
        print_day(day);
    }
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Start from the options file, if any, then apply the individual flags.
fn load_options(cli: &Cli) -> Result<CalendarOptions> {
    let mut options = match &cli.options {
        Some(path) => read_options_file(path)?,
        None => CalendarOptions::default(),
    };
    if let Some(epiphany) = cli.epiphany {
        options.epiphany = match epiphany {
            EpiphanyArg::January6 => EpiphanyRule::January6,
            EpiphanyArg::Sunday => EpiphanyRule::SundayAfterJanuary1,
        };
    }
    if let Some(ascension) = cli.ascension {
        options.ascension = match ascension {
            WeekdayOrSunday::Thursday => AscensionRule::Thursday,
            WeekdayOrSunday::Sunday => AscensionRule::Sunday,
        };
    }
    if let Some(corpus_christi) = cli.corpus_christi {
        options.corpus_christi = match corpus_christi {
            WeekdayOrSunday::Thursday => CorpusChristiRule::Thursday,
            WeekdayOrSunday::Sunday => CorpusChristiRule::Sunday,
        };
    }
    tracing::debug!(?options, "calendar options");
    Ok(options)
}

fn read_options_file(path: &Path) -> Result<CalendarOptions> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse options file: {}", path.display()))
}

fn print_year(calendar: &Calendar) {
    let year = calendar.liturgical_year();
    println!(
        "Liturgical year {} ({} to {})",
        year.year,
        year.first_day(),
        year.last_day()
    );
    println!(
        "Easter {}, Sunday cycle {}, weekday cycle {}",
        year.easter, year.sunday_cycle, year.weekday_cycle
    );
    println!();
    for day in calendar.all_days() {
        let mut line = format!(
            "{} {}  {:<14} {:>2}  {:<6}  {}",
            day.date,
            day.date.format("%a"),
            day.season.to_string(),
            day.week,
            day.color.to_string(),
            day.celebration.name
        );
        if let Some(from) = day.transferred_from {
            line.push_str(&format!(" (transferred from {from})"));
        }
        println!("{line}");
    }
}

fn print_day(day: &CalendarDay) {
    println!("{} {}", day.date, day.date.format("%A"));
    println!("{}", day.celebration.name);
    println!("  rank:   {}", day.celebration.rank);
    println!("  color:  {}", day.color);
    println!("  season: {}, week {}", day.season, day.week);
    if let Some(from) = day.transferred_from {
        println!("  transferred from {from}");
    }
    for demotion in &day.demoted {
        println!(
            "  {}: {}",
            disposition_label(demotion.disposition),
            demotion.celebration.name
        );
    }
}

fn disposition_label(disposition: Disposition) -> &'static str {
    match disposition {
        Disposition::Transferred => "transferred",
        Disposition::Commemorated => "commemorated",
        Disposition::Optional => "optional",
        Disposition::Suppressed => "suppressed",
    }
}
