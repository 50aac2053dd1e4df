use chrono::{Local, NaiveDate};
use clap::Parser;
use todotags::application::{ReportFilter, ReportService};
use todotags::cli::{format_date_facts, format_implied, format_report, Cli, Commands};
use todotags::domain::date::parse_date;
use todotags::error::TodoTagsError;
use todotags::infrastructure::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), TodoTagsError> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Implied { tags } => {
            let service = ReportService::shared(&config, today(None)?)?;
            println!("{}", format_implied(&service.implied(&tags)).trim_end());
            Ok(())
        }
        Commands::Dates { line, today: at } => {
            let service = ReportService::shared(&config, today(at.as_deref())?)?;
            let report = service.report_line(&line)?;
            print!("{}", format_date_facts(&report));
            Ok(())
        }
        Commands::Report {
            file,
            today: at,
            overdue,
            active,
        } => {
            let contents = std::fs::read_to_string(&file)?;
            let service = ReportService::shared(&config, today(at.as_deref())?)?;
            let filter = ReportFilter {
                overdue_only: overdue,
                active_only: active,
            };
            let reports = service.report_all(&contents, filter)?;
            println!("{}", format_report(&reports).trim_end());
            Ok(())
        }
    }
}

/// Resolve the `--today` override, defaulting to the local date
fn today(arg: Option<&str>) -> Result<NaiveDate, TodoTagsError> {
    match arg {
        Some(value) => parse_date(value).map_err(|e| TodoTagsError::InvalidDate(e.input)),
        None => Ok(Local::now().date_naive()),
    }
}
