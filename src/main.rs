mod builtin;
mod calendar;
mod catalog;
mod error;
mod gui;
mod record;
mod resolver;
mod state;
mod theme;
mod view;

use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::path::{Path, PathBuf};

use catalog::{BuiltinCatalog, Catalog, JsonFileCatalog};
use error::CatalogError;
use record::WallpaperRecord;
use resolver::{parse_day, Clock, FixedClock, Resolver, SystemClock};
use state::Settings;

#[derive(Parser)]
#[command(name = "daily-wallpaper")]
#[command(about = "A wallpaper for every day, with a calendar of past ones", version)]
struct Cli {
    /// Read wallpapers from this JSON file instead of the saved or builtin catalog
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the GUI (default)
    Gui,
    /// Print today's wallpaper as JSON
    Today,
    /// Print the wallpaper for a date (YYYY-MM-DD) as JSON
    Show { date: String },
    /// List every date that has a wallpaper
    Dates,
    /// Print the whole catalog as a JSON array
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = state::load_settings();
    let catalog = load_catalog(cli.catalog.as_deref(), &settings)?;
    let clock: Box<dyn Clock> = match cli.today.as_deref() {
        Some(day) => Box::new(FixedClock(parse_day(day)?)),
        None => Box::new(SystemClock),
    };
    let resolver = Resolver::new(catalog, clock);

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => {
            gui::run_gui(resolver, settings)?;
        }
        Commands::Today => {
            print_record(resolver.find_today(), resolver.today())?;
        }
        Commands::Show { date } => {
            print_record(resolver.find_by_day_str(&date)?, date.trim())?;
        }
        Commands::Dates => {
            for day in resolver.dates_with_records() {
                println!("{day}");
            }
        }
        Commands::List => {
            let records: Vec<&WallpaperRecord> = resolver.catalog().records().collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

/// An explicit `--catalog` must load. A saved catalog that has gone missing
/// falls back to the builtin list so the window still opens.
fn load_catalog(cli_path: Option<&Path>, settings: &Settings) -> Result<Catalog, CatalogError> {
    if let Some(path) = cli_path {
        return Catalog::load(&JsonFileCatalog::new(path));
    }

    if let Some(path) = &settings.catalog_path {
        match Catalog::load(&JsonFileCatalog::new(path.clone())) {
            Ok(catalog) => return Ok(catalog),
            Err(err) => log::warn!("{err}; using the builtin catalog"),
        }
    }

    Catalog::load(&BuiltinCatalog)
}

fn print_record(record: Option<&WallpaperRecord>, day: impl Display) -> Result<(), serde_json::Error> {
    match record {
        Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
        None => eprintln!("No wallpaper for {day}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_defaults_to_gui() {
        let cli = Cli::parse_from(["daily-wallpaper"]);
        assert!(cli.command.is_none());
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_cli_parses_show_with_global_catalog() {
        let cli = Cli::parse_from(["daily-wallpaper", "show", "2026-02-06", "--catalog", "w.json"]);

        assert_eq!(cli.catalog, Some(PathBuf::from("w.json")));
        assert!(matches!(cli.command, Some(Commands::Show { date }) if date == "2026-02-06"));
    }

    #[test]
    fn test_cli_parses_fixed_today() {
        let cli = Cli::parse_from(["daily-wallpaper", "--today", "2026-02-08", "today"]);

        assert_eq!(cli.today.as_deref(), Some("2026-02-08"));
        assert!(matches!(cli.command, Some(Commands::Today)));
    }

    #[test]
    fn test_load_catalog_defaults_to_builtin() {
        let catalog = load_catalog(None, &Settings::default()).unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_missing_saved_catalog_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            dark_mode: false,
            catalog_path: Some(dir.path().join("gone.json")),
        };

        let catalog = load_catalog(None, &settings).unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_missing_cli_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.json");

        assert!(matches!(
            load_catalog(Some(path.as_path()), &Settings::default()),
            Err(CatalogError::Io { .. })
        ));
    }

    #[test]
    fn test_cli_catalog_wins_over_saved_one() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"x","date":"2026-05-01","imageUrl":"https://example.com/x.jpg","title":"X"}}]"#
        )
        .unwrap();
        let settings = Settings {
            dark_mode: false,
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
        };

        let catalog = load_catalog(Some(file.path()), &settings).unwrap();
        let dates: Vec<String> = catalog.dates().map(|d| d.to_string()).collect();
        assert_eq!(dates, ["2026-05-01"]);
    }
}
