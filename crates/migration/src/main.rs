//! Schema tool for the Holonet tables.
//!
//! Reads `DATABASE_URL` (falls back to the local sqlite file used by the
//! server) and applies one of the commands listed in [`USAGE`].

use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;

use migration::Migrator;

const DEFAULT_DATABASE_URL: &str = "sqlite:/tmp/test.db?mode=rwc";

const USAGE: &str = "usage: migration [up [STEPS] | down [STEPS] | fresh | refresh | reset | status]";

#[derive(Debug, PartialEq)]
enum Command {
    Up(Option<u32>),
    Down(Option<u32>),
    Fresh,
    Refresh,
    Reset,
    Status,
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        let steps = |raw: Option<&String>| -> Option<Option<u32>> {
            match raw {
                None => Some(None),
                Some(raw) => raw.parse().ok().map(Some),
            }
        };

        let (name, rest) = args.split_first().map_or(("up", &[][..]), |(name, rest)| {
            (name.as_str(), rest)
        });
        let command = match (name, rest.len()) {
            ("up", 0 | 1) => Self::Up(steps(rest.first())?),
            // A bare `down` rolls back only the latest migration.
            ("down", 0) => Self::Down(Some(1)),
            ("down", 1) => Self::Down(steps(rest.first())?),
            ("fresh", 0) => Self::Fresh,
            ("refresh", 0) => Self::Refresh,
            ("reset", 0) => Self::Reset,
            ("status", 0) => Self::Status,
            _ => return None,
        };
        Some(command)
    }

    async fn run(self, db: &DatabaseConnection) -> Result<(), DbErr> {
        match self {
            Self::Up(steps) => Migrator::up(db, steps).await,
            Self::Down(steps) => Migrator::down(db, steps).await,
            Self::Fresh => Migrator::fresh(db).await,
            Self::Refresh => Migrator::refresh(db).await,
            Self::Reset => Migrator::reset(db).await,
            Self::Status => Migrator::status(db).await,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let db = Database::connect(&url).await?;
    command.run(&db).await?;

    Ok(())
}
