use colored::*;
use futures::FutureExt;
use migration::Migrator;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies pending migrations one at a time, printing a status line for each.
pub async fn apply_pending(db: &DatabaseConnection) {
    let pending = match Migrator::get_pending_migrations(db).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{} {e}", "Could not read migration state:".red());
            std::process::exit(1);
        }
    };

    if pending.is_empty() {
        println!("Nothing to migrate.");
        return;
    }

    println!("Running {} migration(s)...", pending.len());
    for migration in pending {
        let name_str = format!("Applying {}", migration.name().bold());
        let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
        print!("{}{} ", name_str, dots);
        io::stdout().flush().ok();

        let start = Instant::now();
        let result = std::panic::AssertUnwindSafe(Migrator::up(db, Some(1)))
            .catch_unwind()
            .await;

        match result {
            Ok(Ok(())) => {
                let time_str = format!("({:.2?})", start.elapsed()).dimmed();
                println!("{} {}", "done".green(), time_str);
            }
            Ok(Err(e)) => {
                println!("{}", "failed".red());
                eprintln!("  {e}");
                std::process::exit(1);
            }
            Err(_) => {
                println!("{}", "failed".red());
                std::process::exit(1);
            }
        }
    }
}

/// Lists every known migration with its applied state.
pub async fn print_status(db: &DatabaseConnection) {
    let applied: Vec<String> = match Migrator::get_applied_migrations(db).await {
        Ok(list) => list.iter().map(|m| m.name().to_owned()).collect(),
        Err(e) => {
            eprintln!("{} {e}", "Could not read migration state:".red());
            std::process::exit(1);
        }
    };

    for migration in Migrator::migrations() {
        let name = migration.name().to_owned();
        let state = if applied.contains(&name) {
            "applied".green()
        } else {
            "pending".yellow()
        };
        println!("{name:<60} {state}");
    }
}
