use std::{env, fs, path::Path};
use util::config;

mod runner;

/// `migration [up|fresh|clean|status]`, defaulting to `up`.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_path = config::database_path();
    let command = env::args().nth(1).unwrap_or_else(|| "up".into());

    match command.as_str() {
        "clean" => remove_db_file(&db_path),
        "fresh" => {
            remove_db_file(&db_path);
            let db = open(&db_path).await;
            runner::apply_pending(&db).await;
        }
        "status" => {
            let db = open(&db_path).await;
            runner::print_status(&db).await;
        }
        "up" => {
            let db = open(&db_path).await;
            runner::apply_pending(&db).await;
        }
        other => {
            eprintln!("Unknown command `{other}`. Expected up, fresh, clean or status.");
            std::process::exit(2);
        }
    }
}

async fn open(db_path: &str) -> sea_orm::DatabaseConnection {
    if let Some(parent) = Path::new(db_path).parent() {
        fs::create_dir_all(parent).expect("Failed to create DB directory");
    }
    let url = format!("sqlite://{db_path}?mode=rwc");
    sea_orm::Database::connect(&url)
        .await
        .expect("DB connection failed")
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}
