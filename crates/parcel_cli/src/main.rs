//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `parcel_core` wiring end to end: config, logging, DB, repository.
//! - Keep output deterministic apart from the assigned parcel number.

use parcel_core::db::open_db;
use parcel_core::{init_logging, CoreConfig, ParcelService, SqliteParcelRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("parcel_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("parcel_core version={}", parcel_core::core_version());

    let config = CoreConfig::from_env();
    init_logging(&config.log_level, &config.log_dir)?;

    let conn = open_db(&config.db_path)?;
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn)?);

    let registered = service.register(0, "smoke test address")?;
    let stored = service.get(registered.number)?;
    println!(
        "parcel_core smoke number={} status={} db={}",
        stored.number,
        stored.status,
        config.db_path.display()
    );

    service.delete(stored.number)?;
    Ok(())
}
