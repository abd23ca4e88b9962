//! Parcel repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map `Parcel` values to rows of the `parcel` table and back.
//! - Enforce the registered-only policy for address changes and deletion.
//!
//! # Invariants
//! - Every operation runs exactly one SQL statement.
//! - The registered guard is part of the mutating statement's `WHERE` clause.
//! - Mutations that match zero rows report success, including `set_status`
//!   on an unknown number.
//! - Point lookups distinguish `NotFound` from store failures.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::parcel::{ClientId, Parcel, ParcelNumber, STATUS_REGISTERED};
use log::debug;
use rusqlite::{named_params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PARCEL_TABLE: &str = "parcel";
const PARCEL_COLUMNS: &[&str] = &["number", "client", "status", "address", "created_at"];

const PARCEL_SELECT_SQL: &str = "SELECT
    number,
    client,
    status,
    address,
    created_at
FROM parcel";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for parcel persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ParcelNumber),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(number) => write!(f, "parcel not found: {number}"),
            Self::InvalidData(message) => write!(f, "invalid persisted parcel data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it via db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_)
            | Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl RepoError {
    /// Returns whether this error is a point-lookup miss rather than a store failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Repository interface for parcel operations.
pub trait ParcelRepository {
    /// Inserts a parcel and returns the store-assigned number.
    ///
    /// `parcel.number` is ignored.
    fn create_parcel(&self, parcel: &Parcel) -> RepoResult<ParcelNumber>;
    /// Reads one parcel by number.
    fn get_parcel(&self, number: ParcelNumber) -> RepoResult<Parcel>;
    /// Lists all parcels of one client in unspecified order.
    fn list_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>>;
    /// Overwrites the status unconditionally.
    fn set_status(&self, number: ParcelNumber, status: &str) -> RepoResult<()>;
    /// Overwrites the address while the parcel is registered; no-op otherwise.
    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()>;
    /// Deletes the parcel while it is registered; no-op otherwise.
    fn delete_parcel(&self, number: ParcelNumber) -> RepoResult<()>;
}

/// SQLite-backed parcel repository.
pub struct SqliteParcelRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteParcelRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the schema drifted.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ParcelRepository for SqliteParcelRepository<'_> {
    fn create_parcel(&self, parcel: &Parcel) -> RepoResult<ParcelNumber> {
        self.conn.execute(
            "INSERT INTO parcel (client, status, address, created_at)
             VALUES (:client, :status, :address, :created_at);",
            named_params! {
                ":client": parcel.client,
                ":status": parcel.status.as_str(),
                ":address": parcel.address.as_str(),
                ":created_at": parcel.created_at.as_str(),
            },
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_parcel(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE number = :number;"))?;

        let mut rows = stmt.query(named_params! { ":number": number })?;
        if let Some(row) = rows.next()? {
            return parse_parcel_row(row);
        }

        Err(RepoError::NotFound(number))
    }

    fn list_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE client = :client;"))?;

        let mut rows = stmt.query(named_params! { ":client": client })?;
        let mut parcels = Vec::new();
        while let Some(row) = rows.next()? {
            parcels.push(parse_parcel_row(row)?);
        }

        Ok(parcels)
    }

    fn set_status(&self, number: ParcelNumber, status: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE parcel
             SET status = :status
             WHERE number = :number;",
            named_params! { ":status": status, ":number": number },
        )?;

        log_noop("parcel_set_status", number, changed);
        Ok(())
    }

    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE parcel
             SET address = :address
             WHERE number = :number
               AND status = :registered;",
            named_params! {
                ":address": address,
                ":number": number,
                ":registered": STATUS_REGISTERED,
            },
        )?;

        log_noop("parcel_set_address", number, changed);
        Ok(())
    }

    fn delete_parcel(&self, number: ParcelNumber) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM parcel
             WHERE number = :number
               AND status = :registered;",
            named_params! { ":number": number, ":registered": STATUS_REGISTERED },
        )?;

        log_noop("parcel_delete", number, changed);
        Ok(())
    }
}

// Zero affected rows is reported as success; keep a trace of it for diagnostics.
fn log_noop(event: &str, number: ParcelNumber, changed: usize) {
    if changed == 0 {
        debug!("event={event} module=repo status=noop number={number}");
    }
}

fn parse_parcel_row(row: &Row<'_>) -> RepoResult<Parcel> {
    let number: ParcelNumber = row.get("number")?;
    if number <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid number value `{number}` in parcel.number"
        )));
    }

    Ok(Parcel {
        number,
        client: row.get("client")?,
        status: row.get("status")?,
        address: row.get("address")?,
        created_at: row.get("created_at")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [PARCEL_TABLE],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(RepoError::MissingRequiredTable(PARCEL_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let columns = stmt
        .query_map([PARCEL_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    for &column in PARCEL_COLUMNS {
        if !columns.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: PARCEL_TABLE,
                column,
            });
        }
    }

    Ok(())
}
