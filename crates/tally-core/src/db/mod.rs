//! Database access layer with connection pooling and schema bootstrap
//!
//! This module is organized by domain:
//! - `transactions` - Transaction CRUD and atomic bulk insert
//! - `reports` - Monthly and per-category aggregate summaries

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::Result;
use crate::models::TransactionType;

mod reports;
mod transactions;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Parse a stored type column into the closed enum
///
/// The column is TEXT with no CHECK constraint; rows written through this
/// crate always hold "income" or "expense", so anything else is surfaced
/// as a conversion failure rather than silently coerced.
pub(crate) fn parse_kind(column: usize, s: &str) -> rusqlite::Result<TransactionType> {
    s.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Text,
            format!("unknown transaction type: {}", s).into(),
        )
    })
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// Opens (or creates) the database file and runs schema bootstrap.
    /// Bootstrap runs once here, before any request is served; a failure
    /// is fatal to the caller.
    pub fn new(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Uses a temporary file rather than `:memory:` because the pool hands
    /// out multiple connections and each `:memory:` connection would see
    /// its own empty database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = format!(
            "{}/tally_test_{}_{}.db",
            std::env::temp_dir().display(),
            std::process::id(),
            id
        );

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::new(&path)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- WAL mode: readers don't block the writer
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: safe for most power-loss scenarios
            PRAGMA synchronous = NORMAL;

            -- Store temp tables in memory
            PRAGMA temp_store = MEMORY;

            -- Transactions (the only persisted entity)
            CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date DATE NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT,
                type TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
            "#,
        )?;

        info!("Database schema initialized");
        Ok(())
    }
}
