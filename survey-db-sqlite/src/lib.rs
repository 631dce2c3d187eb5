#[macro_use]
extern crate diesel;

use anyhow::{anyhow, Result as Fallible};
use diesel::{
    connection::SimpleConnection as _,
    r2d2::{self, CustomizeConnection},
    sqlite::SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    cell::{RefCell, RefMut},
    sync::Arc,
    time::Duration,
};
use survey_core::{repositories as repo, usecases as uc};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Database URL of a transient database that only lives as long
/// as its connection.
pub const IN_MEMORY_URL: &str = ":memory:";

type Connection = SqliteConnection;

type ConnectionManager = r2d2::ConnectionManager<Connection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type SharedConnectionPool = Arc<RwLock<ConnectionPool>>;

/// Connection settings of the survey store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file or [`IN_MEMORY_URL`]
    pub url: String,
    pub pool_size: u32,
    /// Max. time to wait for a pooled connection or a locked database
    pub connection_timeout: Duration,
}

impl Config {
    pub fn in_memory() -> Self {
        Self {
            url: IN_MEMORY_URL.to_owned(),
            pool_size: 1,
            ..Default::default()
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url == IN_MEMORY_URL
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: "survey.sqlite".to_owned(),
            pool_size: 4,
            connection_timeout: Duration::from_secs(10),
        }
    }
}

pub struct DbReadOnly<'a> {
    _locked_pool: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadOnly<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Result<Self, repo::Error> {
        let locked_pool = pool.read();
        let conn = locked_pool.get().map_err(|err| {
            log::error!("Failed to obtain pooled database connection for read-only access: {err}");
            repo::Error::Unavailable(err.into())
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }
}

pub struct DbReadWrite<'a> {
    _locked_pool: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

impl<'a> DbReadWrite<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Result<Self, repo::Error> {
        let locked_pool = pool.write();
        let conn = locked_pool.get().map_err(|err| {
            log::error!("Failed to obtain pooled database connection for read/write access: {err}");
            repo::Error::Unavailable(err.into())
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }

    /// Run `f` within a transaction that is rolled back if `f` fails.
    pub fn transaction<T, F, E>(&self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let mut usecase_error = None;
        let mut pooled = self.sqlite_conn();
        let conn: &mut SqliteConnection = &mut pooled;
        // The use case error is stashed outside of the
        // transaction closure, because diesel only propagates
        // its own error type.
        conn.transaction(|conn| {
            f(&DbConnection::new(conn))
                .map_err(Into::into)
                .map_err(|err| {
                    usecase_error = Some(err);
                    diesel::result::Error::RollbackTransaction
                })
        })
        .map_err(|err| {
            if let Some(usecase_error) = usecase_error {
                debug_assert!(matches!(err, diesel::result::Error::RollbackTransaction));
                usecase_error
            } else {
                uc::Error::Repo(repo_impl::from_diesel_err(err))
            }
        })
    }

    fn sqlite_conn(&self) -> RefMut<PooledConnection> {
        self.conn.borrow_mut()
    }
}

#[derive(Clone)]
pub struct Connections {
    // Only a single connection with write access will be
    // handed out at a time from the pool. Multiple read
    // connections can be accessed concurrently. This locking
    // pattern around the connection pool prevents SQLITE_LOCKED
    // ("database is locked") errors.
    pool: SharedConnectionPool,
}

#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<Connection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Configure the database engine
///
/// Some values like the text encoding can only be changed once after the
/// database has initially been created.
pub fn initialize_database(connection: &mut SqliteConnection) -> Fallible<()> {
    connection.batch_execute(
        r#"
PRAGMA journal_mode = WAL;        -- better write-concurrency
PRAGMA synchronous = NORMAL;      -- fsync only in critical moments, safe for journal_mode = WAL
PRAGMA wal_autocheckpoint = 1000; -- write WAL changes back every 1000 pages (default), for an in average 1MB WAL file
PRAGMA wal_checkpoint(TRUNCATE);  -- free some space by truncating possibly massive WAL files from the last run
PRAGMA secure_delete = 0;         -- avoid some disk I/O
PRAGMA encoding = 'UTF-8';
"#,
    )?;
    Ok(())
}

/// Create the table of survey responses unless it already exists.
///
/// Safe to invoke repeatedly: Only pending migrations are applied.
pub fn ensure_schema(connection: &mut SqliteConnection) -> Fallible<()> {
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to run embedded database migrations: {err}"))?;
    for version in applied {
        log::info!("Applied database migration {version}");
    }
    Ok(())
}

fn sqlite_version(connection: &mut SqliteConnection) -> Fallible<String> {
    use diesel::{dsl::sql, sql_types::Text, RunQueryDsl as _};
    Ok(diesel::select(sql::<Text>("sqlite_version()")).get_result(connection)?)
}

impl Connections {
    /// Open the survey store and ensure that its schema exists.
    pub fn init(config: &Config) -> Fallible<Self> {
        let Config {
            url,
            pool_size,
            connection_timeout,
        } = config;
        // Establish a test connection before creating the connection pool to fail early.
        // If the given file is inaccessible r2d2 would do multiple retries
        // and log errors instead of simply failing and returning an error immediately.
        use diesel::Connection as _;
        let mut test_conn = SqliteConnection::establish(url)?;
        log::info!(
            "Connected to SQLite {} database '{url}'",
            sqlite_version(&mut test_conn)?
        );
        drop(test_conn);
        let pool_size = if config.is_in_memory() && *pool_size > 1 {
            // Each connection would open its own, empty database
            log::warn!("Reducing the connection pool size from {pool_size} to 1 for an in-memory database");
            1
        } else {
            *pool_size
        };
        let manager = ConnectionManager::new(url.as_str());
        let mut builder = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_timeout(*connection_timeout)
            .connection_customizer(Box::new(ConnectionOptions {
                busy_timeout: *connection_timeout,
            }));
        if config.is_in_memory() {
            // Closing the only connection would discard all data
            builder = builder.idle_timeout(None).max_lifetime(None);
        }
        let pool = builder.build(manager)?;
        {
            let mut conn = pool.get()?;
            initialize_database(&mut conn)?;
            ensure_schema(&mut conn)?;
        }
        Ok(Self::new(pool))
    }

    fn new(pool: ConnectionPool) -> Self {
        Self {
            pool: Arc::new(RwLock::new(pool)),
        }
    }

    pub fn shared(&self) -> Result<DbReadOnly, repo::Error> {
        DbReadOnly::try_new(&self.pool)
    }

    pub fn exclusive(&self) -> Result<DbReadWrite, repo::Error> {
        DbReadWrite::try_new(&self.pool)
    }

    /// Re-run the schema check on an already initialized store.
    pub fn ensure_schema(&self) -> Fallible<()> {
        let db = self.exclusive()?;
        let mut conn = db.sqlite_conn();
        ensure_schema(&mut conn)
    }
}
