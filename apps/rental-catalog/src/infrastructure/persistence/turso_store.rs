//! Turso-backed catalog store.
//!
//! Durable listing storage in a single SQLite-compatible table. Access to the
//! connection is serialized, so each insert and its `last_insert_rowid()`
//! lookup run back to back and concurrent creates never share an id.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing::{debug, info};
use turso::{Builder, Connection, Database, Row, Value};

use crate::domain::listing::{
    CatalogError, CatalogStore, ListingId, NewListing, Price, PropertyListing,
};

/// Path that opens a throwaway in-memory database.
pub const IN_MEMORY_PATH: &str = ":memory:";

const CREATE_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS property_listings (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        price TEXT NOT NULL,
        location TEXT NOT NULL
    )
";

const SELECT_ALL_SQL: &str = r"
    SELECT id, title, description, price, location
    FROM property_listings
    ORDER BY id
";

const INSERT_SQL: &str = r"
    INSERT INTO property_listings (title, description, price, location)
    VALUES (?1, ?2, ?3, ?4)
";

const LAST_ID_SQL: &str = "SELECT last_insert_rowid()";

/// `CatalogStore` persisted in a Turso database file.
pub struct TursoCatalogStore {
    // Keeps the database open for as long as the connection is used.
    _database: Database,
    conn: Mutex<Connection>,
}

impl TursoCatalogStore {
    /// Open (or create) the database at `path` and ensure the listings table exists.
    ///
    /// Missing parent directories are created. Pass [`IN_MEMORY_PATH`] for a
    /// database that lives only as long as the store.
    pub async fn open(path: &str) -> Result<Self, CatalogError> {
        if path != IN_MEMORY_PATH
            && let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(CatalogError::storage)?;
        }

        let database = Builder::new_local(path)
            .build()
            .await
            .map_err(CatalogError::storage)?;
        let conn = database.connect().map_err(CatalogError::storage)?;

        conn.execute(CREATE_TABLE_SQL, ())
            .await
            .map_err(CatalogError::storage)?;

        info!(path, "Catalog database opened");

        Ok(Self {
            _database: database,
            conn: Mutex::new(conn),
        })
    }

    /// Open a fresh in-memory database.
    pub async fn in_memory() -> Result<Self, CatalogError> {
        Self::open(IN_MEMORY_PATH).await
    }
}

#[async_trait]
impl CatalogStore for TursoCatalogStore {
    async fn list_all(&self) -> Result<Vec<PropertyListing>, CatalogError> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(SELECT_ALL_SQL, ())
            .await
            .map_err(CatalogError::storage)?;

        let mut listings = Vec::new();
        while let Some(row) = rows.next().await.map_err(CatalogError::storage)? {
            listings.push(listing_from_row(&row)?);
        }

        debug!(count = listings.len(), "Loaded listings from database");
        Ok(listings)
    }

    async fn insert(&self, listing: NewListing) -> Result<PropertyListing, CatalogError> {
        let conn = self.conn.lock().await;

        conn.execute(
            INSERT_SQL,
            [
                listing.title().to_string(),
                listing.description().to_string(),
                listing.price().amount().to_string(),
                listing.location().to_string(),
            ],
        )
        .await
        .map_err(CatalogError::storage)?;

        let mut rows = conn
            .query(LAST_ID_SQL, ())
            .await
            .map_err(CatalogError::storage)?;
        let Some(row) = rows.next().await.map_err(CatalogError::storage)? else {
            return Err(CatalogError::storage("insert did not report a row id"));
        };
        let id = ListingId::new(integer_column(&row, 0)?);

        debug!(listing_id = %id, "Inserted listing row");
        Ok(listing.into_listing(id))
    }
}

fn listing_from_row(row: &Row) -> Result<PropertyListing, CatalogError> {
    Ok(PropertyListing::restore(
        ListingId::new(integer_column(row, 0)?),
        text_column(row, 1)?,
        text_column(row, 2)?,
        price_column(row, 3)?,
        text_column(row, 4)?,
    ))
}

fn column(row: &Row, index: usize) -> Result<Value, CatalogError> {
    row.get_value(index).map_err(CatalogError::storage)
}

fn integer_column(row: &Row, index: usize) -> Result<i64, CatalogError> {
    match column(row, index)? {
        Value::Integer(value) => Ok(value),
        other => Err(CatalogError::storage(format!(
            "column {index}: expected integer, found {other:?}"
        ))),
    }
}

fn text_column(row: &Row, index: usize) -> Result<String, CatalogError> {
    match column(row, index)? {
        Value::Text(value) => Ok(value),
        other => Err(CatalogError::storage(format!(
            "column {index}: expected text, found {other:?}"
        ))),
    }
}

// Rows written by this store hold decimal text; numeric values are accepted
// for tables populated by other tools.
fn price_column(row: &Row, index: usize) -> Result<Price, CatalogError> {
    let amount = match column(row, index)? {
        Value::Text(text) => Decimal::from_str(text.trim()).map_err(CatalogError::storage)?,
        Value::Integer(value) => Decimal::from(value),
        Value::Real(value) => Decimal::try_from(value).map_err(CatalogError::storage)?,
        other => {
            return Err(CatalogError::storage(format!(
                "column {index}: expected price, found {other:?}"
            )));
        }
    };
    Price::new(amount).map_err(CatalogError::storage)
}
