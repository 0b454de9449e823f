//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use marquee_core::{
    Artist, ArtistInput, ArtistStore, ArtistSummary, BookedArtist, BookedVenue, DirectoryError,
    RecordKind, Show, ShowInput, ShowListing, ShowStore, Venue, VenueInput, VenueStore,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool, Transaction};
use std::str::FromStr;
use std::sync::Arc;

type StoreResult<T> = marquee_core::Result<T>;

const SHOW_TIMES_BATCH: usize = 500;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        Self::from_pool(pool).await
    }

    /// Private in-memory database, used by tests.
    ///
    /// The pool holds exactly one connection that never expires, since every
    /// SQLite `:memory:` connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Invalid in-memory database URL")?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS venues (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                city VARCHAR(120) NOT NULL,
                state VARCHAR(120) NOT NULL,
                address VARCHAR(120),
                phone VARCHAR(120),
                image_link VARCHAR(500),
                facebook_link VARCHAR(120),
                website_link VARCHAR(120),
                genres TEXT NOT NULL DEFAULT '[]',
                seeking_talent BOOLEAN NOT NULL DEFAULT 0,
                seeking_description TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS artists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                city VARCHAR(120) NOT NULL,
                state VARCHAR(120) NOT NULL,
                phone VARCHAR(120) NOT NULL,
                genres TEXT NOT NULL DEFAULT '[]',
                image_link VARCHAR(500),
                facebook_link VARCHAR(120),
                website_link VARCHAR(120),
                seeking_venue BOOLEAN NOT NULL DEFAULT 0,
                seeking_description TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Shows go with either endpoint
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS shows (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(120),
                start_time DATETIME NOT NULL,
                artist_id INTEGER NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
                venue_id INTEGER NOT NULL REFERENCES venues(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue ON shows(venue_id)")
            .execute(pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist ON shows(artist_id)")
            .execute(pool)
            .await?;

        Ok(())
    }

    async fn begin(&self) -> StoreResult<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(store_error)
    }
}

/// Commit on success, roll back on failure.
///
/// The transaction is consumed either way, which returns its connection to
/// the pool on every exit path.
async fn finish<T>(tx: Transaction<'static, Sqlite>, outcome: StoreResult<T>) -> StoreResult<T> {
    match outcome {
        Ok(value) => {
            tx.commit().await.map_err(store_error)?;
            Ok(value)
        }
        Err(e) => {
            tracing::warn!("Rolling back transaction: {}", e);
            if let Err(rollback) = tx.rollback().await {
                tracing::error!("Rollback failed: {}", rollback);
            }
            Err(e)
        }
    }
}

/// Classify a sqlx failure for the query layer
fn store_error(e: sqlx::Error) -> DirectoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DirectoryError::Conflict(db_err.message().to_string());
        }
        if db_err.is_foreign_key_violation() {
            return DirectoryError::MissingReference(db_err.message().to_string());
        }
    }
    DirectoryError::Store(e.to_string())
}

/// LIKE pattern matching `term` anywhere, with wildcards in `term` taken literally
fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn encode_genres(genres: &[String]) -> StoreResult<String> {
    serde_json::to_string(genres).map_err(|e| DirectoryError::Store(e.to_string()))
}

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                             website_link, genres, seeking_talent, seeking_description";

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
                              website_link, seeking_venue, seeking_description";

const SHOW_LISTING_SELECT: &str = r#"
    SELECT s.id, s.name AS show_name, s.start_time,
           s.venue_id, v.name AS venue_name,
           s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link
    FROM shows s
    JOIN venues v ON v.id = s.venue_id
    JOIN artists a ON a.id = s.artist_id
"#;

#[async_trait]
impl VenueStore for Database {
    async fn create_venue(&self, input: &VenueInput) -> StoreResult<i64> {
        let genres = encode_genres(&input.genres)?;
        let mut tx = self.begin().await?;

        let outcome = sqlx::query(
            r#"
            INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link,
                                website_link, genres, seeking_talent, seeking_description)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(genres)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .execute(&mut *tx)
        .await
        .map(|done| done.last_insert_rowid())
        .map_err(store_error);

        finish(tx, outcome).await
    }

    async fn update_venue(&self, id: i64, input: &VenueInput) -> StoreResult<()> {
        let genres = encode_genres(&input.genres)?;
        let mut tx = self.begin().await?;

        let outcome = sqlx::query(
            r#"
            UPDATE venues
            SET name = ?1, city = ?2, state = ?3, address = ?4, phone = ?5, image_link = ?6,
                facebook_link = ?7, website_link = ?8, genres = ?9, seeking_talent = ?10,
                seeking_description = ?11
            WHERE id = ?12
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(genres)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(store_error)
        .and_then(|done| match done.rows_affected() {
            0 => Err(DirectoryError::not_found(RecordKind::Venue, id)),
            _ => Ok(()),
        });

        finish(tx, outcome).await
    }

    async fn delete_venue(&self, id: i64) -> StoreResult<Venue> {
        let mut tx = self.begin().await?;

        let outcome = async {
            let row: Option<VenueRow> =
                sqlx::query_as(&format!("SELECT {} FROM venues WHERE id = ?1", VENUE_COLUMNS))
                    .bind(id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(store_error)?;
            let venue = row
                .ok_or_else(|| DirectoryError::not_found(RecordKind::Venue, id))?
                .into_venue()?;

            sqlx::query("DELETE FROM venues WHERE id = ?1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(store_error)?;

            Ok::<_, DirectoryError>(venue)
        }
        .await;

        finish(tx, outcome).await
    }

    async fn get_venue(&self, id: i64) -> StoreResult<Option<Venue>> {
        let row: Option<VenueRow> =
            sqlx::query_as(&format!("SELECT {} FROM venues WHERE id = ?1", VENUE_COLUMNS))
                .bind(id)
                .fetch_optional(&*self.pool)
                .await
                .map_err(store_error)?;

        row.map(VenueRow::into_venue).transpose()
    }

    async fn list_venues(&self) -> StoreResult<Vec<Venue>> {
        let rows: Vec<VenueRow> =
            sqlx::query_as(&format!("SELECT {} FROM venues ORDER BY id", VENUE_COLUMNS))
                .fetch_all(&*self.pool)
                .await
                .map_err(store_error)?;

        rows.into_iter().map(VenueRow::into_venue).collect()
    }

    async fn recent_venues(&self, limit: i64) -> StoreResult<Vec<Venue>> {
        let rows: Vec<VenueRow> = sqlx::query_as(&format!(
            "SELECT {} FROM venues ORDER BY id DESC LIMIT ?1",
            VENUE_COLUMNS
        ))
        .bind(limit)
        .fetch_all(&*self.pool)
        .await
        .map_err(store_error)?;

        rows.into_iter().map(VenueRow::into_venue).collect()
    }

    async fn search_venues(&self, term: &str) -> StoreResult<Vec<Venue>> {
        let rows: Vec<VenueRow> = sqlx::query_as(&format!(
            r#"SELECT {} FROM venues WHERE name LIKE ?1 ESCAPE '\' ORDER BY id"#,
            VENUE_COLUMNS
        ))
        .bind(contains_pattern(term))
        .fetch_all(&*self.pool)
        .await
        .map_err(store_error)?;

        rows.into_iter().map(VenueRow::into_venue).collect()
    }

    async fn count_venues(&self) -> StoreResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(&*self.pool)
            .await
            .map_err(store_error)
    }
}

#[async_trait]
impl ArtistStore for Database {
    async fn create_artist(&self, input: &ArtistInput) -> StoreResult<i64> {
        let genres = encode_genres(&input.genres)?;
        let mut tx = self.begin().await?;

        let outcome = sqlx::query(
            r#"
            INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link,
                                 website_link, seeking_venue, seeking_description)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(genres)
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .execute(&mut *tx)
        .await
        .map(|done| done.last_insert_rowid())
        .map_err(store_error);

        finish(tx, outcome).await
    }

    async fn update_artist(&self, id: i64, input: &ArtistInput) -> StoreResult<()> {
        let genres = encode_genres(&input.genres)?;
        let mut tx = self.begin().await?;

        let outcome = sqlx::query(
            r#"
            UPDATE artists
            SET name = ?1, city = ?2, state = ?3, phone = ?4, genres = ?5, image_link = ?6,
                facebook_link = ?7, website_link = ?8, seeking_venue = ?9,
                seeking_description = ?10
            WHERE id = ?11
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(genres)
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(store_error)
        .and_then(|done| match done.rows_affected() {
            0 => Err(DirectoryError::not_found(RecordKind::Artist, id)),
            _ => Ok(()),
        });

        finish(tx, outcome).await
    }

    async fn delete_artist(&self, id: i64) -> StoreResult<Artist> {
        let mut tx = self.begin().await?;

        let outcome = async {
            let row: Option<ArtistRow> =
                sqlx::query_as(&format!("SELECT {} FROM artists WHERE id = ?1", ARTIST_COLUMNS))
                    .bind(id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(store_error)?;
            let artist = row
                .ok_or_else(|| DirectoryError::not_found(RecordKind::Artist, id))?
                .into_artist()?;

            sqlx::query("DELETE FROM artists WHERE id = ?1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(store_error)?;

            Ok::<_, DirectoryError>(artist)
        }
        .await;

        finish(tx, outcome).await
    }

    async fn get_artist(&self, id: i64) -> StoreResult<Option<Artist>> {
        let row: Option<ArtistRow> =
            sqlx::query_as(&format!("SELECT {} FROM artists WHERE id = ?1", ARTIST_COLUMNS))
                .bind(id)
                .fetch_optional(&*self.pool)
                .await
                .map_err(store_error)?;

        row.map(ArtistRow::into_artist).transpose()
    }

    async fn list_artist_summaries(&self) -> StoreResult<Vec<ArtistSummary>> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM artists ORDER BY name, id")
            .fetch_all(&*self.pool)
            .await
            .map_err(store_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| ArtistSummary { id, name })
            .collect())
    }

    async fn recent_artists(&self, limit: i64) -> StoreResult<Vec<Artist>> {
        let rows: Vec<ArtistRow> = sqlx::query_as(&format!(
            "SELECT {} FROM artists ORDER BY id DESC LIMIT ?1",
            ARTIST_COLUMNS
        ))
        .bind(limit)
        .fetch_all(&*self.pool)
        .await
        .map_err(store_error)?;

        rows.into_iter().map(ArtistRow::into_artist).collect()
    }

    async fn search_artists(&self, term: &str) -> StoreResult<Vec<Artist>> {
        let rows: Vec<ArtistRow> = sqlx::query_as(&format!(
            r#"SELECT {} FROM artists WHERE name LIKE ?1 ESCAPE '\' ORDER BY id"#,
            ARTIST_COLUMNS
        ))
        .bind(contains_pattern(term))
        .fetch_all(&*self.pool)
        .await
        .map_err(store_error)?;

        rows.into_iter().map(ArtistRow::into_artist).collect()
    }

    async fn count_artists(&self) -> StoreResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM artists")
            .fetch_one(&*self.pool)
            .await
            .map_err(store_error)
    }
}

#[async_trait]
impl ShowStore for Database {
    async fn create_show(&self, input: &ShowInput) -> StoreResult<i64> {
        let mut tx = self.begin().await?;

        let outcome = sqlx::query(
            r#"
            INSERT INTO shows (name, start_time, artist_id, venue_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&input.name)
        .bind(input.start_time)
        .bind(input.artist_id)
        .bind(input.venue_id)
        .execute(&mut *tx)
        .await
        .map(|done| done.last_insert_rowid())
        .map_err(store_error);

        finish(tx, outcome).await
    }

    async fn update_show(&self, id: i64, input: &ShowInput) -> StoreResult<()> {
        let mut tx = self.begin().await?;

        let outcome = sqlx::query(
            r#"
            UPDATE shows SET name = ?1, start_time = ?2, artist_id = ?3, venue_id = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&input.name)
        .bind(input.start_time)
        .bind(input.artist_id)
        .bind(input.venue_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(store_error)
        .and_then(|done| match done.rows_affected() {
            0 => Err(DirectoryError::not_found(RecordKind::Show, id)),
            _ => Ok(()),
        });

        finish(tx, outcome).await
    }

    async fn delete_show(&self, id: i64) -> StoreResult<Show> {
        let mut tx = self.begin().await?;

        let outcome = async {
            let row: Option<ShowRow> = sqlx::query_as(
                "SELECT id, name, start_time, artist_id, venue_id FROM shows WHERE id = ?1",
            )
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(store_error)?;
            let show: Show = row
                .ok_or_else(|| DirectoryError::not_found(RecordKind::Show, id))?
                .into();

            sqlx::query("DELETE FROM shows WHERE id = ?1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(store_error)?;

            Ok::<_, DirectoryError>(show)
        }
        .await;

        finish(tx, outcome).await
    }

    async fn get_show(&self, id: i64) -> StoreResult<Option<Show>> {
        let row: Option<ShowRow> = sqlx::query_as(
            "SELECT id, name, start_time, artist_id, venue_id FROM shows WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_shows(&self) -> StoreResult<Vec<ShowListing>> {
        let rows: Vec<ShowListingRow> =
            sqlx::query_as(&format!("{} ORDER BY s.start_time, s.id", SHOW_LISTING_SELECT))
                .fetch_all(&*self.pool)
                .await
                .map_err(store_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn recent_shows(&self, limit: i64) -> StoreResult<Vec<ShowListing>> {
        let rows: Vec<ShowListingRow> =
            sqlx::query_as(&format!("{} ORDER BY s.id DESC LIMIT ?1", SHOW_LISTING_SELECT))
                .bind(limit)
                .fetch_all(&*self.pool)
                .await
                .map_err(store_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn search_shows(&self, term: &str) -> StoreResult<Vec<ShowListing>> {
        let rows: Vec<ShowListingRow> = sqlx::query_as(&format!(
            r#"{}
            WHERE s.name LIKE ?1 ESCAPE '\'
               OR a.name LIKE ?1 ESCAPE '\'
               OR v.name LIKE ?1 ESCAPE '\'
            ORDER BY s.start_time, s.id"#,
            SHOW_LISTING_SELECT
        ))
        .bind(contains_pattern(term))
        .fetch_all(&*self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn shows_at_venue(&self, venue_id: i64) -> StoreResult<Vec<BookedArtist>> {
        let rows: Vec<BookedArtistRow> = sqlx::query_as(
            r#"
            SELECT s.id AS show_id, s.name AS show_name, s.artist_id,
                   a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = ?1
            ORDER BY s.start_time, s.id
            "#,
        )
        .bind(venue_id)
        .fetch_all(&*self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn shows_by_artist(&self, artist_id: i64) -> StoreResult<Vec<BookedVenue>> {
        let rows: Vec<BookedVenueRow> = sqlx::query_as(
            r#"
            SELECT s.id AS show_id, s.name AS show_name, s.venue_id,
                   v.name AS venue_name, v.image_link AS venue_image_link, s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = ?1
            ORDER BY s.start_time, s.id
            "#,
        )
        .bind(artist_id)
        .fetch_all(&*self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn venue_show_times(&self, venue_ids: &[i64]) -> StoreResult<Vec<(i64, NaiveDateTime)>> {
        self.show_times("venue_id", venue_ids).await
    }

    async fn artist_show_times(&self, artist_ids: &[i64]) -> StoreResult<Vec<(i64, NaiveDateTime)>> {
        self.show_times("artist_id", artist_ids).await
    }

    async fn count_shows(&self) -> StoreResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM shows")
            .fetch_one(&*self.pool)
            .await
            .map_err(store_error)
    }
}

impl Database {
    /// (owner id, start time) pairs; `owner_column` is a fixed column name
    ///
    /// Ids are bound in batches of `SHOW_TIMES_BATCH` to stay under SQLite's
    /// host parameter limit.
    async fn show_times(
        &self,
        owner_column: &'static str,
        owner_ids: &[i64],
    ) -> StoreResult<Vec<(i64, NaiveDateTime)>> {
        let mut times = Vec::new();

        for batch in owner_ids.chunks(SHOW_TIMES_BATCH) {
            let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
                "SELECT {}, start_time FROM shows WHERE {} IN (",
                owner_column, owner_column
            ));
            let mut ids = query.separated(", ");
            for id in batch {
                ids.push_bind(*id);
            }
            ids.push_unseparated(")");

            let rows = query
                .build_query_as::<(i64, NaiveDateTime)>()
                .fetch_all(&*self.pool)
                .await
                .map_err(store_error)?;
            times.extend(rows);
        }

        Ok(times)
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct VenueRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    address: Option<String>,
    phone: Option<String>,
    image_link: Option<String>,
    facebook_link: Option<String>,
    website_link: Option<String>,
    genres: String,
    seeking_talent: bool,
    seeking_description: Option<String>,
}

impl VenueRow {
    fn into_venue(self) -> StoreResult<Venue> {
        Ok(Venue {
            id: self.id,
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website_link: self.website_link,
            genres: decode_genres(&self.genres)?,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ArtistRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    phone: String,
    genres: String,
    image_link: Option<String>,
    facebook_link: Option<String>,
    website_link: Option<String>,
    seeking_venue: bool,
    seeking_description: Option<String>,
}

impl ArtistRow {
    fn into_artist(self) -> StoreResult<Artist> {
        Ok(Artist {
            id: self.id,
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: decode_genres(&self.genres)?,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website_link: self.website_link,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
        })
    }
}

fn decode_genres(raw: &str) -> StoreResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|e| DirectoryError::Store(format!("Corrupt genres column: {}", e)))
}

#[derive(sqlx::FromRow)]
struct ShowRow {
    id: i64,
    name: Option<String>,
    start_time: NaiveDateTime,
    artist_id: i64,
    venue_id: i64,
}

impl From<ShowRow> for Show {
    fn from(r: ShowRow) -> Self {
        Show {
            id: r.id,
            name: r.name,
            start_time: r.start_time,
            artist_id: r.artist_id,
            venue_id: r.venue_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ShowListingRow {
    id: i64,
    show_name: Option<String>,
    start_time: NaiveDateTime,
    venue_id: i64,
    venue_name: String,
    artist_id: i64,
    artist_name: String,
    artist_image_link: Option<String>,
}

impl From<ShowListingRow> for ShowListing {
    fn from(r: ShowListingRow) -> Self {
        ShowListing {
            id: r.id,
            show_name: r.show_name,
            start_time: r.start_time,
            venue_id: r.venue_id,
            venue_name: r.venue_name,
            artist_id: r.artist_id,
            artist_name: r.artist_name,
            artist_image_link: r.artist_image_link,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookedArtistRow {
    show_id: i64,
    show_name: Option<String>,
    artist_id: i64,
    artist_name: String,
    artist_image_link: Option<String>,
    start_time: NaiveDateTime,
}

impl From<BookedArtistRow> for BookedArtist {
    fn from(r: BookedArtistRow) -> Self {
        BookedArtist {
            show_id: r.show_id,
            show_name: r.show_name,
            artist_id: r.artist_id,
            artist_name: r.artist_name,
            artist_image_link: r.artist_image_link,
            start_time: r.start_time,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookedVenueRow {
    show_id: i64,
    show_name: Option<String>,
    venue_id: i64,
    venue_name: String,
    venue_image_link: Option<String>,
    start_time: NaiveDateTime,
}

impl From<BookedVenueRow> for BookedVenue {
    fn from(r: BookedVenueRow) -> Self {
        BookedVenue {
            show_id: r.show_id,
            show_name: r.show_name,
            venue_id: r.venue_id,
            venue_name: r.venue_name,
            venue_image_link: r.venue_image_link,
            start_time: r.start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn venue_input(name: &str, city: &str, state: &str) -> VenueInput {
        VenueInput {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            genres: vec!["Jazz".to_string(), "Blues".to_string()],
            ..Default::default()
        }
    }

    fn artist_input(name: &str) -> ArtistInput {
        ArtistInput {
            name: name.to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            phone: "555-0100".to_string(),
            ..Default::default()
        }
    }

    fn show_input(artist_id: i64, venue_id: i64, day: u32) -> ShowInput {
        ShowInput {
            name: None,
            start_time: NaiveDate::from_ymd_opt(2030, 5, day)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
            artist_id,
            venue_id,
        }
    }

    #[tokio::test]
    async fn test_venue_roundtrip_keeps_genre_order() {
        let db = Database::in_memory().await.unwrap();
        let id = db.create_venue(&venue_input("Blue Note", "New York", "NY")).await.unwrap();

        let venue = db.get_venue(id).await.unwrap().expect("venue exists");
        assert_eq!(venue.name, "Blue Note");
        assert_eq!(venue.genres, vec!["Jazz", "Blues"]);
        assert!(!venue.seeking_talent);
        assert_eq!(venue.seeking_description, None);
    }

    #[tokio::test]
    async fn test_update_rewrites_every_field() {
        let db = Database::in_memory().await.unwrap();
        let id = db.create_venue(&venue_input("Old", "Austin", "TX")).await.unwrap();

        let mut input = venue_input("New", "Dallas", "TX");
        input.genres = vec![];
        input.seeking_talent = true;
        input.website_link = Some("https://new.example.com".to_string());
        db.update_venue(id, &input).await.unwrap();

        let venue = db.get_venue(id).await.unwrap().unwrap();
        assert_eq!(venue.to_input(), input);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let db = Database::in_memory().await.unwrap();
        let err = db
            .update_venue(99, &venue_input("Ghost", "Austin", "TX"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = db.update_artist(99, &artist_input("Ghost")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_duplicate_artist_name_is_conflict() {
        let db = Database::in_memory().await.unwrap();
        db.create_artist(&artist_input("Alice")).await.unwrap();

        let err = db.create_artist(&artist_input("Alice")).await.unwrap_err();
        assert!(matches!(err, DirectoryError::Conflict(_)), "got {:?}", err);
        assert_eq!(db.count_artists().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_show_with_unknown_artist_is_rejected() {
        let db = Database::in_memory().await.unwrap();
        let venue_id = db.create_venue(&venue_input("Hall", "Austin", "TX")).await.unwrap();

        let err = db.create_show(&show_input(404, venue_id, 1)).await.unwrap_err();
        assert!(matches!(err, DirectoryError::MissingReference(_)), "got {:?}", err);
        assert_eq!(db.count_shows().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_venue_cascades_to_its_shows_only() {
        let db = Database::in_memory().await.unwrap();
        let artist = db.create_artist(&artist_input("Alice")).await.unwrap();
        let doomed = db.create_venue(&venue_input("Doomed", "Austin", "TX")).await.unwrap();
        let kept = db.create_venue(&venue_input("Kept", "Austin", "TX")).await.unwrap();
        db.create_show(&show_input(artist, doomed, 1)).await.unwrap();
        db.create_show(&show_input(artist, doomed, 2)).await.unwrap();
        let survivor = db.create_show(&show_input(artist, kept, 3)).await.unwrap();

        let removed = db.delete_venue(doomed).await.unwrap();
        assert_eq!(removed.name, "Doomed");

        assert_eq!(db.count_venues().await.unwrap(), 1);
        assert_eq!(db.count_artists().await.unwrap(), 1);
        assert_eq!(db.count_shows().await.unwrap(), 1);
        assert!(db.get_show(survivor).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_artist_cascades_to_its_shows() {
        let db = Database::in_memory().await.unwrap();
        let alice = db.create_artist(&artist_input("Alice")).await.unwrap();
        let bob = db.create_artist(&artist_input("Bob")).await.unwrap();
        let venue = db.create_venue(&venue_input("Hall", "Austin", "TX")).await.unwrap();
        db.create_show(&show_input(alice, venue, 1)).await.unwrap();
        db.create_show(&show_input(bob, venue, 2)).await.unwrap();

        db.delete_artist(alice).await.unwrap();

        assert_eq!(db.count_shows().await.unwrap(), 1);
        assert!(db.delete_artist(alice).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let db = Database::in_memory().await.unwrap();
        db.create_venue(&venue_input("Blue Note", "New York", "NY")).await.unwrap();
        db.create_venue(&venue_input("Red Rocks", "Morrison", "CO")).await.unwrap();

        for term in ["blue", "BLUE", "Note", "e n"] {
            let hits = db.search_venues(term).await.unwrap();
            assert_eq!(hits.len(), 1, "term {:?}", term);
            assert_eq!(hits[0].name, "Blue Note");
        }
        assert_eq!(db.search_venues("").await.unwrap().len(), 2);
        assert!(db.search_venues("jazz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_wildcards_are_literal() {
        let db = Database::in_memory().await.unwrap();
        db.create_artist(&artist_input("100% Funk")).await.unwrap();
        db.create_artist(&artist_input("Quiet_Riot")).await.unwrap();
        db.create_artist(&artist_input("Plain")).await.unwrap();

        assert_eq!(db.search_artists("%").await.unwrap().len(), 1);
        assert_eq!(db.search_artists("_").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_show_search_matches_any_name() {
        let db = Database::in_memory().await.unwrap();
        let artist = db.create_artist(&artist_input("Guns N Petals")).await.unwrap();
        let venue = db.create_venue(&venue_input("The Musical Hop", "San Francisco", "CA")).await.unwrap();
        let mut named = show_input(artist, venue, 4);
        named.name = Some("Spring Fling".to_string());
        db.create_show(&named).await.unwrap();

        assert_eq!(db.search_shows("fling").await.unwrap().len(), 1);
        assert_eq!(db.search_shows("petals").await.unwrap().len(), 1);
        assert_eq!(db.search_shows("musical").await.unwrap().len(), 1);
        assert!(db.search_shows("nowhere").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_joined_projections() {
        let db = Database::in_memory().await.unwrap();
        let mut artist = artist_input("Alice");
        artist.image_link = Some("https://img.example.com/alice.png".to_string());
        let artist_id = db.create_artist(&artist).await.unwrap();
        let venue_id = db.create_venue(&venue_input("Hall", "Austin", "TX")).await.unwrap();
        let show_id = db.create_show(&show_input(artist_id, venue_id, 9)).await.unwrap();

        let listing = db.list_shows().await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, show_id);
        assert_eq!(listing[0].venue_name, "Hall");
        assert_eq!(listing[0].artist_name, "Alice");
        assert_eq!(listing[0].artist_image_link, artist.image_link);

        let at_venue = db.shows_at_venue(venue_id).await.unwrap();
        assert_eq!(at_venue[0].artist_name, "Alice");
        let by_artist = db.shows_by_artist(artist_id).await.unwrap();
        assert_eq!(by_artist[0].venue_name, "Hall");

        let times = db.venue_show_times(&[venue_id, 77]).await.unwrap();
        assert_eq!(times, vec![(venue_id, show_input(artist_id, venue_id, 9).start_time)]);
        assert!(db.artist_show_times(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_show_times_with_many_ids() {
        let db = Database::in_memory().await.unwrap();
        let artist_id = db.create_artist(&artist_input("Alice")).await.unwrap();
        let venue_id = db.create_venue(&venue_input("Hall", "Austin", "TX")).await.unwrap();
        db.create_show(&show_input(artist_id, venue_id, 9)).await.unwrap();

        let mut ids: Vec<i64> = (1_000..41_000).collect();
        ids.push(venue_id);
        let times = db.venue_show_times(&ids).await.unwrap();
        assert_eq!(times.len(), 1);
        assert_eq!(times[0].0, venue_id);
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let db = Database::in_memory().await.unwrap();
        for name in ["A", "B", "C"] {
            db.create_artist(&artist_input(name)).await.unwrap();
        }
        let recent: Vec<String> = db
            .recent_artists(2)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(recent, vec!["C", "B"]);

        let index: Vec<String> = db
            .list_artist_summaries()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(index, vec!["A", "B", "C"]);
    }
}
