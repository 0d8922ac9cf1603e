//! SQLite-backed identity store: resolves a (source_type, source_id) pair
//! to a stable player id, creating one on first sight.
//!
//! `rusqlite::Connection` is not `Send`-friendly across `.await` points, so
//! every call here runs on a blocking thread via `spawn_blocking`.

use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::common::error::{IdentityStoreError, IdentityStoreResult};

/// A resolved player record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub player_id: u32,
    pub user_state: u8,
    pub access_level: u8,
    pub name: String,
}

/// Handle to the identity store. Cheaply cloneable — the connection is
/// shared behind a mutex and every operation hops to a blocking thread.
#[derive(Clone)]
pub struct IdentityStore {
    conn: Arc<Mutex<Connection>>,
}

impl IdentityStore {
    /// Open (creating if needed) the SQLite database at `db_path` and
    /// ensure the schema exists.
    pub fn open(db_path: &str) -> IdentityStoreResult<Self> {
        let conn = Connection::open(db_path)?;
        init_schema(&conn)?;
        Ok(IdentityStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the player for `(source_type, source_id)`, creating one with a
    /// freshly hashed access token if this is the first time it's been
    /// seen. Runs on a blocking thread.
    pub async fn get_or_create(
        &self,
        source_type: &'static str,
        source_id: String,
        access_token_hex: String,
    ) -> IdentityStoreResult<Player> {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().expect("identity store mutex poisoned");
            get_or_create_user(&conn, source_type, &source_id, &access_token_hex)
        })
        .await
        .map_err(|e| IdentityStoreError::TaskFailed {
            message: e.to_string(),
        })?
    }

    /// Every known player id, used to seed the chat card's star-players
    /// roster. Falls back to an empty list on any error — callers apply
    /// their own default.
    pub async fn all_player_ids(&self) -> IdentityStoreResult<Vec<u32>> {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().expect("identity store mutex poisoned");
            let mut stmt = conn.prepare("SELECT player_id FROM users ORDER BY player_id")?;
            let ids = stmt
                .query_map([], |row| row.get::<_, i64>(0))?
                .collect::<rusqlite::Result<Vec<i64>>>()?;
            Ok(ids.into_iter().map(|id| id as u32).collect())
        })
        .await
        .map_err(|e| IdentityStoreError::TaskFailed {
            message: e.to_string(),
        })?
    }

    /// Total registered user count, for the HTTP health/debug surface.
    pub async fn user_count(&self) -> IdentityStoreResult<u64> {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().expect("identity store mutex poisoned");
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
            Ok(count as u64)
        })
        .await
        .map_err(|e| IdentityStoreError::TaskFailed {
            message: e.to_string(),
        })?
    }
}

fn init_schema(conn: &Connection) -> IdentityStoreResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            player_id INTEGER PRIMARY KEY AUTOINCREMENT,
            source_type TEXT NOT NULL,
            source_id TEXT NOT NULL,
            access_token_hash TEXT,
            user_state INTEGER DEFAULT 1,
            access_level INTEGER DEFAULT 0,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            last_login TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            UNIQUE(source_type, source_id)
        );
        CREATE TABLE IF NOT EXISTS player_data (
            player_id INTEGER PRIMARY KEY,
            name TEXT DEFAULT 'Player',
            FOREIGN KEY (player_id) REFERENCES users (player_id)
        );
        CREATE INDEX IF NOT EXISTS idx_users_source ON users(source_type, source_id);
        CREATE INDEX IF NOT EXISTS idx_users_player_id ON users(player_id);",
    )?;
    info!("identity store schema ready");
    Ok(())
}

fn hash_token(access_token_hex: &str) -> String {
    if access_token_hex.is_empty() {
        return String::new();
    }
    let mut hasher = Sha256::new();
    hasher.update(access_token_hex.as_bytes());
    hex::encode(hasher.finalize())
}

fn get_or_create_user(
    conn: &Connection,
    source_type: &str,
    source_id: &str,
    access_token_hex: &str,
) -> IdentityStoreResult<Player> {
    let token_hash = hash_token(access_token_hex);

    let existing = conn
        .query_row(
            "SELECT u.player_id, u.user_state, u.access_level, pd.name
             FROM users u LEFT JOIN player_data pd ON u.player_id = pd.player_id
             WHERE u.source_type = ?1 AND u.source_id = ?2",
            params![source_type, source_id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, Option<String>>(3)?,
                ))
            },
        )
        .optional()?;

    if let Some((player_id, user_state, access_level, name)) = existing {
        conn.execute(
            "UPDATE users SET last_login = CURRENT_TIMESTAMP, access_token_hash = ?1 WHERE player_id = ?2",
            params![token_hash, player_id],
        )?;
        return Ok(Player {
            player_id: player_id as u32,
            user_state: user_state as u8,
            access_level: access_level as u8,
            name: name.unwrap_or_else(|| "Player".to_string()),
        });
    }

    conn.execute(
        "INSERT INTO users (source_type, source_id, access_token_hash, user_state, access_level)
         VALUES (?1, ?2, ?3, 1, 0)",
        params![source_type, source_id, token_hash],
    )?;
    let player_id = conn.last_insert_rowid();
    let name = format!("Player{player_id}");
    conn.execute(
        "INSERT INTO player_data (player_id, name) VALUES (?1, ?2)",
        params![player_id, name],
    )?;

    info!(player_id, source_type, source_id, "registered new player");
    Ok(Player {
        player_id: player_id as u32,
        user_state: 1,
        access_level: 0,
        name,
    })
}
