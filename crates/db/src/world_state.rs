//! [`WorldState`] backed by the `world_state` table.
//!
//! Range scans stream rows from an open query; the row stream holds a pooled
//! connection until the cursor is closed or dropped.

use artcert_core::world_state::{StateEntry, StateIterator, StoreError, WorldState};
use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use sqlx::PgPool;

/// Half-open range scan. Empty bounds are open; keys compare bytewise.
const RANGE_QUERY: &str = "\
    SELECT key, value FROM world_state \
    WHERE ($1 = '' OR key COLLATE \"C\" >= $1) \
      AND ($2 = '' OR key COLLATE \"C\" < $2) \
    ORDER BY key COLLATE \"C\"";

type RowStream<'a> = BoxStream<'a, Result<(String, Vec<u8>), sqlx::Error>>;

fn store_error(err: sqlx::Error) -> StoreError {
    StoreError::Source(Box::new(err))
}

/// World state persisted in PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgWorldState {
    pool: PgPool,
}

impl PgWorldState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorldState for PgWorldState {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        sqlx::query_scalar::<_, Vec<u8>>("SELECT value FROM world_state WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO world_state (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(store_error)?;
        Ok(())
    }

    async fn del_state(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM world_state WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn state_by_range<'a>(
        &'a self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateIterator + 'a>, StoreError> {
        let rows = sqlx::query_as::<_, (String, Vec<u8>)>(RANGE_QUERY)
            .bind(start_key.to_owned())
            .bind(end_key.to_owned())
            .fetch(&self.pool);

        tracing::debug!(start_key, end_key, "Opened world state range cursor");
        Ok(Box::new(PgStateIterator { rows: Some(rows) }))
    }
}

/// Cursor over a streaming range query.
pub struct PgStateIterator<'a> {
    /// `None` once closed.
    rows: Option<RowStream<'a>>,
}

#[async_trait]
impl<'a> StateIterator for PgStateIterator<'a> {
    async fn next_entry(&mut self) -> Result<Option<StateEntry>, StoreError> {
        let rows = self
            .rows
            .as_mut()
            .ok_or_else(|| StoreError::backend("range cursor already closed"))?;

        rows.next()
            .await
            .transpose()
            .map(|row| row.map(|(key, value)| StateEntry { key, value }))
            .map_err(store_error)
    }

    async fn close(&mut self) -> Result<(), StoreError> {
        if self.rows.take().is_some() {
            tracing::debug!("Closed world state range cursor");
        }
        Ok(())
    }
}
