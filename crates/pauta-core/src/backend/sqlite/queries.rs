//! Snapshot load and replace queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    backend::StateSnapshot,
    error::{DatabaseResultExt, Result},
    models::{CalendarPost, CardStatus, Channel, IdeaCard, Layers, TrashedCard},
};

// SQL as const strings for compile-time optimization
const DELETE_CARDS_SQL: &str = "DELETE FROM cards";
const DELETE_POSTS_SQL: &str = "DELETE FROM calendar_posts";
const DELETE_TRASH_SQL: &str = "DELETE FROM trashed_cards";

const INSERT_CARD_SQL: &str = "INSERT INTO cards (id, titulo, descricao, pilar, camadas, status, tags, created_at, updated_at, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const INSERT_POST_SQL: &str = "INSERT INTO calendar_posts (id, idea_card_id, titulo, data_inicio, data_fim, canal, observacoes, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const INSERT_TRASH_SQL: &str =
    "INSERT INTO trashed_cards (card_id, payload, deleted_at, expires_at) VALUES (?1, ?2, ?3, ?4)";

const SELECT_CARDS_SQL: &str = "SELECT id, titulo, descricao, pilar, camadas, status, tags, created_at, updated_at FROM cards ORDER BY position";
const SELECT_POSTS_SQL: &str = "SELECT id, idea_card_id, titulo, data_inicio, data_fim, canal, observacoes FROM calendar_posts ORDER BY position";
const SELECT_TRASH_SQL: &str = "SELECT payload FROM trashed_cards ORDER BY deleted_at";

/// Map a text column into a Uuid, pinning the column index for diagnostics.
fn column_uuid(idx: usize, value: &str) -> std::result::Result<Uuid, rusqlite::Error> {
    Uuid::parse_str(value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Map a text column into a Timestamp.
fn column_timestamp(idx: usize, value: &str) -> std::result::Result<Timestamp, rusqlite::Error> {
    value
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Map a JSON text column into a deserializable value.
fn column_json<T: DeserializeOwned>(
    idx: usize,
    value: &str,
) -> std::result::Result<T, rusqlite::Error> {
    serde_json::from_str(value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Loads the full persisted working set. A fresh database yields an
    /// empty snapshot.
    pub(crate) fn load_snapshot(&self) -> Result<StateSnapshot> {
        Ok(StateSnapshot {
            cards: self.load_cards()?,
            posts: self.load_posts()?,
            trashed: self.load_trash()?,
        })
    }

    /// Replaces the persisted working set with `snapshot` in one transaction.
    pub(crate) fn replace_snapshot(&mut self, snapshot: &StateSnapshot) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_CARDS_SQL, [])
            .db_context("Failed to clear cards")?;
        tx.execute(DELETE_POSTS_SQL, [])
            .db_context("Failed to clear calendar posts")?;
        tx.execute(DELETE_TRASH_SQL, [])
            .db_context("Failed to clear trash")?;

        for (position, card) in snapshot.cards.iter().enumerate() {
            tx.execute(
                INSERT_CARD_SQL,
                params![
                    card.id.to_string(),
                    card.title,
                    card.description,
                    card.pillar,
                    serde_json::to_string(&card.layers)?,
                    card.status.as_str(),
                    serde_json::to_string(&card.tags)?,
                    card.created_at.to_string(),
                    card.updated_at.to_string(),
                    position as i64,
                ],
            )
            .db_context("Failed to insert card")?;
        }

        for (position, post) in snapshot.posts.iter().enumerate() {
            tx.execute(
                INSERT_POST_SQL,
                params![
                    post.id.to_string(),
                    post.idea_card_id.map(|id| id.to_string()),
                    post.title,
                    post.starts_at.to_string(),
                    post.ends_at.to_string(),
                    post.channel.as_str(),
                    post.notes,
                    position as i64,
                ],
            )
            .db_context("Failed to insert calendar post")?;
        }

        for entry in &snapshot.trashed {
            tx.execute(
                INSERT_TRASH_SQL,
                params![
                    entry.card_id().to_string(),
                    serde_json::to_string(entry)?,
                    entry.deleted_at.to_string(),
                    entry.expires_at.to_string(),
                ],
            )
            .db_context("Failed to insert trash entry")?;
        }

        tx.commit().db_context("Failed to commit transaction")
    }

    fn load_cards(&self) -> Result<Vec<IdeaCard>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CARDS_SQL)
            .db_context("Failed to prepare card query")?;

        let cards = stmt
            .query_map([], |row| {
                let id: String = row.get(0)?;
                let layers: String = row.get(4)?;
                let status: String = row.get(5)?;
                let tags: String = row.get(6)?;
                let created_at: String = row.get(7)?;
                let updated_at: String = row.get(8)?;

                Ok(IdeaCard {
                    id: column_uuid(0, &id)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    pillar: row.get(3)?,
                    layers: column_json::<Layers>(4, &layers)?,
                    status: status.parse::<CardStatus>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(
                            5,
                            Type::Text,
                            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
                        )
                    })?,
                    tags: column_json::<Vec<String>>(6, &tags)?,
                    created_at: column_timestamp(7, &created_at)?,
                    updated_at: column_timestamp(8, &updated_at)?,
                })
            })
            .db_context("Failed to query cards")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read card rows")?;

        Ok(cards)
    }

    fn load_posts(&self) -> Result<Vec<CalendarPost>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_POSTS_SQL)
            .db_context("Failed to prepare calendar post query")?;

        let posts = stmt
            .query_map([], |row| {
                let id: String = row.get(0)?;
                let card_id: Option<String> = row.get(1)?;
                let starts_at: String = row.get(3)?;
                let ends_at: String = row.get(4)?;
                let channel: String = row.get(5)?;

                Ok(CalendarPost {
                    id: column_uuid(0, &id)?,
                    idea_card_id: card_id.as_deref().map(|s| column_uuid(1, s)).transpose()?,
                    title: row.get(2)?,
                    starts_at: column_timestamp(3, &starts_at)?,
                    ends_at: column_timestamp(4, &ends_at)?,
                    channel: channel.parse::<Channel>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(
                            5,
                            Type::Text,
                            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
                        )
                    })?,
                    notes: row.get(6)?,
                })
            })
            .db_context("Failed to query calendar posts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read calendar post rows")?;

        Ok(posts)
    }

    fn load_trash(&self) -> Result<Vec<TrashedCard>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRASH_SQL)
            .db_context("Failed to prepare trash query")?;

        let trashed = stmt
            .query_map([], |row| {
                let payload: String = row.get(0)?;
                column_json::<TrashedCard>(0, &payload)
            })
            .db_context("Failed to query trash")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read trash rows")?;

        Ok(trashed)
    }
}
