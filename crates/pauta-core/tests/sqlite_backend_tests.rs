//! Integration tests for the SQLite snapshot backend.

use jiff::Timestamp;
use tempfile::TempDir;

use pauta_core::{
    backend::{SqliteBackend, StateBackend, StateSnapshot},
    models::{CalendarPost, CardStatus, Channel, Format, IdeaCard, TrashedCard},
};

/// Helper to create a prepared backend in a temp directory.
async fn create_test_backend() -> (TempDir, SqliteBackend) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let backend = SqliteBackend::new(temp_dir.path().join("test.db"));
    backend.prepare().await.expect("Failed to prepare backend");
    (temp_dir, backend)
}

/// A snapshot exercising every persisted field.
fn sample_snapshot() -> StateSnapshot {
    let mut card = IdeaCard::new("Bastidores da semana");
    card.description = Some("Mostrar o processo de gravacao".to_string());
    card.pillar = Some("Construcao".to_string());
    card.status = CardStatus::Scripted;
    card.tags = vec!["bastidores".to_string(), "processo".to_string()];
    card.layers.theme = Some("Rotina".to_string());
    card.layers.format = Some(Format::Reels);
    card.layers.hook = Some("Ninguem mostra isso".to_string());

    let mut post = CalendarPost::new("Bastidores da semana", Timestamp::now(), None, Channel::Reels);
    post.idea_card_id = Some(card.id);
    post.notes = Some("Publicar antes do almoco".to_string());

    let trashed = TrashedCard::new(IdeaCard::new("Ideia descartada"), Vec::new(), Timestamp::now());

    StateSnapshot {
        cards: vec![card],
        posts: vec![post],
        trashed: vec![trashed],
    }
}

#[tokio::test]
async fn test_fresh_database_loads_empty_snapshot() {
    let (_temp_dir, backend) = create_test_backend().await;

    let snapshot = backend.load_state().await.expect("Failed to load");
    assert!(snapshot.cards.is_empty());
    assert!(snapshot.posts.is_empty());
    assert!(snapshot.trashed.is_empty());
}

#[tokio::test]
async fn test_snapshot_round_trip() {
    let (_temp_dir, backend) = create_test_backend().await;
    let snapshot = sample_snapshot();

    backend.save_state(&snapshot).await.expect("Failed to save");
    let loaded = backend.load_state().await.expect("Failed to load");

    assert_eq!(loaded, snapshot);
}

#[tokio::test]
async fn test_save_replaces_previous_working_set() {
    let (_temp_dir, backend) = create_test_backend().await;

    backend
        .save_state(&sample_snapshot())
        .await
        .expect("Failed to save first snapshot");

    let replacement = StateSnapshot {
        cards: vec![IdeaCard::new("Unico sobrevivente")],
        ..Default::default()
    };
    backend
        .save_state(&replacement)
        .await
        .expect("Failed to save second snapshot");

    let loaded = backend.load_state().await.expect("Failed to load");
    assert_eq!(loaded, replacement);
    assert_eq!(loaded.cards.len(), 1);
    assert!(loaded.posts.is_empty());
    assert!(loaded.trashed.is_empty());
}

#[tokio::test]
async fn test_card_ordering_survives_round_trip() {
    let (_temp_dir, backend) = create_test_backend().await;

    let snapshot = StateSnapshot {
        cards: vec![
            IdeaCard::new("Terceiro"),
            IdeaCard::new("Segundo"),
            IdeaCard::new("Primeiro"),
        ],
        ..Default::default()
    };
    backend.save_state(&snapshot).await.expect("Failed to save");

    let loaded = backend.load_state().await.expect("Failed to load");
    let titles: Vec<_> = loaded.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Terceiro", "Segundo", "Primeiro"]);
}
