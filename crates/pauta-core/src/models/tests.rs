//! Tests for the domain models.

use std::collections::HashSet;

use jiff::{SignedDuration, Timestamp};

use super::*;

fn day() -> SignedDuration {
    SignedDuration::from_hours(24)
}

#[test]
fn test_card_status_round_trip() {
    for status in [
        CardStatus::Idea,
        CardStatus::Scripted,
        CardStatus::Created,
        CardStatus::Scheduled,
        CardStatus::Published,
    ] {
        assert_eq!(status.as_str().parse::<CardStatus>(), Ok(status));
    }
}

#[test]
fn test_card_status_accepts_english_aliases() {
    assert_eq!("idea".parse::<CardStatus>(), Ok(CardStatus::Idea));
    assert_eq!("scheduled".parse::<CardStatus>(), Ok(CardStatus::Scheduled));
    assert_eq!("Agendado".parse::<CardStatus>(), Ok(CardStatus::Scheduled));
    assert!("launched".parse::<CardStatus>().is_err());
}

#[test]
fn test_card_status_backlog() {
    assert!(CardStatus::Idea.is_backlog());
    assert!(CardStatus::Scripted.is_backlog());
    assert!(!CardStatus::Created.is_backlog());
    assert!(!CardStatus::Scheduled.is_backlog());
    assert!(!CardStatus::Published.is_backlog());
}

#[test]
fn test_format_round_trip() {
    for format in [
        Format::Carousel,
        Format::Reels,
        Format::Print,
        Format::SingleImage,
        Format::Story,
    ] {
        assert_eq!(format.as_str().parse::<Format>(), Ok(format));
    }
    assert_eq!("carousel".parse::<Format>(), Ok(Format::Carousel));
    assert!("podcast".parse::<Format>().is_err());
}

#[test]
fn test_channel_inference() {
    assert_eq!(Channel::infer(Some(Format::Reels)), Channel::Reels);
    assert_eq!(Channel::infer(Some(Format::Story)), Channel::Story);
    assert_eq!(Channel::infer(Some(Format::Carousel)), Channel::Feed);
    assert_eq!(Channel::infer(Some(Format::Print)), Channel::Feed);
    assert_eq!(Channel::infer(Some(Format::SingleImage)), Channel::Feed);
    assert_eq!(Channel::infer(None), Channel::Feed);
}

#[test]
fn test_new_card_has_fresh_identical_timestamps() {
    let card = IdeaCard::new("Post de estreia");
    assert_eq!(card.created_at, card.updated_at);
    assert_eq!(card.status, CardStatus::Idea);
    assert!(card.tags.is_empty());
    assert_eq!(card.layers, Layers::default());
}

#[test]
fn test_duplicate_card_semantics() {
    let mut original = IdeaCard::new("Dicas de gravacao");
    original.status = CardStatus::Created;
    original.pillar = Some("Educacao".to_string());
    original.layers.hook = Some("Voce sabia?".to_string());

    let copy = original.duplicate();
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.title, "Dicas de gravacao (Copia)");
    assert_eq!(copy.status, CardStatus::Idea);
    assert_eq!(copy.created_at, copy.updated_at);
    // Enrichment carries over
    assert_eq!(copy.pillar.as_deref(), Some("Educacao"));
    assert_eq!(copy.layers.hook.as_deref(), Some("Voce sabia?"));
}

#[test]
fn test_default_end_is_one_day_later() {
    let start = Timestamp::now();
    assert_eq!(post::default_end(start), start.checked_add(day()).unwrap());
}

#[test]
fn test_post_new_defaults_end() {
    let start = Timestamp::now();
    let slot = CalendarPost::new("Lancamento", start, None, Channel::Feed);
    assert_eq!(slot.ends_at, start.checked_add(day()).unwrap());

    let explicit = start.checked_add(SignedDuration::from_hours(2)).unwrap();
    let slot = CalendarPost::new("Lancamento", start, Some(explicit), Channel::Feed);
    assert_eq!(slot.ends_at, explicit);
}

#[test]
fn test_trash_expiry_window() {
    let deleted_at = Timestamp::now();
    let entry = TrashedCard::new(IdeaCard::new("Velho"), Vec::new(), deleted_at);

    let week_later = deleted_at
        .checked_add(SignedDuration::from_hours(24 * 7))
        .unwrap();
    assert_eq!(entry.expires_at, week_later);
    assert!(!entry.is_expired(deleted_at));
    assert!(entry.is_expired(week_later));
}

#[test]
fn test_layers_patch_merges_key_by_key() {
    let mut layers = Layers {
        theme: Some("Rotina".to_string()),
        format: Some(Format::Carousel),
        objective: Some("Alcance".to_string()),
        hook: Some("Gancho antigo".to_string()),
        cta: Some("Comente aqui".to_string()),
    };

    let patch = LayersPatch {
        hook: Some("Gancho novo".to_string()),
        ..Default::default()
    };
    patch.apply(&mut layers);

    assert_eq!(layers.hook.as_deref(), Some("Gancho novo"));
    // Untouched fields survive the partial patch
    assert_eq!(layers.theme.as_deref(), Some("Rotina"));
    assert_eq!(layers.format, Some(Format::Carousel));
    assert_eq!(layers.objective.as_deref(), Some("Alcance"));
    assert_eq!(layers.cta.as_deref(), Some("Comente aqui"));
}

#[test]
fn test_update_card_request_refreshes_timestamp() {
    let mut card = IdeaCard::new("Antes");
    let created_at = card.created_at;

    let request = UpdateCardRequest {
        title: Some("Depois".to_string()),
        ..Default::default()
    };
    let changes = request.apply(&mut card);

    assert_eq!(card.title, "Depois");
    assert_eq!(card.created_at, created_at);
    assert!(card.updated_at >= created_at);
    assert_eq!(changes, vec!["Updated title".to_string()]);
}

#[test]
fn test_update_post_request_regenerates_default_end() {
    let start = Timestamp::now();
    let mut slot = CalendarPost::new("Slot", start, None, Channel::Feed);

    // Moving the start without an end regenerates the one-day default
    let new_start = start.checked_add(SignedDuration::from_hours(48)).unwrap();
    let request = UpdatePostRequest {
        starts_at: Some(new_start),
        ..Default::default()
    };
    request.apply(&mut slot);
    assert_eq!(slot.starts_at, new_start);
    assert_eq!(slot.ends_at, new_start.checked_add(day()).unwrap());

    // An explicit end wins
    let explicit = new_start.checked_add(SignedDuration::from_hours(3)).unwrap();
    let request = UpdatePostRequest {
        starts_at: Some(new_start),
        ends_at: Some(explicit),
        ..Default::default()
    };
    request.apply(&mut slot);
    assert_eq!(slot.ends_at, explicit);

    // Touching only the end leaves the start alone
    let request = UpdatePostRequest {
        ends_at: Some(new_start),
        ..Default::default()
    };
    request.apply(&mut slot);
    assert_eq!(slot.starts_at, new_start);
    assert_eq!(slot.ends_at, new_start);
}

#[test]
fn test_card_wire_contract() {
    let mut card = IdeaCard::new("Conteudo");
    card.description = Some("Descricao".to_string());
    card.pillar = Some("Dor".to_string());
    card.layers.hook = Some("Olha isso".to_string());
    card.layers.format = Some(Format::SingleImage);
    card.tags = vec!["lancamento".to_string()];

    let value = serde_json::to_value(&card).expect("card serializes");
    assert!(value.get("titulo").is_some());
    assert!(value.get("descricao").is_some());
    assert_eq!(value["pilar"], "Dor");
    assert_eq!(value["status"], "Ideia");
    assert_eq!(value["camadas"]["gancho"], "Olha isso");
    assert_eq!(value["camadas"]["formato"], "Imagem Unica");
    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());

    let back: IdeaCard = serde_json::from_value(value).expect("card deserializes");
    assert_eq!(back, card);
}

#[test]
fn test_post_wire_contract() {
    let mut slot = CalendarPost::new("Slot", Timestamp::now(), None, Channel::Story);
    slot.notes = Some("Conferir horario".to_string());

    let value = serde_json::to_value(&slot).expect("post serializes");
    assert!(value.get("titulo").is_some());
    assert!(value.get("dataInicio").is_some());
    assert!(value.get("dataFim").is_some());
    assert_eq!(value["canal"], "Story");
    assert_eq!(value["observacoes"], "Conferir horario");

    let back: CalendarPost = serde_json::from_value(value).expect("post deserializes");
    assert_eq!(back, slot);
}

#[test]
fn test_pillar_matching_is_relaxed() {
    assert!(pillars::matches("  dor ", "Dor"));
    assert!(pillars::field_matches(Some("EDUCACAO"), "Educacao"));
    assert!(!pillars::field_matches(None, "Dor"));
    assert!(!pillars::field_matches(Some("Solucao"), "Dor"));
}

#[test]
fn test_card_filter() {
    let mut dor = IdeaCard::new("Post sobre dor");
    dor.pillar = Some("Dor".to_string());
    dor.tags = vec!["quente".to_string()];

    let mut edu = IdeaCard::new("Aula rapida");
    edu.pillar = Some("Educacao".to_string());
    edu.status = CardStatus::Created;

    let scheduled: HashSet<_> = [edu.id].into_iter().collect();

    let filter = CardFilter {
        pillar: Some("dor".to_string()),
        ..Default::default()
    };
    assert!(filter.matches(&dor, &scheduled));
    assert!(!filter.matches(&edu, &scheduled));

    let filter = CardFilter {
        status: Some(CardStatus::Created),
        ..Default::default()
    };
    assert!(filter.matches(&edu, &scheduled));

    let filter = CardFilter {
        tag: Some("QUENTE".to_string()),
        ..Default::default()
    };
    assert!(filter.matches(&dor, &scheduled));

    let filter = CardFilter {
        unscheduled: true,
        ..Default::default()
    };
    assert!(filter.matches(&dor, &scheduled));
    assert!(!filter.matches(&edu, &scheduled));

    let filter = CardFilter {
        title_contains: Some("aula".to_string()),
        ..Default::default()
    };
    assert!(filter.matches(&edu, &scheduled));
    assert!(!filter.matches(&dor, &scheduled));
}
