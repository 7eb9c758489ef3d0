//! Pillar labels and matching rules.
//!
//! Pillars are open strings: users can type any label, and the store never
//! validates a card's pillar against a fixed set. The constants here drive
//! the week heuristic's required order, and [`default_suggestions`] is the
//! configurable allow-list frontends use to offer completions. Neither is a
//! correctness constraint.

/// Required pillar order for a week of content.
pub const REQUIRED: [&str; 3] = ["Dor", "Educacao", "Solucao"];

/// Optional fourth pillar, included only when explicitly requested.
pub const BUILD: &str = "Construcao";

/// Default allow-list used for frontend suggestions only.
pub fn default_suggestions() -> Vec<String> {
    let mut labels: Vec<String> = REQUIRED.iter().map(|p| (*p).to_string()).collect();
    labels.push(BUILD.to_string());
    labels
}

/// Compare two pillar labels: trimmed, ASCII-case-insensitive.
pub fn matches(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Whether an optional pillar field matches the given label.
pub fn field_matches(field: Option<&str>, label: &str) -> bool {
    field.is_some_and(|p| matches(p, label))
}
