//! Result wrapper types for displaying operation outcomes.
//!
//! Wrapper types that format the results of create, update and delete
//! operations with consistent messaging, plus plain status lines for the
//! silent-no-op reporting path.

use std::fmt;

use super::datetime::LocalDate;
use crate::models::{CalendarPost, IdeaCard, TrashedCard};

/// Wrapper type for displaying the result of create operations.
///
/// Formats a success message with the resource id followed by the full
/// details of the created resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<IdeaCard> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created card with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<CalendarPost> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created calendar post with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Tracks and displays the specific changes made during the update so the
/// user gets clear feedback about what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<IdeaCard> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated card with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<CalendarPost> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated calendar post with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<TrashedCard> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Moved card '{}' (ID: {}) to trash; restorable until {}",
            self.resource.card.title,
            self.resource.card.id,
            LocalDate(&self.resource.expires_at)
        )?;
        if !self.resource.posts.is_empty() {
            writeln!(
                f,
                "Also removed {} calendar post(s) referencing it",
                self.resource.posts.len()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for DeleteResult<CalendarPost> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted calendar post '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

/// Wrapper type for displaying plain operation status lines.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Status line for an operation that hit a missing id. The store
    /// no-opped silently; the frontend still tells the user.
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::failure(format!("{resource} {id} not found"))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Operation completed".to_string());
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Operation failed".to_string());
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_not_found_status() {
        let status = OperationStatus::not_found("Card", "abc");
        assert!(!status.success);
        assert!(status.message.contains("Card abc not found"));
    }
}
