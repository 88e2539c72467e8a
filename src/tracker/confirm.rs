//! User confirmation for destructive operations.

/// Prompt shown before deleting a single record.
pub const DELETE_ONE_PROMPT: &str = "Delete this shift record?";

/// Prompt shown before clearing the whole log.
pub const DELETE_ALL_PROMPT: &str = "Delete ALL history?";

/// Asks the user to approve a destructive operation.
pub trait Confirm {
    /// Returns true if the user approved `prompt`.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
