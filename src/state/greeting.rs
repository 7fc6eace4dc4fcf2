//! Greeting state for the home page.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

/// Greeting text sourced from the backend.
///
/// Starts empty and is replaced at most once, when the hello fetch
/// succeeds. A failed fetch leaves the empty default in place.
#[derive(Clone, Debug, Default)]
pub struct GreetingState {
    pub message: String,
}

impl GreetingState {
    /// Record the outcome of the hello fetch. `None` means the fetch
    /// failed; the current (empty) message is kept.
    pub fn settle(&mut self, message: Option<String>) {
        if let Some(message) = message {
            self.message = message;
        }
    }
}
