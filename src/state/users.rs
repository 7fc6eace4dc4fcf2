//! User-list state for the home page.
//!
//! DESIGN
//! ======
//! The loading flag lives with the list because only the users fetch
//! settles it; the greeting fetch touches nothing here.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::UserRecord;

/// User list plus the loading flag gating the placeholder.
#[derive(Clone, Debug)]
pub struct UsersState {
    pub items: Vec<UserRecord>,
    pub loading: bool,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

impl UsersState {
    /// Record the outcome of the users fetch. `None` means the fetch
    /// failed; the list keeps whatever it had (the empty default). The
    /// loading flag drops on both paths and never comes back up.
    pub fn settle(&mut self, items: Option<Vec<UserRecord>>) {
        if let Some(items) = items {
            self.items = items;
        }
        self.loading = false;
    }
}
