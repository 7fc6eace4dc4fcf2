//! List row component for one user in the directory.

#[cfg(test)]
#[path = "user_row_test.rs"]
mod user_row_test;

use leptos::prelude::*;

use crate::net::types::UserRecord;

/// Format one list line as `"name - email"`.
fn user_line(user: &UserRecord) -> String {
    format!("{} - {}", user.name, user.email)
}

/// A single `<li>` in the user list.
#[component]
pub fn UserRow(user: UserRecord) -> impl IntoView {
    view! { <li class="user-list__item">{user_line(&user)}</li> }
}
