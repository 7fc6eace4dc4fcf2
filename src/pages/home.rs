//! Home page showing the backend greeting and the user directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only screen. It fires both API reads once on mount; each
//! outcome lands in its own state slice, so whichever settles first
//! renders first. Failures are logged and swallowed — the page degrades to
//! a blank greeting and an empty list instead of an error state.

use leptos::prelude::*;

use crate::components::user_row::UserRow;
use crate::net::api;
use crate::state::greeting::GreetingState;
use crate::state::users::UsersState;

/// Home page — title, greeting, and the user list behind a loading gate.
#[component]
pub fn HomePage() -> impl IntoView {
    let greeting = expect_context::<RwSignal<GreetingState>>();
    let users = expect_context::<RwSignal<UsersState>>();

    // Both fetches are spawned from the component body, not an Effect, so
    // they run exactly once per mount and never re-subscribe.
    leptos::task::spawn_local(async move {
        match api::fetch_greeting().await {
            Ok(body) => greeting.update(|s| s.settle(Some(body.message))),
            Err(e) => {
                log::warn!("greeting fetch failed: {e}");
                greeting.update(|s| s.settle(None));
            }
        }
    });

    leptos::task::spawn_local(async move {
        match api::fetch_users().await {
            Ok(items) => users.update(|s| s.settle(Some(items))),
            Err(e) => {
                log::warn!("users fetch failed: {e}");
                users.update(|s| s.settle(None));
            }
        }
    });

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Usuarios"</h1>
            <p class="home-page__greeting">{move || greeting.get().message}</p>

            <Show
                when=move || !users.get().loading
                fallback=move || view! { <p class="home-page__loading">"Cargando usuarios..."</p> }
            >
                <ul class="user-list">
                    <For
                        each=move || users.get().items
                        key=|user| user.id
                        children=|user| view! { <UserRow user=user/> }
                    />
                </ul>
            </Show>
        </div>
    }
}
