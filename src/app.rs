//! Root application component and shared state contexts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::greeting::GreetingState;
use crate::state::users::UsersState;

/// Root application component.
///
/// Provides the shared state contexts and renders the home page. There is a
/// single screen, so no router sits between the root and the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for the page and its children.
    let greeting = RwSignal::new(GreetingState::default());
    let users = RwSignal::new(UsersState::default());

    provide_context(greeting);
    provide_context(users);

    view! {
        <Title text="Usuarios"/>

        <HomePage/>
    }
}
