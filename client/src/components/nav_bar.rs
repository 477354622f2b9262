//! Top navigation bar with auth-aware links.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::nav::{NavEntry, auth_links};
use crate::state::ui::UiState;
use crate::util::auth_actions::run_nav_action;

/// Navigation bar. Static links come first; auth entries are rebuilt from
/// `auth_links` whenever `AuthState` changes.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let render_entry = move |entry: NavEntry| {
        let on_click = move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            run_nav_action(entry.action, auth, ui);
        };
        view! {
            <li data-auth="true" class="navbar__item navbar__item--auth">
                <a href="#" on:click=on_click>{entry.label}</a>
            </li>
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Calorie Scan"</a>
            <ul id="navLinks" class="navbar__links">
                <li class="navbar__item"><a href="/">"Home"</a></li>
                <li class="navbar__item"><a href="/#scan">"Scan"</a></li>
                {move || auth_links(&auth.get()).into_iter().map(render_entry).collect_view()}
            </ul>
        </nav>
    }
}
