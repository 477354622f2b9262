//! Login and signup dialogs.
//!
//! Both are always present in the markup; visibility is the `active` class
//! driven by `UiState`. A click closes the dialog only when its target is the
//! backdrop element itself; clicks bubbling up from the inner card do not.

use leptos::prelude::*;

use crate::state::auth::{AuthState, LoginForm, SignupForm};
use crate::state::ui::{ModalKind, UiState};
use crate::util::auth_actions::{submit_login, submit_signup};

/// Shared modal frame: backdrop, card, title, close control.
#[component]
fn ModalFrame(kind: ModalKind, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        let target_is_backdrop = ev.target().is_some() && ev.target() == ev.current_target();
        ui.update(|u| {
            u.backdrop_click(kind, target_is_backdrop);
        });
    };
    let on_close_click = move |_| ui.update(|u| u.close_modal(kind));
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ui.update(|u| u.close_modal(kind));
        }
    };

    view! {
        <div
            id=kind.element_id()
            class="modal"
            class:active=move || ui.get().is_open(kind)
            on:click=on_backdrop
        >
            <div class="modal__content" on:keydown=on_keydown tabindex="0">
                <div class="modal__header">
                    <h2>{kind.title()}</h2>
                    <button id=kind.close_id() class="modal__close" type="button" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LoginModal() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        submit_login(&form, auth, ui);
        password.set(String::new());
    };

    view! {
        <ModalFrame kind=ModalKind::Login>
            <form id="loginForm" class="auth-form" novalidate=true on:submit=on_submit>
                <input
                    class="auth-input"
                    type="text"
                    name="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    name="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit">"Login"</button>
            </form>
        </ModalFrame>
    }
}

#[component]
pub fn SignupModal() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        if submit_signup(&form, auth, ui) {
            password.set(String::new());
            confirm.set(String::new());
        }
    };

    view! {
        <ModalFrame kind=ModalKind::Signup>
            <form id="signupForm" class="auth-form" novalidate=true on:submit=on_submit>
                <input
                    class="auth-input"
                    type="text"
                    name="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    id="signupPassword"
                    class="auth-input"
                    type="password"
                    name="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    id="signupConfirmPassword"
                    class="auth-input"
                    type="password"
                    name="confirmPassword"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit">"Sign Up"</button>
            </form>
        </ModalFrame>
    }
}
