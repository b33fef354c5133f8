//! Top bar rendered above every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the brand, the "New ad" shortcut, and either the login/register
//! links or the profile/logout controls depending on the session.
//!
//! Logging out first leaves the current route and only then clears the
//! session, so no guarded page is still mounted when authentication drops.

#[cfg(test)]
#[path = "navigation_bar_test.rs"]
mod navigation_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config;
use crate::state::session::use_session;

/// Front page that logout lands on.
pub const LOGOUT_TARGET: &str = "/";

/// What a pending logout does next from `pathname`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutStep {
    Navigate,
    SignOut,
}

pub fn logout_step(pathname: &str) -> LogoutStep {
    if pathname == LOGOUT_TARGET { LogoutStep::SignOut } else { LogoutStep::Navigate }
}

#[component]
pub fn NavigationBar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let config = config::current();

    let greeting = move || {
        session
            .user()
            .map(|user| user.first_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Profile".to_owned())
    };

    let pending_logout = RwSignal::new(false);
    Effect::new(move || {
        if !pending_logout.get() {
            return;
        }
        match logout_step(&pathname.get()) {
            LogoutStep::Navigate => navigate(LOGOUT_TARGET, NavigateOptions::default()),
            LogoutStep::SignOut => {
                pending_logout.set(false);
                session.logout();
            }
        }
    });

    let on_logout = move |_| pending_logout.set(true);

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"Sellpoint"</a>
            <span class="navbar__spacer"></span>
            <a
                href="/ad/create"
                class="btn btn--primary navbar__new-ad"
                class:navbar__link--active=move || pathname.get() == "/ad/create"
            >
                "New ad"
            </a>
            <Show
                when=move || session.is_authenticated()
                fallback=move || {
                    view! {
                        <a href=config.login_path class="navbar__link">"Log in"</a>
                        <a href=config.register_path class="navbar__link">"Register"</a>
                    }
                }
            >
                <a
                    href="/profile"
                    class="navbar__link"
                    class:navbar__link--active=move || pathname.get().starts_with("/profile")
                >
                    {greeting}
                </a>
                <button class="btn btn--ghost navbar__logout" on:click=on_logout>"Log out"</button>
            </Show>
        </nav>
    }
}
