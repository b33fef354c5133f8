//! Short-lived confirmation banner.
//!
//! Each shown message gets a new generation number. A hide timer only clears
//! the message it was started for, so a quick second toast keeps its full
//! duration.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: Option<String>,
    generation: u64,
}

impl ToastState {
    /// Replace the visible message and return its generation.
    pub fn show(&mut self, text: String) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(text);
        self.generation
    }

    /// Hide the message shown as `generation`, if it is still the current one.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

/// Show `text` for `duration_ms`, then clear it unless a newer toast replaced it.
pub fn show_toast(toast: RwSignal<ToastState>, text: impl Into<String>, duration_ms: u32) {
    let mut generation = 0;
    let text = text.into();
    toast.update(|t| generation = t.show(text));
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        toast.update(|t| {
            t.expire(generation);
        });
    });
    #[cfg(not(feature = "csr"))]
    let _ = (duration_ms, generation);
}

#[component]
pub fn Toast(toast: RwSignal<ToastState>) -> impl IntoView {
    move || {
        toast.with(|t| t.message.clone()).map(|text| {
            view! {
                <div class="toast" role="status">
                    <span class="toast__text">{text}</span>
                    <button class="toast__close" aria-label="Dismiss" on:click=move |_| toast.update(ToastState::dismiss)>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
