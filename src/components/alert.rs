//! Transient alert banner with timed auto-dismiss.
//!
//! DESIGN
//! ======
//! Showing an alert bumps a sequence counter and arms a dismissal timer
//! carrying that sequence; the timer only clears the slot when no newer
//! alert has replaced it in the meantime.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

/// How long a banner stays up before auto-dismissing.
pub const DISMISS_AFTER_MS: u64 = 4_000;

/// Visual flavor of a banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// One banner: kind plus the text to display.
#[derive(Clone, Debug, PartialEq)]
pub struct AlertMessage {
    pub kind: AlertKind,
    pub text: String,
}

/// Slot holding the currently displayed banner, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertSlot {
    pub seq: u64,
    pub current: Option<AlertMessage>,
}

impl AlertSlot {
    /// Install a new banner and return the sequence its timer must carry.
    pub fn arm(&mut self, kind: AlertKind, text: String) -> u64 {
        self.seq += 1;
        self.current = Some(AlertMessage { kind, text });
        self.seq
    }

    /// Clear the banner, unless a newer one replaced it.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }
}

/// Show a transient banner and arm its auto-dismiss timer.
pub fn show(slot: RwSignal<AlertSlot>, kind: AlertKind, text: impl Into<String>) {
    let text = text.into();
    let mut armed = 0;
    slot.update(|s| armed = s.arm(kind, text));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_AFTER_MS)).await;
        slot.update(|s| s.dismiss(armed));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = armed;
}

/// Banner renderer; renders nothing while the slot is empty.
#[component]
pub fn Alert(slot: RwSignal<AlertSlot>) -> impl IntoView {
    view! {
        {move || {
            slot.get().current.map(|message| {
                let class = match message.kind {
                    AlertKind::Success => "alert alert--success",
                    AlertKind::Error => "alert alert--error",
                };
                view! { <div class=class role="status">{message.text}</div> }
            })
        }}
    }
}
