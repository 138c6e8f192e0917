//! Access-history list for the dashboard history tab.

use leptos::prelude::*;

use crate::net::types::AccessHistoryEntry;
use crate::util::format::format_timestamp;

/// Most-recent-first list of campus entries; fetched on demand and not
/// cached beyond the current view.
#[component]
pub fn AccessHistoryList(
    entries: RwSignal<Vec<AccessHistoryEntry>>,
    loading: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="info-card">
            <h3>"Access History"</h3>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="history-loading">"Loading history..."</p> }
            >
                <Show
                    when=move || !entries.get().is_empty()
                    fallback=|| view! { <p class="history-empty">"No access records yet"</p> }
                >
                    <ul class="history-list">
                        {move || {
                            entries
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    let when = format_timestamp(&entry.timestamp);
                                    view! {
                                        <li class="history-item">
                                            <strong class="history-item__location">
                                                {entry.location_code}
                                            </strong>
                                            <small class="history-item__time">{when}</small>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
