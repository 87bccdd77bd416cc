//! Rough Notes
//!
//! Quick-capture popup: one text box, a dated download per entry, and the
//! last few entries underneath.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use notes_core::services::QuickCapture;
use notes_core::HistoryEntry;

use crate::chrome::{ChromeDownloads, ChromeStorage};

#[component]
pub fn RoughNotes() -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (history, set_history) = signal(Vec::<HistoryEntry>::new());

    spawn_local(async move {
        let entries = QuickCapture::new(&ChromeStorage, &ChromeDownloads).load().await;
        set_history.set(entries);
    });

    let save = move || {
        let input = text.get_untracked();
        if input.trim().is_empty() {
            return;
        }
        set_text.set(String::new());
        spawn_local(async move {
            let capture = QuickCapture::new(&ChromeStorage, &ChromeDownloads);
            if let Some(outcome) = capture.capture(&input, Local::now()).await {
                if let Some(entries) = outcome.history {
                    set_history.set(entries);
                }
            }
        });
    };

    view! {
        <div class="rough-notes">
            <textarea
                id="noteInput"
                placeholder="Type a quick note and press Enter"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:keypress=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        save();
                    }
                }
            ></textarea>
            <button id="saveButton" on:click=move |_| save()>"Save"</button>

            <div id="noteHistory" class="note-history">
                {move || {
                    let entries = history.get();
                    if entries.is_empty() {
                        view! { <p class="no-history">"No recent notes"</p> }.into_any()
                    } else {
                        entries.into_iter().map(|entry| view! {
                            <div class="history-item">
                                <div class="history-date">{entry.date}</div>
                                <div class="history-content">{entry.content}</div>
                            </div>
                        }).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}
