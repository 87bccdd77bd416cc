//! Chrome Notes Popup
//!
//! Main popup: filter bar and note list, or the editor when a note is open.

use leptos::prelude::*;
use leptos::task::spawn_local;
use notes_core::storage::SettingsRepository;
use notes_core::FontSize;
use reactive_stores::Store;

use crate::chrome::{self, ChromeStorage};
use crate::components::{FilterBar, NoteEditor, NoteList};
use crate::context::AppContext;
use crate::store::{store_start_new_note, PopupState, PopupStateStoreFields};

fn open_rough_notes() {
    spawn_local(async move {
        if let Err(e) = chrome::open_rough_notes().await {
            log::warn!("[POPUP] opening rough notes failed: {}", e);
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    let store = Store::new(PopupState::default());
    provide_context(store);

    // Presentation settings and the tab we were opened over
    spawn_local(async move {
        let settings = SettingsRepository::new(&ChromeStorage).load().await;
        match settings {
            Ok(Some(settings)) => store.settings().set(settings),
            Ok(None) => {}
            Err(e) => log::warn!("[POPUP] settings unavailable: {}", e),
        }
        match chrome::request_tab_info().await {
            Ok(tab) => store.tab().set(tab),
            Err(e) => log::debug!("[POPUP] no tab info: {}", e),
        }
    });

    // Load notes on open and on every manual reload
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("[POPUP] loading notes, trigger={}", trigger);
        spawn_local(async move {
            let mut session = store.session().get_untracked();
            session.load(&ChromeStorage).await;
            store.session().set(session);
        });
    });

    let root_class = move || {
        if store.settings().with(|s| s.dark_mode) { "popup dark-mode" } else { "popup" }
    };
    let root_style = move || {
        store.settings().with(|s| {
            format!(
                "font-size: {}; font-family: {};",
                FontSize::from_str(&s.font_size).css_value(),
                s.font_family
            )
        })
    };
    let editor_open = move || store.editor().with(Option::is_some);

    view! {
        <div class=root_class style=root_style>
            <header class="popup-header">
                <h1>"Chrome Notes"</h1>
                <div class="header-actions">
                    <button class="reload-btn" title="Reload notes" on:click=move |_| ctx.reload()>"⟳"</button>
                    <button class="rough-notes-btn" title="Quick rough note" on:click=move |_| open_rough_notes()>"✎"</button>
                    <button class="new-note-btn" on:click=move |_| store_start_new_note(&store)>"+ New Note"</button>
                </div>
            </header>

            <Show
                when=editor_open
                fallback=move || view! {
                    <FilterBar />
                    <NoteList />
                }
            >
                <NoteEditor />
            </Show>

            <p class="note-count">
                {move || format!("{} notes", store.session().with(|s| s.notes().len()))}
            </p>
        </div>
    }
}
