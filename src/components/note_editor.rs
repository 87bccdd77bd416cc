//! Note Editor Component
//!
//! Create/edit form. Saving writes the whole notes array through the popup
//! session; validation errors block with an alert.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use notes_core::NoteDraft;

use crate::chrome::{self, ChromeStorage};
use crate::store::{store_close_editor, use_popup_store, PopupStateStoreFields};

#[component]
pub fn NoteEditor() -> impl IntoView {
    let store = use_popup_store();
    let initial = store.editor().get_untracked().unwrap_or_default();
    let editing_id = initial.id;
    let url = initial.url.clone();

    let (title, set_title) = signal(initial.title);
    let (content, set_content) = signal(initial.content);
    let (category, set_category) = signal(initial.category);
    let (tags, set_tags) = signal(initial.tags);
    let (saving, set_saving) = signal(false);

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let draft = NoteDraft {
            id: editing_id,
            title: title.get_untracked(),
            content: content.get_untracked(),
            category: category.get_untracked(),
            tags: tags.get_untracked(),
            url: url.clone(),
        };
        if let Err(e) = draft.validate() {
            chrome::alert(&e.to_string());
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let mut session = store.session().get_untracked();
            match session.save(&ChromeStorage, draft, Utc::now().timestamp_millis()).await {
                Ok(note) => {
                    log::info!("[EDITOR] saved note {}", note.id);
                    store.session().set(session);
                    store_close_editor(&store);
                }
                Err(e) if e.is_user_facing() => chrome::alert(&e.to_string()),
                Err(e) => log::warn!("[EDITOR] save failed: {}", e),
            }
            set_saving.set(false);
        });
    };

    let heading = if editing_id.is_some() { "Edit Note" } else { "New Note" };

    view! {
        <div class="note-editor">
            <h2>{heading}</h2>
            <input
                type="text"
                class="note-title-input"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                class="note-content-input"
                placeholder="Write your note..."
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            ></textarea>
            <div class="editor-row">
                <select
                    class="note-category-select"
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    {move || store.session().with(|s| s.categories()).into_iter().map(|cat| {
                        let label = cat.clone();
                        view! { <option value=cat>{label}</option> }
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    class="note-tags-input"
                    placeholder="Tags, comma separated"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                />
            </div>
            <div class="editor-actions">
                <button class="cancel-btn" on:click=move |_| store_close_editor(&store)>"Cancel"</button>
                <button class="save-btn" disabled=move || saving.get() on:click=save>"Save"</button>
            </div>
        </div>
    }
}
