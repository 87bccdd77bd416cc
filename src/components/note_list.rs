//! Note List Component
//!
//! Renders the filtered view, newest first, or the empty placeholder.

use leptos::prelude::*;
use notes_core::services::NoteView;

use crate::components::NoteCard;
use crate::store::{use_popup_store, PopupStateStoreFields};

#[component]
pub fn NoteList() -> impl IntoView {
    let store = use_popup_store();

    let note_view = Memo::new(move |_| {
        let filter = store.filter().get();
        store.session().with(|s| {
            if filter.is_empty() { s.render(None) } else { s.render(Some(&filter)) }
        })
    });

    view! {
        <div class="notes-list">
            {move || match note_view.get() {
                NoteView::Empty => view! {
                    <div class="empty-state">
                        <p>"No notes found"</p>
                        <p class="hint">"Create a note or select text on a page and use \"Add to Chrome Notes\"."</p>
                    </div>
                }.into_any(),
                NoteView::Notes(notes) => notes
                    .into_iter()
                    .map(|note| view! { <NoteCard note=note /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
