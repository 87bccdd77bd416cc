//! Options Page
//!
//! Settings form plus note export/import.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use notes_core::services::{parse_import, SettingsManager};
use notes_core::{FontSize, SettingsForm};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::chrome::{self, ChromeContextMenus, ChromeDownloads, ChromeStorage};

const BANNER_MS: u32 = 3000;
const LOG_LINES: usize = 50;

const FONT_FAMILIES: [(&str, &str); 5] = [
    ("Roboto, sans-serif", "Roboto"),
    ("Arial, sans-serif", "Arial"),
    ("'Times New Roman', serif", "Times New Roman"),
    ("'Courier New', monospace", "Courier New"),
    ("Georgia, serif", "Georgia"),
];

type Manager = SettingsManager<'static, ChromeStorage, ChromeContextMenus, ChromeDownloads>;

fn manager() -> Manager {
    SettingsManager::new(&ChromeStorage, &ChromeContextMenus, &ChromeDownloads)
}

#[component]
pub fn OptionsPage() -> impl IntoView {
    let form = RwSignal::new(SettingsForm::from(&notes_core::Settings::default()));
    let (banner, set_banner) = signal(Option::<String>::None);
    let banner_seq = StoredValue::new(0u32);
    let (log_lines, set_log_lines) = signal(Vec::<String>::new());
    let refresh_log = move || set_log_lines.set(rolling_logger::recent_lines(LOG_LINES));

    spawn_local(async move {
        let settings = manager().load().await;
        form.set(SettingsForm::from(&settings));
        refresh_log();
    });

    // Show a message, then hide it unless a newer one replaced it
    let flash = move |message: &str| {
        banner_seq.update_value(|n| *n += 1);
        let seq = banner_seq.get_value();
        set_banner.set(Some(message.to_string()));
        spawn_local(async move {
            TimeoutFuture::new(BANNER_MS).await;
            if banner_seq.get_value() == seq {
                set_banner.set(None);
            }
        });
    };

    let on_save = move |_| {
        let current = form.get_untracked();
        spawn_local(async move {
            match manager().save_form(current).await {
                Ok(_) => flash("Settings saved successfully!"),
                Err(e) if e.is_user_facing() => chrome::alert(&e.to_string()),
                Err(e) => log::error!("[OPTIONS] saving settings failed: {}", e),
            }
        });
    };

    let on_reset = move |_| {
        if !chrome::confirm("Are you sure you want to reset all settings to default?") {
            return;
        }
        spawn_local(async move {
            match manager().reset().await {
                Ok(settings) => {
                    form.set(SettingsForm::from(&settings));
                    flash("Settings reset to defaults!");
                }
                Err(e) => log::error!("[OPTIONS] reset failed: {}", e),
            }
        });
    };

    let on_export = move |_| {
        spawn_local(async move {
            match manager().export_all(Utc::now().date_naive()).await {
                Ok(count) => log::info!("[OPTIONS] exported {} notes", count),
                Err(e) => {
                    log::error!("[OPTIONS] export failed: {}", e);
                    chrome::alert(&format!("Error exporting notes: {}", e));
                }
            }
        });
    };

    let on_import = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            let text = match JsFuture::from(file.text()).await {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(e) => {
                    chrome::alert(&format!("Error importing notes: {}", chrome::describe_js_error(&e)));
                    input.set_value("");
                    return;
                }
            };
            let batch = match parse_import(&text) {
                Ok(batch) => batch,
                Err(e) => {
                    chrome::alert(&format!("Error importing notes: {}", e));
                    input.set_value("");
                    return;
                }
            };
            let requested = batch.requested();
            let prompt = format!("Import {} notes? This will merge with your existing notes.", requested);
            if chrome::confirm(&prompt) {
                match manager().import_merge(batch).await {
                    Ok(n) => chrome::alert(&format!("Successfully imported {} notes!", n)),
                    Err(e) => chrome::alert(&format!("Error importing notes: {}", e)),
                }
            }
            input.set_value("");
        });
    };

    view! {
        <div class="options-page">
            <h1>"Chrome Notes Settings"</h1>

            <Show when=move || banner.with(Option::is_some)>
                <div class="status-banner">{move || banner.get().unwrap_or_default()}</div>
            </Show>

            <section class="options-section">
                <h2>"Appearance"</h2>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.dark_mode)
                        on:change=move |ev| form.update(|f| f.dark_mode = event_target_checked(&ev))
                    />
                    "Dark mode"
                </label>
                <label>
                    "Font size"
                    <select
                        prop:value=move || form.with(|f| f.font_size.clone())
                        on:change=move |ev| form.update(|f| f.font_size = event_target_value(&ev))
                    >
                        {FontSize::ALL.iter().map(|size| {
                            let value = size.as_str();
                            view! { <option value=value>{value}</option> }
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Font family"
                    <select
                        prop:value=move || form.with(|f| f.font_family.clone())
                        on:change=move |ev| form.update(|f| f.font_family = event_target_value(&ev))
                    >
                        {FONT_FAMILIES.iter().map(|(value, label)| {
                            view! { <option value=*value>{*label}</option> }
                        }).collect_view()}
                    </select>
                </label>
            </section>

            <section class="options-section">
                <h2>"Behavior"</h2>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.sync_enabled)
                        on:change=move |ev| form.update(|f| f.sync_enabled = event_target_checked(&ev))
                    />
                    "Sync notes across devices"
                </label>
                <label>
                    "Maximum notes"
                    <input
                        type="number"
                        prop:value=move || form.with(|f| f.max_notes.clone())
                        on:input=move |ev| form.update(|f| f.max_notes = event_target_value(&ev))
                    />
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.context_menu)
                        on:change=move |ev| form.update(|f| f.context_menu = event_target_checked(&ev))
                    />
                    "Show \"Add to Chrome Notes\" in the context menu"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.notifications)
                        on:change=move |ev| form.update(|f| f.notifications = event_target_checked(&ev))
                    />
                    "Show notifications"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.floating_button)
                        on:change=move |ev| form.update(|f| f.floating_button = event_target_checked(&ev))
                    />
                    "Show floating note button on pages"
                </label>
            </section>

            <div class="options-actions">
                <button class="save-btn" on:click=on_save>"Save Settings"</button>
                <button class="reset-btn" on:click=on_reset>"Reset to Defaults"</button>
            </div>

            <section class="options-section">
                <h2>"Backup"</h2>
                <button class="export-btn" on:click=on_export>"Export Notes"</button>
                <label class="import-label">
                    "Import Notes"
                    <input type="file" accept=".json,application/json" on:change=on_import />
                </label>
            </section>

            <section class="options-section">
                <h2>"Recent log"</h2>
                <button class="refresh-log-btn" on:click=move |_| refresh_log()>"Refresh"</button>
                <pre class="recent-log">{move || log_lines.get().join("\n")}</pre>
            </section>
        </div>
    }
}
