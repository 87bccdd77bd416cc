//! Application Context
//!
//! Shared popup signals provided via Leptos Context API.

use leptos::prelude::*;

/// Popup-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload notes from storage - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload notes from storage - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Re-read the notes array, picking up captures made by other surfaces
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
