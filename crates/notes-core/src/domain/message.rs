//! Inter-surface Messages
//!
//! Requests exchanged over `chrome.runtime` messaging, tagged by `action`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ExtensionMessage {
    /// Popup asks the background for the active tab
    GetTabInfo,
    /// Extension asks a content surface for the page selection
    GetSelectedText,
    /// Floating button capture
    CreateNote {
        content: String,
        url: String,
        title: String,
    },
    OpenPopup,
}

/// Response to `getTabInfo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// Response to `getSelectedText`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedText {
    pub selected_text: String,
}
