//! Chat interaction descriptors.
//!
//! A [`ClickEvent`] specifies what happens when a displayed chat component is
//! activated. Construction goes exclusively through the named factories, so
//! the action and its payload can never disagree; the value is immutable from
//! construction on.

use serde::{Deserialize, Serialize};
use url::Url;

/// Behavior triggered by clicking a chat component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickAction {
    /// Open a URL in the client's browser.
    OpenUrl,
    /// Open a file on the client's machine.
    OpenFile,
    /// Run a command as the clicking player.
    RunCommand,
    /// Pre-fill the chat input with a command.
    SuggestCommand,
}

/// Immutable click behavior attached to a chat component.
///
/// Equality and hashing are structural over `(action, value)`. The payload is
/// stored verbatim; no factory validates URL syntax or command existence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClickEvent {
    action: ClickAction,
    value: String,
}

impl ClickEvent {
    fn new(action: ClickAction, value: String) -> Self {
        Self { action, value }
    }

    /// Click event that opens a URL, stored in its canonical string form.
    pub fn open_url(url: Url) -> Self {
        Self::new(ClickAction::OpenUrl, url.to_string())
    }

    /// Click event that opens a URL given as a raw string, stored verbatim.
    pub fn open_url_str(url: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenUrl, url.into())
    }

    /// Click event that opens a file on the player's machine.
    pub fn open_file(file: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenFile, file.into())
    }

    /// Click event that runs a command when clicked.
    pub fn run_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::RunCommand, command.into())
    }

    /// Click event that suggests a command in the chat input.
    pub fn suggest_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::SuggestCommand, command.into())
    }

    /// The action this event triggers.
    pub fn action(&self) -> ClickAction {
        self.action
    }

    /// The payload bound to the action.
    pub fn value(&self) -> &str {
        &self.value
    }
}
