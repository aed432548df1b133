use serde::Serialize;

/// Which message the sync engine is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Sync skipped because nobody is logged in.
    LoginRequired,
    /// The remote store acknowledged the latest counts.
    Updated,
    /// The push failed or timed out.
    Failed,
}

impl StatusKind {
    /// Text shown to the player.
    pub fn text(self) -> &'static str {
        match self {
            StatusKind::LoginRequired => "please log in first",
            StatusKind::Updated => "score updated",
            StatusKind::Failed => "update failed, try again later",
        }
    }

    /// Whether the message is drawn in the alarm colour.
    pub fn is_alert(self) -> bool {
        matches!(self, StatusKind::LoginRequired)
    }
}

/// Message currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    /// Message kind.
    pub kind: StatusKind,
    /// Set once the fade-out window has started.
    pub exiting: bool,
}

impl StatusMessage {
    /// Text shown to the player.
    pub fn text(&self) -> &'static str {
        self.kind.text()
    }
}

/// Holds the single status message and tracks its display lifecycle.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    message: Option<StatusMessage>,
}

impl StatusBoard {
    /// Current message, if any.
    pub fn message(&self) -> Option<StatusMessage> {
        self.message
    }

    /// Show `kind`.
    ///
    /// Returns `true` when a new lifecycle starts and the caller must schedule
    /// the exit chain. When a message is already on screen only its kind is
    /// replaced and the running chain keeps its timing.
    pub fn report(&mut self, kind: StatusKind) -> bool {
        match self.message.as_mut() {
            Some(message) => {
                message.kind = kind;
                false
            }
            None => {
                self.message = Some(StatusMessage {
                    kind,
                    exiting: false,
                });
                true
            }
        }
    }

    /// Enter the fade-out window.
    pub fn begin_exit(&mut self) {
        if let Some(message) = self.message.as_mut() {
            message.exiting = true;
        }
    }

    /// Remove the message.
    pub fn clear(&mut self) -> Option<StatusMessage> {
        self.message.take()
    }
}
