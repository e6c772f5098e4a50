//! Bottom overlay selection.
//!
//! Exactly one [`BottomOverlay`] variant is produced for any combination of
//! inputs. Precedence: nothing to sync, logged out, upload running, prompt.

use serde::{Deserialize, Serialize};

use crate::model::{LoginState, UploadSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadProgress {
    pub uploaded: usize,
    pub total: usize,
    /// `uploaded / total` in `[0, 1]`; zero for an empty batch.
    pub fraction: f64,
}

impl UploadProgress {
    #[must_use]
    pub fn from_snapshot(snapshot: &UploadSnapshot) -> Self {
        let total = snapshot.batch_size;
        let uploaded = total.saturating_sub(snapshot.unsynced_count);
        #[allow(clippy::cast_precision_loss)]
        let fraction = if total == 0 {
            0.0
        } else {
            (uploaded as f64 / total as f64).clamp(0.0, 1.0)
        };
        Self {
            uploaded,
            total,
            fraction,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BottomOverlay {
    Hidden,
    LoginPrompt { visible: bool },
    UploadProgress(UploadProgress),
    UploadPrompt { unsynced_count: usize, visible: bool },
}

impl BottomOverlay {
    /// Scrolling hides the prompts; a running upload always stays on screen.
    #[must_use]
    pub fn select(snapshot: &UploadSnapshot, login: LoginState, has_scrolled: bool) -> Self {
        if snapshot.unsynced_count == 0 {
            return Self::Hidden;
        }
        if login.is_logged_out() {
            return Self::LoginPrompt {
                visible: !has_scrolled,
            };
        }
        if snapshot.in_progress {
            return Self::UploadProgress(UploadProgress::from_snapshot(snapshot));
        }
        Self::UploadPrompt {
            unsynced_count: snapshot.unsynced_count,
            visible: !has_scrolled,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        match self {
            Self::Hidden => false,
            Self::LoginPrompt { visible } | Self::UploadPrompt { visible, .. } => *visible,
            Self::UploadProgress(_) => true,
        }
    }

    /// Whether pressing the overlay's action would start an upload batch.
    #[must_use]
    pub const fn offers_upload(&self) -> bool {
        matches!(self, Self::UploadPrompt { .. })
    }
}
