use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capabilities::UploadResult;
use crate::config::ViewsConfig;
use crate::model::{Dataset, LoginState, ViewMode};

/// Sent by the shell whenever the screen (re)mounts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MountOptions {
    pub route: String,
    pub screen_height: f64,
    pub taxon_id: Option<u64>,
    /// Whether the host screen wired a sync action.
    pub sync_available: bool,
    pub test_id: Option<String>,
}

// Large variants boxed to keep the enum small.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    // Lifecycle
    Mounted(Box<MountOptions>),
    ConfigChanged(Box<ViewsConfig>),

    // Scroll & layout
    Scrolled { offset_y: f64 },
    EndReached,
    ViewModeSelected(ViewMode),

    // Data
    DatasetChanged(Box<Dataset>),
    LoadingChanged { loading: bool },
    TaxonFilterChanged { taxon_id: Option<u64> },
    ObservationSelected { uuid: Uuid },
    SyncRequested,

    // External state
    LoginStateChanged(LoginState),
    UploadStatusChanged { in_progress: bool },
    UploadRequested,

    // Capability responses
    UploadBatchResponded(Box<UploadResult>),
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mounted(_) => "mounted",
            Self::ConfigChanged(_) => "config_changed",
            Self::Scrolled { .. } => "scrolled",
            Self::EndReached => "end_reached",
            Self::ViewModeSelected(_) => "view_mode_selected",
            Self::DatasetChanged(_) => "dataset_changed",
            Self::LoadingChanged { .. } => "loading_changed",
            Self::TaxonFilterChanged { .. } => "taxon_filter_changed",
            Self::ObservationSelected { .. } => "observation_selected",
            Self::SyncRequested => "sync_requested",
            Self::LoginStateChanged(_) => "login_state_changed",
            Self::UploadStatusChanged { .. } => "upload_status_changed",
            Self::UploadRequested => "upload_requested",
            Self::UploadBatchResponded(_) => "upload_batch_responded",
        }
    }

    /// Emitted at frame rate while the user drags; keep logging quiet.
    #[must_use]
    pub const fn is_high_frequency(&self) -> bool {
        matches!(self, Self::Scrolled { .. })
    }
}
