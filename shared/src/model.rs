use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::body::EndReachedLatch;
use crate::config::ViewsConfig;
use crate::header::HeaderComposer;
use crate::scroll::ScrollTracker;

/// An item of the displayed collection. Owned by the data source; the core
/// only reads it and hands copies to the shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSummary {
    pub uuid: Uuid,
    pub photo_url: Option<String>,
    pub taxon_name: Option<String>,
    pub common_name: Option<String>,
}

impl ObservationSummary {
    #[must_use]
    pub fn new(uuid: Uuid) -> Self {
        Self {
            uuid,
            photo_url: None,
            taxon_name: None,
            common_name: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
    Map,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
            Self::Map => "map",
        }
    }

    /// Columns of the scrollable layout; `None` for the map, which does not scroll.
    #[must_use]
    pub const fn columns(self) -> Option<u8> {
        match self {
            Self::List => Some(1),
            Self::Grid => Some(crate::GRID_COLUMNS),
            Self::Map => None,
        }
    }

    #[must_use]
    pub const fn is_scrollable(self) -> bool {
        self.columns().is_some()
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state login signal. `Unknown` means the provider has not answered yet
/// and must never be read as logged out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoginState {
    LoggedIn,
    LoggedOut,
    #[default]
    Unknown,
}

impl LoginState {
    #[must_use]
    pub const fn is_logged_in(self) -> bool {
        matches!(self, Self::LoggedIn)
    }

    #[must_use]
    pub const fn is_logged_out(self) -> bool {
        matches!(self, Self::LoggedOut)
    }
}

impl From<Option<bool>> for LoginState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::LoggedIn,
            Some(false) => Self::LoggedOut,
            None => Self::Unknown,
        }
    }
}

/// The hosting screen. Only the explore feed is special-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "route", rename_all = "snake_case")]
pub enum ScreenContext {
    Explore,
    Other(String),
}

impl ScreenContext {
    #[must_use]
    pub fn from_route(route: &str, explore_route: &str) -> Self {
        if route == explore_route {
            Self::Explore
        } else {
            Self::Other(route.to_owned())
        }
    }

    #[must_use]
    pub const fn is_explore(&self) -> bool {
        matches!(self, Self::Explore)
    }
}

impl Default for ScreenContext {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// Everything the data source hands over in one go.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub observations: Vec<ObservationSummary>,
    pub unuploaded: Vec<ObservationSummary>,
    pub all_to_upload: Vec<ObservationSummary>,
    pub loading: bool,
    pub total_count: Option<u64>,
}

impl Dataset {
    #[must_use]
    pub fn unsynced_count(&self) -> usize {
        self.unuploaded.len()
    }

    #[must_use]
    pub fn find(&self, uuid: Uuid) -> Option<&ObservationSummary> {
        self.observations.iter().find(|obs| obs.uuid == uuid)
    }
}

/// Upload state as seen at view time. Counts come from the dataset and the
/// in-progress flag from the upload bridge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSnapshot {
    pub unsynced_count: usize,
    pub batch_size: usize,
    pub in_progress: bool,
}

#[derive(Debug)]
pub struct Model {
    pub config: ViewsConfig,
    /// Route name the host mounted us under, kept so a new explore route can
    /// reclassify the screen.
    pub route: String,
    pub screen: ScreenContext,
    pub screen_height: f64,
    pub sync_available: bool,
    pub taxon_id: Option<u64>,
    pub list_test_id: Option<String>,

    pub view_mode: ViewMode,
    pub scroll: ScrollTracker,
    pub end_reached: EndReachedLatch,

    pub dataset: Dataset,
    pub login: LoginState,
    /// Last value reported by the upload bridge.
    pub upload_in_progress: bool,

    pub header: HeaderComposer,
}

impl Default for Model {
    fn default() -> Self {
        Self::with_config(ViewsConfig::default())
    }
}

impl Model {
    #[must_use]
    pub fn with_config(config: ViewsConfig) -> Self {
        Self {
            screen_height: config.fallback_screen_height,
            scroll: ScrollTracker::new(config.collapsible_header_height),
            config,
            route: String::new(),
            screen: ScreenContext::default(),
            sync_available: false,
            taxon_id: None,
            list_test_id: None,
            view_mode: ViewMode::default(),
            end_reached: EndReachedLatch::default(),
            dataset: Dataset::default(),
            login: LoginState::default(),
            upload_in_progress: false,
            header: HeaderComposer::default(),
        }
    }

    /// Replaces the mode. Returns whether anything changed; a real change
    /// starts the new body from the top.
    pub fn set_view_mode(&mut self, next: ViewMode) -> bool {
        if self.view_mode == next {
            return false;
        }
        self.view_mode = next;
        self.scroll.reset();
        self.end_reached.rearm();
        true
    }

    /// Records the mounted route and classifies the screen against the
    /// configured explore route.
    pub fn set_route(&mut self, route: String) {
        self.screen = ScreenContext::from_route(&route, &self.config.explore_route);
        self.route = route;
    }

    pub fn apply_config(&mut self, config: ViewsConfig) {
        if config.collapsible_header_height != self.config.collapsible_header_height {
            self.scroll.resize(config.collapsible_header_height);
        }
        self.screen = ScreenContext::from_route(&self.route, &config.explore_route);
        self.config = config;
    }

    #[must_use]
    pub fn upload_snapshot(&self) -> UploadSnapshot {
        UploadSnapshot {
            unsynced_count: self.dataset.unsynced_count(),
            batch_size: self.dataset.all_to_upload.len(),
            in_progress: self.upload_in_progress,
        }
    }

    /// The sync trigger lives only on personal screens, for signed-in users,
    /// and only when the host wired a sync action.
    #[must_use]
    pub fn can_sync(&self) -> bool {
        self.sync_available && !self.screen.is_explore() && self.login.is_logged_in()
    }
}
