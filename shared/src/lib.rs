// lib.rs - Observation views shared core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod body;
pub mod capabilities;
pub mod config;
pub mod event;
pub mod header;
pub mod model;
pub mod overlay;
pub mod scroll;

use serde::{Deserialize, Serialize};

pub use app::App;
pub use body::{BodyView, CollectionView, Footer};
pub use capabilities::{Capabilities, Effect};
pub use config::{ConfigError, ViewsConfig};
pub use crux_core::{render::Render, App as CruxApp};
pub use event::{Event, MountOptions};
pub use header::{BannerStyle, BannerView, HeaderView, ModeToggle, ToolbarView};
pub use model::{
    Dataset, LoginState, Model, ObservationSummary, ScreenContext, UploadSnapshot, ViewMode,
};
pub use overlay::{BottomOverlay, UploadProgress};
pub use scroll::{DiffClamp, ScrollTracker, ScrollUpdate};

/// Height of the collapsible sticky header; the diff-clamp window.
pub const COLLAPSIBLE_HEADER_HEIGHT: f64 = 120.0;
/// Vertical allowances subtracted from the screen height to get the minimum
/// list content height.
pub const LIST_HEADER_ALLOWANCE: f64 = 101.0;
pub const FOOTER_ALLOWANCE: f64 = 75.0;
pub const BUTTON_ROW_ALLOWANCE: f64 = 50.0;
/// Room left under the map for the explore bottom card.
pub const MAP_BOTTOM_MARGIN: f64 = 450.0;
/// Used until the shell reports real screen metrics.
pub const FALLBACK_SCREEN_HEIGHT: f64 = 800.0;
pub const EXPLORE_ROUTE: &str = "Explore";
pub const GRID_COLUMNS: u8 = 2;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub route: String,
    pub is_explore: bool,
    pub view_mode: ViewMode,
    pub login: LoginState,
    pub banner: Option<BannerView>,
    /// Collection bodies place this in their sticky first slot.
    pub header: HeaderView,
    pub body: BodyView,
    pub has_scrolled: bool,
}
