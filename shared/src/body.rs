use serde::{Deserialize, Serialize};

use crate::config::ViewsConfig;
use crate::model::{Dataset, LoginState, ObservationSummary, ViewMode};
use crate::overlay::BottomOverlay;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Footer {
    Loading,
    Spacer,
    /// Logged-out users get no footer chrome at all.
    Blank,
}

impl Footer {
    #[must_use]
    pub const fn select(loading: bool, login: LoginState) -> Self {
        if loading {
            Self::Loading
        } else if login.is_logged_out() {
            Self::Blank
        } else {
            Self::Spacer
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionView {
    pub columns: u8,
    pub rows: Vec<Vec<ObservationSummary>>,
    pub item_count: usize,
    /// Index of the sticky header slot.
    pub sticky_header_index: usize,
    pub footer: Footer,
    pub show_empty_state: bool,
    pub min_content_height: f64,
    pub overlay: BottomOverlay,
    pub test_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyView {
    Map { taxon_id: Option<u64>, height: f64 },
    Collection(Box<CollectionView>),
}

impl BodyView {
    #[must_use]
    pub fn as_collection(&self) -> Option<&CollectionView> {
        match self {
            Self::Collection(collection) => Some(collection),
            Self::Map { .. } => None,
        }
    }
}

/// Inputs of the body renderer, borrowed from the model at view time.
#[derive(Debug, Clone, Copy)]
pub struct BodyInputs<'a> {
    pub mode: ViewMode,
    pub dataset: &'a Dataset,
    pub login: LoginState,
    pub is_explore: bool,
    pub taxon_id: Option<u64>,
    pub screen_height: f64,
    pub config: &'a ViewsConfig,
    pub test_id: Option<&'a str>,
}

impl BodyInputs<'_> {
    /// The map replaces the whole scrollable body, overlay included.
    #[must_use]
    pub fn render(&self, overlay: BottomOverlay) -> BodyView {
        let Some(columns) = self.mode.columns() else {
            return BodyView::Map {
                taxon_id: self.taxon_id,
                height: self.config.map_height(self.screen_height),
            };
        };

        let observations = &self.dataset.observations;
        let rows = observations
            .chunks(usize::from(columns))
            .map(<[ObservationSummary]>::to_vec)
            .collect();

        BodyView::Collection(Box::new(CollectionView {
            columns,
            rows,
            item_count: observations.len(),
            sticky_header_index: 0,
            footer: Footer::select(self.dataset.loading, self.login),
            show_empty_state: shows_empty_state(
                observations.is_empty(),
                self.login,
                self.is_explore,
                self.dataset.loading,
            ),
            min_content_height: self.config.min_content_height(self.screen_height),
            overlay,
            test_id: self.test_id.map(str::to_owned),
        }))
    }
}

/// The personalised empty state is for known-logged-out users on personal
/// screens only, and never while a page is loading.
#[must_use]
pub const fn shows_empty_state(
    is_empty: bool,
    login: LoginState,
    is_explore: bool,
    loading: bool,
) -> bool {
    is_empty && login.is_logged_out() && !is_explore && !loading
}

/// Forwards one end-of-list signal, then stays closed until the list moves or
/// its content changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndReachedLatch {
    armed: bool,
}

impl Default for EndReachedLatch {
    fn default() -> Self {
        Self { armed: true }
    }
}

impl EndReachedLatch {
    /// Returns `true` if the signal should be forwarded.
    pub fn fire(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }

    pub fn rearm(&mut self) {
        self.armed = true;
    }
}
