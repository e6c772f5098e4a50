//! Sticky header: explore banner and the mode/sync toolbar.

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};

use crate::model::{LoginState, ViewMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BannerStyle {
    #[default]
    Default,
    /// Light text for legibility over the map.
    MapContrast,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerView {
    pub observation_count: Option<u64>,
    pub label: String,
    pub style: BannerStyle,
}

impl BannerView {
    /// Only the explore screen carries a banner.
    #[must_use]
    pub fn compose(is_explore: bool, mode: ViewMode, total_count: Option<u64>) -> Option<Self> {
        if !is_explore {
            return None;
        }
        let style = if mode == ViewMode::Map {
            BannerStyle::MapContrast
        } else {
            BannerStyle::Default
        };
        Some(Self {
            observation_count: total_count,
            label: format_observation_count(total_count),
            style,
        })
    }
}

/// `"1,234 Observations"`, or just `"Observations"` when the count is unknown.
#[must_use]
pub fn format_observation_count(count: Option<u64>) -> String {
    match count {
        None => "Observations".to_owned(),
        Some(1) => "1 Observation".to_owned(),
        Some(n) => format!("{} Observations", group_thousands(n)),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeToggle {
    pub mode: ViewMode,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarView {
    pub show_sync: bool,
    pub toggles: Vec<ModeToggle>,
}

impl ToolbarView {
    #[must_use]
    pub fn has_toggle(&self, mode: ViewMode) -> bool {
        self.toggles.iter().any(|t| t.mode == mode)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeaderView {
    pub toolbar: ToolbarView,
    pub unsynced_count: usize,
    pub height: f64,
    /// Translation at composition time; live updates arrive through the
    /// animation capability.
    pub translate_y: f64,
}

/// Everything the header depends on. A render with identical inputs reuses
/// the previous [`HeaderView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderInputs {
    pub mode: ViewMode,
    pub login: LoginState,
    pub translate_y: f64,
    pub unsynced_count: usize,
    pub header_height: f64,
    pub sync_available: bool,
    pub is_explore: bool,
}

impl HeaderInputs {
    fn build(&self) -> HeaderView {
        let mut toggles = Vec::with_capacity(3);
        if self.is_explore {
            toggles.push(ViewMode::Map);
        }
        toggles.extend([ViewMode::List, ViewMode::Grid]);

        HeaderView {
            toolbar: ToolbarView {
                show_sync: !self.is_explore && self.login.is_logged_in() && self.sync_available,
                toggles: toggles
                    .into_iter()
                    .map(|mode| ModeToggle {
                        mode,
                        active: mode == self.mode,
                    })
                    .collect(),
            },
            unsynced_count: self.unsynced_count,
            height: self.header_height,
            translate_y: self.translate_y,
        }
    }
}

/// Single-entry memo for the composed header. `view` only gets `&Model`, so
/// the cache uses interior mutability.
#[derive(Debug, Default)]
pub struct HeaderComposer {
    cached: RefCell<Option<(HeaderInputs, HeaderView)>>,
    compositions: Cell<u64>,
}

impl HeaderComposer {
    pub fn compose(&self, inputs: HeaderInputs) -> HeaderView {
        let mut cached = self.cached.borrow_mut();
        if let Some((previous, view)) = cached.as_ref() {
            if *previous == inputs {
                return view.clone();
            }
        }

        let view = inputs.build();
        self.compositions.set(self.compositions.get() + 1);
        *cached = Some((inputs, view.clone()));
        view
    }

    /// Number of times the header was actually rebuilt.
    #[must_use]
    pub fn compositions(&self) -> u64 {
        self.compositions.get()
    }
}
