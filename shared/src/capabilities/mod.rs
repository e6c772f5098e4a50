mod animation;
mod feed;
mod navigation;
mod upload;

pub use self::animation::{Animation, AnimationOperation};
pub use self::feed::{Feed, FeedOperation};
pub use self::navigation::{Navigation, NavigationOperation};
pub use self::upload::{Upload, UploadError, UploadOperation, UploadResult, UploadStatus};

// Crux's built-in Render covers view updates; no wrapper needed.
pub use crux_core::render::Render;

use crate::event::Event;

#[derive(crux_core::macros::Effect)]
#[effect(app = "crate::App")]
pub struct Capabilities {
    pub render: Render<Event>,
    pub feed: Feed<Event>,
    pub upload: Upload<Event>,
    pub navigation: Navigation<Event>,
    pub animation: Animation<Event>,
}
