#![allow(dead_code)]

use shared::capabilities::{AnimationOperation, FeedOperation};
use shared::{Dataset, Effect, Event, MountOptions, ObservationSummary};
use uuid::Uuid;

pub fn mount(route: &str) -> Event {
    Event::Mounted(Box::new(MountOptions {
        route: route.into(),
        screen_height: 800.0,
        taxon_id: Some(47_126),
        sync_available: true,
        test_id: Some(format!("{route}.observations")),
    }))
}

pub fn observations(n: usize) -> Vec<ObservationSummary> {
    (0..n)
        .map(|i| ObservationSummary {
            uuid: Uuid::new_v4(),
            photo_url: Some(format!("https://static.example.org/photos/{i}/medium.jpg")),
            taxon_name: Some("Danaus plexippus".into()),
            common_name: Some("Monarch".into()),
        })
        .collect()
}

pub fn dataset(shown: usize, unsynced: usize) -> Event {
    let unuploaded = observations(unsynced);
    Event::DatasetChanged(Box::new(Dataset {
        observations: observations(shown),
        all_to_upload: unuploaded.clone(),
        unuploaded,
        loading: false,
        total_count: None,
    }))
}

pub fn renders(effects: &[Effect]) -> bool {
    effects.iter().any(|e| matches!(e, Effect::Render(_)))
}

pub fn header_translations(effects: &[Effect]) -> Vec<f64> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Animation(request) => match request.operation {
                AnimationOperation::TranslateHeader { translate_y } => Some(translate_y),
            },
            _ => None,
        })
        .collect()
}

pub fn feed_ops(effects: &[Effect]) -> Vec<FeedOperation> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Feed(request) => Some(request.operation),
            _ => None,
        })
        .collect()
}
