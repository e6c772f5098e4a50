mod common;

use assert_matches::assert_matches;
use crux_core::testing::AppTester;
use shared::capabilities::{
    FeedOperation, NavigationOperation, UploadError, UploadOperation, UploadStatus,
};
use shared::{
    App, BottomOverlay, Dataset, Effect, Event, Footer, LoginState, Model, ViewMode, ViewsConfig,
};

use common::{dataset, feed_ops, header_translations, mount, renders};

const MY_OBSERVATIONS: &str = "ObsList";

fn overlay(app: &AppTester<App, Effect>, model: &Model) -> BottomOverlay {
    app.view(model)
        .body
        .as_collection()
        .expect("collection body")
        .overlay
        .clone()
}

#[test]
fn nothing_to_sync_shows_no_overlay() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.update(dataset(3, 0), &mut model);

    for login in [LoginState::LoggedIn, LoginState::LoggedOut, LoginState::Unknown] {
        app.update(Event::LoginStateChanged(login), &mut model);
        for in_progress in [false, true] {
            app.update(Event::UploadStatusChanged { in_progress }, &mut model);
            assert_eq!(overlay(&app, &model), BottomOverlay::Hidden);
        }
    }
}

#[test]
fn logged_out_user_with_pending_items_sees_login_prompt() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.update(dataset(5, 5), &mut model);
    app.update(Event::LoginStateChanged(LoginState::LoggedOut), &mut model);

    assert_eq!(
        overlay(&app, &model),
        BottomOverlay::LoginPrompt { visible: true }
    );

    app.update(Event::Scrolled { offset_y: 40.0 }, &mut model);
    assert_eq!(
        overlay(&app, &model),
        BottomOverlay::LoginPrompt { visible: false }
    );
}

#[test]
fn running_upload_stays_visible_while_scrolled() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.update(dataset(5, 5), &mut model);
    app.update(Event::LoginStateChanged(LoginState::LoggedIn), &mut model);
    app.update(Event::UploadStatusChanged { in_progress: true }, &mut model);
    app.update(Event::Scrolled { offset_y: 250.0 }, &mut model);

    let overlay = overlay(&app, &model);
    assert_matches!(overlay, BottomOverlay::UploadProgress(progress) if progress.total == 5);
    assert!(overlay.is_visible());
}

#[test]
fn upload_prompt_starts_batch_through_bridge() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.update(dataset(2, 2), &mut model);
    app.update(Event::LoginStateChanged(LoginState::LoggedIn), &mut model);
    assert_eq!(
        overlay(&app, &model),
        BottomOverlay::UploadPrompt {
            unsynced_count: 2,
            visible: true
        }
    );

    let update = app.update(Event::UploadRequested, &mut model);
    let mut request = update
        .effects
        .into_iter()
        .find_map(|e| match e {
            Effect::Upload(request) => Some(request),
            _ => None,
        })
        .expect("upload bridge asked to start a batch");
    assert_eq!(request.operation, UploadOperation::StartBatch);

    let update = app
        .resolve(&mut request, Ok(UploadStatus { in_progress: true }))
        .expect("upload response resolves");
    for event in update.events {
        let update = app.update(event, &mut model);
        assert!(renders(&update.effects));
    }

    assert!(model.upload_in_progress);
    assert_matches!(overlay(&app, &model), BottomOverlay::UploadProgress(_));
}

#[test]
fn failed_batch_start_keeps_prompt() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.update(dataset(2, 2), &mut model);
    app.update(Event::LoginStateChanged(LoginState::LoggedIn), &mut model);

    let update = app.update(
        Event::UploadBatchResponded(Box::new(Err(UploadError::Offline))),
        &mut model,
    );
    assert!(update.effects.is_empty());
    assert!(!model.upload_in_progress);
    assert!(overlay(&app, &model).offers_upload());
}

#[test]
fn upload_request_without_offer_is_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.update(dataset(2, 2), &mut model);
    app.update(Event::LoginStateChanged(LoginState::LoggedOut), &mut model);

    let update = app.update(Event::UploadRequested, &mut model);
    assert!(!update
        .effects
        .iter()
        .any(|e| matches!(e, Effect::Upload(_))));
}

#[test]
fn empty_state_only_for_known_logged_out_users() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.update(dataset(0, 0), &mut model);

    let view = app.view(&model);
    assert!(!view.body.as_collection().unwrap().show_empty_state);

    app.update(Event::LoginStateChanged(LoginState::LoggedOut), &mut model);
    let view = app.view(&model);
    assert!(view.body.as_collection().unwrap().show_empty_state);

    app.update(Event::LoadingChanged { loading: true }, &mut model);
    let view = app.view(&model);
    let collection = view.body.as_collection().unwrap();
    assert!(!collection.show_empty_state);
    assert_eq!(collection.footer, Footer::Loading);

    app.update(Event::LoadingChanged { loading: false }, &mut model);
    app.update(Event::LoginStateChanged(LoginState::LoggedIn), &mut model);
    let view = app.view(&model);
    assert!(!view.body.as_collection().unwrap().show_empty_state);
}

#[test]
fn grid_with_two_items_keeps_minimum_height() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.update(dataset(2, 0), &mut model);
    app.update(Event::ViewModeSelected(ViewMode::Grid), &mut model);

    let view = app.view(&model);
    let collection = view.body.as_collection().unwrap();
    assert_eq!(collection.columns, 2);
    assert_eq!(collection.rows.len(), 1);
    assert_eq!(collection.rows[0].len(), 2);
    let expected = 800.0 - (101.0 + 75.0 + 50.0);
    assert!((collection.min_content_height - expected).abs() < f64::EPSILON);
}

#[test]
fn personal_toolbar_offers_sync_when_logged_in() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    let view = app.view(&model);
    assert!(!view.header.toolbar.show_sync);
    assert!(!view.header.toolbar.has_toggle(ViewMode::Map));
    assert!(view.header.toolbar.has_toggle(ViewMode::List));
    assert!(view.header.toolbar.has_toggle(ViewMode::Grid));
    assert!(view.banner.is_none());

    app.update(Event::LoginStateChanged(LoginState::LoggedIn), &mut model);
    assert!(app.view(&model).header.toolbar.show_sync);

    let update = app.update(Event::SyncRequested, &mut model);
    assert_eq!(feed_ops(&update.effects), vec![FeedOperation::Sync]);
}

#[test]
fn header_is_not_rebuilt_for_unrelated_changes() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.view(&model);
    let built = model.header.compositions();

    app.update(Event::LoadingChanged { loading: true }, &mut model);
    app.update(Event::TaxonFilterChanged { taxon_id: Some(3) }, &mut model);
    app.view(&model);
    assert_eq!(model.header.compositions(), built);

    app.update(Event::LoginStateChanged(LoginState::LoggedIn), &mut model);
    app.view(&model);
    assert_eq!(model.header.compositions(), built + 1);
}

#[test]
fn selecting_an_observation_navigates_with_a_copy() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let items = common::observations(3);
    let picked = items[1].clone();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.update(
        Event::DatasetChanged(Box::new(Dataset {
            observations: items,
            ..Dataset::default()
        })),
        &mut model,
    );

    let update = app.update(
        Event::ObservationSelected { uuid: picked.uuid },
        &mut model,
    );
    let navigation = update
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::Navigation(request) => Some(request.operation.clone()),
            _ => None,
        })
        .expect("navigation requested");
    assert_eq!(
        navigation,
        NavigationOperation::ObservationDetails {
            observation: picked
        }
    );

    let update = app.update(
        Event::ObservationSelected {
            uuid: uuid::Uuid::new_v4(),
        },
        &mut model,
    );
    assert!(update.effects.is_empty());
}

#[test]
fn invalid_config_is_rejected() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(
        Event::ConfigChanged(Box::new(ViewsConfig {
            collapsible_header_height: f64::NAN,
            ..ViewsConfig::default()
        })),
        &mut model,
    );
    assert!(update.effects.is_empty());
    assert_eq!(model.config, ViewsConfig::default());

    let update = app.update(
        Event::ConfigChanged(Box::new(ViewsConfig {
            collapsible_header_height: 64.0,
            ..ViewsConfig::default()
        })),
        &mut model,
    );
    assert!(renders(&update.effects));
    app.update(Event::Scrolled { offset_y: 500.0 }, &mut model);
    assert!((app.view(&model).header.translate_y + 64.0).abs() < f64::EPSILON);
}

#[test]
fn resizing_header_while_scrolled_keeps_overlay_hidden() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(mount(MY_OBSERVATIONS), &mut model);
    app.update(dataset(4, 2), &mut model);
    app.update(Event::LoginStateChanged(LoginState::LoggedIn), &mut model);
    app.update(Event::Scrolled { offset_y: 500.0 }, &mut model);
    assert_eq!(
        overlay(&app, &model),
        BottomOverlay::UploadPrompt {
            unsynced_count: 2,
            visible: false
        }
    );

    let update = app.update(
        Event::ConfigChanged(Box::new(ViewsConfig {
            collapsible_header_height: 64.0,
            ..ViewsConfig::default()
        })),
        &mut model,
    );
    assert_eq!(header_translations(&update.effects), vec![-64.0]);

    let view = app.view(&model);
    assert!(view.has_scrolled);
    assert_eq!(
        overlay(&app, &model),
        BottomOverlay::UploadPrompt {
            unsynced_count: 2,
            visible: false
        }
    );

    // Still a delta from 500, not a jump from the top.
    let update = app.update(Event::Scrolled { offset_y: 490.0 }, &mut model);
    assert_eq!(header_translations(&update.effects), vec![-54.0]);
    assert!(!renders(&update.effects));
}
