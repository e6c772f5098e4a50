use tracing::{debug, info, instrument, warn};

use crate::body::BodyInputs;
use crate::capabilities::Capabilities;
use crate::event::{Event, MountOptions};
use crate::header::{BannerView, HeaderInputs};
use crate::model::{Model, ViewMode};
use crate::overlay::BottomOverlay;
use crate::ViewModel;

#[derive(Default)]
pub struct App;

impl App {
    fn mount(model: &mut Model, options: MountOptions) {
        let MountOptions {
            route,
            screen_height,
            taxon_id,
            sync_available,
            test_id,
        } = options;

        model.set_route(route);
        model.screen_height = if screen_height.is_finite() && screen_height > 0.0 {
            screen_height
        } else {
            warn!(screen_height, "invalid screen height, using fallback");
            model.config.fallback_screen_height
        };
        model.taxon_id = taxon_id;
        model.sync_available = sync_available;
        model.list_test_id = test_id;

        // A remount starts from a fresh list at the top.
        model.view_mode = ViewMode::default();
        model.scroll.reset();
        model.end_reached.rearm();
    }

    fn current_overlay(model: &Model) -> BottomOverlay {
        BottomOverlay::select(
            &model.upload_snapshot(),
            model.login,
            model.scroll.has_scrolled(),
        )
    }

    fn handle_scroll(model: &mut Model, offset_y: f64, caps: &Capabilities) {
        if !model.view_mode.is_scrollable() {
            return;
        }

        let update = model.scroll.sample(offset_y);
        if update.moved {
            model.end_reached.rearm();
        }
        if update.translate_changed {
            caps.animation.translate_header(model.scroll.translate_y());
        }
        if update.has_scrolled_changed {
            debug!(has_scrolled = model.scroll.has_scrolled(), "scroll state flipped");
            caps.render.render();
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    #[instrument(skip_all, fields(event = event.name()))]
    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        if !event.is_high_frequency() {
            debug!("handling event");
        }

        match event {
            Event::Mounted(options) => {
                Self::mount(model, *options);
                info!(
                    explore = model.screen.is_explore(),
                    screen_height = model.screen_height,
                    "observation views mounted"
                );
                caps.animation.translate_header(model.scroll.translate_y());
                caps.render.render();
            }

            Event::ConfigChanged(config) => match config.validate() {
                Ok(()) => {
                    model.apply_config(*config);
                    caps.animation.translate_header(model.scroll.translate_y());
                    caps.render.render();
                }
                Err(e) => {
                    warn!(error = %e, "rejected views config");
                }
            },

            Event::Scrolled { offset_y } => Self::handle_scroll(model, offset_y, caps),

            Event::EndReached => {
                if !model.view_mode.is_scrollable() {
                    debug!("end reached while on map, ignoring");
                } else if model.end_reached.fire() {
                    caps.feed.load_next_page();
                } else {
                    debug!("end reached without new movement, suppressed");
                }
            }

            Event::ViewModeSelected(mode) => {
                if model.set_view_mode(mode) {
                    info!(mode = %mode, "view mode changed");
                    caps.animation.translate_header(model.scroll.translate_y());
                    caps.render.render();
                }
            }

            Event::DatasetChanged(dataset) => {
                model.dataset = *dataset;
                model.end_reached.rearm();
                caps.render.render();
            }

            Event::LoadingChanged { loading } => {
                model.dataset.loading = loading;
                caps.render.render();
            }

            Event::TaxonFilterChanged { taxon_id } => {
                model.taxon_id = taxon_id;
                caps.render.render();
            }

            Event::ObservationSelected { uuid } => match model.dataset.find(uuid) {
                Some(observation) => caps.navigation.observation_details(observation.clone()),
                None => warn!(%uuid, "selected observation is not in the dataset"),
            },

            Event::SyncRequested => {
                if model.can_sync() {
                    caps.feed.sync();
                } else {
                    warn!(login = ?model.login, "sync requested but not offered");
                }
            }

            Event::LoginStateChanged(login) => {
                model.login = login;
                caps.render.render();
            }

            Event::UploadStatusChanged { in_progress } => {
                model.upload_in_progress = in_progress;
                caps.render.render();
            }

            Event::UploadRequested => {
                if Self::current_overlay(model).offers_upload() {
                    info!(
                        unsynced = model.dataset.unsynced_count(),
                        "starting upload batch"
                    );
                    caps.upload
                        .start_batch(|result| Event::UploadBatchResponded(Box::new(result)));
                } else {
                    warn!("upload requested but no upload is on offer");
                }
            }

            Event::UploadBatchResponded(result) => match *result {
                Ok(status) => {
                    model.upload_in_progress = status.in_progress;
                    caps.render.render();
                }
                Err(e) => {
                    warn!(error = %e, retryable = e.is_retryable(), "upload batch did not start");
                }
            },
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        let is_explore = model.screen.is_explore();
        let snapshot = model.upload_snapshot();

        let header = model.header.compose(HeaderInputs {
            mode: model.view_mode,
            login: model.login,
            translate_y: model.scroll.translate_y(),
            unsynced_count: snapshot.unsynced_count,
            header_height: model.scroll.header_height(),
            sync_available: model.sync_available,
            is_explore,
        });

        let body = BodyInputs {
            mode: model.view_mode,
            dataset: &model.dataset,
            login: model.login,
            is_explore,
            taxon_id: model.taxon_id,
            screen_height: model.screen_height,
            config: &model.config,
            test_id: model.list_test_id.as_deref(),
        }
        .render(Self::current_overlay(model));

        ViewModel {
            route: model.route.clone(),
            is_explore,
            view_mode: model.view_mode,
            login: model.login,
            banner: BannerView::compose(is_explore, model.view_mode, model.dataset.total_count),
            header,
            body,
            has_scrolled: model.scroll.has_scrolled(),
        }
    }
}
