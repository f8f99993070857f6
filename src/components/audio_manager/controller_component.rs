// Dioxus wiring: exposes the controller to display surfaces and boots the session.
use super::{AutoplayUnlock, GestureSource, PlayerSnapshot, SiteController, Spawner};
use crate::api::MetingCatalog;
use crate::config::PlayerConfig;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use super::web_backend::{bind_media_events, DocumentGestures};
#[cfg(not(target_arch = "wasm32"))]
use super::native_bridge::poll_media_events;
#[cfg(not(target_arch = "wasm32"))]
use dioxus::core::spawn_forever;
#[cfg(not(target_arch = "wasm32"))]
use super::RelayGestures;

/// Latest session snapshot. Read-only for display surfaces.
#[derive(Clone, Copy)]
pub struct PlayerState(pub Signal<PlayerSnapshot>);

/// Transport commands for display surfaces; their only way to change playback.
#[derive(Clone, PartialEq)]
pub struct PlayerCommands {
    controller: SiteController,
}

impl PlayerCommands {
    pub fn new(controller: SiteController) -> Self {
        Self { controller }
    }

    pub fn toggle_play(&self) {
        let controller = self.controller.clone();
        spawn(async move { controller.toggle_play().await });
    }

    pub fn next(&self) {
        let controller = self.controller.clone();
        spawn(async move { controller.next().await });
    }

    pub fn previous(&self) {
        let controller = self.controller.clone();
        spawn(async move { controller.previous().await });
    }
}

/// Spawner usable from raw DOM callbacks as well as component handlers.
#[cfg(target_arch = "wasm32")]
pub fn platform_spawner() -> Spawner {
    Rc::new(|task| wasm_bindgen_futures::spawn_local(task))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_spawner() -> Spawner {
    Rc::new(|task| {
        let _ = spawn_forever(task);
    })
}

/// Session bootstrap: mirrors snapshots into `PlayerState`, routes media
/// events, installs autoplay unlock and fetches the playlist once.
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<SiteController>();
    let config = use_context::<PlayerConfig>();
    let state = use_context::<PlayerState>().0;

    #[cfg(target_arch = "wasm32")]
    let gestures: Rc<dyn GestureSource> = Rc::new(DocumentGestures);
    #[cfg(not(target_arch = "wasm32"))]
    let gestures: Rc<dyn GestureSource> = Rc::new(use_context::<RelayGestures>());

    let _subscription = use_hook({
        let controller = controller.clone();
        move || {
            let runtime = Runtime::current();
            Rc::new(controller.subscribe(move |snapshot| {
                let _guard = RuntimeGuard::new(runtime.clone());
                let mut state = state;
                state.set(snapshot.clone());
            }))
        }
    });

    #[cfg(target_arch = "wasm32")]
    let _media_events = use_hook({
        let controller = controller.clone();
        move || Rc::new(bind_media_events(&controller))
    });

    #[cfg(not(target_arch = "wasm32"))]
    use_hook({
        let controller = controller.clone();
        move || {
            spawn(poll_media_events(controller));
        }
    });

    let _unlock = use_hook({
        let controller = controller.clone();
        move || Rc::new(AutoplayUnlock::install(controller, gestures, platform_spawner()))
    });

    use_hook(move || {
        let catalog = MetingCatalog::new(config.catalog_url.clone(), config.fetch_timeout_secs);
        spawn(async move {
            controller.initialize(&catalog).await;
        });
    });

    rsx! {}
}
