use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod error;
mod logging;

use components::AppShell;
use config::PlayerConfig;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    logging::init_logging(&PlayerConfig::load());
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(PlayerConfig::load);

    rsx! {
        document::Meta { name: "theme-color", content: "#09090b" }
        document::Stylesheet { href: PLAYER_CSS }

        AppShell { config }
    }
}
