use client::ApiClient;
use dioxus::prelude::*;

mod format_helpers;
pub mod notify;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = client::config::load_config();

    use_context_provider(|| config.clone());
    use_context_provider(|| ApiClient::from_config(&config.api));
    let mut session = use_context_provider(SessionState::new);

    // Restore the persisted session once; guards wait for this.
    use_future(move || async move {
        session.restore().await;
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Harvest Hub" }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
