use client::RegistryClient;
use dioxus::prelude::*;
use shared_types::ApiSettings;

pub mod format_helpers;
mod forms;
mod hooks;
mod notify;
mod routes;
use routes::Route;

/// Backend access shared by every screen.
#[derive(Clone)]
pub struct Registry {
    pub client: RegistryClient,
    pub settings: &'static ApiSettings,
}

fn main() {
    dioxus::logger::initialize_default();
    client::load_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let registry = use_hook(|| {
        let settings = client::api_settings();
        RegistryClient::new(settings)
            .map(|client| Registry { client, settings })
            .map_err(|e| e.user_message())
    });

    match registry {
        Ok(registry) => {
            use_context_provider(|| registry);
            rsx! {
                shared_ui::ToastProvider {
                    Router::<Route> {}
                }
            }
        }
        Err(message) => {
            tracing::error!(%message, "Registry client could not be built");
            rsx! {
                div { class: "startup-error",
                    h1 { "Konfigurasi tidak valid" }
                    p { "{message}" }
                }
            }
        }
    }
}
