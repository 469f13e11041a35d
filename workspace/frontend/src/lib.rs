use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use crate::common::toast::ToastProvider;
use components::energy::EnergyComparison;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <main class="container mx-auto p-4">
                <h1 class="text-2xl font-semibold mb-4">{"Before/after energy usage"}</h1>
                <EnergyComparison />
            </main>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Retroplan Frontend Application Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Plan UUID: {}", settings.plan_uuid);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
