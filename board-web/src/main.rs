mod api;
mod app;
mod components;
mod config;
mod containers;
mod pages;
mod routes;
mod session;
mod storage;
mod telemetry;

#[cfg(test)]
mod api_test;

use app::App;
use config::FrontendConfig;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(BoardApp)]
fn board_app() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("Unknown panic");
        let location = info
            .location()
            .map(|location| {
                format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
            })
            .unwrap_or_default();
        web_sys::console::error_1(&format!("Panic: {payload}{location}").into());
    }));

    let config = FrontendConfig::new();
    telemetry::init(&config);
    tracing::info!(api = %config.api_base_url, "starting board client");

    // Mount the app to the document body
    Renderer::<BoardApp>::new().render();
}
