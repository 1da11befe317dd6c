mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: logging, runtime config, then the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("starting Lost & Found frontend");

    leptos::spawn_local(async move {
        let base_url = config::await_api_base_url().await;
        log::info!("runtime config initialized, api at {}", base_url);
    });

    router::mount_app();
}
