/// Roster Web Admin Interface entry point
///
/// Client-side rendered; `trunk serve` builds and serves this binary.

use leptos::*;
use log::warn;

use roster_web::app::App;
use roster_web::config::AppConfig;

pub fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::from_build_env();
    let config = loaded.clone().unwrap_or_default();

    if let Some(level) = config.log_level.to_level() {
        // Only fails if a logger is already installed.
        let _ = console_log::init_with_level(level);
    }
    if let Err(e) = loaded {
        warn!("Ignoring build-time configuration: {}", e);
    }

    mount_to_body(move || view! { <App config=config.clone()/> })
}
