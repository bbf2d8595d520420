// Ampup Landing Page — entry point

use ampup_landing::{SiteConfig, logging};

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::default();
    if let Err(err) = logging::init(config.log_level) {
        web_sys::console::warn_1(&format!("logging disabled: {err}").into());
    }
    tracing::info!("ampup-landing v{}", env!("CARGO_PKG_VERSION"));

    ampup_landing::mount(config);
}
