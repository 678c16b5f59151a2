use demilune::config;
use demilune::gui::app::AppModel;
use demilune::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let config = config::load_or_default();
    log::debug!(
        "Starting with {} items anchored {}",
        config.items.len(),
        config.orientation
    );

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.demilune.demilune");

    app.run::<AppModel>((config, rx));
}
