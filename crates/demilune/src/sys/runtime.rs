use crate::config;
use crate::events::AppEvent;
use crate::sys::server;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Builder;

/// Runs the control socket and config watcher on a dedicated tokio thread.
/// Both report into `tx`; the GUI side drains it.
pub fn start_background_services(tx: Sender<AppEvent>) {
    let spawned = thread::Builder::new()
        .name("demilune-services".into())
        .spawn(move || {
            let rt = match Builder::new_multi_thread().enable_all().build() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create Tokio runtime: {}", e);
                    return;
                }
            };

            rt.block_on(async move {
                tokio::join!(server::run_server(tx.clone()), config::run_async_watcher(tx));
                log::warn!("Background services exited");
            });
        });

    if let Err(e) = spawned {
        log::error!("Failed to spawn background thread: {}", e);
    }
}
