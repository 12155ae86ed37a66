// Demo wiring: tracks the rotation with stdout sinks until Ctrl-C.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::core::catalog::EVENTS;
use crate::core::config::ConfigManager;
use crate::core::runner;
use crate::core::sinks::{NotificationSink, TooltipSink};
use crate::core::tracker::EventTracker;

struct StdoutNotifier;

impl NotificationSink for StdoutNotifier {
    fn notify(&mut self, title: &str, message: &str) {
        println!("[{}] {}", title, message);
    }
}

struct StdoutTooltip;

impl TooltipSink for StdoutTooltip {
    fn show_tooltip(&mut self, text: &str) {
        println!("[tooltip] {}", text);
    }
    fn hide_tooltip(&mut self) {
        println!("[tooltip] hidden");
    }
}

pub fn run() {
    let config_manager = ConfigManager::new(PathBuf::from("."));
    let settings = Arc::new(Mutex::new(config_manager.load()));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");

    runtime.block_on(async {
        let snapshot = settings.lock().unwrap().clone();
        let tracker = EventTracker::new(
            EVENTS.clone(),
            &snapshot,
            Utc::now(),
            Box::new(StdoutNotifier),
            Box::new(StdoutTooltip),
            // No overlay in the demo; tooltips stay suppressed
            None,
        );

        let next = tracker.current();
        println!(
            "Next event: {} at {} ({})",
            next.name, next.start_time, next.location
        );

        let handle = runner::start(tracker, settings.clone());
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
        handle.stop().await;
    });
}
