// Timer collaborator: drives the tracker with a one-second evaluation tick
// and a second, independent one-second poll for tooltip dismissal that is
// only armed while a tooltip is showing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use super::config::Settings;
use super::tracker::EventTracker;

pub struct TickerHandle {
    stop_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Stop the loop and wait for it to wind down. Any showing tooltip is
    /// hidden before the task exits.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(()).await;
        let _ = self.task.await;
    }
}

/// Spawn the tracker loop. Settings are re-read under the lock every tick so
/// live changes take effect on the next evaluation.
pub fn start(mut tracker: EventTracker, settings: Arc<Mutex<Settings>>) -> TickerHandle {
    let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);

    let task = tokio::spawn(async move {
        let mut tick = interval(Duration::from_secs(1));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut tooltip_poll = interval(Duration::from_secs(1));
        tooltip_poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let snapshot = settings.lock().unwrap().clone();
                    tracker.tick(Utc::now(), &snapshot);
                }
                _ = tooltip_poll.tick(), if tracker.tooltip_active() => {
                    tracker.poll_tooltip();
                }
                _ = stop_rx.recv() => break,
            }
        }

        tracker.clear_tooltip();
    });

    TickerHandle { stop_tx, task }
}
