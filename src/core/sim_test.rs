// End-to-end simulation: drive the tracker second by second across a full
// event transition, with a live settings change mid-cycle.

use std::sync::{Arc, Mutex};

use chrono::TimeDelta;

use super::catalog::EVENTS;
use super::config::Settings;
use super::resolver::SCHEDULE_ANCHOR;
use super::sinks::{NotificationSink, TooltipSink};
use super::tracker::EventTracker;

#[derive(Default)]
struct CountingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl NotificationSink for CountingNotifier {
    fn notify(&mut self, _title: &str, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

struct NullTooltip;
impl TooltipSink for NullTooltip {
    fn show_tooltip(&mut self, _text: &str) {}
    fn hide_tooltip(&mut self) {}
}

#[test]
fn test_full_cycle_with_live_lead_change() {
    let mut settings = Settings {
        notify_start: true,
        notify_start_seconds: 60,
        ..Settings::default()
    };

    let session_start = *SCHEDULE_ANCHOR + TimeDelta::hours(100) + TimeDelta::minutes(30);
    let notifier = CountingNotifier::default();
    let messages = notifier.messages.clone();

    let mut tracker = EventTracker::new(
        EVENTS.clone(),
        &settings,
        session_start,
        Box::new(notifier),
        Box::new(NullTooltip),
        None,
    );

    let first_id = tracker.current().id;
    assert_eq!(first_id, 100 % EVENTS.len());
    let first_start = tracker.current().start_time;

    // Tick every second from six minutes out through the event start
    let mut now = first_start - TimeDelta::seconds(360);
    while now <= first_start {
        tracker.tick(now, &settings);

        // Two minutes out, the user raises the lead time to 90 seconds
        if now == first_start - TimeDelta::seconds(120) {
            settings.notify_start_seconds = 90;
        }
        now += TimeDelta::seconds(1);
    }

    // Five-minute warning once, then the lead-time warning once at the new
    // 90-second threshold (the 60-second one never came due)
    {
        let messages = messages.lock().unwrap();
        assert_eq!(messages.len(), 2, "messages: {:?}", *messages);
        assert!(messages[0].contains("in 5 minutes"));
        assert!(messages[1].contains("in 2 minutes"));
    }

    // The finish tick rolled over to the next rotation slot with triggers
    // re-armed
    let second_id = tracker.current().id;
    assert_eq!(second_id, (first_id + 1) % EVENTS.len());
    let second_start = tracker.current().start_time;
    assert!(second_start > first_start);

    let mut now = second_start - TimeDelta::seconds(301);
    while now <= second_start - TimeDelta::seconds(295) {
        tracker.tick(now, &settings);
        now += TimeDelta::seconds(1);
    }
    assert_eq!(messages.lock().unwrap().len(), 3);
}
