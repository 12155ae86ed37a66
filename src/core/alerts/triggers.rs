// Trigger condition logic for the notification triggers.
//
// Each condition is evaluated once per one-second tick against the time
// remaining until the upcoming event starts. Conditions are edge-triggered:
// the engine records a fired flag so a condition that stays true never
// fires twice for the same event.

use chrono::TimeDelta;

use super::model::{AlertEvent, TriggerId, NOTIFICATION_TITLE};
use crate::core::config::Settings;
use crate::core::countdown::from_now_phrase;
use crate::core::model::ScheduledEvent;

/// Five-minute warning threshold.
const FIVE_MINUTES_MS: i64 = 300_000;

/// Context provided to trigger conditions for evaluation.
pub struct TriggerContext<'a> {
    /// Milliseconds until the upcoming event starts.
    pub remaining_ms: i64,
    /// Live user settings.
    pub settings: &'a Settings,
}

/// Evaluate a trigger's condition. `fired` is the trigger's own flag for the
/// current event; a fired trigger never matches again until reset.
pub fn trigger_condition(trigger: TriggerId, ctx: &TriggerContext, fired: bool) -> bool {
    if fired {
        return false;
    }
    match trigger {
        TriggerId::FiveMinute => five_minute_condition(ctx),
        TriggerId::LeadTime => lead_time_condition(ctx),
    }
}

fn five_minute_condition(ctx: &TriggerContext) -> bool {
    if !ctx.settings.notify || ctx.remaining_ms > FIVE_MINUTES_MS {
        return false;
    }
    if ctx.settings.notify_start {
        // Stay out of the window claimed by the lead-time trigger, otherwise
        // opening the app late would produce two notifications at once.
        return ctx.remaining_ms > i64::from(ctx.settings.notify_start_seconds) * 1000;
    }
    true
}

fn lead_time_condition(ctx: &TriggerContext) -> bool {
    ctx.settings.notify_start
        && ctx.remaining_ms <= i64::from(ctx.settings.notify_start_seconds) * 1000
}

/// Build the alert payload for a trigger firing.
pub fn build_alert(trigger: TriggerId, event: &ScheduledEvent, remaining_ms: i64) -> AlertEvent {
    let phrase = from_now_phrase(TimeDelta::milliseconds(remaining_ms));
    AlertEvent {
        trigger,
        title: NOTIFICATION_TITLE.to_string(),
        message: format!("{} event is starting {}!", event.name, phrase),
        tooltip: format!("{} is about to start", event.name),
    }
}
