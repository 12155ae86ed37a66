// Alert engine - owns the per-event fired flags and the reset rules.

use super::model::{AlertEvent, TriggerId, TriggerState};
use super::triggers::{build_alert, trigger_condition, TriggerContext};
use crate::core::config::Settings;
use crate::core::model::ScheduledEvent;

/// Edge-triggered notification state for one upcoming event. Each trigger
/// fires at most once between resets; resets happen when the tracked event
/// changes or when a trigger's own configuration changes.
pub struct AlertEngine {
    five_minute: TriggerState,
    lead_time: TriggerState,
    // Snapshot of the lead-time trigger's configuration, used to detect a
    // live settings change that must re-arm that trigger alone.
    lead_enabled: bool,
    lead_seconds: u32,
}

impl AlertEngine {
    pub fn new(settings: &Settings) -> Self {
        Self {
            five_minute: TriggerState::default(),
            lead_time: TriggerState::default(),
            lead_enabled: settings.notify_start,
            lead_seconds: settings.notify_start_seconds,
        }
    }

    /// Re-arm all triggers. Called whenever the tracked event's identity
    /// changes, including the countdown-finished transition.
    pub fn reset(&mut self) {
        self.five_minute = TriggerState::default();
        self.lead_time = TriggerState::default();
    }

    /// Reconcile with live settings: a change to the lead-time trigger's
    /// enablement or threshold re-arms that trigger, leaving the five-minute
    /// trigger's flag untouched.
    pub fn sync_settings(&mut self, settings: &Settings) {
        if settings.notify_start != self.lead_enabled
            || settings.notify_start_seconds != self.lead_seconds
        {
            self.lead_time = TriggerState::default();
            self.lead_enabled = settings.notify_start;
            self.lead_seconds = settings.notify_start_seconds;
        }
    }

    /// Evaluate all triggers for this tick. Fired triggers are latched and
    /// returned as alerts ready for dispatch.
    pub fn evaluate(
        &mut self,
        remaining_ms: i64,
        settings: &Settings,
        event: &ScheduledEvent,
    ) -> Vec<AlertEvent> {
        let mut alerts = Vec::new();

        for trigger in TriggerId::all() {
            let fired = self.state(*trigger).fired;
            let ctx = TriggerContext {
                remaining_ms,
                settings,
            };
            if trigger_condition(*trigger, &ctx, fired) {
                self.state_mut(*trigger).fired = true;
                alerts.push(build_alert(*trigger, event, remaining_ms));
            }
        }

        alerts
    }

    pub fn state(&self, trigger: TriggerId) -> &TriggerState {
        match trigger {
            TriggerId::FiveMinute => &self.five_minute,
            TriggerId::LeadTime => &self.lead_time,
        }
    }

    fn state_mut(&mut self, trigger: TriggerId) -> &mut TriggerState {
        match trigger {
            TriggerId::FiveMinute => &mut self.five_minute,
            TriggerId::LeadTime => &mut self.lead_time,
        }
    }
}
