use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

use super::alerts::engine::AlertEngine;
use super::alerts::model::AlertEvent;
use super::catalog::Catalog;
use super::config::Settings;
use super::countdown::Countdown;
use super::model::ScheduledEvent;
use super::resolver;
use super::sinks::{NotificationSink, OverlayProbe, TooltipSink};

/// Owns the currently tracked upcoming event and its notification state.
///
/// Driven from outside by a one-second tick; re-resolves the event whenever
/// the countdown finishes or the special-only filter flips, and re-arms the
/// triggers on every such identity change.
pub struct EventTracker {
    catalog: Arc<Catalog>,
    notifier: Box<dyn NotificationSink>,
    tooltip: Box<dyn TooltipSink>,
    overlay: Option<Box<dyn OverlayProbe>>,
    current: ScheduledEvent,
    engine: AlertEngine,
    tooltip_active: bool,
    // Last observed value of the special-only filter; a flip forces a
    // re-resolution on the next tick.
    special_only: bool,
}

impl EventTracker {
    pub fn new(
        catalog: Arc<Catalog>,
        settings: &Settings,
        now: DateTime<Utc>,
        notifier: Box<dyn NotificationSink>,
        tooltip: Box<dyn TooltipSink>,
        overlay: Option<Box<dyn OverlayProbe>>,
    ) -> Self {
        let current = resolver::next_event(now, settings.special_only, &catalog);
        let engine = AlertEngine::new(settings);
        Self {
            catalog,
            notifier,
            tooltip,
            overlay,
            current,
            engine,
            tooltip_active: false,
            special_only: settings.special_only,
        }
    }

    pub fn current(&self) -> &ScheduledEvent {
        &self.current
    }

    /// Countdown view for hosts rendering the timer.
    pub fn countdown(&self) -> Countdown {
        Countdown::new(self.current.start_time)
    }

    pub fn tooltip_active(&self) -> bool {
        self.tooltip_active
    }

    /// One evaluation step. Call once per second with the current wall-clock
    /// time and a snapshot of the live settings.
    pub fn tick(&mut self, now: DateTime<Utc>, settings: &Settings) {
        if settings.special_only != self.special_only {
            self.refresh(now, settings);
        }
        self.engine.sync_settings(settings);

        let remaining = self.current.start_time - now;
        if remaining <= TimeDelta::zero() {
            // Countdown finished: the event is starting right now. Move on to
            // the next one and re-arm the triggers.
            self.refresh(now, settings);
            return;
        }

        let alerts = self
            .engine
            .evaluate(remaining.num_milliseconds(), settings, &self.current);
        for alert in alerts {
            self.dispatch(&alert, settings);
        }
    }

    /// Tooltip-dismissal poll, driven by its own one-second tick while a
    /// tooltip is showing. Hides the tooltip on the first observation of the
    /// game window gaining focus.
    pub fn poll_tooltip(&mut self) {
        if !self.tooltip_active {
            return;
        }
        if let Some(probe) = &self.overlay {
            if probe.is_focused() {
                self.tooltip.hide_tooltip();
                self.tooltip_active = false;
            }
        }
    }

    /// Hide any showing tooltip. Called on teardown so no tooltip outlives
    /// the tracker loop.
    pub fn clear_tooltip(&mut self) {
        if self.tooltip_active {
            self.tooltip.hide_tooltip();
            self.tooltip_active = false;
        }
    }

    fn refresh(&mut self, now: DateTime<Utc>, settings: &Settings) {
        self.current = resolver::next_event(now, settings.special_only, &self.catalog);
        self.special_only = settings.special_only;
        self.engine.reset();
        log::debug!(
            "Now tracking '{}' starting at {}",
            self.current.name,
            self.current.start_time
        );
    }

    fn dispatch(&mut self, alert: &AlertEvent, settings: &Settings) {
        self.notifier.notify(&alert.title, &alert.message);

        if !settings.tooltip {
            return;
        }
        // Only show the tooltip when the overlay reports the game is visible
        // but not focused; an absent probe suppresses it entirely.
        if let Some(probe) = &self.overlay {
            if probe.is_visible() && !probe.is_focused() {
                self.tooltip.show_tooltip(&alert.tooltip);
                self.tooltip_active = true;
            }
        }
    }
}
