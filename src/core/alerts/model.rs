// Alert model types for the notification trigger set.

use serde::{Deserialize, Serialize};

/// Title used for every push notification.
pub const NOTIFICATION_TITLE: &str = "Wilderness Event Tracker";

/// Unique identifier for the hardcoded notification triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerId {
    /// Fixed warning five minutes before the event starts.
    FiveMinute,
    /// Warning at the user-configured lead time before the start.
    LeadTime,
}

impl TriggerId {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FiveMinute => "Five-minute warning",
            Self::LeadTime => "Custom lead-time warning",
        }
    }

    pub fn all() -> &'static [TriggerId] {
        &[Self::FiveMinute, Self::LeadTime]
    }
}

/// Per-trigger state, scoped to the lifetime of a single upcoming event.
/// `armed` until the condition first holds, then `fired` until reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerState {
    pub fired: bool,
}

/// A trigger firing, ready for dispatch to the notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEvent {
    pub trigger: TriggerId,
    pub title: String,
    pub message: String,
    /// Text for the overlay tooltip, shown only when the overlay is visible
    /// but the game window is not focused.
    pub tooltip: String,
}
