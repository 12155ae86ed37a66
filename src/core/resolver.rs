// Derives the next upcoming event purely from wall-clock time: the rotation
// advances one catalog entry per hour from a fixed UTC anchor.

use chrono::{DateTime, TimeDelta, TimeZone, Timelike, Utc};
use lazy_static::lazy_static;

use super::catalog::Catalog;
use super::model::{EventTemplate, ScheduledEvent};

lazy_static! {
    /// Instant at which catalog entry 0 started a rotation cycle. All index
    /// and hour-phase arithmetic is relative to this anchor.
    pub static ref SCHEDULE_ANCHOR: DateTime<Utc> =
        Utc.with_ymd_and_hms(2024, 2, 5, 6, 0, 0).unwrap();
}

/// Resolve the next event for `now`. Stateless and idempotent: the same
/// second-resolution `now` and `special_only` always produce the same result,
/// and the returned `start_time` is strictly after `now`.
pub fn next_event(now: DateTime<Utc>, special_only: bool, catalog: &Catalog) -> ScheduledEvent {
    // One second forward so the index computation lands strictly past an hour
    // boundary instead of racing it. Sub-second precision is dropped here so
    // the snap below yields an exact hour boundary.
    let nudged = now + TimeDelta::seconds(1);
    let t = nudged.with_nanosecond(0).unwrap_or(nudged);

    let elapsed_hours = (t - *SCHEDULE_ANCHOR).num_hours();
    let idx = elapsed_hours.rem_euclid(catalog.len() as i64) as usize;

    let selected = select_entry(idx, special_only, catalog);

    // Snap to the top of the hour that is (selected.id - idx) hours ahead
    // of t's current hour.
    let start_time = t
        + TimeDelta::hours(selected.id as i64 - idx as i64)
        + TimeDelta::minutes(59 - i64::from(t.minute()))
        + TimeDelta::seconds(60 - i64::from(t.second()));

    ScheduledEvent::from_template(selected, start_time)
}

fn select_entry(idx: usize, special_only: bool, catalog: &Catalog) -> &EventTemplate {
    let positional = &catalog.entries()[idx];
    if !special_only {
        return positional;
    }
    // Forward-only scan from the current index; deliberately does not wrap
    // past the end of the rotation. When no special event remains in this
    // cycle the plain positional entry is used instead.
    catalog.entries()[idx..]
        .iter()
        .find(|entry| entry.is_special())
        .unwrap_or(positional)
}
