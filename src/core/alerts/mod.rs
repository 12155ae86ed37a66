// Alert system module for the once-per-event notification triggers.
//
// Architecture:
// - model.rs: Trigger identifiers, per-event trigger state, fired alerts
// - triggers.rs: Pure trigger condition evaluation against remaining time
// - engine.rs: Orchestrates evaluation, fired flags and reset rules

pub mod engine;
pub mod model;
pub mod triggers;
