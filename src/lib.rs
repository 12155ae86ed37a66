#![warn(clippy::all, clippy::pedantic)]
pub mod core;

pub mod app;
pub use app::run;
