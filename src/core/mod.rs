pub mod alerts;
pub mod catalog;
pub mod config;
pub mod countdown;
pub mod model;
pub mod resolver;
pub mod runner;
pub mod sinks;
pub mod tracker;

#[cfg(test)]
mod sim_test;
