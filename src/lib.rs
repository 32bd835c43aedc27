#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![deny(clippy::use_self, rust_2018_idioms)]
#![allow(clippy::multiple_crate_versions, clippy::module_name_repetitions)]

pub mod config;

/// turns configured times of day into today's pending alarm instants
pub mod schedule;

/// the wait/fire loop that drains the alarm queue
pub mod runner;

pub mod sound;
