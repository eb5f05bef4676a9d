//! Library components of the speed dashboard CLI: settings, logging,
//! rendering sinks and the interactive filter session.

pub mod config;
pub mod logging;
pub mod render;
pub mod session;
