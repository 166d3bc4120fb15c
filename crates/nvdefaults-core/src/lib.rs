pub mod config;
pub mod logging;

pub mod defaults;
pub mod fetch;
pub mod output;
