pub mod config;
pub mod logging;

pub mod controller;
pub mod error;
pub mod input;
pub mod naming;
pub mod payload;
pub mod progress;
pub mod report;
pub mod response;
pub mod transport;
