pub mod application;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod qualification;
pub mod report;
pub mod session;
pub mod telemetry;
