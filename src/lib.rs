pub mod app_error;
pub mod args;
pub mod commands;
pub mod config;
pub mod domain;
pub mod evm;
pub mod logging;
pub mod services;
