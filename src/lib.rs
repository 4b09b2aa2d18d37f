pub mod api;
pub mod config;
pub mod errors;
pub mod init;
pub mod ledger;
pub mod models;
pub mod notifications;
pub mod repositories;
pub mod services;
pub mod state_management;
pub mod stats;
pub mod utils;
