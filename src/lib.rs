#![deny(warnings)]

pub mod api;
pub mod config;
pub mod dashboard;
pub mod database;
pub mod error;
pub mod server;
pub mod tasks;
