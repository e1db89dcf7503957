pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod flows;
pub mod models;
pub mod services;
pub mod store;
