pub mod api;
pub mod config;
pub mod error;
pub mod identity;
pub mod items;
pub mod logging;
