pub mod auth;
pub mod config;
pub mod dashboard;
pub mod feed;
pub mod guidance;
pub mod hypothesis;
pub mod topics;
