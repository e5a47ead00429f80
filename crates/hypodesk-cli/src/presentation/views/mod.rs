mod config;
mod feed;
mod hypothesis;
mod session;
mod topics;
