// HTTP Server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

// Time-ordered message storage
pub mod message_store;
