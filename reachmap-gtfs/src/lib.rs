pub mod app;
pub mod config;
pub mod feed;
pub mod graph;
pub mod source;
