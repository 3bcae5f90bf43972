pub mod app;
pub mod clipboard;
pub mod config;
pub mod input;
pub mod logging;
pub mod rendering;
pub mod replace;
pub mod tables;
pub mod ui;
