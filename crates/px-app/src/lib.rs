/// Terminal front-end and headless export for pixscii.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod export;
