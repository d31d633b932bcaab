pub mod catalog;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod storage;
pub mod ui;
