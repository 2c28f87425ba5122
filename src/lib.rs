pub mod api;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod locale;
pub mod press;
pub mod share;
pub mod theme;
pub mod timer;
pub mod types;
pub mod ui;
pub mod views;
