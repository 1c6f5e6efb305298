pub mod ai;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod menu_editor;
pub mod notification;
pub mod sound;
pub mod spin;
pub mod widgets;
