//! Command-line front end: one-shot commands and the interactive menu.

pub mod commands;
pub mod menu;

pub use menu::{Menu, MenuChoice};
