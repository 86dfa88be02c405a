//! Full-screen terminal frontend built on ratatui and crossterm.

pub mod app;
pub mod controller;
mod ui;

pub use controller::TuiFrontend;
