pub mod cli;
pub mod data;
pub mod model;
pub mod tui;
pub mod views;
