pub mod action;
pub mod action_handler;
pub mod app;
pub mod logging;
pub mod state;

mod input;
mod ui;
