//! Library entry for Larder exposing core logic for integration tests.

pub mod args;
pub mod events;
pub mod logic;
pub mod state;
pub mod store;
pub mod theme;
pub mod ui;
pub mod util;
