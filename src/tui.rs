//! Terminal front end: a menu, the human arrangement screen and a results table.

pub mod app;
pub mod controller;
pub mod ui;
