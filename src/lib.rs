//! Lead Form — client for the RWA lead intake form and its admin page.

pub mod admin;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod surface;
