//! quizdeck: a small quiz server.
//!
//! Serves a home page and a quiz page, hands out random questions and
//! accepts new ones into a JSON-backed list.

pub mod api;
pub mod config;
pub mod models;
pub mod pages;
pub mod store;
