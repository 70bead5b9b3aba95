//! Helpers for presenting post data

pub mod date;
