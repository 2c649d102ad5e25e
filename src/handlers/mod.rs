//! HTTP handlers.

pub mod words;
