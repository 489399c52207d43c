//! HTTP request handlers.

pub(crate) mod config;
pub(crate) mod content;
pub(crate) mod pages;
pub(crate) mod route;
