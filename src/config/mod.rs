// src/config/mod.rs
//! Configuration system for aead-buffers
//!
//! Central, lazy-loaded global config with TOML + env override.

pub use app::{load, parse, try_load, Config, Lengths, Logging};

mod app;
mod defaults;
