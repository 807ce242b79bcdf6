//! Configuration for the bugboard state container
//!
//! This crate provides:
//! - Store configuration (StoreConfig)
//! - Config file discovery (CWD first, then home directory)

pub mod store_config;

pub use store_config::StoreConfig;
