//! Infrastructure layer for the Nomi chat client.
//!
//! Contains implementations of the ports defined in `nomi-core`: the reqwest
//! client for the Nomi HTTP API, configuration loading (config file plus
//! environment), and crossterm-backed terminal cleanup.

pub mod config;
pub mod nomi;
pub mod terminal;
