//! Nomi HTTP API adapter.

pub mod client;

pub use client::NomiClient;
