//! Session ports and turn logic for the Nomi chat client.
//!
//! This crate defines the "ports" the session driver is written against
//! (message exchange, identity resolution, progress indication, terminal
//! reset) together with the pure pieces of turn handling. It depends only on
//! `nomi-types` -- never on `nomi-infra` or any network/terminal crate.

pub mod exchange;
pub mod progress;
pub mod resolver;
pub mod session;
pub mod terminal;
