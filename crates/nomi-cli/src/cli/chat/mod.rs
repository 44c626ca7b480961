//! Interactive CLI chat experience.
//!
//! This module implements the session loop: banner, prompt, dispatch with a
//! waiting spinner, and reply/error rendering. Entry point:
//! `loop_runner::run_chat`.

pub mod banner;
pub mod input;
pub mod loop_runner;
pub mod renderer;
pub mod spinner;
