//! Wavescope CLI library.
//!
//! This crate provides the presentation side of Wavescope: input loading
//! (config files, flags, console prompts), the application session that caches
//! the last results, and the command implementations.

pub mod commands;
pub mod input;
pub mod session;
