//! Infrastructure configuration modules.

pub mod logging;
pub mod provider;
pub mod runtime;
pub mod settings;
pub mod telegram;
