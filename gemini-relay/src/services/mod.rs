//! Prompt derivation and provider integrations.

pub mod prompt;
pub mod providers;
