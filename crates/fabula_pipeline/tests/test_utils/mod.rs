//! Shared test utilities.

#![allow(dead_code)]

mod mock_driver;

pub use mock_driver::{MockDriver, MockResponse};

/// Critique that the keyword classifier rejects.
pub const REJECTING_CRITIQUE: &str =
    "As histórias estão inadequadas.\nHá problemas de cobertura.\nÉ preciso melhorar os critérios.";

/// Critique that the keyword classifier approves.
pub const APPROVING_CRITIQUE: &str = "As histórias estão adequadas e aprovadas. Muito bom trabalho.";
