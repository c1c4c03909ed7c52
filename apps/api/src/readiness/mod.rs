// Job readiness scoring: taxonomy, deterministic scorer, insight text, score perturbation.
// Every transport (HTTP route, serverless adapter, in-process call) goes through service.rs.

pub mod function;
pub mod handlers;
pub mod insight;
pub mod perturbation;
pub mod scoring;
pub mod service;
pub mod taxonomy;
