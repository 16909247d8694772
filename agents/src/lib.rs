//! A three-step agent routing graph.
//!
//! An orchestrator classifies each query, technical queries get an extra
//! analysis pass, and a responder writes the final answer. Every step issues
//! exactly one completion call through an [`llm::Completer`] and hands a new
//! [`AgentState`] to the next one.

pub mod classify;
pub mod graph;
pub mod prompts;
pub mod state;
pub mod steps;

pub use classify::{decode, Classification, Decoded, UnknownLabel};
pub use graph::{AgentGraph, Run};
pub use state::{AgentState, Step};
pub use steps::{analyze, orchestrate, respond, AgentError};
