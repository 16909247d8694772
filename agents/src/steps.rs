//! The three processing steps.
//!
//! Each step checks that the routing marker selects it, issues one
//! completion call, and returns the updated [`AgentState`]. A step that is
//! not selected fails before calling the model.

use llm::{Completer, LLMError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::classify::{decode, Classification, Decoded};
use crate::prompts;
use crate::state::{AgentState, Step};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Completion(#[from] LLMError),
    #[error("{step} cannot run while the next step is {found}")]
    Precondition { step: Step, found: Step },
}

fn expect_step(state: &AgentState, step: Step) -> Result<(), AgentError> {
    if state.next() == step {
        Ok(())
    } else {
        Err(AgentError::Precondition {
            step,
            found: state.next(),
        })
    }
}

/// Classify the query and pick the next step.
pub async fn orchestrate<C: Completer + ?Sized>(
    completer: &C,
    state: AgentState,
) -> Result<AgentState, AgentError> {
    expect_step(&state, Step::Orchestrator)?;
    let raw = completer
        .complete(&prompts::classification(state.query()), &[])
        .await?;
    let decision = decode(&raw);
    match &decision {
        Decoded::Recognized(label) => info!(classification = %label, "query classified"),
        Decoded::Fallback { raw } => warn!(
            answer = %raw,
            fallback = %Classification::DEFAULT,
            "unrecognized classification, using default"
        ),
    }
    let state = state.classified(decision);
    info!(next = %state.next(), "routing");
    Ok(state)
}

/// Extract key concepts and difficulty from a technical query.
pub async fn analyze<C: Completer + ?Sized>(
    completer: &C,
    state: AgentState,
) -> Result<AgentState, AgentError> {
    expect_step(&state, Step::Analyzer)?;
    let analysis = completer
        .complete(&prompts::analysis(state.query()), &[])
        .await?;
    debug!(chars = analysis.len(), "analysis written");
    Ok(state.analyzed(analysis))
}

/// Write the final response, using the analysis when one exists.
pub async fn respond<C: Completer + ?Sized>(
    completer: &C,
    state: AgentState,
) -> Result<AgentState, AgentError> {
    expect_step(&state, Step::Responder)?;
    let prompt = prompts::response(state.query(), state.analysis());
    let response = completer.complete(&prompt, &[]).await?;
    debug!(chars = response.len(), "response written");
    Ok(state.responded(response))
}
