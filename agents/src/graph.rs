use llm::Completer;
use tracing::{debug, info};

use crate::state::{AgentState, Step};
use crate::steps::{self, AgentError};

/// Outcome of one query through the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub state: AgentState,
    /// Steps executed, in order.
    pub path: Vec<Step>,
}

impl Run {
    pub fn response(&self) -> &str {
        self.state.response().unwrap_or_default()
    }
}

/// Orchestrator → (analyzer →) responder.
///
/// The graph has a single conditional edge: the analyzer only runs when the
/// orchestrator classified the query as technical. Each call to [`run`]
/// owns a fresh [`AgentState`]; nothing is shared between runs.
///
/// [`run`]: AgentGraph::run
pub struct AgentGraph<C> {
    completer: C,
}

impl<C: Completer> AgentGraph<C> {
    pub fn new(completer: C) -> Self {
        Self { completer }
    }

    /// Drive `query` from the orchestrator to the end marker.
    ///
    /// A completion failure in any step aborts the run and is returned as is.
    pub async fn run(&self, query: impl Into<String>) -> Result<Run, AgentError> {
        let mut state = AgentState::new(query);
        let mut path = Vec::with_capacity(3);
        loop {
            let step = state.next();
            debug!(%step, "entering step");
            state = match step {
                Step::Orchestrator => steps::orchestrate(&self.completer, state).await?,
                Step::Analyzer => steps::analyze(&self.completer, state).await?,
                Step::Responder => steps::respond(&self.completer, state).await?,
                Step::End => break,
            };
            path.push(step);
        }
        info!(steps = path.len(), "run complete");
        Ok(Run { state, path })
    }
}
