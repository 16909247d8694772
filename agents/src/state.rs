use std::fmt;

use crate::classify::{Classification, Decoded};

/// Routing marker naming the step that runs next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Orchestrator,
    Analyzer,
    Responder,
    End,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Orchestrator => "orchestrator",
            Step::Analyzer => "analyzer",
            Step::Responder => "responder",
            Step::End => "end",
        })
    }
}

/// Record threaded through one execution of the graph.
///
/// Fields can only be filled in through the step transitions, each of which
/// consumes the record and returns the next one, so a state always reflects
/// a prefix of a valid path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentState {
    query: String,
    decision: Option<Decoded>,
    analysis: Option<String>,
    response: Option<String>,
    next: Step,
}

impl AgentState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            decision: None,
            analysis: None,
            response: None,
            next: Step::Orchestrator,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn classification(&self) -> Option<Classification> {
        self.decision.as_ref().map(Decoded::label)
    }

    /// How the classification was reached, including the raw answer on fallback.
    pub fn decision(&self) -> Option<&Decoded> {
        self.decision.as_ref()
    }

    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref()
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn next(&self) -> Step {
        self.next
    }

    pub fn is_finished(&self) -> bool {
        self.next == Step::End
    }

    pub(crate) fn classified(self, decision: Decoded) -> Self {
        let next = if decision.label() == Classification::Technical {
            Step::Analyzer
        } else {
            Step::Responder
        };
        Self {
            decision: Some(decision),
            next,
            ..self
        }
    }

    pub(crate) fn analyzed(self, analysis: String) -> Self {
        Self {
            analysis: Some(analysis),
            next: Step::Responder,
            ..self
        }
    }

    pub(crate) fn responded(self, response: String) -> Self {
        Self {
            response: Some(response),
            next: Step::End,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_orchestrator_with_only_query() {
        let state = AgentState::new("Hello!");
        assert_eq!(state.query(), "Hello!");
        assert_eq!(state.next(), Step::Orchestrator);
        assert!(state.classification().is_none());
        assert!(state.analysis().is_none());
        assert!(state.response().is_none());
    }

    #[test]
    fn technical_routes_to_analyzer() {
        let state =
            AgentState::new("q").classified(Decoded::Recognized(Classification::Technical));
        assert_eq!(state.next(), Step::Analyzer);
        let state = state.analyzed("closures".into());
        assert_eq!(state.next(), Step::Responder);
        assert_eq!(state.analysis(), Some("closures"));
    }

    #[test]
    fn other_labels_route_to_responder() {
        for label in [Classification::Greeting, Classification::General] {
            let state = AgentState::new("q").classified(Decoded::Recognized(label));
            assert_eq!(state.next(), Step::Responder);
        }
        let state = AgentState::new("q").classified(Decoded::Fallback { raw: "??".into() });
        assert_eq!(state.classification(), Some(Classification::General));
        assert_eq!(state.next(), Step::Responder);
    }

    #[test]
    fn response_ends_the_run() {
        let state = AgentState::new("q")
            .classified(Decoded::Recognized(Classification::Greeting))
            .responded("hi!".into());
        assert!(state.is_finished());
        assert_eq!(state.response(), Some("hi!"));
        assert_eq!(state.query(), "q");
    }
}
