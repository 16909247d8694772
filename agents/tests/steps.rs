use agents::{analyze, orchestrate, respond, AgentError, AgentState, Classification, Step};

mod scripted;
use scripted::{Call, Scripted};

#[tokio::test]
async fn orchestrator_sets_marker() {
    let model = Scripted::answering("greeting");
    let state = orchestrate(&model, AgentState::new("Hello!")).await.unwrap();
    assert_eq!(state.classification(), Some(Classification::Greeting));
    assert_eq!(state.next(), Step::Responder);
    assert!(state.response().is_none());
}

#[tokio::test]
async fn analyzer_refuses_unclassified_state() {
    let model = Scripted::answering("technical");
    let err = analyze(&model, AgentState::new("What is Rust?"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AgentError::Precondition {
            step: Step::Analyzer,
            found: Step::Orchestrator
        }
    ));
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn analyzer_refuses_non_technical_query() {
    let model = Scripted::answering("greeting");
    let state = orchestrate(&model, AgentState::new("Hi")).await.unwrap();
    let err = analyze(&model, state).await.unwrap_err();
    assert!(matches!(
        err,
        AgentError::Precondition {
            step: Step::Analyzer,
            found: Step::Responder
        }
    ));
    assert_eq!(model.calls(), vec![Call::Classify]);
}

#[tokio::test]
async fn responder_needs_classification_first() {
    let model = Scripted::answering("general");
    let err = respond(&model, AgentState::new("Hi")).await.unwrap_err();
    assert!(matches!(err, AgentError::Precondition { .. }));
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn response_is_written_once() {
    let model = Scripted::answering("general");
    let state = orchestrate(&model, AgentState::new("Best tea?")).await.unwrap();
    let state = respond(&model, state).await.unwrap();
    assert_eq!(state.next(), Step::End);
    let err = respond(&model, state).await.unwrap_err();
    assert!(matches!(
        err,
        AgentError::Precondition {
            step: Step::Responder,
            found: Step::End
        }
    ));
}

#[tokio::test]
async fn precondition_error_names_both_steps() {
    let err = AgentError::Precondition {
        step: Step::Analyzer,
        found: Step::End,
    };
    assert_eq!(err.to_string(), "analyzer cannot run while the next step is end");
}
