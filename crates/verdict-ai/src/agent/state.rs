//! Agent state management

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm::Message;

/// Agent execution status. Upstream failures abort the run with an
/// error before any status change, so they have no variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AgentStatus {
    Running,
    Completed,
    MaxIterations,
}

/// State for one query's ReAct loop.
///
/// Owned exclusively by the run that created it; nothing here is
/// shared between concurrent queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentState {
    /// Execution ID
    pub execution_id: String,

    /// Current status
    pub status: AgentStatus,

    /// Transcript: protocol system message, optional reasoning
    /// context, user query, then alternating replies and observations
    pub messages: Vec<Message>,

    /// Completed round trips through the model
    pub iteration: usize,

    /// Round-trip budget
    pub max_iterations: usize,

    /// Final answer (if completed)
    pub final_answer: Option<String>,

    /// Execution timestamps
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl AgentState {
    /// Create a new agent state
    pub fn new(execution_id: String, max_iterations: usize) -> Self {
        Self {
            execution_id,
            status: AgentStatus::Running,
            messages: vec![],
            iteration: 0,
            max_iterations,
            final_answer: None,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    /// Append a message to the transcript
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Complete with final answer
    pub fn complete(&mut self, answer: impl Into<String>) {
        self.final_answer = Some(answer.into());
        self.status = AgentStatus::Completed;
        self.ended_at = Some(Utc::now());
    }

    /// Check if terminal state
    pub fn is_terminal(&self) -> bool {
        !matches!(self.status, AgentStatus::Running)
    }

    /// Increment iteration, returns false once the budget is spent
    pub fn increment_iteration(&mut self) -> bool {
        self.iteration += 1;
        if self.iteration >= self.max_iterations && !self.is_terminal() {
            self.status = AgentStatus::MaxIterations;
            self.ended_at = Some(Utc::now());
            false
        } else {
            !self.is_terminal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_running() {
        let state = AgentState::new("test-id".to_string(), 10);
        assert_eq!(state.execution_id, "test-id");
        assert_eq!(state.iteration, 0);
        assert_eq!(state.max_iterations, 10);
        assert_eq!(state.status, AgentStatus::Running);
        assert!(!state.is_terminal());
    }

    #[test]
    fn complete_records_answer_and_terminates() {
        let mut state = AgentState::new("test-id".to_string(), 10);
        state.complete("done");

        assert_eq!(state.status, AgentStatus::Completed);
        assert_eq!(state.final_answer, Some("done".to_string()));
        assert!(state.is_terminal());
        assert!(state.ended_at.is_some());
    }

    #[test]
    fn iteration_budget_exhaustion_sets_max_iterations() {
        let mut state = AgentState::new("test-id".to_string(), 2);

        assert!(state.increment_iteration()); // iteration = 1
        assert!(!state.increment_iteration()); // iteration = 2, budget spent

        assert_eq!(state.status, AgentStatus::MaxIterations);
        assert!(state.is_terminal());
    }

    #[test]
    fn completion_is_not_clobbered_by_the_last_increment() {
        let mut state = AgentState::new("test-id".to_string(), 1);
        state.complete("42");
        state.increment_iteration();

        assert_eq!(state.status, AgentStatus::Completed);
    }
}
