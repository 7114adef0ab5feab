// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into OutreachDeps for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::{BaseAgentRunner, BaseNotifier, OutreachDeps};
use crate::config::DEFAULT_AGENT_MODEL;
use crate::domains::agents::{AgentOutput, AgentSpec};

// =============================================================================
// Mock Agent Runner
// =============================================================================

/// Arguments captured from a run call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    pub agent: String,
    pub model: String,
    pub instructions: String,
    pub input: String,
}

pub struct MockAgentRunner {
    responses: Arc<Mutex<HashMap<String, String>>>,
    failures: Arc<Mutex<HashSet<String>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    calls: Arc<Mutex<Vec<RecordedRun>>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockAgentRunner {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashSet::new())),
            delays: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Reply with `output` whenever the agent named `agent` runs
    pub fn with_response(self, agent: &str, output: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(agent.to_string(), output.into());
        self
    }

    /// Make every run of `agent` fail
    pub fn with_failure(self, agent: &str) -> Self {
        self.failures.lock().unwrap().insert(agent.to_string());
        self
    }

    /// Hold runs of `agent` for `delay` before answering
    pub fn with_delay(self, agent: &str, delay: Duration) -> Self {
        self.delays
            .lock()
            .unwrap()
            .insert(agent.to_string(), delay);
        self
    }

    /// Get all runs in the order they started
    pub fn calls(&self) -> Vec<RecordedRun> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of runs
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Get the input of the last run of `agent`
    pub fn last_input_for(&self, agent: &str) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|c| c.agent == agent)
            .map(|c| c.input.clone())
    }

    /// Highest number of runs that were outstanding at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Default for MockAgentRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAgentRunner for MockAgentRunner {
    async fn run(&self, agent: &AgentSpec, input: &str) -> Result<AgentOutput> {
        // Record the call
        self.calls.lock().unwrap().push(RecordedRun {
            agent: agent.name.clone(),
            model: agent.model.clone(),
            instructions: agent.instructions.clone(),
            input: input.to_string(),
        });

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self.delays.lock().unwrap().get(&agent.name).copied();
        match delay {
            Some(delay) => tokio::time::sleep(delay).await,
            // Let sibling runs start before this one finishes
            None => tokio::task::yield_now().await,
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failures.lock().unwrap().contains(&agent.name) {
            anyhow::bail!("mock failure for {}", agent.name);
        }

        let output = self
            .responses
            .lock()
            .unwrap()
            .get(&agent.name)
            .cloned()
            .unwrap_or_else(|| format!("Mock response from {}", agent.name));

        Ok(AgentOutput::new(agent.name.clone(), output))
    }
}

// =============================================================================
// Mock Notifier
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub subject: String,
    pub body: String,
    pub recipient: String,
}

pub struct MockNotifier {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    failure: Option<String>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Every send is recorded, then fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseNotifier for MockNotifier {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentEmail {
            subject: subject.to_string(),
            body: body.to_string(),
            recipient: recipient.to_string(),
        });

        match &self.failure {
            Some(reason) => anyhow::bail!("{}", reason),
            None => Ok(()),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for OutreachDeps wired with mocks
pub struct TestDependencies {
    pub runner: Arc<MockAgentRunner>,
    pub notifier: Option<Arc<MockNotifier>>,
    pub agent_model: String,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            runner: Arc::new(MockAgentRunner::new()),
            notifier: None,
            agent_model: DEFAULT_AGENT_MODEL.to_string(),
        }
    }

    pub fn mock_runner(mut self, runner: MockAgentRunner) -> Self {
        self.runner = Arc::new(runner);
        self
    }

    pub fn mock_notifier(mut self, notifier: MockNotifier) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn agent_model(mut self, model: impl Into<String>) -> Self {
        self.agent_model = model.into();
        self
    }

    /// Build OutreachDeps that share the mocks held here
    pub fn deps(&self) -> OutreachDeps {
        let deps = OutreachDeps::new(self.runner.clone(), self.agent_model.clone());
        match &self.notifier {
            Some(notifier) => deps.with_notifier(notifier.clone()),
            None => deps,
        }
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
