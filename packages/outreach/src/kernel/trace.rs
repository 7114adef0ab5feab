//! Trace scopes.
//!
//! A trace groups the agent runs of one workflow step under a single span
//! so their log lines share a `trace_id`.

use tracing::{info_span, Span};
use uuid::Uuid;

/// Open a new trace for `workflow`.
///
/// ```rust,ignore
/// use tracing::Instrument;
///
/// let output = runner.run(&agent, prompt).instrument(trace("Every Day Motivation")).await?;
/// ```
pub fn trace(workflow: &str) -> Span {
    let trace_id = Uuid::new_v4();
    info_span!("trace", workflow = %workflow, trace_id = %trace_id)
}
