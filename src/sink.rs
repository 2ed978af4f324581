//! The seam between the generator and the trace store. The generator only
//! needs the handful of operations in [`RecordSink`]; the HTTP client in
//! [`crate::client`] is the production implementation, and tests substitute
//! an in-memory recorder.

use crate::LabseedError;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Duration;

/// The opening half of a root record: one conversation turn as the
/// dashboard sees it. Output and end time arrive later via [`TraceEnd`].
#[derive(Debug, Clone)]
pub struct TraceStart {
    pub id: String,
    pub name: &'static str,
    pub thread_id: String,
    pub input: Value,
    pub tags: Vec<&'static str>,
    pub metadata: Value,
    pub start_time: DateTime<Utc>,
}

/// The closing half of a root record.
#[derive(Debug, Clone)]
pub struct TraceEnd {
    pub output: Value,
    pub end_time: DateTime<Utc>,
}

/// Whether a span pretends to be a model call or a tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Llm,
    Tool,
}

impl SpanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Llm => "llm",
            SpanKind::Tool => "tool",
        }
    }
}

/// Simulated token accounting for an LLM-kind span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// One workflow step, nested under a root record and complete on arrival.
#[derive(Debug, Clone)]
pub struct SpanRecord {
    pub id: String,
    pub trace_id: String,
    pub name: &'static str,
    pub kind: SpanKind,
    pub model: Option<String>,
    pub provider: Option<String>,
    pub input: Value,
    pub output: Value,
    pub usage: Option<Usage>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub metadata: Option<Value>,
}

/// A named quality rating attached to a single trace or span.
#[derive(Debug, Clone)]
pub struct FeedbackScore {
    pub name: &'static str,
    pub value: f64,
    pub reason: String,
}

/// A quality rating attached to a whole thread rather than one record.
#[derive(Debug, Clone)]
pub struct ThreadFeedback {
    pub thread_id: String,
    pub name: &'static str,
    pub value: f64,
    pub reason: String,
}

/// What a bounded flush achieved. A timeout is not a failure: the store
/// ingests asynchronously and keeps draining after we stop waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushOutcome {
    Completed { sent: usize },
    TimedOut { sent: usize, pending: usize },
}

/// Everything the generator asks of the trace store. A sink is bound to
/// one project at construction; the generator never names it per call.
///
/// Identifiers come from the sink (`record_id`) so that back-dated records
/// sort correctly in stores that derive ordering from the id itself; the
/// generator never invents ids.
pub trait RecordSink {
    /// An identifier valid for a record starting at `at`.
    fn record_id(&mut self, at: DateTime<Utc>) -> String;

    /// Does the bound project already contain any trace at all?
    fn has_any_trace(&mut self) -> Result<bool, LabseedError>;

    fn begin_trace(&mut self, trace: TraceStart) -> Result<(), LabseedError>;

    fn end_trace(&mut self, trace_id: &str, end: TraceEnd) -> Result<(), LabseedError>;

    fn add_span(&mut self, span: SpanRecord) -> Result<(), LabseedError>;

    fn trace_feedback(
        &mut self,
        trace_id: &str,
        score: FeedbackScore,
    ) -> Result<(), LabseedError>;

    fn span_feedback(
        &mut self,
        span_id: &str,
        score: FeedbackScore,
    ) -> Result<(), LabseedError>;

    fn close_thread(&mut self, thread_id: &str) -> Result<(), LabseedError>;

    fn thread_feedback(&mut self, scores: &[ThreadFeedback]) -> Result<(), LabseedError>;

    /// Drain buffered submissions, giving up (without failing) after `budget`.
    fn flush(&mut self, budget: Duration) -> Result<FlushOutcome, LabseedError>;
}
