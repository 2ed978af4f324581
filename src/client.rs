//! Blocking HTTP implementation of [`RecordSink`]. Trace and span
//! submissions are buffered and shipped in batches, which keeps the
//! per-turn loop cheap; `flush` drains whatever is left under a time
//! budget and reports a timeout instead of failing on one.

use crate::LabseedError;
use crate::config::SinkConfig;
use crate::sink::{
    FeedbackScore, FlushOutcome, RecordSink, SpanRecord, ThreadFeedback, TraceEnd, TraceStart,
};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Buffered submissions are shipped once a queue reaches this size, so a
/// long run never holds the whole history in memory.
const BATCH_SIZE: usize = 100;

enum Verb {
    Post,
    Put,
}

pub struct HttpSink {
    agent: ureq::Agent,
    base_url: String,
    project: String,
    api_key: Option<String>,
    workspace: Option<String>,
    // Traces stay open until `end_trace` fills in output and end time.
    open_traces: HashMap<String, Value>,
    ready_traces: VecDeque<Value>,
    ready_spans: VecDeque<Value>,
    ready_trace_scores: VecDeque<Value>,
    ready_span_scores: VecDeque<Value>,
}

impl HttpSink {
    pub fn new(config: &SinkConfig, api_key: Option<String>) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::config::Config::builder()
                .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
                .build(),
        );
        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project: config.project.clone(),
            api_key,
            workspace: config.workspace.clone(),
            open_traces: HashMap::new(),
            ready_traces: VecDeque::new(),
            ready_spans: VecDeque::new(),
            ready_trace_scores: VecDeque::new(),
            ready_span_scores: VecDeque::new(),
        }
    }

    fn send(&self, verb: Verb, route: &str, body: &Value) -> Result<(), LabseedError> {
        let url = format!("{}/{route}", self.base_url);
        let mut req = match verb {
            Verb::Post => self.agent.post(&url),
            Verb::Put => self.agent.put(&url),
        };
        if let Some(key) = &self.api_key {
            req = req.header("authorization", key);
        }
        if let Some(ws) = &self.workspace {
            req = req.header("x-workspace", ws);
        }
        req.send_json(body)
            .map_err(|e| LabseedError::Sink(format!("{route}: {e}")))?;
        Ok(())
    }

    fn pending(&self) -> usize {
        self.ready_traces.len()
            + self.ready_spans.len()
            + self.ready_trace_scores.len()
            + self.ready_span_scores.len()
    }

    /// Ship one batch from the first non-empty queue. Returns how many
    /// entries went out, zero once everything ready has been sent.
    fn send_one_batch(&mut self) -> Result<usize, LabseedError> {
        if !self.ready_traces.is_empty() {
            let batch = drain_batch(&mut self.ready_traces);
            let n = batch.len();
            self.send(Verb::Post, "v1/traces/batch", &json!({"traces": batch}))?;
            Ok(n)
        } else if !self.ready_spans.is_empty() {
            let batch = drain_batch(&mut self.ready_spans);
            let n = batch.len();
            self.send(Verb::Post, "v1/spans/batch", &json!({"spans": batch}))?;
            Ok(n)
        } else if !self.ready_trace_scores.is_empty() {
            let batch = drain_batch(&mut self.ready_trace_scores);
            let n = batch.len();
            self.send(
                Verb::Put,
                "v1/traces/feedback-scores",
                &json!({"scores": batch}),
            )?;
            Ok(n)
        } else if !self.ready_span_scores.is_empty() {
            let batch = drain_batch(&mut self.ready_span_scores);
            let n = batch.len();
            self.send(
                Verb::Put,
                "v1/spans/feedback-scores",
                &json!({"scores": batch}),
            )?;
            Ok(n)
        } else {
            Ok(0)
        }
    }

    /// Keep the buffers bounded: drain inline once a queue fills up.
    fn drain_if_full(&mut self) -> Result<(), LabseedError> {
        while self.pending() >= BATCH_SIZE {
            if self.send_one_batch()? == 0 {
                break;
            }
        }
        Ok(())
    }

    /// Drain every queue without a deadline. The store only knows a thread
    /// once a trace referencing it has been ingested, so thread operations
    /// call this first.
    fn drain_all(&mut self) -> Result<usize, LabseedError> {
        let mut sent = 0;
        while self.pending() > 0 {
            sent += self.send_one_batch()?;
        }
        Ok(sent)
    }

    fn usage_value(usage: &crate::sink::Usage) -> Value {
        json!({
            "prompt_tokens": usage.prompt_tokens,
            "completion_tokens": usage.completion_tokens,
            "total_tokens": usage.total_tokens,
        })
    }
}

fn drain_batch(queue: &mut VecDeque<Value>) -> Vec<Value> {
    let n = queue.len().min(BATCH_SIZE);
    queue.drain(..n).collect()
}

impl RecordSink for HttpSink {
    /// UUIDv7 carries its creation instant in the high bits, so back-dated
    /// ids sort into the right place on the dashboard.
    fn record_id(&mut self, at: DateTime<Utc>) -> String {
        let ts = uuid::Timestamp::from_unix(
            uuid::NoContext,
            at.timestamp().max(0) as u64,
            at.timestamp_subsec_nanos(),
        );
        uuid::Uuid::new_v7(ts).to_string()
    }

    fn has_any_trace(&mut self) -> Result<bool, LabseedError> {
        let url = format!("{}/v1/traces", self.base_url);
        let mut req = self
            .agent
            .get(&url)
            .query("project_name", &self.project)
            .query("size", "1");
        if let Some(key) = &self.api_key {
            req = req.header("authorization", key);
        }
        if let Some(ws) = &self.workspace {
            req = req.header("x-workspace", ws);
        }
        let mut resp = match req.call() {
            Ok(resp) => resp,
            // The store answers 404 for a project it has never seen.
            Err(ureq::Error::StatusCode(404)) => return Ok(false),
            Err(e) => return Err(LabseedError::Sink(format!("v1/traces: {e}"))),
        };
        let body: Value = resp
            .body_mut()
            .read_json()
            .map_err(|e| LabseedError::Sink(format!("v1/traces response: {e}")))?;

        let content = body
            .pointer("/content")
            .and_then(Value::as_array)
            .ok_or_else(|| LabseedError::Sink("malformed trace listing".into()))?;
        Ok(!content.is_empty())
    }

    fn begin_trace(&mut self, trace: TraceStart) -> Result<(), LabseedError> {
        let value = json!({
            "id": trace.id,
            "name": trace.name,
            "project_name": self.project,
            "thread_id": trace.thread_id,
            "input": trace.input,
            "output": Value::Null,
            "tags": trace.tags,
            "metadata": trace.metadata,
            "start_time": trace.start_time.to_rfc3339(),
            "end_time": Value::Null,
        });
        self.open_traces.insert(trace.id, value);
        Ok(())
    }

    fn end_trace(&mut self, trace_id: &str, end: TraceEnd) -> Result<(), LabseedError> {
        let mut value = self
            .open_traces
            .remove(trace_id)
            .ok_or_else(|| LabseedError::Sink(format!("ending unknown trace {trace_id}")))?;
        value["output"] = end.output;
        value["end_time"] = Value::String(end.end_time.to_rfc3339());
        self.ready_traces.push_back(value);
        self.drain_if_full()
    }

    fn add_span(&mut self, span: SpanRecord) -> Result<(), LabseedError> {
        self.ready_spans.push_back(json!({
            "id": span.id,
            "trace_id": span.trace_id,
            "project_name": self.project,
            "name": span.name,
            "type": span.kind.as_str(),
            "model": span.model,
            "provider": span.provider,
            "input": span.input,
            "output": span.output,
            "usage": span.usage.as_ref().map(Self::usage_value),
            "start_time": span.start_time.to_rfc3339(),
            "end_time": span.end_time.to_rfc3339(),
            "metadata": span.metadata,
        }));
        self.drain_if_full()
    }

    fn trace_feedback(
        &mut self,
        trace_id: &str,
        score: FeedbackScore,
    ) -> Result<(), LabseedError> {
        self.ready_trace_scores.push_back(json!({
            "id": trace_id,
            "project_name": self.project,
            "name": score.name,
            "value": score.value,
            "reason": score.reason,
        }));
        self.drain_if_full()
    }

    fn span_feedback(
        &mut self,
        span_id: &str,
        score: FeedbackScore,
    ) -> Result<(), LabseedError> {
        self.ready_span_scores.push_back(json!({
            "id": span_id,
            "project_name": self.project,
            "name": score.name,
            "value": score.value,
            "reason": score.reason,
        }));
        self.drain_if_full()
    }

    fn close_thread(&mut self, thread_id: &str) -> Result<(), LabseedError> {
        self.drain_all()?;
        self.send(
            Verb::Put,
            "v1/threads/close",
            &json!({"project_name": self.project, "thread_id": thread_id}),
        )
    }

    fn thread_feedback(&mut self, scores: &[ThreadFeedback]) -> Result<(), LabseedError> {
        let entries: Vec<Value> = scores
            .iter()
            .map(|s| {
                json!({
                    "thread_id": s.thread_id,
                    "project_name": self.project,
                    "name": s.name,
                    "value": s.value,
                    "reason": s.reason,
                })
            })
            .collect();
        self.send(
            Verb::Put,
            "v1/threads/feedback-scores",
            &json!({"scores": entries}),
        )
    }

    fn flush(&mut self, budget: Duration) -> Result<FlushOutcome, LabseedError> {
        let started = Instant::now();
        let mut sent = 0;
        while self.pending() > 0 {
            if started.elapsed() >= budget {
                return Ok(FlushOutcome::TimedOut {
                    sent,
                    pending: self.pending(),
                });
            }
            sent += self.send_one_batch()?;
        }
        Ok(FlushOutcome::Completed { sent })
    }
}
