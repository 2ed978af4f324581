//! Record-tree builder: turns one scripted exchange into the span tree the
//! real OhmBot would have produced — a root trace for the turn, a router
//! span, the branch-specific workflow spans, and a closing answer.

use crate::LabseedError;
use crate::library::Workflow;
use crate::sampling;
use crate::sink::{FeedbackScore, RecordSink, SpanKind, SpanRecord, TraceEnd, TraceStart};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::{Value, json};

/// One prior exchange, carried into the next turn's input payload.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// The workflow graph the dashboard renders next to each trace.
const WORKFLOW_GRAPH: &str = "graph TD;
Start(User Input)-->Router{Router};
Router-->|DATABASE| SQL[SQL Workflow];
Router-->|POLICY| RAG[Policy Workflow];
Router-->|CHAT| Chat[General Chat];
SQL-->SQLTool[DB Query];
RAG-->RAGTool[Vector Search];
Chat-->End(Response);";

/// Everything the builder needs to know about one turn.
pub struct Turn<'a> {
    pub thread_id: &'a str,
    pub turn_index: usize,
    pub question: &'a str,
    pub answer: &'a str,
    pub workflow: Workflow,
    pub chat_history: &'a [ChatMessage],
    pub start: DateTime<Utc>,
    pub model: &'a str,
    pub provider: &'a str,
}

/// Emit the full record tree for one turn.
///
/// Spans advance a running clock from the turn start, each beginning where
/// the previous ended. The trace's declared end is anchored to an
/// independently drawn total duration instead of the span clock — the slack
/// between the two is deliberate, it mimics queueing and think-time the
/// spans don't account for.
pub fn emit_turn(
    sink: &mut dyn RecordSink,
    rng: &mut impl Rng,
    turn: &Turn<'_>,
) -> Result<(), LabseedError> {
    let route = turn.workflow.route();
    let total_dur = sampling::duration_secs(rng, 1.2, 9.0);
    let mut clock = turn.start;

    let trace_id = sink.record_id(turn.start);
    sink.begin_trace(TraceStart {
        id: trace_id.clone(),
        name: "OhmBot_Support",
        thread_id: turn.thread_id.to_string(),
        input: json!({
            "user_question": turn.question,
            "chat_history": turn.chat_history,
        }),
        tags: vec!["production", route.tag()],
        metadata: json!({
            "environment": "production",
            "session_id": turn.thread_id,
            "turn_index": turn.turn_index,
            "_graph_definition": {"format": "mermaid", "data": WORKFLOW_GRAPH},
        }),
        start_time: turn.start,
    })?;

    // Router span, always first. Routing correctness attaches here, not to
    // the trace: the score rates the classifier, not the answer.
    let router_dur = sampling::duration_secs(rng, 0.3, 0.9);
    let router_id = emit_llm_span(
        sink,
        turn,
        &trace_id,
        LlmSpan {
            name: "route_user_request",
            input: json!({"messages": [
                {"role": "user", "content": format!("Classify: {}", turn.question)},
            ]}),
            output: json!({"choices": [{"message": {"content": route.label()}}]}),
            usage: sampling::usage(rng, (30, 120), (1, 5)),
            start: clock,
            duration: router_dur,
            metadata: Some(json!({"temperature": 0})),
        },
    )?;
    sink.span_feedback(
        &router_id,
        FeedbackScore {
            name: "classification_correctness",
            value: sampling::routing_correctness(rng),
            reason: format!("Routed to {}", route.label()),
        },
    )?;
    clock += router_dur;

    match turn.workflow {
        Workflow::DataLookup { sql } => {
            let gen_dur = sampling::duration_secs(rng, 0.8, 2.5);
            emit_llm_span(
                sink,
                turn,
                &trace_id,
                LlmSpan {
                    name: "SQL_Generation_Step",
                    input: user_message(turn.question),
                    output: json!({"tool_call": {
                        "name": "run_sql_query",
                        "arguments": {"query": sql},
                    }}),
                    usage: sampling::usage(rng, (150, 400), (20, 60)),
                    start: clock,
                    duration: gen_dur,
                    metadata: None,
                },
            )?;
            clock += gen_dur;

            let tool_dur = sampling::duration_secs(rng, 0.05, 0.3);
            emit_tool_span(
                sink,
                &trace_id,
                "run_sql_query",
                json!({"query": sql}),
                json!({"result": "| col1 | col2 |\n|------|------|\n| val1 | val2 |"}),
                clock,
                tool_dur,
                Some(json!({"database": "ohm_sweet_ohm.db"})),
            )?;
            clock += tool_dur;

            let final_dur = sampling::duration_secs(rng, 0.5, 1.5);
            emit_llm_span(
                sink,
                turn,
                &trace_id,
                LlmSpan {
                    name: "SQL_Final_Answer_Step",
                    input: user_message(turn.question),
                    output: answer_message(turn.answer),
                    usage: sampling::usage(rng, (200, 500), (40, 150)),
                    start: clock,
                    duration: final_dur,
                    metadata: None,
                },
            )?;
        }
        Workflow::PolicyLookup { context } => {
            let gen_dur = sampling::duration_secs(rng, 0.6, 1.8);
            emit_llm_span(
                sink,
                turn,
                &trace_id,
                LlmSpan {
                    name: "RAG_Query_Generation",
                    input: user_message(turn.question),
                    output: json!({"tool_call": {
                        "name": "look_up_policy",
                        "arguments": {"query": turn.question},
                    }}),
                    usage: sampling::usage(rng, (100, 300), (10, 40)),
                    start: clock,
                    duration: gen_dur,
                    metadata: None,
                },
            )?;
            clock += gen_dur;

            let retrieval_dur = sampling::duration_secs(rng, 0.1, 0.5);
            emit_tool_span(
                sink,
                &trace_id,
                "look_up_policy",
                json!({"query": turn.question}),
                json!({"chunks": [context], "n_results": rng.gen_range(1..=3)}),
                clock,
                retrieval_dur,
                Some(json!({"index": "faq.txt"})),
            )?;
            clock += retrieval_dur;

            let final_dur = sampling::duration_secs(rng, 0.6, 2.0);
            emit_llm_span(
                sink,
                turn,
                &trace_id,
                LlmSpan {
                    name: "RAG_Final_Answer_Step",
                    input: json!({"messages": [
                        {"role": "system", "content": "You are a policy assistant. Use the handbook."},
                        {"role": "tool", "content": context},
                        {"role": "user", "content": turn.question},
                    ]}),
                    output: answer_message(turn.answer),
                    usage: sampling::usage(rng, (250, 600), (50, 200)),
                    start: clock,
                    duration: final_dur,
                    metadata: None,
                },
            )?;
        }
        Workflow::Chat => {
            // Small talk skips the tool machinery: one combined span.
            let chat_dur = sampling::duration_secs(rng, 0.4, 1.2);
            emit_llm_span(
                sink,
                turn,
                &trace_id,
                LlmSpan {
                    name: "run_chat_workflow",
                    input: json!({"messages": [
                        {"role": "system", "content": "You are a helpful customer support assistant."},
                        {"role": "user", "content": turn.question},
                    ]}),
                    output: answer_message(turn.answer),
                    usage: sampling::usage(rng, (50, 150), (20, 80)),
                    start: clock,
                    duration: chat_dur,
                    metadata: None,
                },
            )?;
        }
    }

    sink.end_trace(
        &trace_id,
        TraceEnd {
            output: json!({"response": turn.answer}),
            end_time: turn.start + total_dur,
        },
    )?;
    sink.trace_feedback(
        &trace_id,
        FeedbackScore {
            name: "answer_helpfulness",
            value: sampling::helpfulness(rng),
            reason: "Synthetic user rating".into(),
        },
    )?;

    Ok(())
}

struct LlmSpan {
    name: &'static str,
    input: Value,
    output: Value,
    usage: crate::sink::Usage,
    start: DateTime<Utc>,
    duration: Duration,
    metadata: Option<Value>,
}

fn emit_llm_span(
    sink: &mut dyn RecordSink,
    turn: &Turn<'_>,
    trace_id: &str,
    span: LlmSpan,
) -> Result<String, LabseedError> {
    let id = sink.record_id(span.start);
    sink.add_span(SpanRecord {
        id: id.clone(),
        trace_id: trace_id.to_string(),
        name: span.name,
        kind: SpanKind::Llm,
        model: Some(turn.model.to_string()),
        provider: Some(turn.provider.to_string()),
        input: span.input,
        output: span.output,
        usage: Some(span.usage),
        start_time: span.start,
        end_time: span.start + span.duration,
        metadata: span.metadata,
    })?;
    Ok(id)
}

#[allow(clippy::too_many_arguments)]
fn emit_tool_span(
    sink: &mut dyn RecordSink,
    trace_id: &str,
    name: &'static str,
    input: Value,
    output: Value,
    start: DateTime<Utc>,
    duration: Duration,
    metadata: Option<Value>,
) -> Result<(), LabseedError> {
    let id = sink.record_id(start);
    sink.add_span(SpanRecord {
        id,
        trace_id: trace_id.to_string(),
        name,
        kind: SpanKind::Tool,
        model: None,
        provider: None,
        input,
        output,
        usage: None,
        start_time: start,
        end_time: start + duration,
        metadata,
    })
}

fn user_message(question: &str) -> Value {
    json!({"messages": [{"role": "user", "content": question}]})
}

fn answer_message(answer: &str) -> Value {
    json!({"choices": [{"message": {"content": answer}}]})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Workflow;
    use crate::sink::testing::MemorySink;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn emit(workflow: Workflow) -> (MemorySink, String) {
        let mut sink = MemorySink::default();
        let mut rng = StdRng::seed_from_u64(9);
        let turn = Turn {
            thread_id: "session-abc123def456",
            turn_index: 0,
            question: "What is your return policy?",
            answer: "We accept returns within 30 days.",
            workflow,
            chat_history: &[],
            start: Utc::now(),
            model: "gpt-5",
            provider: "openai",
        };
        emit_turn(&mut sink, &mut rng, &turn).unwrap();
        let trace_id = sink.traces[0].id.clone();
        (sink, trace_id)
    }

    #[test]
    fn data_lookup_emits_four_spans_in_order() {
        let (sink, trace_id) = emit(Workflow::DataLookup {
            sql: "SELECT price FROM products WHERE product_id = 'AUDIO-101'",
        });
        let spans = sink.spans_of(&trace_id);
        let names: Vec<&str> = spans.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "route_user_request",
                "SQL_Generation_Step",
                "run_sql_query",
                "SQL_Final_Answer_Step"
            ]
        );
        assert_eq!(spans[2].kind, SpanKind::Tool);
        assert!(spans[2].usage.is_none());
    }

    #[test]
    fn policy_lookup_emits_retrieval_not_sql() {
        let (sink, trace_id) = emit(Workflow::PolicyLookup {
            context: "Return Policy: 30 days in original condition...",
        });
        let names: Vec<&str> = sink.spans_of(&trace_id).iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "route_user_request",
                "RAG_Query_Generation",
                "look_up_policy",
                "RAG_Final_Answer_Step"
            ]
        );
    }

    #[test]
    fn chat_emits_exactly_two_spans() {
        let (sink, trace_id) = emit(Workflow::Chat);
        let names: Vec<&str> = sink.spans_of(&trace_id).iter().map(|s| s.name).collect();
        assert_eq!(names, ["route_user_request", "run_chat_workflow"]);
    }

    #[test]
    fn spans_are_contiguous_and_inside_the_turn_window() {
        let (sink, trace_id) = emit(Workflow::DataLookup { sql: "SELECT 1" });
        let spans = sink.spans_of(&trace_id);
        let turn_start = sink.traces[0].start_time;

        let mut clock = turn_start;
        for span in &spans {
            assert_eq!(span.start_time, clock, "span {} does not start on the clock", span.name);
            assert!(span.end_time >= span.start_time);
            clock = span.end_time;
        }
        // Max span chain is ~5.2s; the next turn starts at least a minute
        // later, so the whole chain fits the turn's wall-clock window.
        assert!(clock - turn_start < Duration::seconds(10));
    }

    #[test]
    fn trace_end_is_anchored_to_its_own_draw() {
        let (sink, trace_id) = emit(Workflow::Chat);
        let end = sink.ended_traces.get(&trace_id).unwrap();
        let elapsed = end.end_time - sink.traces[0].start_time;
        assert!(elapsed >= Duration::milliseconds(1200));
        assert!(elapsed <= Duration::milliseconds(9000));
        assert_eq!(
            end.output.pointer("/response").and_then(|v| v.as_str()),
            Some("We accept returns within 30 days.")
        );
    }

    #[test]
    fn scores_land_on_the_right_records() {
        let (sink, trace_id) = emit(Workflow::Chat);
        let router_id = sink.spans_of(&trace_id)[0].id.clone();

        let router_scores = sink.scores_for_span(&router_id);
        assert_eq!(router_scores.len(), 1);
        assert_eq!(router_scores[0].name, "classification_correctness");
        assert!(router_scores[0].value == 0.0 || router_scores[0].value == 1.0);
        assert_eq!(router_scores[0].reason, "Routed to CHAT");

        let trace_scores = sink.scores_for_trace(&trace_id);
        assert_eq!(trace_scores.len(), 1);
        assert_eq!(trace_scores[0].name, "answer_helpfulness");
        assert!([0.0, 0.25, 0.5, 0.75, 1.0].contains(&trace_scores[0].value));
    }

    #[test]
    fn trace_metadata_names_the_session_and_turn() {
        let (sink, _) = emit(Workflow::Chat);
        let meta = &sink.traces[0].metadata;
        assert_eq!(
            meta.pointer("/session_id").and_then(|v| v.as_str()),
            Some("session-abc123def456")
        );
        assert_eq!(meta.pointer("/turn_index").and_then(|v| v.as_u64()), Some(0));
        assert_eq!(
            meta.pointer("/_graph_definition/format").and_then(|v| v.as_str()),
            Some("mermaid")
        );
        assert_eq!(sink.traces[0].tags, vec!["production", "chat"]);
    }
}
