//! Session driver: runs N simulated conversations against the trace store.
//! Each session sticks to one canned topic entry, back-dates its start into
//! the configured window, and walks its turns through the record-tree
//! builder before closing the thread with a frustration rating.

use crate::LabseedError;
use crate::cli::SeedArgs;
use crate::client::HttpSink;
use crate::config::{self, LabseedConfig};
use crate::emitter::{self, ChatMessage, Turn};
use crate::library::{self, Exchange, Workflow};
use crate::sampling;
use crate::sink::{FlushOutcome, RecordSink, ThreadFeedback};
use chrono::{Duration, Utc};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub struct SeedOptions {
    pub project: String,
    pub sessions: usize,
    pub days_back: u32,
    pub model: String,
    pub provider: String,
    pub flush_timeout: std::time::Duration,
}

/// What a seeding run did, for the caller to report on.
pub enum SeedOutcome {
    /// The project already had traces; nothing was written.
    SkippedExisting,
    Seeded(SeedReport),
}

pub struct SeedReport {
    pub sessions: usize,
    pub traces: usize,
    pub flush: FlushOutcome,
}

pub fn handle_seed(args: &SeedArgs, config: &LabseedConfig) -> Result<(), LabseedError> {
    let mut sink_config = config.sink.clone();
    if let Some(project) = &args.project {
        sink_config.project = project.clone();
    }
    let api_key = config::resolve_api_key(&sink_config);
    let mut sink = HttpSink::new(&sink_config, api_key);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let opts = SeedOptions {
        project: sink_config.project.clone(),
        sessions: args.sessions.unwrap_or(config.seed.sessions),
        days_back: args.days_back.unwrap_or(config.seed.days_back),
        model: config.seed.model.clone(),
        provider: config.seed.provider.clone(),
        flush_timeout: std::time::Duration::from_secs(sink_config.flush_timeout_secs),
    };

    match run_seed(&mut sink, &mut rng, &opts)? {
        SeedOutcome::SkippedExisting => {
            eprintln!(
                "labseed: project '{}' already has traces — skipping seed",
                opts.project
            );
        }
        SeedOutcome::Seeded(report) => {
            if let FlushOutcome::TimedOut { pending, .. } = report.flush {
                eprintln!(
                    "labseed: flush timed out with {pending} submissions queued; \
                     the store keeps ingesting asynchronously"
                );
            }
            eprintln!(
                "labseed: seeded {} traces across {} threads into '{}'",
                report.traces, report.sessions, opts.project
            );
        }
    }
    Ok(())
}

/// The generator proper, sink-agnostic for tests.
pub fn run_seed(
    sink: &mut dyn RecordSink,
    rng: &mut impl Rng,
    opts: &SeedOptions,
) -> Result<SeedOutcome, LabseedError> {
    // Idempotence guard: never re-seed a populated project. A failed probe
    // usually means the project does not exist yet, so seeding proceeds.
    match sink.has_any_trace() {
        Ok(true) => {
            info!("project '{}' already populated, skipping", opts.project);
            return Ok(SeedOutcome::SkippedExisting);
        }
        Ok(false) => {}
        Err(e) => debug!("existence probe failed ({e}), proceeding with seed"),
    }

    let now = Utc::now();
    let mut traces = 0usize;

    for session in 0..opts.sessions {
        let thread_id = format!("session-{:012x}", rng.gen_range(0..1u64 << 48));
        let num_turns = sampling::turn_count(rng);
        let days = sampling::days_ago(rng, opts.days_back);
        let thread_start = now
            - Duration::milliseconds((days * 86_400_000.0) as i64)
            - Duration::minutes(rng.gen_range(0..=120));

        let route = sampling::pick_route(rng);
        let entry = library::pick_entry(rng, route);
        let mut follow_ups: Vec<Exchange> = entry.follow_ups().to_vec();
        follow_ups.shuffle(rng);

        let mut chat_history: Vec<ChatMessage> = Vec::new();
        let mut turn_scores: Vec<f64> = Vec::new();
        let mut offset = Duration::zero();

        for turn_index in 0..num_turns {
            // Each turn starts a fresh 1-8 minutes after the previous one,
            // so turn starts only ever move forward.
            offset = offset + sampling::duration_secs(rng, 60.0, 480.0);
            let turn_start = thread_start + offset;

            let (exchange, workflow) = if turn_index == 0 {
                (entry.exchange(), entry.workflow())
            } else if let Some(follow_up) = follow_ups.get(turn_index - 1) {
                (*follow_up, entry.workflow())
            } else {
                // Topic exhausted: wind the conversation down.
                (library::CLOSING, Workflow::Chat)
            };

            emitter::emit_turn(
                sink,
                rng,
                &Turn {
                    thread_id: &thread_id,
                    turn_index,
                    question: exchange.question,
                    answer: exchange.answer,
                    workflow,
                    chat_history: &chat_history,
                    start: turn_start,
                    model: &opts.model,
                    provider: &opts.provider,
                },
            )?;
            traces += 1;

            turn_scores.push(sampling::helpfulness(rng));
            chat_history.push(ChatMessage {
                role: "user",
                content: exchange.question.to_string(),
            });
            chat_history.push(ChatMessage {
                role: "assistant",
                content: exchange.answer.to_string(),
            });
        }

        sink.close_thread(&thread_id)?;
        let avg = turn_scores.iter().sum::<f64>() / turn_scores.len() as f64;
        sink.thread_feedback(&[ThreadFeedback {
            thread_id,
            name: "user_frustration",
            value: sampling::frustration(rng, &turn_scores),
            reason: format!("{num_turns} turn(s), avg helpfulness {avg:.2}"),
        }])?;

        if (session + 1) % 25 == 0 {
            info!("seeded {}/{} threads", session + 1, opts.sessions);
        }
    }

    let flush = sink.flush(opts.flush_timeout)?;
    if let FlushOutcome::TimedOut { pending, .. } = flush {
        warn!(
            "final flush exceeded its {:?} budget with {pending} submissions queued",
            opts.flush_timeout
        );
    }

    Ok(SeedOutcome::Seeded(SeedReport {
        sessions: opts.sessions,
        traces,
        flush,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{CHAT_ENTRIES, CLOSING, DATA_ENTRIES, POLICY_ENTRIES, TopicEntry};
    use crate::sink::testing::MemorySink;
    use serde_json::Value;

    fn opts(sessions: usize) -> SeedOptions {
        SeedOptions {
            project: "OhmSweetOhm-Support-Chatbot".into(),
            sessions,
            days_back: 30,
            model: "gpt-5".into(),
            provider: "openai".into(),
            flush_timeout: std::time::Duration::from_secs(10),
        }
    }

    fn run(sessions: usize, seed: u64) -> (MemorySink, SeedReport) {
        let mut sink = MemorySink::default();
        let mut rng = StdRng::seed_from_u64(seed);
        match run_seed(&mut sink, &mut rng, &opts(sessions)).unwrap() {
            SeedOutcome::Seeded(report) => (sink, report),
            SeedOutcome::SkippedExisting => panic!("unexpected skip"),
        }
    }

    fn question_of(trace: &crate::sink::TraceStart) -> &str {
        trace
            .input
            .pointer("/user_question")
            .and_then(Value::as_str)
            .unwrap()
    }

    fn turn_index_of(trace: &crate::sink::TraceStart) -> u64 {
        trace
            .metadata
            .pointer("/turn_index")
            .and_then(Value::as_u64)
            .unwrap()
    }

    fn entries() -> impl Iterator<Item = &'static TopicEntry> {
        DATA_ENTRIES.iter().chain(POLICY_ENTRIES).chain(CHAT_ENTRIES)
    }

    #[test]
    fn populated_project_skips_the_whole_run() {
        let mut sink = MemorySink::already_populated();
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = run_seed(&mut sink, &mut rng, &opts(20)).unwrap();

        assert!(matches!(outcome, SeedOutcome::SkippedExisting));
        assert!(sink.traces.is_empty());
        assert!(sink.closed_threads.is_empty());
        assert_eq!(sink.flushes, 0);
    }

    #[test]
    fn failed_probe_still_seeds() {
        let mut sink = MemorySink::failing_probe();
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = run_seed(&mut sink, &mut rng, &opts(3)).unwrap();

        assert!(matches!(outcome, SeedOutcome::Seeded(_)));
        assert!(!sink.traces.is_empty());
    }

    #[test]
    fn every_thread_closes_with_one_frustration_score() {
        let (sink, report) = run(12, 7);

        assert_eq!(report.sessions, 12);
        assert_eq!(sink.closed_threads.len(), 12);
        assert_eq!(sink.thread_scores.len(), 12);
        assert_eq!(sink.flushes, 1);
        assert!(matches!(report.flush, FlushOutcome::Completed { .. }));

        for score in &sink.thread_scores {
            assert_eq!(score.name, "user_frustration");
            assert!((0.0..=1.0).contains(&score.value));
            assert!(score.reason.contains("turn(s), avg helpfulness"));
            assert!(sink.closed_threads.contains(&score.thread_id));
        }
    }

    #[test]
    fn trace_count_matches_emitted_turns() {
        let (sink, report) = run(15, 3);
        assert_eq!(report.traces, sink.traces.len());
        assert!(report.traces >= 15, "at least one turn per thread");
        assert_eq!(sink.ended_traces.len(), sink.traces.len());
    }

    #[test]
    fn turn_starts_move_strictly_forward_within_a_thread() {
        let (sink, _) = run(20, 11);

        for thread_id in &sink.closed_threads {
            let starts: Vec<_> = sink
                .traces
                .iter()
                .filter(|t| &t.thread_id == thread_id)
                .map(|t| t.start_time)
                .collect();
            for pair in starts.windows(2) {
                assert!(pair[0] < pair[1], "turn starts regressed in {thread_id}");
            }
        }
    }

    #[test]
    fn turn_indices_count_up_from_zero() {
        let (sink, _) = run(20, 13);

        for thread_id in &sink.closed_threads {
            let indices: Vec<u64> = sink
                .traces
                .iter()
                .filter(|t| &t.thread_id == thread_id)
                .map(turn_index_of)
                .collect();
            let expected: Vec<u64> = (0..indices.len() as u64).collect();
            assert_eq!(indices, expected);
        }
    }

    #[test]
    fn questions_and_answers_always_pair_up() {
        let (sink, _) = run(25, 17);
        let mut known = vec![CLOSING];
        for entry in entries() {
            known.push(entry.exchange());
            known.extend_from_slice(entry.follow_ups());
        }

        for trace in &sink.traces {
            let question = question_of(trace);
            let end = sink.ended_traces.get(&trace.id).unwrap();
            let answer = end.output.pointer("/response").and_then(Value::as_str).unwrap();
            assert!(
                known
                    .iter()
                    .any(|e| e.question == question && e.answer == answer),
                "unpaired exchange: {question:?} / {answer:?}"
            );
        }
    }

    #[test]
    fn threads_stay_on_their_opening_topic() {
        let (sink, _) = run(25, 19);

        for thread_id in &sink.closed_threads {
            let mut thread_traces: Vec<_> = sink
                .traces
                .iter()
                .filter(|t| &t.thread_id == thread_id)
                .collect();
            thread_traces.sort_by_key(|t| turn_index_of(t));

            // The opening turn names the session's entry...
            let opening = question_of(thread_traces[0]);
            let entry = entries()
                .find(|e| e.exchange().question == opening)
                .expect("opening question is a primary exchange");

            // ...and every later turn is one of its follow-ups, or the
            // generic closing line once the topic is spent.
            for trace in &thread_traces[1..] {
                let question = question_of(trace);
                assert!(
                    question == CLOSING.question
                        || entry.follow_ups().iter().any(|f| f.question == question),
                    "turn strayed off-topic: {question:?} after {opening:?}"
                );
            }
        }
    }

    #[test]
    fn chat_history_grows_with_the_thread() {
        let (sink, _) = run(15, 23);

        for trace in &sink.traces {
            let history = trace
                .input
                .pointer("/chat_history")
                .and_then(Value::as_array)
                .unwrap();
            assert_eq!(history.len() as u64, turn_index_of(trace) * 2);
        }
    }

    #[test]
    fn chat_turns_carry_exactly_two_spans() {
        let (sink, _) = run(30, 29);

        for trace in &sink.traces {
            let spans = sink.spans_of(&trace.id);
            if trace.tags.contains(&"chat") {
                assert_eq!(spans.len(), 2, "chat turn with extra spans");
            } else {
                assert_eq!(spans.len(), 4, "lookup turn missing spans");
            }
            assert!(spans.iter().all(|s| s.start_time >= trace.start_time));
        }
    }

    #[test]
    fn thread_start_lands_inside_the_backdating_window() {
        let before = Utc::now();
        let (sink, _) = run(25, 31);

        let window = Duration::days(30) + Duration::minutes(121);
        for trace in &sink.traces {
            assert!(trace.start_time > before - window);
            // First turn starts 1-8 minutes after the thread start; no
            // record may land in the future.
            assert!(trace.start_time < Utc::now() + Duration::minutes(9));
        }
    }

    #[test]
    fn three_turn_reason_names_the_turn_count() {
        // Scan a handful of seeded runs for a three-turn thread and check
        // its score reason.
        for seed in 0..20 {
            let (sink, _) = run(10, seed);
            for score in &sink.thread_scores {
                let turns = sink
                    .traces
                    .iter()
                    .filter(|t| t.thread_id == score.thread_id)
                    .count();
                if turns == 3 {
                    assert!(score.reason.starts_with("3 turn(s)"));
                    return;
                }
            }
        }
        panic!("no three-turn thread in 20 seeded runs");
    }

    #[test]
    fn thread_ids_are_twelve_hex_digits() {
        let (sink, _) = run(10, 37);
        for thread_id in &sink.closed_threads {
            let hex = thread_id.strip_prefix("session-").unwrap();
            assert_eq!(hex.len(), 12);
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn identical_seeds_reproduce_the_run() {
        let (a, _) = run(8, 41);
        let (b, _) = run(8, 41);

        assert_eq!(a.closed_threads, b.closed_threads);
        let questions_a: Vec<&str> = a.traces.iter().map(question_of).collect();
        let questions_b: Vec<&str> = b.traces.iter().map(question_of).collect();
        assert_eq!(questions_a, questions_b);

        let scores_a: Vec<f64> = a.thread_scores.iter().map(|s| s.value).collect();
        let scores_b: Vec<f64> = b.thread_scores.iter().map(|s| s.value).collect();
        assert_eq!(scores_a, scores_b);
    }
}
