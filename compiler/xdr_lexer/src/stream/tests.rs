use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use xdr_ir::TokenKind;

use super::*;

fn wait_for_producer(stream: &TokenStream) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if stream.is_producer_finished() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

fn large_source() -> String {
    (0..10_000).map(|i| format!("const C{i} = {i};\n")).collect()
}

#[test]
fn streams_the_same_tokens_as_lex() {
    let source = "const FOO = 0x10;\nenum Bar { X, Y = 3 };";
    let streamed: Vec<_> = spawn(source.to_string()).into_iter().flatten().collect();
    assert_eq!(streamed, crate::lex(source));
}

#[test]
fn stream_ends_after_terminal_token() {
    let mut stream = spawn("x".to_string()).unwrap_or_else(|e| panic!("spawn: {e}"));
    assert_eq!(stream.next_token().kind, TokenKind::Ident);
    assert_eq!(stream.next_token().kind, TokenKind::Eof);
    assert!(stream.is_done());
    assert_eq!(stream.next(), None);
    // Keeps answering Eof rather than blocking.
    assert_eq!(stream.next_token().kind, TokenKind::Eof);
}

#[test]
fn stream_stops_at_error_token() {
    let stream = spawn("a $ b".to_string()).unwrap_or_else(|e| panic!("spawn: {e}"));
    let kinds: Vec<_> = stream.map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Error]);
}

#[test]
fn producer_runs_at_most_one_token_ahead() {
    let mut stream = spawn(large_source()).unwrap_or_else(|e| panic!("spawn: {e}"));
    let first = stream.next_token();
    assert_eq!(first.kind, TokenKind::Const);
    thread::sleep(Duration::from_millis(50));
    // Backpressure: the producer is parked on the full channel.
    assert!(!stream.is_producer_finished());
    assert!(stream.tokens.len() <= CHANNEL_CAPACITY);
}

#[test]
fn cancel_wakes_a_blocked_producer() {
    let mut stream = spawn(large_source()).unwrap_or_else(|e| panic!("spawn: {e}"));
    let _ = stream.next_token();
    stream.cancel();
    assert!(wait_for_producer(&stream), "producer did not stop after cancel");
}

#[test]
fn cancel_is_idempotent() {
    let mut stream = spawn("const A = 1;".to_string()).unwrap_or_else(|e| panic!("spawn: {e}"));
    stream.cancel();
    stream.cancel();
    assert!(wait_for_producer(&stream));
}

#[test]
fn dropping_an_unread_stream_joins_the_producer() {
    let stream = spawn(large_source()).unwrap_or_else(|e| panic!("spawn: {e}"));
    // Drop cancels and joins; a leaked producer would hang here.
    drop(stream);
}
