//! Concurrent token producer.
//!
//! The scanner runs on a dedicated thread and pushes tokens into a bounded
//! channel of [`CHANNEL_CAPACITY`]; a full channel blocks the producer, so
//! it never runs more than one token ahead of the parser.
//!
//! Stopping is explicit: [`TokenStream::cancel`] disconnects a second,
//! never-written channel that the producer selects on alongside every send.
//! A producer blocked on a full channel therefore wakes up and exits even
//! when the parser has stopped reading. Dropping the stream cancels and
//! joins the thread.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{bounded, select, Receiver, Sender};
use tracing::{debug, trace, warn};
use xdr_ir::{Position, Token};

use crate::Scanner;

/// Capacity of the token hand-off channel.
pub const CHANNEL_CAPACITY: usize = 1;

/// Consumer side of a running lexer thread.
pub struct TokenStream {
    tokens: Receiver<Token>,
    cancel: Option<Sender<()>>,
    producer: Option<JoinHandle<()>>,
    /// Position of the last token received, used if the producer vanishes.
    last: Position,
    done: bool,
}

/// Start tokenizing `source` on a new thread.
///
/// Fails only if the thread cannot be spawned.
pub fn spawn(source: String) -> io::Result<TokenStream> {
    let (token_tx, token_rx) = bounded(CHANNEL_CAPACITY);
    let (cancel_tx, cancel_rx) = bounded::<()>(0);

    let producer = thread::Builder::new()
        .name("xdr-lexer".to_string())
        .spawn(move || produce(&source, &token_tx, &cancel_rx))?;

    Ok(TokenStream {
        tokens: token_rx,
        cancel: Some(cancel_tx),
        producer: Some(producer),
        last: Position::new(1, 1),
        done: false,
    })
}

fn produce(source: &str, tokens: &Sender<Token>, cancel: &Receiver<()>) {
    debug!(bytes = source.len(), "lexer started");
    let mut sent = 0usize;

    for token in Scanner::new(source) {
        trace!(kind = %token.kind, position = %token.position, "produce");
        select! {
            send(tokens, token) -> res => {
                if res.is_err() {
                    debug!(sent, "token receiver dropped, lexer stopping");
                    return;
                }
            }
            recv(cancel) -> _ => {
                debug!(sent, "lexer cancelled");
                return;
            }
        }
        sent += 1;
    }

    debug!(sent, "lexer reached end of input");
}

impl TokenStream {
    /// Receive the next token, blocking until the producer delivers it.
    ///
    /// After the terminal token (or if the producer is gone) this keeps
    /// returning `Eof` at the last known position.
    pub fn next_token(&mut self) -> Token {
        if self.done {
            return Token::eof(self.last);
        }
        let token = self.tokens.recv().unwrap_or_else(|_| Token::eof(self.last));
        self.last = token.position;
        self.done = token.is_terminal();
        token
    }

    /// Stop the producer. Idempotent.
    pub fn cancel(&mut self) {
        if self.cancel.take().is_some() {
            debug!(done = self.done, "cancelling lexer");
        }
    }

    /// Whether the terminal token has been received.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether the producer thread has exited.
    pub fn is_producer_finished(&self) -> bool {
        self.producer.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    /// Yields every token up to and including the terminal one.
    fn next(&mut self) -> Option<Token> {
        if self.done {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.cancel();
        if let Some(producer) = self.producer.take() {
            if producer.join().is_err() {
                warn!("lexer thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests;
