//! Single-in-flight ATT transaction queue
//!
//! ATT forbids more than one outstanding request per channel. The queue
//! serializes commands: at most one response-expecting command is "current"
//! at a time, everything else waits in FIFO order. The queue owns no I/O;
//! it reports what to transmit and which command a response completes
//! through [`QueueOutput`] values, and the caller interprets the response
//! payload.

use log::{debug, warn};
use std::collections::VecDeque;

/// How a queued command completes.
///
/// Exactly one of the two applies: a request awaits a correlated response
/// PDU, while an unacknowledged write resolves as soon as it has been
/// transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<T> {
    /// Complete when the peer's response PDU arrives
    OnResponse(T),
    /// Complete immediately after transmission; no response expected
    OnSent(T),
}

#[derive(Debug)]
struct PendingCommand<T> {
    pdu: Vec<u8>,
    completion: Completion<T>,
}

/// Effects produced by [`CommandQueue::enqueue`] and
/// [`CommandQueue::on_data`], in the order they must be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOutput<T> {
    /// Transmit this PDU on the channel
    Transmit(Vec<u8>),
    /// An unacknowledged write has been transmitted
    Sent(T),
    /// The current command's response arrived
    Response { payload: T, pdu: Vec<u8> },
    /// The transport echoed the outstanding request; still awaiting the
    /// real response
    Echo,
    /// Inbound PDU with no command outstanding; dropped
    Discarded(Vec<u8>),
}

/// FIFO command queue enforcing the one-outstanding-request rule.
#[derive(Debug)]
pub struct CommandQueue<T> {
    current: Option<PendingCommand<T>>,
    pending: VecDeque<PendingCommand<T>>,
}

impl<T> CommandQueue<T> {
    pub fn new() -> Self {
        Self {
            current: None,
            pending: VecDeque::new(),
        }
    }

    /// True while a response-expecting command is outstanding
    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }

    /// Number of commands waiting behind the current one
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Append a command and, if nothing is outstanding, start draining.
    pub fn enqueue(&mut self, pdu: Vec<u8>, completion: Completion<T>) -> Vec<QueueOutput<T>> {
        self.pending.push_back(PendingCommand { pdu, completion });

        let mut outputs = Vec::new();
        if self.current.is_none() {
            self.drain(&mut outputs);
        }
        outputs
    }

    /// Handle an inbound PDU that is not a notification.
    ///
    /// Correlates the PDU to the current command, suppressing transport
    /// echo of the request bytes, then resumes draining. Draining here
    /// follows the same FIFO order as draining on enqueue.
    pub fn on_data(&mut self, pdu: &[u8]) -> Vec<QueueOutput<T>> {
        let mut outputs = Vec::new();

        match self.current.take() {
            Some(command) if command.pdu == pdu => {
                debug!("suppressing transport echo of outstanding request");
                outputs.push(QueueOutput::Echo);
                self.current = Some(command);
            }
            Some(command) => {
                match command.completion {
                    Completion::OnResponse(payload) => outputs.push(QueueOutput::Response {
                        payload,
                        pdu: pdu.to_vec(),
                    }),
                    // Sent-only commands never become current; resolve and
                    // move on if one slips through
                    Completion::OnSent(payload) => outputs.push(QueueOutput::Sent(payload)),
                }
                self.drain(&mut outputs);
            }
            None => {
                warn!(
                    "discarding unsolicited PDU (opcode 0x{:02x}) with no command outstanding",
                    pdu.first().copied().unwrap_or(0)
                );
                outputs.push(QueueOutput::Discarded(pdu.to_vec()));
            }
        }

        outputs
    }

    /// Discard the current and pending commands without completing them.
    /// Used on disconnect: in-flight transactions are abandoned silently.
    pub fn clear(&mut self) {
        self.current = None;
        self.pending.clear();
    }

    fn drain(&mut self, outputs: &mut Vec<QueueOutput<T>>) {
        while let Some(command) = self.pending.pop_front() {
            outputs.push(QueueOutput::Transmit(command.pdu.clone()));

            match command.completion {
                Completion::OnResponse(_) => {
                    self.current = Some(command);
                    break;
                }
                Completion::OnSent(payload) => outputs.push(QueueOutput::Sent(payload)),
            }
        }
    }
}

impl<T> Default for CommandQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
