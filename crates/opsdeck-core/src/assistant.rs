//! Simulated assistant replies.
//!
//! There is no language model anywhere near this crate. Submitting a prompt
//! schedules one canned reply on a background thread after a fixed delay,
//! delivered over a flume channel that the UI drains in its event loop.
//!
//! Replies carry the *generation* of the conversation they belong to. The
//! UI bumps its generation counter whenever a conversation is cleared or a
//! view is dismissed, and drops any reply whose generation no longer
//! matches — a late reply can never land on stale state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::fixtures;
use crate::types::ChatMessage;

/// Which conversation a reply belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTarget {
    /// The main chat console.
    Console,
    /// The chat pane inside a workflow detail view.
    WorkflowDetail,
}

#[derive(Debug, Clone)]
pub struct SimReply {
    pub target: ReplyTarget,
    pub generation: u64,
    pub message: ChatMessage,
}

pub struct AssistantSim {
    delay: Duration,
    replies: Vec<&'static str>,
    next_reply: AtomicUsize,
}

impl AssistantSim {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(1))
    }

    /// Tests pass `Duration::ZERO` so replies arrive on the first drain.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            replies: fixtures::assistant_replies(),
            next_reply: AtomicUsize::new(0),
        }
    }

    pub fn channel() -> (flume::Sender<SimReply>, flume::Receiver<SimReply>) {
        flume::unbounded()
    }

    /// Schedule one console reply. The caller has already appended the user
    /// message; this only produces the assistant side.
    pub fn submit(&self, generation: u64, tx: &flume::Sender<SimReply>) {
        let idx = self.next_reply.fetch_add(1, Ordering::Relaxed);
        let content = self.replies[idx % self.replies.len()].to_string();
        self.deliver(ReplyTarget::Console, generation, content, None, tx);
    }

    /// Schedule a reply scoped to a workflow detail view.
    pub fn submit_for_workflow(
        &self,
        generation: u64,
        workflow_name: &str,
        tx: &flume::Sender<SimReply>,
    ) {
        let content = format!(
            "I'll help you with that modification to your \"{workflow_name}\" workflow. \
             Let me update the pipeline configuration..."
        );
        self.deliver(
            ReplyTarget::WorkflowDetail,
            generation,
            content,
            Some(workflow_name.to_string()),
            tx,
        );
    }

    fn deliver(
        &self,
        target: ReplyTarget,
        generation: u64,
        content: String,
        workflow_ref: Option<String>,
        tx: &flume::Sender<SimReply>,
    ) {
        let delay = self.delay;
        let tx = tx.clone();
        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let mut message = ChatMessage::assistant(content);
            message.workflow_ref = workflow_ref;
            // The receiver is gone once the UI shut down; nothing left to do.
            let _ = tx.send(SimReply {
                target,
                generation,
                message,
            });
        });
    }
}

impl Default for AssistantSim {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatRole;

    const RECV_WAIT: Duration = Duration::from_secs(2);

    #[test]
    fn submit_delivers_exactly_one_reply() {
        let sim = AssistantSim::with_delay(Duration::ZERO);
        let (tx, rx) = AssistantSim::channel();

        sim.submit(1, &tx);
        let reply = rx.recv_timeout(RECV_WAIT).expect("reply should arrive");
        assert_eq!(reply.target, ReplyTarget::Console);
        assert_eq!(reply.generation, 1);
        assert_eq!(reply.message.role, ChatRole::Assistant);

        // And only one.
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn replies_cycle_round_robin() {
        let sim = AssistantSim::with_delay(Duration::ZERO);
        let (tx, rx) = AssistantSim::channel();
        let canned = fixtures::assistant_replies();

        for _ in 0..canned.len() {
            sim.submit(0, &tx);
        }
        let mut got: Vec<String> = (0..canned.len())
            .map(|_| rx.recv_timeout(RECV_WAIT).unwrap().message.content)
            .collect();
        got.sort();
        let mut expected: Vec<String> = canned.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn workflow_reply_carries_reference() {
        let sim = AssistantSim::with_delay(Duration::ZERO);
        let (tx, rx) = AssistantSim::channel();

        sim.submit_for_workflow(7, "Production Deploy - Node.js API", &tx);
        let reply = rx.recv_timeout(RECV_WAIT).unwrap();
        assert_eq!(reply.target, ReplyTarget::WorkflowDetail);
        assert_eq!(reply.generation, 7);
        assert!(reply.message.content.contains("Production Deploy - Node.js API"));
        assert_eq!(
            reply.message.workflow_ref.as_deref(),
            Some("Production Deploy - Node.js API")
        );
    }

    #[test]
    fn send_after_receiver_dropped_does_not_panic() {
        let sim = AssistantSim::with_delay(Duration::ZERO);
        let (tx, rx) = AssistantSim::channel();
        drop(rx);
        sim.submit(0, &tx);
        // Give the worker a moment to hit the closed channel.
        thread::sleep(Duration::from_millis(50));
    }
}
