use std::collections::VecDeque;

use game_core::MessageSink;

/// Bounded log of on-screen messages.
///
/// Every message is also emitted through `tracing` so headless runs keep a
/// full record even after the log has rotated.
#[derive(Clone, Debug)]
pub struct MessageLog {
    recent: VecDeque<String>,
    capacity: usize,
    total: u64,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            recent: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    /// Most recent messages, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.recent.back().map(String::as_str)
    }

    /// Messages shown since creation, including rotated ones.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}

impl MessageSink for MessageLog {
    fn show_message(&mut self, text: &str) {
        tracing::info!("{}", text);
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(text.to_owned());
        self.total += 1;
    }
}
