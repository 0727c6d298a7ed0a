//! User-facing messages

/// Where meal messages go. Fire and forget.
pub trait Notifier {
    /// Blocking-style popup text
    fn message_box(&mut self, text: &str);

    /// Short line on the heads-up display
    fn hud_text(&mut self, text: &str);
}

/// Where a message was shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    MessageBox,
    Hud,
}

/// Collects messages in order
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<(Channel, String)>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(Channel, String)] {
        &self.entries
    }

    /// Text of every message, in order
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, t)| t.as_str()).collect()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(|(_, t)| t.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Notifier for MessageLog {
    fn message_box(&mut self, text: &str) {
        self.entries.push((Channel::MessageBox, text.to_string()));
    }

    fn hud_text(&mut self, text: &str) {
        self.entries.push((Channel::Hud, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_order_and_channel() {
        let mut log = MessageLog::new();
        log.message_box("first");
        log.hud_text("second");
        assert_eq!(log.texts(), vec!["first", "second"]);
        assert_eq!(log.entries()[0].0, Channel::MessageBox);
        assert_eq!(log.entries()[1].0, Channel::Hud);
        assert_eq!(log.last(), Some("second"));

        log.clear();
        assert!(log.is_empty());
    }
}
