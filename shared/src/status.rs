use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Identifies one `notify` call so a late expiry cannot hide a newer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
    pub ticket: StatusTicket,
}

/// The single status banner slot. Last writer wins; nothing is queued.
#[derive(Debug, Default)]
pub struct StatusNotifier {
    current: Option<StatusMessage>,
    generation: u64,
}

impl StatusNotifier {
    pub fn notify(&mut self, text: impl Into<String>, severity: Severity) -> StatusTicket {
        self.generation += 1;
        let ticket = StatusTicket(self.generation);
        self.current = Some(StatusMessage { text: text.into(), severity, ticket });
        ticket
    }

    /// Hides the banner if `ticket` still owns it. Returns whether it did.
    pub fn expire(&mut self, ticket: StatusTicket) -> bool {
        match &self.current {
            Some(message) if message.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}
