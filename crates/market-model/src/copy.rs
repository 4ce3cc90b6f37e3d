use crate::snippet::SnippetKind;

/// How long the copied acknowledgment stays up, in milliseconds.
pub const COPY_RESET_MS: u32 = 2000;

/// Proof of a specific copy action. Expiring a superseded ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Transient "last copied" indicator. Each `mark` supersedes any pending
/// reset: the ticket it hands out is pinned to the current epoch, and only
/// the ticket from the most recent copy can clear the indicator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyState {
    copied: Option<SnippetKind>,
    epoch: u64,
}

impl CopyState {
    /// Record a copy of `kind` and return the ticket its scheduled reset
    /// must present.
    pub fn mark(&mut self, kind: SnippetKind) -> CopyTicket {
        self.epoch += 1;
        self.copied = Some(kind);
        CopyTicket(self.epoch)
    }

    /// Clear the indicator, but only when `ticket` belongs to the most
    /// recent copy. Stale timers fall through here without effect.
    pub fn expire(&mut self, ticket: CopyTicket) {
        if ticket.0 == self.epoch {
            self.copied = None;
        }
    }

    pub fn copied(&self) -> Option<SnippetKind> {
        self.copied
    }

    pub fn is_copied(&self, kind: SnippetKind) -> bool {
        self.copied == Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_then_expire() {
        let mut state = CopyState::default();
        let ticket = state.mark(SnippetKind::Curl);
        assert!(state.is_copied(SnippetKind::Curl));

        state.expire(ticket);
        assert_eq!(state.copied(), None);
    }

    #[test]
    fn test_stale_ticket_cannot_clear_newer_copy() {
        let mut state = CopyState::default();
        let curl = state.mark(SnippetKind::Curl);
        let python = state.mark(SnippetKind::Python);

        // The curl reset fires late, after python was copied.
        state.expire(curl);
        assert!(state.is_copied(SnippetKind::Python));

        state.expire(python);
        assert_eq!(state.copied(), None);
    }

    #[test]
    fn test_expire_after_recopy_of_same_kind() {
        let mut state = CopyState::default();
        let first = state.mark(SnippetKind::Eliza);
        let second = state.mark(SnippetKind::Eliza);

        state.expire(first);
        assert!(state.is_copied(SnippetKind::Eliza));
        state.expire(second);
        assert_eq!(state.copied(), None);
    }
}
