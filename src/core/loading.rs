//! Per-dialog load state with stale-result rejection.
//!
//! A dialog that fetches data for one file (linked resources, share grants)
//! holds a [`LoadSlot`]. Each fetch is issued a [`Ticket`]; a result is only
//! applied when its ticket is the newest one and the slot is still waiting on
//! the same file. Requests cannot be aborted once sent, so "cancel" means the
//! late result is ignored.

/// Identifies one issued fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    file_id: String,
}

impl Ticket {
    pub fn file_id(&self) -> &str {
        &self.file_id
    }
}

/// Monotonic request counter. The newest issued number is the only current one.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }

    /// Make every issued number stale.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Visible state of a per-file fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Closed,
    Loading {
        file_id: String,
    },
    Loaded {
        file_id: String,
        items: Vec<T>,
    },
    Failed {
        file_id: String,
        error: String,
    },
}

#[derive(Clone, Debug)]
pub struct LoadSlot<T> {
    state: LoadState<T>,
    seq: RequestSeq,
}

impl<T> Default for LoadSlot<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Closed,
            seq: RequestSeq::default(),
        }
    }
}

impl<T: PartialEq> PartialEq for LoadSlot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.seq.latest == other.seq.latest
    }
}

impl<T> LoadSlot<T> {
    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// File the slot is showing or waiting on.
    pub fn file_id(&self) -> Option<&str> {
        match &self.state {
            LoadState::Closed => None,
            LoadState::Loading { file_id }
            | LoadState::Loaded { file_id, .. }
            | LoadState::Failed { file_id, .. } => Some(file_id),
        }
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    /// Start fetching for `file_id`. Any earlier ticket becomes stale.
    pub fn open(&mut self, file_id: &str) -> Ticket {
        let seq = self.seq.issue();
        self.state = LoadState::Loading {
            file_id: file_id.to_string(),
        };
        Ticket {
            seq,
            file_id: file_id.to_string(),
        }
    }

    /// Show `items` for `file_id` without fetching.
    pub fn open_resolved(&mut self, file_id: &str, items: Vec<T>) {
        self.seq.invalidate();
        self.state = LoadState::Loaded {
            file_id: file_id.to_string(),
            items,
        };
    }

    /// Fetch again for the file currently shown. `None` when closed.
    pub fn reload(&mut self) -> Option<Ticket> {
        let file_id = self.file_id()?.to_string();
        Some(self.open(&file_id))
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when the
    /// ticket is stale or the slot moved on to another file or closed.
    pub fn resolve<E: ToString>(&mut self, ticket: Ticket, result: Result<Vec<T>, E>) -> bool {
        let waiting_on_ticket = matches!(
            &self.state,
            LoadState::Loading { file_id } if *file_id == ticket.file_id
        );
        if !waiting_on_ticket || !self.seq.is_current(ticket.seq) {
            return false;
        }

        self.state = match result {
            Ok(items) => LoadState::Loaded {
                file_id: ticket.file_id,
                items,
            },
            Err(e) => LoadState::Failed {
                file_id: ticket.file_id,
                error: e.to_string(),
            },
        };
        true
    }

    pub fn close(&mut self) {
        self.seq.invalidate();
        self.state = LoadState::Closed;
    }
}
