use crate::error::Error;

/// Lifecycle of one view's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Identifies one issued fetch. Only the most recently issued ticket of a slot
/// may change its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded,
    Failed(Error),
    /// A newer fetch was issued after this one; the result was discarded.
    Stale,
}

/// What a view should put in its content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDisplay {
    LoadingPlaceholder,
    Rows,
    Empty,
}

pub trait RowCount {
    fn row_count(&self) -> usize;
}

/// Fetch state of a single view plus its last successfully loaded snapshot.
///
/// A failed fetch keeps the previous snapshot, so the view can go on showing
/// stale rows next to the error.
#[derive(Debug)]
pub struct ViewSlot<T> {
    status: FetchStatus,
    snapshot: Option<T>,
    latest_ticket: u64,
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            snapshot: None,
            latest_ticket: 0,
        }
    }
}

impl<T> ViewSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        self.status = FetchStatus::Loading;
        FetchTicket(self.latest_ticket)
    }

    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T, Error>) -> FetchOutcome {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "Dropping stale fetch result"
            );
            return FetchOutcome::Stale;
        }
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.status = FetchStatus::Success;
                FetchOutcome::Loaded
            }
            Err(error) => {
                self.status = FetchStatus::Error;
                FetchOutcome::Failed(error)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn snapshot(&self) -> Option<&T> {
        self.snapshot.as_ref()
    }
}

impl<T: RowCount> ViewSlot<T> {
    pub fn display(&self) -> ViewDisplay {
        match &self.snapshot {
            Some(snapshot) if snapshot.row_count() > 0 => ViewDisplay::Rows,
            None if self.is_loading() => ViewDisplay::LoadingPlaceholder,
            _ => ViewDisplay::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl RowCount for Vec<u32> {
        fn row_count(&self) -> usize {
            self.len()
        }
    }

    #[test]
    fn test_new_slot_is_idle_and_empty() {
        let slot: ViewSlot<Vec<u32>> = ViewSlot::new();
        assert_eq!(slot.status, FetchStatus::Idle);
        assert!(slot.snapshot().is_none());
        assert_eq!(slot.display(), ViewDisplay::Empty);
    }

    #[test]
    fn test_successful_fetch() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new();
        let ticket = slot.begin_fetch();
        assert!(slot.is_loading());
        assert_eq!(slot.display(), ViewDisplay::LoadingPlaceholder);

        assert_eq!(slot.complete(ticket, Ok(vec![1, 2])), FetchOutcome::Loaded);
        assert_eq!(slot.status, FetchStatus::Success);
        assert_eq!(slot.snapshot(), Some(&vec![1, 2]));
        assert_eq!(slot.display(), ViewDisplay::Rows);
    }

    #[test]
    fn test_failure_keeps_previous_snapshot() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new();
        let first = slot.begin_fetch();
        slot.complete(first, Ok(vec![7]));

        let second = slot.begin_fetch();
        // Previous rows stay visible while reloading
        assert_eq!(slot.display(), ViewDisplay::Rows);

        let error = Error::NetworkError("HTTP error: 500".to_string());
        assert_eq!(
            slot.complete(second, Err(error.clone())),
            FetchOutcome::Failed(error.clone())
        );
        assert_eq!(slot.status, FetchStatus::Error);
        assert_eq!(slot.snapshot(), Some(&vec![7]));
    }

    #[test]
    fn test_latest_issued_fetch_wins() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new();
        let first = slot.begin_fetch();
        let second = slot.begin_fetch();

        assert_eq!(slot.complete(second, Ok(vec![2])), FetchOutcome::Loaded);
        assert_eq!(slot.complete(first, Ok(vec![1])), FetchOutcome::Stale);
        assert_eq!(slot.snapshot(), Some(&vec![2]));
        assert_eq!(slot.status, FetchStatus::Success);
    }

    #[test]
    fn test_stale_completion_does_not_end_loading() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new();
        let first = slot.begin_fetch();
        let _second = slot.begin_fetch();

        assert_eq!(
            slot.complete(first, Err(Error::NetworkError("timeout".to_string()))),
            FetchOutcome::Stale
        );
        assert!(slot.is_loading());
    }

    #[test]
    fn test_loaded_but_empty_shows_empty_state() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new();
        let ticket = slot.begin_fetch();
        slot.complete(ticket, Ok(Vec::new()));
        assert_eq!(slot.display(), ViewDisplay::Empty);
    }

    #[test]
    fn test_first_fetch_failing_leaves_slot_empty() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new();
        let ticket = slot.begin_fetch();

        let error = Error::NetworkError("connection refused".to_string());
        assert_eq!(
            slot.complete(ticket, Err(error.clone())),
            FetchOutcome::Failed(error)
        );
        assert_eq!(slot.status, FetchStatus::Error);
        assert!(slot.snapshot().is_none());
        assert_eq!(slot.display(), ViewDisplay::Empty);
    }
}
