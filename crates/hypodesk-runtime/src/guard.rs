use crate::{Error, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Disables a triggering control while its request is in flight.
///
/// Clones share the same flag, so a guard handed to a background worker
/// still blocks the control that started it.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

/// Held for the duration of one request; dropping it re-enables the control.
#[derive(Debug)]
pub struct InFlight {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the control, or fail with `Error::Busy` if a request is running.
    pub fn try_begin(&self, action: &str) -> Result<InFlight> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::Busy(action.to_string()))?;

        Ok(InFlight {
            flag: Arc::clone(&self.in_flight),
        })
    }

    /// Run `f` while holding the control.
    pub fn run<T>(&self, action: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let _token = self.try_begin(action)?;
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submit_is_refused_while_in_flight() {
        let guard = SubmitGuard::new();
        let token = guard.try_begin("Saving").unwrap();

        assert!(guard.is_busy());
        assert!(matches!(guard.try_begin("Saving"), Err(Error::Busy(_))));

        drop(token);
        assert!(!guard.is_busy());
        assert!(guard.try_begin("Saving").is_ok());
    }

    #[test]
    fn test_run_releases_on_error() {
        let guard = SubmitGuard::new();
        let result: Result<()> = guard.run("Deleting", || Err(Error::Transport("down".into())));

        assert!(result.is_err());
        assert!(!guard.is_busy());
    }

    #[test]
    fn test_clones_share_state() {
        let guard = SubmitGuard::new();
        let worker = guard.clone();
        let _token = worker.try_begin("Reload").unwrap();

        assert!(guard.is_busy());
    }
}
