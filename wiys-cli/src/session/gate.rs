//! Busy guard for user-initiated requests
//!
//! A single-permit semaphore: at most one sign-in, visual or match request
//! is outstanding per session. Anything issued while one is pending is
//! rejected instead of queued.

use log::debug;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestState {
    Idle,
    Pending,
}

#[derive(Debug, Clone)]
pub struct RequestGate {
    semaphore: Arc<Semaphore>,
    requests_started: Arc<AtomicU64>,
    requests_rejected: Arc<AtomicU64>,
}

/// Held while a request is in flight; dropping it returns the gate to Idle
#[derive(Debug)]
pub struct PendingRequest {
    _permit: OwnedSemaphorePermit,
}

impl RequestGate {
    pub fn new() -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(1)),
            requests_started: Arc::new(AtomicU64::new(0)),
            requests_rejected: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Idle -> Pending. Returns None if a request is already pending.
    pub fn try_begin(&self) -> Option<PendingRequest> {
        match self.semaphore.clone().try_acquire_owned() {
            Ok(permit) => {
                self.requests_started.fetch_add(1, Ordering::Relaxed);
                debug!("Request gate: pending");
                Some(PendingRequest { _permit: permit })
            }
            Err(_) => {
                self.requests_rejected.fetch_add(1, Ordering::Relaxed);
                debug!("Request gate: rejected, another request is pending");
                None
            }
        }
    }

    pub fn state(&self) -> RequestState {
        if self.semaphore.available_permits() == 0 {
            RequestState::Pending
        } else {
            RequestState::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state() == RequestState::Pending
    }

    pub fn stats(&self) -> GateStats {
        GateStats {
            state: self.state(),
            requests_started: self.requests_started.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics for the request gate
#[derive(Debug, Clone, Serialize)]
pub struct GateStats {
    pub state: RequestState,
    /// Requests that got through the gate
    pub requests_started: u64,
    /// Requests turned away while another was pending
    pub requests_rejected: u64,
}

impl GateStats {
    /// Share of attempts that were rejected
    pub fn rejection_rate(&self) -> f64 {
        let attempts = self.requests_started + self.requests_rejected;
        if attempts == 0 {
            0.0
        } else {
            self.requests_rejected as f64 / attempts as f64
        }
    }
}
