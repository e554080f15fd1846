//! Serialized access to one validator from several threads.
//!
//! [`SharedValidator`] holds the [`Validator`] behind a [`Mutex`] so that
//! "check every precondition, then apply the effect" runs as a single
//! step. Two callers can never both pass a check against a state only one
//! of them should have observed. Safe to share via `Arc<SharedValidator>`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use robocheck_types::ValidationStatus;
use robocheck_world::WorldState;

use crate::validator::{ValidationOutcome, Validator};

/// Thread-safe wrapper around a [`Validator`].
#[derive(Debug, Default)]
pub struct SharedValidator {
    inner: Mutex<Validator>,
}

impl SharedValidator {
    /// Wrap a fresh validator over the initial world.
    pub fn new() -> Self {
        Self::from_validator(Validator::new())
    }

    /// Wrap an existing validator.
    pub const fn from_validator(validator: Validator) -> Self {
        Self {
            inner: Mutex::new(validator),
        }
    }

    /// Validate and apply `action` while holding the lock.
    pub fn validate(&self, action: &str) -> ValidationStatus {
        self.lock().validate(action)
    }

    /// Detailed variant of [`SharedValidator::validate`].
    pub fn validate_detailed(&self, action: &str) -> ValidationOutcome {
        self.lock().validate_detailed(action)
    }

    /// Copy of the current world.
    pub fn snapshot(&self) -> WorldState {
        self.lock().world().clone()
    }

    /// Restore the world the wrapped validator was built with.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Consume the wrapper, returning the validator.
    pub fn into_inner(self) -> Validator {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panic can only happen outside the check-then-apply step, so the
    // world behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Validator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
