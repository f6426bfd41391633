//! Recalculation scheduler
//!
//! Debounce-then-compute policy in front of the band calculator: rapid
//! successive edits collapse into one recomputation, and an input that
//! fingerprints identical to the last computed one is skipped entirely.
//! Single-flight with last-input-wins: a result completed for an input
//! that has since been edited again is discarded.
//!
//! The scheduler never runs the computation itself; it answers "is a
//! recompute due, and for which input". Time comes from the `Clock`
//! port so tests drive the debounce window by hand.

use std::time::{Duration, Instant};

use crate::domain::entities::RateInputModel;
use crate::domain::ports::Clock;
use crate::domain::value_objects::InputFingerprint;
use crate::error::{CompaError, CompaResult};

/// Debounce window applied between the last edit and the recompute.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// What the scheduler wants the caller to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Recalc {
    /// Nothing pending, or the debounce window is still open
    Idle,
    /// The pending input equals the last computed one; dropped
    Skipped,
    /// Run the calculator on this input now
    Due {
        /// Snapshot of the input to compute
        model: RateInputModel,
        /// Pass back to [`RecalculationScheduler::complete`]
        generation: u64,
    },
}

#[derive(Debug)]
struct Pending {
    model: RateInputModel,
    fingerprint: InputFingerprint,
    edited_at: Instant,
    generation: u64,
}

#[derive(Debug)]
struct InFlight {
    fingerprint: InputFingerprint,
    generation: u64,
    dispatched_at: Instant,
}

/// Debouncing, deduplicating recomputation policy for one working model.
pub struct RecalculationScheduler<C: Clock> {
    clock: C,
    debounce: Duration,
    timeout: Option<Duration>,
    pending: Option<Pending>,
    in_flight: Option<InFlight>,
    last_computed: Option<InputFingerprint>,
    generation: u64,
}

impl<C: Clock> RecalculationScheduler<C> {
    /// Create a scheduler with the given debounce window.
    pub fn new(clock: C, debounce: Duration) -> Self {
        Self {
            clock,
            debounce,
            timeout: None,
            pending: None,
            in_flight: None,
            last_computed: None,
            generation: 0,
        }
    }

    /// Bound how long a dispatched computation may stay in flight.
    /// Exceeding the bound surfaces as `ComputationTimeout` on the next
    /// poll. Only meaningful when the compute step can block (e.g. a
    /// remote calculation); the local calculator never needs it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Record an edit to the working model.
    ///
    /// Replaces any pending recompute (the debounce window restarts)
    /// and supersedes any in-flight result.
    pub fn note_edit(&mut self, model: &RateInputModel) -> CompaResult<()> {
        let fingerprint = InputFingerprint::of(model)?;
        self.generation += 1;
        self.pending = Some(Pending {
            model: model.clone(),
            fingerprint,
            edited_at: self.clock.now(),
            generation: self.generation,
        });
        Ok(())
    }

    /// Check whether a recompute is due.
    ///
    /// Call on a tick (UI frame, event-loop turn). At most one `Due` is
    /// outstanding at a time; the caller reports back through
    /// [`complete`](Self::complete).
    pub fn poll(&mut self) -> CompaResult<Recalc> {
        let now = self.clock.now();

        if let (Some(in_flight), Some(bound)) = (&self.in_flight, self.timeout) {
            if now.duration_since(in_flight.dispatched_at) > bound {
                self.in_flight = None;
                return Err(CompaError::ComputationTimeout {
                    millis: bound.as_millis() as u64,
                });
            }
        }

        let pending = match self.pending.take() {
            None => return Ok(Recalc::Idle),
            Some(p) if now.duration_since(p.edited_at) < self.debounce => {
                self.pending = Some(p);
                return Ok(Recalc::Idle);
            }
            Some(p) => p,
        };

        if self
            .last_computed
            .as_ref()
            .is_some_and(|last| last.matches(&pending.fingerprint))
        {
            return Ok(Recalc::Skipped);
        }

        self.in_flight = Some(InFlight {
            fingerprint: pending.fingerprint,
            generation: pending.generation,
            dispatched_at: now,
        });
        Ok(Recalc::Due {
            model: pending.model,
            generation: pending.generation,
        })
    }

    /// Report a finished computation for `generation`.
    ///
    /// Returns true when the result is still the newest input and
    /// should be displayed; false when a newer edit superseded it and
    /// the result must be discarded.
    pub fn complete(&mut self, generation: u64) -> bool {
        match self.in_flight.take() {
            Some(in_flight) if in_flight.generation == generation => {
                if generation == self.generation {
                    self.last_computed = Some(in_flight.fingerprint);
                    true
                } else {
                    false
                }
            }
            other => {
                self.in_flight = other;
                false
            }
        }
    }

    /// Discard pending and in-flight work without side effects.
    ///
    /// Safe at any time: the calculator is pure, so nothing has been
    /// persisted on behalf of the cancelled work.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.in_flight = None;
    }

    /// Whether an edit is waiting for its debounce window to close.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
