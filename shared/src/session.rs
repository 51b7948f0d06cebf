use crate::config::WheelConfig;
use crate::rotation::{normalize_angle, target_rotation, SpinAnimation};
use crate::segment::Segment;
use crate::selector::pick_weighted;
use crate::weights::effective_weights;
use rand::Rng;

/// Where the wheel is in its spin cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinPhase {
    Idle,
    /// Rotating towards the target that lands `index` under the pointer.
    Spinning { index: usize, animation: SpinAnimation },
    /// Landed and highlighted; waiting before the result is revealed.
    Settling { index: usize, landed_at: f64 },
    ResultShown { index: usize },
}

/// What a single frame tick produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Redraw at this rotation.
    Frame { rotation: f64 },
    /// The wheel stopped; `rotation` is already wrapped into `[0, TAU)`.
    Landed { index: usize, rotation: f64 },
    /// Still inside the settle delay.
    Holding,
    /// The spin counted; persist `spin_count` and show the result.
    Completed { index: usize, spin_count: u64 },
    /// Nothing in flight.
    Idle,
}

impl SessionEvent {
    /// Whether another frame should be scheduled after this one.
    pub fn keeps_running(&self) -> bool {
        matches!(
            self,
            SessionEvent::Frame { .. } | SessionEvent::Landed { .. } | SessionEvent::Holding
        )
    }
}

/// All mutable wheel state: rotation, spin counter and the busy phase.
///
/// Storage is not touched here; callers persist the counter when a tick
/// reports [`SessionEvent::Completed`].
#[derive(Debug, Clone)]
pub struct WheelSession {
    segments: Vec<Segment>,
    config: WheelConfig,
    rotation: f64,
    spin_count: u64,
    phase: SpinPhase,
    /// Slice the wheel last stopped on; cleared when the next spin starts.
    landed: Option<usize>,
}

impl WheelSession {
    pub fn new(segments: Vec<Segment>, config: WheelConfig, spin_count: u64) -> Self {
        Self {
            segments,
            config,
            rotation: 0.0,
            spin_count,
            phase: SpinPhase::Idle,
            landed: None,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn spin_count(&self) -> u64 {
        self.spin_count
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    /// True from the spin request until the result is revealed.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. } | SpinPhase::Settling { .. })
    }

    /// Current probability vector, recomputed from the counter.
    pub fn probabilities(&self) -> Vec<f64> {
        effective_weights(&self.segments, self.spin_count, &self.config)
    }

    /// Slice to draw highlighted. Set on landing and kept after the result
    /// is dismissed, until the next spin starts.
    pub fn highlighted(&self) -> Option<usize> {
        self.landed
    }

    /// The winning segment while the result is on screen.
    pub fn result(&self) -> Option<&Segment> {
        match self.phase {
            SpinPhase::ResultShown { index } => self.segments.get(index),
            _ => None,
        }
    }

    /// Picks a winner and starts spinning towards it.
    ///
    /// Ignored (returns `None`) while a spin is in flight.
    pub fn request_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.is_busy() {
            log::debug!("Spin request ignored, wheel is busy");
            return None;
        }
        let weights = self.probabilities();
        let index = pick_weighted(&weights, rng)?;
        log::debug!("Selected segment {} from {:?}", index, weights);
        self.spin_to(index)
    }

    /// Starts spinning towards a known index. Same busy rules as
    /// [`request_spin`](Self::request_spin).
    pub fn spin_to(&mut self, index: usize) -> Option<usize> {
        if self.is_busy() || index >= self.segments.len() {
            return None;
        }
        let target = target_rotation(
            index,
            self.segments.len(),
            self.rotation,
            self.config.pointer_angle,
            self.config.extra_turns,
        );
        self.landed = None;
        self.phase = SpinPhase::Spinning {
            index,
            animation: SpinAnimation::new(self.rotation, target, self.config.spin_duration_ms),
        };
        Some(index)
    }

    /// Advances the state machine to `now` (milliseconds, monotonic).
    pub fn tick(&mut self, now: f64) -> SessionEvent {
        match &mut self.phase {
            SpinPhase::Idle | SpinPhase::ResultShown { .. } => SessionEvent::Idle,
            SpinPhase::Spinning { index, animation } => {
                let index = *index;
                let (rotation, finished) = animation.sample(now);
                if finished {
                    self.rotation = normalize_angle(rotation);
                    self.landed = Some(index);
                    self.phase = SpinPhase::Settling { index, landed_at: now };
                    SessionEvent::Landed {
                        index,
                        rotation: self.rotation,
                    }
                } else {
                    self.rotation = rotation;
                    SessionEvent::Frame { rotation }
                }
            }
            SpinPhase::Settling { index, landed_at } => {
                if now - *landed_at < self.config.settle_delay_ms {
                    return SessionEvent::Holding;
                }
                let index = *index;
                self.spin_count += 1;
                self.phase = SpinPhase::ResultShown { index };
                SessionEvent::Completed {
                    index,
                    spin_count: self.spin_count,
                }
            }
        }
    }

    /// Closes the result. Returns false when no result was showing.
    pub fn dismiss_result(&mut self) -> bool {
        if matches!(self.phase, SpinPhase::ResultShown { .. }) {
            self.phase = SpinPhase::Idle;
            true
        } else {
            false
        }
    }
}
