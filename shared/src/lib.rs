pub mod config;
pub mod effects;
pub mod error;
pub mod layout;
pub mod rotation;
pub mod scheduler;
pub mod segment;
pub mod selector;
pub mod session;
pub mod store;
pub mod weights;

pub use crate::config::{EffectsConfig, WheelConfig};
pub use crate::effects::{spawn_confetti, ConfettiPiece, CONFETTI_COLORS};
pub use crate::error::StoreError;
pub use crate::layout::{break_into_lines, line_offsets, wheel_layout, SliceGeometry};
pub use crate::rotation::{ease_out_cubic, normalize_angle, target_rotation, SpinAnimation, TAU};
pub use crate::scheduler::{drive_spin, FrameCallback, FrameScheduler, ManualScheduler};
pub use crate::segment::{default_segments, Segment, SegmentKind};
pub use crate::selector::{pick_index, pick_weighted};
pub use crate::session::{SessionEvent, SpinPhase, WheelSession};
pub use crate::store::{load_spin_count, CounterStore, MemoryStore, SPIN_COUNT_KEY};
pub use crate::weights::effective_weights;
