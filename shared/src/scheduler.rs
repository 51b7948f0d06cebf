use crate::session::{SessionEvent, WheelSession};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Source of display-refresh ticks. The callback receives a monotonic
/// timestamp in milliseconds.
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback);
}

/// Runs a spin to completion, one tick per scheduled frame.
///
/// `observer` sees every event, including the final
/// [`SessionEvent::Completed`]. The session is not borrowed while the
/// observer runs.
pub fn drive_spin<S>(
    session: Rc<RefCell<WheelSession>>,
    scheduler: S,
    observer: Rc<dyn Fn(SessionEvent)>,
) where
    S: FrameScheduler + Clone + 'static,
{
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move |now| {
        let event = session.borrow_mut().tick(now);
        let keep_going = event.keeps_running();
        observer(event);
        if keep_going {
            drive_spin(session, next, observer);
        }
    }));
}

/// Scheduler whose frames fire only when told to. Used by headless drivers
/// and tests to step time deterministically.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<FrameCallback>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Fires every callback queued before this call at `now`. Callbacks they
    /// schedule wait for the next frame. Returns how many ran.
    pub fn run_frame(&self, now: f64) -> usize {
        let due: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        let ran = due.len();
        for callback in due {
            callback(now);
        }
        ran
    }

    /// Steps frames `step_ms` apart starting at `start` until nothing is
    /// pending. Returns the timestamp of the last frame.
    pub fn run_until_idle(&self, start: f64, step_ms: f64, max_frames: usize) -> f64 {
        let mut now = start;
        for _ in 0..max_frames {
            if self.run_frame(now) == 0 {
                break;
            }
            now += step_ms;
        }
        now
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push_back(callback);
    }
}
