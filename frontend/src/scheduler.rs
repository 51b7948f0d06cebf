use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wheel_shared::{FrameCallback, FrameScheduler};

/// Schedules ticks on the browser's display refresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule animation frame on");
            return;
        };
        // Frees itself after the single invocation
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        if let Err(e) = window.request_animation_frame(closure.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
