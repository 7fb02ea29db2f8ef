use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

const SCROLL_EVENT: &str = "scroll";

/// Window scroll listener that lives as long as the value does. Dropping it
/// removes the listener, so the owning component can hand it to its effect
/// destructor and never leave a callback behind after unmount.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollSubscription {
    /// Calls `on_offset` with the vertical scroll offset on every window scroll
    /// event. Returns `None` when there is no window to listen on.
    pub fn attach<F>(on_offset: F) -> Option<Self>
    where
        F: Fn(f64) + 'static,
    {
        let window = web_sys::window()?;
        let reader = window.clone();
        let callback = Closure::<dyn Fn()>::new(move || match reader.scroll_y() {
            Ok(offset) => on_offset(offset),
            Err(_) => warn!("scroll offset unavailable, ignoring scroll event"),
        });

        if window
            .add_event_listener_with_callback(SCROLL_EVENT, callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("could not subscribe to window scroll events");
            return None;
        }

        Some(Self { window, callback })
    }

    /// Offset at the time of the call, used to seed state on mount.
    pub fn current_offset(&self) -> Option<f64> {
        self.window.scroll_y().ok()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if self
            .window
            .remove_event_listener_with_callback(SCROLL_EVENT, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("failed to remove window scroll listener");
        }
    }
}
