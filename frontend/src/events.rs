use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::EventTarget;

/// A DOM event subscription that lives exactly as long as this value.
///
/// The closure is kept alive by the guard and the listener is removed from
/// its target when the guard is dropped, so storing the guard in an effect
/// and returning a cleanup that drops it ties the listener to the mount.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl ListenerGuard {
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire(target: &EventTarget, name: &str) {
        let event = Event::new(name).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn listener_stops_firing_after_drop() {
        let document = web_sys::window().unwrap().document().unwrap();
        let div: EventTarget = document.create_element("div").unwrap().into();
        let hits = Rc::new(Cell::new(0));

        let guard = {
            let hits = hits.clone();
            ListenerGuard::attach(&div, "mouseenter", move || hits.set(hits.get() + 1)).unwrap()
        };
        fire(&div, "mouseenter");
        assert_eq!(hits.get(), 1);

        drop(guard);
        fire(&div, "mouseenter");
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn guards_only_hear_their_own_event() {
        let document = web_sys::window().unwrap().document().unwrap();
        let div: EventTarget = document.create_element("div").unwrap().into();
        let hits = Rc::new(Cell::new(0));

        let _guard = {
            let hits = hits.clone();
            ListenerGuard::attach(&div, "mouseleave", move || hits.set(hits.get() + 1)).unwrap()
        };
        fire(&div, "mouseenter");
        assert_eq!(hits.get(), 0);
        fire(&div, "mouseleave");
        assert_eq!(hits.get(), 1);
    }
}
