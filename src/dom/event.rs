//! Event binding with RAII listener handles.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, CustomEvent, CustomEventInit, Element, Event, EventTarget, Node,
};

use super::Result;

/// A registered event listener.
///
/// The listener is removed when the handle is dropped or [`off`](Self::off)
/// is called. Use [`forget`](Self::forget) to keep it for the page lifetime.
pub struct Listener {
    target: EventTarget,
    event: String,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl Listener {
    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn off(self) {}

    /// Leaks the callback so the listener outlives the handle.
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            let function: &js_sys::Function = callback.as_ref().unchecked_ref();
            let _result = self
                .target
                .remove_event_listener_with_callback(&self.event, function);
            #[cfg(feature = "tracing")]
            if let Err(e) = _result {
                tracing::debug!("failed to remove {} listener: {:?}", self.event, e);
            }
        }
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("event", &self.event)
            .field("active", &self.callback.is_some())
            .finish()
    }
}

fn register(
    target: &EventTarget,
    event: &str,
    callback: Closure<dyn FnMut(Event)>,
    options: Option<&AddEventListenerOptions>,
) -> Result<Listener> {
    let function: &js_sys::Function = callback.as_ref().unchecked_ref();
    match options {
        Some(options) => target.add_event_listener_with_callback_and_add_event_listener_options(
            event, function, options,
        )?,
        None => target.add_event_listener_with_callback(event, function)?,
    }
    Ok(Listener {
        target: target.clone(),
        event: event.to_string(),
        callback: Some(callback),
    })
}

pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<Listener>
where
    F: FnMut(Event) + 'static,
{
    register(target, event, Closure::new(handler), None)
}

/// Like [`on`], but the browser drops the listener after the first event.
pub fn once<F>(target: &EventTarget, event: &str, handler: F) -> Result<Listener>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    register(target, event, Closure::new(handler), Some(&options))
}

/// Listens on `root` and calls `handler` with the nearest element matching
/// `selector` that contains the event target and lies inside `root`.
pub fn delegate<F>(
    root: &EventTarget,
    event: &str,
    selector: &str,
    mut handler: F,
) -> Result<Listener>
where
    F: FnMut(Event, Element) + 'static,
{
    let selector = selector.to_string();
    let scope = root.dyn_ref::<Node>().cloned();
    let callback = Closure::new(move |ev: Event| {
        let matched = ev
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest(&selector).ok().flatten());
        let Some(matched) = matched else {
            return;
        };
        let node: &Node = &matched;
        let inside = scope.as_ref().is_none_or(|scope| scope.contains(Some(node)));
        if inside {
            handler(ev, matched);
        }
    });
    register(root, event, callback, None)
}

/// Dispatches a bubbling, cancelable `CustomEvent`.
///
/// Returns false when a listener called `preventDefault`.
pub fn trigger(target: &EventTarget, event: &str, detail: Option<&JsValue>) -> Result<bool> {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    if let Some(detail) = detail {
        init.set_detail(detail);
    }
    let custom = CustomEvent::new_with_event_init_dict(event, &init)?;
    Ok(target.dispatch_event(&custom)?)
}
