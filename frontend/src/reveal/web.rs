use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::{IntersectionSample, Observation, RevealConfig, RevealError, RevealHost};

/// Browser host: `IntersectionObserver` for visibility and `setTimeout`
/// through gloo for the fallback.
pub struct WebHost {
    window: Option<Window>,
}

impl WebHost {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }
}

impl Default for WebHost {
    fn default() -> Self {
        Self::new()
    }
}

/// True when running in a browser window that exposes `IntersectionObserver`.
pub fn intersection_observer_available() -> bool {
    WebHost::new().intersection_supported()
}

pub struct WebObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Observation for WebObserver {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for WebObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl RevealHost for WebHost {
    type Target = Element;
    type Timer = Timeout;
    type Observer = WebObserver;

    fn intersection_supported(&self) -> bool {
        match &self.window {
            Some(window) => {
                js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))
                    .unwrap_or(false)
            }
            None => false,
        }
    }

    fn start_timer(&self, delay_ms: u32, on_elapsed: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, on_elapsed)
    }

    fn observe(
        &self,
        target: &Element,
        config: &RevealConfig,
        on_sample: Box<dyn Fn(IntersectionSample)>,
    ) -> Result<WebObserver, RevealError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_sample(IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin.to_string());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| RevealError::ObserverSetup(format!("{:?}", e)))?;
        observer.observe(target);

        Ok(WebObserver {
            observer,
            _callback: callback,
        })
    }
}
