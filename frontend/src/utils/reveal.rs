use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_SELECTOR: &str = ".service-card, .benefit-item, .problem-item";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

const SHOWN_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

fn apply_style(element: &HtmlElement, style: &[(&str, &str)]) {
    let declaration = element.style();
    for (property, value) in style {
        let _ = declaration.set_property(property, value);
    }
}

/// Fades cards in as they scroll into view.
///
/// Observation stops when this is dropped, so the owning effect's destructor
/// just lets it go.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                        apply_style(&element, &SHOWN_STYLE);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else { continue };
            if let Ok(element) = node.dyn_into::<HtmlElement>() {
                apply_style(&element, &HIDDEN_STYLE);
                observer.observe(&element);
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
