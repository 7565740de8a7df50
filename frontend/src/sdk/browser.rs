use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::{window, Document, HtmlScriptElement};

use crate::error::{js_message, SdkError};

use super::host::ScriptHost;

/// [`ScriptHost`] backed by the real document.
pub struct BrowserHost;

fn document() -> Result<Document, SdkError> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| SdkError::Js {
            sdk: "document",
            message: "no document available".to_string(),
        })
}

fn dom_error(value: JsValue) -> SdkError {
    SdkError::Js {
        sdk: "document",
        message: js_message(&value),
    }
}

impl ScriptHost for BrowserHost {
    fn has_script(&self, selector: &str) -> bool {
        document()
            .ok()
            .and_then(|doc| doc.query_selector(selector).ok().flatten())
            .is_some()
    }

    fn inject_script(
        &self,
        url: &str,
        on_load: Box<dyn FnOnce()>,
        on_error: Box<dyn FnOnce()>,
    ) -> Result<(), SdkError> {
        let document = document()?;
        let script: HtmlScriptElement = document
            .create_element("script")
            .map_err(dom_error)?
            .dyn_into()
            .map_err(|el| dom_error(el.into()))?;
        script.set_src(url);
        script.set_async(true);

        let onload = Closure::once_into_js(move || on_load());
        let onerror = Closure::once_into_js(move || on_error());
        script.set_onload(Some(onload.unchecked_ref()));
        script.set_onerror(Some(onerror.unchecked_ref()));

        let head = document.head().ok_or_else(|| SdkError::Js {
            sdk: "document",
            message: "document has no <head>".to_string(),
        })?;
        head.append_child(&script).map_err(dom_error)?;
        Ok(())
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(millis, move || callback()).forget();
    }

    fn has_element(&self, id: &str) -> bool {
        document()
            .ok()
            .and_then(|doc| doc.get_element_by_id(id))
            .is_some()
    }
}

/// Walks `window.a.b.c`, stopping at the first missing link.
pub(crate) fn global_path(path: &[&str]) -> Option<JsValue> {
    let mut current: JsValue = window()?.into();
    for key in path {
        current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// Calls `target[method](...args)` with `this` bound to `target`.
pub(crate) fn invoke(target: &JsValue, method: &str, args: &Array) -> Result<JsValue, JsValue> {
    let function: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    function.apply(target, args)
}
