use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::callback::Timeout;
use log::{debug, error};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{window, HtmlDocument, HtmlTextAreaElement, Window};
use yew::prelude::*;

use crate::config;
use crate::error::{js_message, CopyError};
use crate::notice;

pub const COPY_FAILED_NOTICE: &str = "복사 기능을 사용할 수 없습니다.";

pub fn copied_notice(text: &str) -> String {
    format!("{} \n 복사되었습니다!", text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    /// `navigator.clipboard.writeText`
    AsyncApi,
    /// Offscreen textarea plus `document.execCommand("copy")`
    LegacyCommand,
}

/// What the copy helper needs from the browser.
pub trait ClipboardEnv {
    type Field;

    /// The async clipboard exists and the page is a secure context.
    fn async_api_available(&self) -> bool;

    fn write_async(&self, text: &str) -> LocalBoxFuture<'static, Result<(), CopyError>>;

    /// Adds an offscreen, selected text field holding `text`.
    fn mount_field(&self, text: &str) -> Result<Self::Field, CopyError>;

    fn exec_copy(&self, field: &Self::Field) -> Result<(), CopyError>;

    fn unmount_field(&self, field: Self::Field);
}

/// Copies `text`, preferring the async clipboard. The legacy path always
/// removes its temporary field, whether or not the copy worked.
pub async fn copy_text<E: ClipboardEnv>(env: &E, text: &str) -> Result<CopyPath, CopyError> {
    if env.async_api_available() {
        env.write_async(text).await?;
        return Ok(CopyPath::AsyncApi);
    }

    let field = env.mount_field(text)?;
    let outcome = env.exec_copy(&field);
    env.unmount_field(field);
    outcome.map(|_| CopyPath::LegacyCommand)
}

pub struct BrowserClipboard {
    window: Window,
}

impl BrowserClipboard {
    pub fn new() -> Result<Self, CopyError> {
        window().map(|window| Self { window }).ok_or(CopyError::NoWindow)
    }

    fn clipboard(&self) -> Option<JsValue> {
        Reflect::get(&self.window.navigator(), &JsValue::from_str("clipboard"))
            .ok()
            .filter(|c| !c.is_undefined() && !c.is_null())
    }
}

fn js_error(value: JsValue) -> CopyError {
    CopyError::Js(js_message(&value))
}

impl ClipboardEnv for BrowserClipboard {
    type Field = HtmlTextAreaElement;

    fn async_api_available(&self) -> bool {
        self.window.is_secure_context() && self.clipboard().is_some()
    }

    fn write_async(&self, text: &str) -> LocalBoxFuture<'static, Result<(), CopyError>> {
        let promise = self
            .clipboard()
            .ok_or(JsValue::from_str("navigator.clipboard missing"))
            .and_then(|clipboard| {
                let write: Function =
                    Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
                write.call1(&clipboard, &JsValue::from_str(text))?.dyn_into::<Promise>()
            });

        async move {
            let promise = promise.map_err(js_error)?;
            JsFuture::from(promise).await.map_err(js_error)?;
            Ok(())
        }
        .boxed_local()
    }

    fn mount_field(&self, text: &str) -> Result<HtmlTextAreaElement, CopyError> {
        let document = self.window.document().ok_or(CopyError::NoWindow)?;
        let field: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|el| js_error(el.into()))?;
        field.set_value(text);

        let style = field.style();
        for (property, value) in [("position", "fixed"), ("left", "-999999px"), ("top", "-999999px")] {
            style.set_property(property, value).map_err(js_error)?;
        }

        let body = document.body().ok_or(CopyError::NoWindow)?;
        body.append_child(&field).map_err(js_error)?;
        let _ = field.focus();
        field.select();
        Ok(field)
    }

    fn exec_copy(&self, _field: &HtmlTextAreaElement) -> Result<(), CopyError> {
        let document: HtmlDocument = self
            .window
            .document()
            .ok_or(CopyError::NoWindow)?
            .dyn_into()
            .map_err(|doc| js_error(doc.into()))?;
        match document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(CopyError::Rejected),
            Err(err) => Err(js_error(err)),
        }
    }

    fn unmount_field(&self, field: HtmlTextAreaElement) {
        field.remove();
    }
}

/// Which copy button most recently succeeded, cleared after a short flash.
#[derive(Clone)]
pub struct CopyFlash {
    copied: UseStateHandle<Option<String>>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl PartialEq for CopyFlash {
    fn eq(&self, other: &Self) -> bool {
        *self.copied == *other.copied && Rc::ptr_eq(&self.pending, &other.pending)
    }
}

impl CopyFlash {
    pub fn copied(&self) -> Option<String> {
        (*self.copied).clone()
    }

    pub fn flash(&self, id: &str) {
        self.copied.set(Some(id.to_string()));
        let copied = self.copied.clone();
        let timeout = Timeout::new(config::COPY_FLASH_MS, move || copied.set(None));
        // Replacing the handle drops, and so cancels, any earlier timer.
        *self.pending.borrow_mut() = Some(timeout);
    }
}

#[hook]
pub fn use_copy_flash() -> CopyFlash {
    let copied = use_state(|| None::<String>);
    let pending = use_mut_ref(|| None::<Timeout>);
    CopyFlash { copied, pending }
}

/// Copies `text` in the background and reports the outcome to the user.
pub fn spawn_copy(text: String, id: String, flash: CopyFlash) {
    spawn_local(async move {
        let result = match BrowserClipboard::new() {
            Ok(env) => copy_text(&env, &text).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(path) => {
                debug!("Copied {} via {:?}", id, path);
                flash.flash(&id);
                notice::alert(&copied_notice(&text));
            }
            Err(err) => {
                error!("Copy of {} failed: {}", id, err);
                notice::alert(COPY_FAILED_NOTICE);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;
    use std::cell::Cell;

    const ACCOUNT: &str = "232-12-0260640";

    #[derive(Default)]
    struct FakeEnv {
        async_api: bool,
        async_rejects: bool,
        exec_result: Option<CopyError>,
        clipboard: RefCell<Option<String>>,
        dom: RefCell<Vec<(usize, String)>>,
        next_node: Cell<usize>,
        mounted_values: RefCell<Vec<String>>,
    }

    impl ClipboardEnv for FakeEnv {
        type Field = usize;

        fn async_api_available(&self) -> bool {
            self.async_api
        }

        fn write_async(&self, text: &str) -> LocalBoxFuture<'static, Result<(), CopyError>> {
            if self.async_rejects {
                return future::ready(Err(CopyError::Js("NotAllowedError".into()))).boxed_local();
            }
            *self.clipboard.borrow_mut() = Some(text.to_string());
            future::ready(Ok(())).boxed_local()
        }

        fn mount_field(&self, text: &str) -> Result<usize, CopyError> {
            let node = self.next_node.get();
            self.next_node.set(node + 1);
            self.dom.borrow_mut().push((node, text.to_string()));
            self.mounted_values.borrow_mut().push(text.to_string());
            Ok(node)
        }

        fn exec_copy(&self, field: &usize) -> Result<(), CopyError> {
            if let Some(err) = &self.exec_result {
                return Err(err.clone());
            }
            let value = self
                .dom
                .borrow()
                .iter()
                .find(|(node, _)| node == field)
                .map(|(_, value)| value.clone());
            *self.clipboard.borrow_mut() = value;
            Ok(())
        }

        fn unmount_field(&self, field: usize) {
            self.dom.borrow_mut().retain(|(node, _)| *node != field);
        }
    }

    #[test]
    fn test_async_api_writes_exact_text() {
        let env = FakeEnv {
            async_api: true,
            ..Default::default()
        };
        assert_eq!(block_on(copy_text(&env, ACCOUNT)), Ok(CopyPath::AsyncApi));
        assert_eq!(env.clipboard.borrow().as_deref(), Some(ACCOUNT));
        assert!(env.mounted_values.borrow().is_empty());
        assert!(copied_notice(ACCOUNT).contains(ACCOUNT));
    }

    #[test]
    fn test_fallback_mounts_populated_field_and_removes_it() {
        let env = FakeEnv::default();
        assert_eq!(block_on(copy_text(&env, ACCOUNT)), Ok(CopyPath::LegacyCommand));
        assert_eq!(env.clipboard.borrow().as_deref(), Some(ACCOUNT));
        assert_eq!(*env.mounted_values.borrow(), vec![ACCOUNT.to_string()]);
        assert!(env.dom.borrow().is_empty());
    }

    #[test]
    fn test_fallback_cleans_up_even_when_copy_is_refused() {
        let env = FakeEnv {
            exec_result: Some(CopyError::Rejected),
            ..Default::default()
        };
        assert_eq!(block_on(copy_text(&env, ACCOUNT)), Err(CopyError::Rejected));
        assert!(env.dom.borrow().is_empty());
        assert!(env.clipboard.borrow().is_none());
    }

    #[test]
    fn test_async_rejection_is_reported_without_fallback() {
        let env = FakeEnv {
            async_api: true,
            async_rejects: true,
            ..Default::default()
        };
        assert!(matches!(block_on(copy_text(&env, ACCOUNT)), Err(CopyError::Js(_))));
        assert!(env.mounted_values.borrow().is_empty());
    }

    #[test]
    fn test_notices() {
        assert_eq!(copied_notice(ACCOUNT), "232-12-0260640 \n 복사되었습니다!");
        assert_eq!(COPY_FAILED_NOTICE, "복사 기능을 사용할 수 없습니다.");
    }
}
