//! In-memory stand-ins for the browser used by the loader tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use crate::error::SdkError;

use super::host::{ScriptHost, SdkBinding};

struct InjectedScript {
    url: String,
    on_load: Option<Box<dyn FnOnce()>>,
    on_error: Option<Box<dyn FnOnce()>>,
}

#[derive(Default)]
pub struct FakeHost {
    scripts: RefCell<Vec<InjectedScript>>,
    timers: RefCell<VecDeque<(u32, Box<dyn FnOnce()>)>>,
    elements: RefCell<HashSet<String>>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn script_count(&self, url: &str) -> usize {
        self.scripts.borrow().iter().filter(|s| s.url == url).count()
    }

    pub fn total_scripts(&self) -> usize {
        self.scripts.borrow().len()
    }

    pub fn fire_load(&self, index: usize) {
        let callback = self.scripts.borrow_mut()[index].on_load.take();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn fire_error(&self, index: usize) {
        let callback = self.scripts.borrow_mut()[index].on_error.take();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Fires at most `count` queued timers; returns how many fired.
    pub fn run_timers(&self, count: usize) -> usize {
        let mut fired = 0;
        while fired < count {
            let next = self.timers.borrow_mut().pop_front();
            match next {
                Some((_, callback)) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }
        fired
    }

    /// Fires timers in order until none are left; returns the summed delays.
    pub fn run_all_timers(&self) -> u32 {
        let mut waited = 0;
        loop {
            let next = self.timers.borrow_mut().pop_front();
            match next {
                Some((delay, callback)) => {
                    waited += delay;
                    callback();
                }
                None => return waited,
            }
        }
    }

    pub fn add_element(&self, id: &str) {
        self.elements.borrow_mut().insert(id.to_string());
    }
}

impl ScriptHost for FakeHost {
    fn has_script(&self, selector: &str) -> bool {
        // Selectors look like script[src="..."] or script[src*="..."].
        let needle = match (selector.find('"'), selector.rfind('"')) {
            (Some(start), Some(end)) if end > start => &selector[start + 1..end],
            _ => selector,
        };
        self.scripts.borrow().iter().any(|s| s.url.contains(needle))
    }

    fn inject_script(
        &self,
        url: &str,
        on_load: Box<dyn FnOnce()>,
        on_error: Box<dyn FnOnce()>,
    ) -> Result<(), SdkError> {
        self.scripts.borrow_mut().push(InjectedScript {
            url: url.to_string(),
            on_load: Some(on_load),
            on_error: Some(on_error),
        });
        Ok(())
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) {
        self.timers.borrow_mut().push_back((millis, callback));
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains(id)
    }
}

/// Global namespace of a fake SDK, shared between bindings the way `window` is.
#[derive(Default)]
pub struct FakeGlobal {
    pub present: Cell<bool>,
    pub initialized: Cell<bool>,
    pub init_calls: Cell<u32>,
    pub fail_init: Cell<bool>,
}

pub struct FakeSdk {
    pub global: Rc<FakeGlobal>,
    pub url: &'static str,
}

impl FakeSdk {
    pub fn new(global: Rc<FakeGlobal>) -> Rc<Self> {
        Rc::new(Self {
            global,
            url: "https://cdn.test/fake-sdk.js",
        })
    }
}

impl SdkBinding for FakeSdk {
    fn name(&self) -> &'static str {
        "fake-sdk"
    }

    fn script_url(&self) -> String {
        self.url.to_string()
    }

    fn is_present(&self) -> bool {
        self.global.present.get()
    }

    fn is_initialized(&self) -> bool {
        self.global.initialized.get()
    }

    fn initialize(&self) -> Result<(), SdkError> {
        self.global.init_calls.set(self.global.init_calls.get() + 1);
        if self.global.fail_init.get() {
            return Err(SdkError::Js {
                sdk: "fake-sdk",
                message: "init threw".to_string(),
            });
        }
        self.global.initialized.set(true);
        Ok(())
    }
}
