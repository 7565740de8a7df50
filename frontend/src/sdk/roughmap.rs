use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::window;

use crate::config;
use crate::error::{js_message, SdkError};

use super::browser::{global_path, invoke};
use super::host::{ScriptHost, SdkBinding};
use super::retry::{wait_until, RetryPolicy};

const SDK: &str = "roughmap";

/// Kakao map "roughmap" landing widget.
///
/// The widget has no init step of its own: the loader only guarantees that
/// `daum.roughmap.Lander` exists, and [`render_lander`] draws into the page
/// once the container element is mounted.
pub struct RoughmapSdk {
    protocol: &'static str,
}

/// Config object the loader script reads from `window.daum.roughmap`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoughmapBootstrap {
    pub cdn: &'static str,
    #[serde(rename = "URL_KEY_DATA_LOAD_PRE")]
    pub url_key_data_load_pre: String,
    // Misspelled upstream.
    pub url_protocal: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanderOptions {
    pub timestamp: &'static str,
    pub key: &'static str,
    pub map_width: &'static str,
    pub map_height: &'static str,
}

impl LanderOptions {
    pub fn configured() -> Self {
        Self {
            timestamp: config::ROUGHMAP_TIMESTAMP,
            key: config::ROUGHMAP_KEY,
            map_width: "100%",
            map_height: config::ROUGHMAP_HEIGHT,
        }
    }
}

impl RoughmapSdk {
    pub fn with_protocol(protocol: &'static str) -> Self {
        Self { protocol }
    }

    /// Matches the scheme of the page so the widget never mixes content.
    pub fn for_current_page() -> Self {
        let secure = window()
            .and_then(|w| w.location().protocol().ok())
            .map(|p| p == "https:")
            .unwrap_or(true);
        Self::with_protocol(if secure { "https:" } else { "http:" })
    }

    pub fn bootstrap(&self) -> RoughmapBootstrap {
        RoughmapBootstrap {
            cdn: config::ROUGHMAP_CDN,
            url_key_data_load_pre: format!("{}//t1.daumcdn.net/roughmap/", self.protocol),
            url_protocal: self.protocol,
        }
    }
}

fn js_error(value: JsValue) -> SdkError {
    SdkError::Js {
        sdk: SDK,
        message: js_message(&value),
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, SdkError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| SdkError::Js {
        sdk: SDK,
        message: e.to_string(),
    })
}

impl SdkBinding for RoughmapSdk {
    fn name(&self) -> &'static str {
        SDK
    }

    fn script_url(&self) -> String {
        format!(
            "{}//t1.daumcdn.net/kakaomapweb/place/jscss/roughmap/{}/roughmapLander.js",
            self.protocol,
            config::ROUGHMAP_CDN
        )
    }

    fn script_selector(&self) -> String {
        "script[src*=\"roughmapLander\"]".to_string()
    }

    fn is_present(&self) -> bool {
        global_path(&["daum", "roughmap", "Lander"]).is_some()
    }

    fn before_inject(&self) -> Result<(), SdkError> {
        let window: JsValue = window()
            .ok_or_else(|| SdkError::Js {
                sdk: SDK,
                message: "no window".to_string(),
            })?
            .into();

        let daum = match global_path(&["daum"]) {
            Some(daum) => daum,
            None => {
                let daum: JsValue = web_sys::js_sys::Object::new().into();
                Reflect::set(&window, &JsValue::from_str("daum"), &daum).map_err(js_error)?;
                daum
            }
        };
        let bootstrap = to_js(&self.bootstrap())?;
        Reflect::set(&daum, &JsValue::from_str("roughmap"), &bootstrap).map_err(js_error)?;
        Ok(())
    }
}

/// Waits on the policy's backoff until the element `container_id` is in the
/// document. False once the attempts run out.
pub async fn await_container(
    host: Rc<dyn ScriptHost>,
    policy: RetryPolicy,
    container_id: &str,
) -> bool {
    let probe = host.clone();
    let id = container_id.to_string();
    wait_until(host, policy, Rc::new(move || probe.has_element(&id))).await
}

/// `new daum.roughmap.Lander(options).render()`.
pub fn render_lander() -> Result<(), SdkError> {
    let lander: Function = global_path(&["daum", "roughmap", "Lander"])
        .ok_or_else(|| SdkError::Js {
            sdk: SDK,
            message: "daum.roughmap.Lander missing".to_string(),
        })?
        .dyn_into()
        .map_err(js_error)?;

    let options = to_js(&LanderOptions::configured())?;
    let instance = Reflect::construct(&lander, &Array::of1(&options)).map_err(js_error)?;
    invoke(&instance, "render", &Array::new()).map_err(js_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::testing::FakeHost;
    use futures::executor::block_on;
    use futures::FutureExt;

    const CONTAINER: &str = "daumRoughmapContainer1749974126056";

    fn policy() -> RetryPolicy {
        RetryPolicy {
            first_delay_ms: 100,
            factor: 2,
            max_delay_ms: 800,
            max_attempts: 4,
        }
    }

    #[test]
    fn test_script_url_follows_protocol() {
        assert_eq!(
            RoughmapSdk::with_protocol("https:").script_url(),
            "https://t1.daumcdn.net/kakaomapweb/place/jscss/roughmap/16137cec/roughmapLander.js"
        );
        assert!(RoughmapSdk::with_protocol("http:")
            .script_url()
            .starts_with("http://t1.daumcdn.net/"));
    }

    #[test]
    fn test_bootstrap_keys_match_loader_expectations() {
        let json = serde_json::to_value(RoughmapSdk::with_protocol("https:").bootstrap()).unwrap();
        assert_eq!(json["cdn"], "16137cec");
        assert_eq!(json["URL_KEY_DATA_LOAD_PRE"], "https://t1.daumcdn.net/roughmap/");
        assert_eq!(json["url_protocal"], "https:");
    }

    #[test]
    fn test_lander_options_are_camel_case() {
        let json = serde_json::to_value(LanderOptions::configured()).unwrap();
        assert_eq!(json["timestamp"], config::ROUGHMAP_TIMESTAMP);
        assert_eq!(json["key"], config::ROUGHMAP_KEY);
        assert_eq!(json["mapWidth"], "100%");
        assert_eq!(json["mapHeight"], "300");
    }

    #[test]
    fn test_container_id_is_derived_from_timestamp() {
        assert_eq!(config::roughmap_container_id(), "daumRoughmapContainer1749974126056");
    }

    #[test]
    fn test_waits_for_container_to_mount() {
        let host = FakeHost::new();
        let mut pending = Box::pin(await_container(host.clone(), policy(), CONTAINER));
        assert_eq!(pending.as_mut().now_or_never(), None);

        assert_eq!(host.run_timers(2), 2);
        assert_eq!(pending.as_mut().now_or_never(), None);

        host.add_element(CONTAINER);
        host.run_all_timers();
        assert!(block_on(pending));
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn test_present_container_needs_no_timers() {
        let host = FakeHost::new();
        host.add_element(CONTAINER);
        assert!(block_on(await_container(host.clone(), policy(), CONTAINER)));
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn test_missing_container_gives_up_after_max_attempts() {
        let host = FakeHost::new();
        host.add_element("someOtherElement");
        let mut pending = Box::pin(await_container(host.clone(), policy(), CONTAINER));
        assert_eq!(pending.as_mut().now_or_never(), None);

        let waited = host.run_all_timers();
        assert!(!block_on(pending));
        assert_eq!(waited, policy().total_wait_ms());
    }
}
