use serde::Serialize;
use web_sys::js_sys::Array;
use wasm_bindgen::JsValue;

use crate::config;
use crate::content;
use crate::error::{js_message, SdkError};

use super::browser::{global_path, invoke};
use super::host::SdkBinding;

const SDK: &str = "kakao-sdk";

/// The Kakao JavaScript SDK, used for KakaoTalk sharing.
pub struct KakaoSdk {
    app_key: &'static str,
}

impl KakaoSdk {
    pub fn new(app_key: &'static str) -> Self {
        Self { app_key }
    }
}

fn js_error(value: JsValue) -> SdkError {
    SdkError::Js {
        sdk: SDK,
        message: js_message(&value),
    }
}

impl SdkBinding for KakaoSdk {
    fn name(&self) -> &'static str {
        SDK
    }

    fn script_url(&self) -> String {
        config::KAKAO_SDK_URL.to_string()
    }

    fn is_present(&self) -> bool {
        global_path(&["Kakao"]).is_some()
    }

    fn is_initialized(&self) -> bool {
        global_path(&["Kakao"])
            .and_then(|kakao| invoke(&kakao, "isInitialized", &Array::new()).ok())
            .and_then(|flag| flag.as_bool())
            .unwrap_or(false)
    }

    fn initialize(&self) -> Result<(), SdkError> {
        if self.app_key.is_empty() {
            return Err(SdkError::MissingKey { sdk: SDK });
        }
        let kakao = global_path(&["Kakao"]).ok_or_else(|| SdkError::Js {
            sdk: SDK,
            message: "window.Kakao missing".to_string(),
        })?;
        invoke(&kakao, "init", &Array::of1(&JsValue::from_str(self.app_key))).map_err(js_error)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub mobile_web_url: String,
    pub web_url: String,
}

impl ShareLink {
    fn to(url: &str) -> Self {
        Self {
            mobile_web_url: url.to_string(),
            web_url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedContent {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: ShareLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedButton {
    pub title: String,
    pub link: ShareLink,
}

/// Argument to `Kakao.Share.sendDefault` for a feed-style card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedShare {
    pub object_type: &'static str,
    pub content: FeedContent,
    pub buttons: Vec<FeedButton>,
    pub install_talk: bool,
}

impl FeedShare {
    /// The invitation card, linking back to `page_url`.
    pub fn invitation(page_url: &str) -> Self {
        Self {
            object_type: "feed",
            content: FeedContent {
                title: content::SHARE_TITLE.to_string(),
                description: content::SHARE_DESCRIPTION.to_string(),
                image_url: config::kakao_share_image().to_string(),
                link: ShareLink::to(page_url),
            },
            buttons: vec![FeedButton {
                title: content::SHARE_BUTTON.to_string(),
                link: ShareLink::to(page_url),
            }],
            install_talk: true,
        }
    }
}

/// Opens the KakaoTalk share sheet. The SDK must already be initialized.
pub fn send_feed(payload: &FeedShare) -> Result<(), SdkError> {
    let share = global_path(&["Kakao", "Share"]).ok_or_else(|| SdkError::Js {
        sdk: SDK,
        message: "Kakao.Share missing".to_string(),
    })?;
    log::debug!(
        "Sending share payload {}",
        serde_json::to_string(payload).unwrap_or_default()
    );
    let value = serde_wasm_bindgen::to_value(payload).map_err(|e| SdkError::Js {
        sdk: SDK,
        message: e.to_string(),
    })?;
    invoke(&share, "sendDefault", &Array::of1(&value)).map_err(js_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_payload_uses_kakao_field_names() {
        let payload = FeedShare::invitation("https://example.com/");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["objectType"], "feed");
        assert_eq!(json["installTalk"], true);
        assert_eq!(json["content"]["title"], content::SHARE_TITLE);
        assert_eq!(json["content"]["imageUrl"], config::kakao_share_image());
        assert_eq!(json["content"]["link"]["mobileWebUrl"], "https://example.com/");
        assert_eq!(json["buttons"][0]["title"], content::SHARE_BUTTON);
        assert_eq!(json["buttons"][0]["link"]["webUrl"], "https://example.com/");
        assert!(json.get("object_type").is_none());
    }

    #[test]
    fn test_empty_key_is_rejected_before_touching_the_page() {
        let sdk = KakaoSdk::new("");
        assert_eq!(sdk.initialize(), Err(SdkError::MissingKey { sdk: SDK }));
    }

    #[test]
    fn test_selector_matches_exact_url() {
        let sdk = KakaoSdk::new("key");
        assert_eq!(
            sdk.script_selector(),
            format!("script[src=\"{}\"]", config::KAKAO_SDK_URL)
        );
    }
}
