use log::Level;

use crate::sdk::RetryPolicy;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose SDK tracing while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// JavaScript app key for the Kakao SDK, baked in at build time.
pub fn kakao_js_key() -> &'static str {
    option_env!("KAKAO_JS_KEY").unwrap_or("")
}

/// Thumbnail shown on the KakaoTalk share card.
pub fn kakao_share_image() -> &'static str {
    option_env!("KAKAO_SHARE_IMAGE").unwrap_or("/assets/images/2.jpg")
}

pub const KAKAO_SDK_URL: &str = "https://t1.kakaocdn.net/kakao_js_sdk/2.7.2/kakao.min.js";

pub const ROUGHMAP_CDN: &str = "16137cec";
pub const ROUGHMAP_TIMESTAMP: &str = "1749974126056";
pub const ROUGHMAP_KEY: &str = "3ktq7g8rxaw";
pub const ROUGHMAP_HEIGHT: &str = "300";

/// Element id the roughmap Lander renders into. The SDK derives it from the timestamp.
pub fn roughmap_container_id() -> String {
    format!("daumRoughmapContainer{}", ROUGHMAP_TIMESTAMP)
}

/// How long a copy button shows its "copied" label.
pub const COPY_FLASH_MS: u32 = 200;

pub fn sdk_retry_policy() -> RetryPolicy {
    RetryPolicy {
        first_delay_ms: 100,
        factor: 2,
        max_delay_ms: 1_600,
        max_attempts: 8,
    }
}
