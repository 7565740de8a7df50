use web_sys::window;

pub const SHARE_LOADING: &str = "카카오톡 공유 기능을 로딩 중입니다. 잠시 후 다시 시도해 주세요.";
pub const SHARE_FAILED: &str = "카카오톡 공유를 열 수 없습니다. 잠시 후 다시 시도해 주세요.";

/// Shows a blocking browser alert, falling back to the console.
pub fn alert(message: &str) {
    match window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                gloo_console::warn!("alert blocked:", message);
            }
        }
        None => gloo_console::warn!("no window for alert:", message),
    }
}
