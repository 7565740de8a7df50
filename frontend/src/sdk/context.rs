use std::rc::Rc;

use yew::prelude::*;

use crate::config;

use super::browser::BrowserHost;
use super::client::SdkClient;
use super::host::ScriptHost;
use super::kakao::KakaoSdk;
use super::roughmap::RoughmapSdk;

/// The two third-party SDKs the invitation uses, created once by `App` and
/// handed down through context.
#[derive(Clone, PartialEq)]
pub struct Sdks {
    pub share: SdkClient,
    pub map: SdkClient,
}

impl Sdks {
    pub fn browser() -> Self {
        let host: Rc<dyn ScriptHost> = Rc::new(BrowserHost);
        let policy = config::sdk_retry_policy();
        Self {
            share: SdkClient::new(
                host.clone(),
                Rc::new(KakaoSdk::new(config::kakao_js_key())),
                policy,
            ),
            map: SdkClient::new(host, Rc::new(RoughmapSdk::for_current_page()), policy),
        }
    }
}

#[hook]
pub fn use_sdks() -> Sdks {
    use_context::<Sdks>().expect("Sdks context is provided by App")
}
