use log::error;
use web_sys::window;
use yew::prelude::*;

use crate::components::hover_button::HoverButton;
use crate::notice;
use crate::sdk::{kakao, use_sdks};

#[derive(Properties, PartialEq)]
pub struct ShareButtonsProps {
    pub on_copy_link: Callback<()>,
}

pub fn current_url() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

#[function_component(ShareButtons)]
pub fn share_buttons(props: &ShareButtonsProps) -> Html {
    let sdks = use_sdks();

    let on_kakao = {
        let share = sdks.share.clone();
        Callback::from(move |_: MouseEvent| {
            if !share.is_ready() {
                notice::alert(notice::SHARE_LOADING);
                return;
            }
            let payload = kakao::FeedShare::invitation(&current_url());
            if let Err(err) = kakao::send_feed(&payload) {
                error!("KakaoTalk share failed: {}", err);
                notice::alert(notice::SHARE_FAILED);
            }
        })
    };

    let on_copy = {
        let on_copy_link = props.on_copy_link.clone();
        Callback::from(move |_: MouseEvent| on_copy_link.emit(()))
    };

    html! {
        <div class="share-buttons">
            <HoverButton
                class="share-button share-kakao"
                style="color: #3C1E1E; font-weight: 600;"
                background="#FEE500"
                hover_background="#FDD835"
                onclick={on_kakao}
            >
                <svg class="share-icon" viewBox="0 0 24 24" fill="currentColor">
                    <path d="M12 3C6.48 3 2 6.48 2 10.5c0 2.52 1.68 4.74 4.2 6.12L5.4 20.1c-.18.36.18.72.54.54l3.48-1.8c1.08.18 2.22.18 3.36 0l3.48 1.8c.36.18.72-.18.54-.54l-.8-3.48C20.32 15.24 22 13.02 22 10.5 22 6.48 17.52 3 12 3z" />
                </svg>
                {"카카오톡으로 공유하기"}
            </HoverButton>
            <HoverButton
                class="share-button share-link"
                style="border: 1px solid #5b6b7c; color: #5b6b7c;"
                background="white"
                hover_background="#f5f5f5"
                onclick={on_copy}
            >
                <svg class="share-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M8 5H6a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2v-1M8 5a2 2 0 002 2h2a2 2 0 002-2M8 5a2 2 0 012-2h2a2 2 0 012 2m0 0h2a2 2 0 012 2v3m2 4H10m0 0l3-3m-3 3l3 3"
                    />
                </svg>
                {"링크 복사"}
            </HoverButton>
        </div>
    }
}
