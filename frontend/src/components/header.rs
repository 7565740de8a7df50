use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{self, GROOM_NAME, BRIDE_NAME, HEADER_PHOTO, VENUE};
use crate::pages::invitation::Variant;

/// Opacity of the header content after scrolling `scroll_y` pixels.
pub fn header_fade(scroll_y: f64) -> f64 {
    1.0 - (scroll_y / 900.0).clamp(0.0, 1.0) * 0.6
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub variant: Variant,
}

#[function_component(InvitationHeader)]
pub fn invitation_header(props: &HeaderProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let style = format!("opacity: {:.3};", header_fade(scroll_y));
    let date_line = content::wedding_at()
        .map(|at| content::header_date_line(&at))
        .unwrap_or_default();

    match props.variant {
        Variant::Preview => html! {
            <header class="header header-card-style">
                <div class="header-backdrop"></div>
                <div class="header-content" {style}>
                    <div class="header-card">
                        <p class="header-kicker animate-fade-in">{"두 사람의 결혼식"}</p>
                        <div class="header-divider animate-expand-height"></div>
                        <h1 class="header-names animate-fade-in-up">
                            <span>{GROOM_NAME}</span>
                            <span>{BRIDE_NAME}</span>
                        </h1>
                        <div class="header-photo animate-fade-in">
                            <img src={HEADER_PHOTO} alt="Wedding Photo" />
                        </div>
                        <div class="header-when animate-fade-in-up">
                            <p class="header-date">{date_line}</p>
                            <p class="header-venue">{VENUE}</p>
                        </div>
                    </div>
                </div>
            </header>
        },
        Variant::Classic => html! {
            <header
                class="header header-photo-style"
                style={format!("background-image: url({});", HEADER_PHOTO)}
            >
                <div class="header-shade"></div>
                <div class="header-content header-content-light" {style}>
                    <p class="header-kicker animate-fade-in">{"WE ARE GETTING MARRIED"}</p>
                    <h1 class="header-names animate-fade-in-up">
                        {format!("{} · {}", GROOM_NAME, BRIDE_NAME)}
                    </h1>
                    <div class="header-divider animate-expand-height"></div>
                    <p class="header-date animate-fade-in-up">{date_line}</p>
                    <p class="header-venue">{VENUE}</p>
                </div>
            </header>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_fade_is_clamped() {
        assert_eq!(header_fade(0.0), 1.0);
        assert!((header_fade(450.0) - 0.7).abs() < 1e-9);
        assert!((header_fade(5_000.0) - 0.4).abs() < 1e-9);
        assert_eq!(header_fade(-20.0), 1.0);
    }
}
