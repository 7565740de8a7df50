use yew::prelude::*;

use crate::clipboard::{spawn_copy, use_copy_flash};
use crate::components::{
    account_panel::AccountPanel,
    calendar::WeddingCalendar,
    header::InvitationHeader,
    hover_button::HoverButton,
    map_embed::MapEmbed,
    reveal_section::{Motion, RevealSection},
    share_buttons::{current_url, ShareButtons},
};
use crate::content::{self, AccountEntry, Side, GALLERY, GREETING, SCRIPTURE, SCRIPTURE_SOURCE, SECTION_IDS};
use crate::styles::INVITATION_CSS;
use crate::visibility::use_section_reveal;

/// Header style. Both variants share every other section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Classic,
    Preview,
}

#[derive(Properties, PartialEq)]
pub struct InvitationProps {
    pub variant: Variant,
}

const BUTTON_BG: &str = "#5b6b7c";
const BUTTON_BG_HOVER: &str = "#4a5a6b";

fn paragraph(lines: &[&str]) -> Html {
    html! {
        { for lines.iter().enumerate().map(|(i, line)| html! {
            <>
                if i > 0 { <br /> }
                {*line}
            </>
        }) }
    }
}

#[function_component(Invitation)]
pub fn invitation(props: &InvitationProps) -> Html {
    let reveal = use_section_reveal(&SECTION_IDS);
    let flash = use_copy_flash();
    let show_groom = use_state(|| false);
    let show_bride = use_state(|| false);

    let on_copy_account = {
        let flash = flash.clone();
        Callback::from(move |entry: AccountEntry| {
            spawn_copy(entry.account_number.to_string(), entry.id.to_string(), flash.clone());
        })
    };

    let on_copy_link = {
        let flash = flash.clone();
        Callback::from(move |_: ()| spawn_copy(current_url(), "copy-link".to_string(), flash.clone()))
    };

    let toggle = |state: &UseStateHandle<bool>| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(!*state))
    };

    let section = |index: usize| {
        let id = SECTION_IDS[index];
        (id, reveal.node_ref(index), reveal.is_revealed(id))
    };

    let (greeting_id, greeting_ref, greeting_seen) = section(0);
    let (gallery_id, gallery_ref, gallery_seen) = section(1);
    let (calendar_id, calendar_ref, calendar_seen) = section(2);
    let (location_id, location_ref, location_seen) = section(3);
    let (account_id, account_ref, account_seen) = section(4);
    let (message_id, message_ref, message_seen) = section(5);
    let (share_id, share_ref, share_seen) = section(6);

    html! {
        <div class="invitation-page">
            <style>{INVITATION_CSS}</style>
            <div class="invitation-column">
                <InvitationHeader variant={props.variant} />

                <RevealSection
                    id={greeting_id}
                    node_ref={greeting_ref}
                    revealed={greeting_seen}
                    motion={Motion::Rise}
                    background="linear-gradient(to bottom, #eeeeee, #f5f5f5)"
                    title="INVITATION"
                >
                    <h3 class="section-title">{"마음을 전합니다"}</h3>
                    <div class="greeting-text">
                        { for GREETING.iter().enumerate().map(|(i, lines)| html! {
                            <p class="animate-fade-in" style={format!("animation-delay: {:.1}s;", 0.2 * (i + 1) as f64)}>
                                { paragraph(lines) }
                            </p>
                        }) }
                    </div>
                    <div class="greeting-divider animate-expand-height"></div>
                    <div class="families animate-fade-in">
                        { for [Side::Groom, Side::Bride].iter().enumerate().map(|(i, side)| {
                            let family = side.family();
                            html! {
                                <>
                                    if i > 0 { <div class="families-rule"></div> }
                                    <div class="family">
                                        <p class="family-side">{side.label()}</p>
                                        <p>
                                            <strong>{family.parents}</strong>
                                            <br />
                                            <span>{family.relation}{" "}<strong>{family.child}</strong></span>
                                        </p>
                                    </div>
                                </>
                            }
                        }) }
                    </div>
                </RevealSection>

                <RevealSection
                    id={gallery_id}
                    node_ref={gallery_ref}
                    revealed={gallery_seen}
                    background="#fafafa"
                    title="OUR MOMENTS"
                >
                    <div class="gallery-grid">
                        { for GALLERY.iter().map(|photo| html! {
                            <div key={photo.src} class={classes!("gallery-tile", photo.wide.then_some("gallery-wide"))}>
                                <div
                                    class="gallery-image"
                                    style={format!("background-image: url({}); background-position: {};", photo.src, photo.position)}
                                ></div>
                            </div>
                        }) }
                    </div>
                </RevealSection>

                <RevealSection
                    id={calendar_id}
                    node_ref={calendar_ref}
                    revealed={calendar_seen}
                    background="linear-gradient(to bottom, #fafafa, #eeeeee)"
                    title="SAVE THE DATE"
                >
                    {
                        match content::wedding_at() {
                            Some(at) => html! { <WeddingCalendar {at} /> },
                            None => html! {},
                        }
                    }
                </RevealSection>

                <RevealSection
                    id={location_id}
                    node_ref={location_ref}
                    revealed={location_seen}
                    background="linear-gradient(to bottom, #f5f5f5, #fafafa)"
                    title="LOCATION"
                >
                    <h3 class="section-title">{"오시는 길"}</h3>
                    <MapEmbed />
                </RevealSection>

                <RevealSection
                    id={account_id}
                    node_ref={account_ref}
                    revealed={account_seen}
                    background="linear-gradient(to bottom, #eeeeee, #f5f5f5)"
                    title="CONGRATULATORY MONEY"
                >
                    <p class="section-lead">{"마음 전하실 곳"}</p>
                    <div class="account-toggles">
                        <HoverButton
                            class="pill-button"
                            background={BUTTON_BG}
                            hover_background={BUTTON_BG_HOVER}
                            onclick={toggle(&show_groom)}
                        >
                            {Side::Groom.label()}
                        </HoverButton>
                        <HoverButton
                            class="pill-button"
                            background={BUTTON_BG}
                            hover_background={BUTTON_BG_HOVER}
                            onclick={toggle(&show_bride)}
                        >
                            {Side::Bride.label()}
                        </HoverButton>
                    </div>
                    <AccountPanel
                        side={Side::Groom}
                        open={*show_groom}
                        copied={flash.copied()}
                        on_copy={on_copy_account.clone()}
                    />
                    <AccountPanel
                        side={Side::Bride}
                        open={*show_bride}
                        copied={flash.copied()}
                        on_copy={on_copy_account}
                    />
                </RevealSection>

                <RevealSection
                    id={message_id}
                    node_ref={message_ref}
                    revealed={message_seen}
                    background="#fafafa"
                    title="MESSAGE"
                >
                    <div class="scripture">
                        <p class="scripture-text">{ paragraph(&SCRIPTURE) }</p>
                        <p class="scripture-source">{SCRIPTURE_SOURCE}</p>
                    </div>
                </RevealSection>

                <RevealSection
                    id={share_id}
                    node_ref={share_ref}
                    revealed={share_seen}
                    motion={Motion::Rise}
                    background="linear-gradient(to bottom, #fafafa, #eeeeee)"
                    title="SHARE"
                >
                    <ShareButtons {on_copy_link} />
                </RevealSection>

                <footer class="invitation-footer">
                    <p>{"Thank you for celebrating with us"}</p>
                    <p class="footer-sub">{"2025 Wedding Invitation"}</p>
                </footer>
            </div>
        </div>
    }
}
