use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Fade,
    /// Fade while sliding up into place.
    Rise,
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: &'static str,
    pub node_ref: NodeRef,
    pub revealed: bool,
    #[prop_or(Motion::Fade)]
    pub motion: Motion,
    /// CSS `background` for the section.
    pub background: &'static str,
    pub title: &'static str,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let state = match (props.revealed, props.motion) {
        (true, _) => "is-revealed",
        (false, Motion::Fade) => "is-hidden",
        (false, Motion::Rise) => "is-hidden is-lowered",
    };

    html! {
        <section
            id={props.id}
            ref={props.node_ref.clone()}
            class={classes!("reveal-section", state)}
            style={format!("background: {};", props.background)}
        >
            <div class="section-heading">
                <p class="section-kicker">{props.title}</p>
                <div class="section-rule"></div>
            </div>
            { for props.children.iter() }
        </section>
    }
}
