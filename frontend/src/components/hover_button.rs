use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HoverButtonProps {
    #[prop_or_default]
    pub class: Classes,
    /// Inline style shared by both states, without a background colour.
    #[prop_or_default]
    pub style: AttrValue,
    pub background: &'static str,
    pub hover_background: &'static str,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// Button whose hover colour is driven by component state.
#[function_component(HoverButton)]
pub fn hover_button(props: &HoverButtonProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let background = if *hovered {
        props.hover_background
    } else {
        props.background
    };

    html! {
        <button
            class={props.class.clone()}
            style={format!("{} background-color: {};", props.style, background)}
            onclick={props.onclick.clone()}
            {onmouseenter}
            {onmouseleave}
        >
            { for props.children.iter() }
        </button>
    }
}
