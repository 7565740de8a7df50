use yew::prelude::*;

use crate::content::{AccountEntry, Side};

const COPIED_LABEL: &str = "복사됨!";

#[derive(Properties, PartialEq)]
pub struct AccountPanelProps {
    pub side: Side,
    pub open: bool,
    /// Id of the entry currently showing its "copied" flash.
    pub copied: Option<String>,
    pub on_copy: Callback<AccountEntry>,
}

#[function_component(AccountPanel)]
pub fn account_panel(props: &AccountPanelProps) -> Html {
    let hovered_row = use_state(|| None::<&'static str>);

    html! {
        <div class={classes!("account-drawer", props.open.then_some("is-open"))}>
            <div class="card account-card">
                <h3 class="account-title">{format!("{} 계좌번호", props.side.label())}</h3>
                <div class="account-rows">
                    { for props.side.accounts().iter().map(|entry| {
                        let entry = *entry;
                        let onclick = {
                            let on_copy = props.on_copy.clone();
                            Callback::from(move |_: MouseEvent| on_copy.emit(entry))
                        };
                        let onmouseenter = {
                            let hovered_row = hovered_row.clone();
                            Callback::from(move |_: MouseEvent| hovered_row.set(Some(entry.id)))
                        };
                        let onmouseleave = {
                            let hovered_row = hovered_row.clone();
                            Callback::from(move |_: MouseEvent| hovered_row.set(None))
                        };
                        let flashing = props.copied.as_deref() == Some(entry.id);
                        let hovered = *hovered_row == Some(entry.id);

                        html! {
                            <div
                                key={entry.id}
                                class={classes!("account-row", hovered.then_some("is-hovered"))}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <span>{entry.label}</span>
                                <button class="account-copy" {onclick}>
                                    { if flashing { COPIED_LABEL.to_string() } else { entry.display() } }
                                </button>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
