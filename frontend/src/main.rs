use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;

mod config;
mod error;
mod content;
mod notice;
mod styles;
mod clipboard;
mod visibility;
mod sdk {
    pub mod host;
    pub mod retry;
    pub mod client;
    pub mod browser;
    pub mod kakao;
    pub mod roughmap;
    pub mod context;
    #[cfg(test)]
    pub mod testing;

    pub use context::{use_sdks, Sdks};
    pub use retry::RetryPolicy;
}
mod components {
    pub mod account_panel;
    pub mod calendar;
    pub mod header;
    pub mod hover_button;
    pub mod map_embed;
    pub mod reveal_section;
    pub mod share_buttons;
}
mod pages {
    pub mod invitation;
    pub mod not_found;
}

use pages::{
    invitation::{Invitation, Variant},
    not_found::NotFound,
};
use sdk::Sdks;


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Classic,
    // Unlisted link handed out for the preview design.
    #[at("/aH6Zr68jap59m62iQEZWdvvVdaZt8K")]
    Preview,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Classic => {
            info!("Rendering classic invitation");
            html! { <Invitation variant={Variant::Classic} /> }
        },
        Route::Preview => {
            info!("Rendering preview invitation");
            html! { <Invitation variant={Variant::Preview} /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let sdks = use_state(Sdks::browser);

    // Start the share SDK right away; the map SDK loads with its section.
    {
        let share = sdks.share.clone();
        use_effect_with_deps(move |_| {
            spawn_local(async move {
                if let Err(err) = share.ensure_loaded().await {
                    warn!("Share button disabled: {}", err);
                }
            });
            || ()
        }, ());
    }

    html! {
        <ContextProvider<Sdks> context={(*sdks).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Sdks>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(config::log_level()).is_err() {
        gloo_console::warn!("logger already initialized");
    }

    info!("Starting invitation");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Classic));
        assert_eq!(
            Route::recognize("/aH6Zr68jap59m62iQEZWdvvVdaZt8K"),
            Some(Route::Preview)
        );
        assert_eq!(Route::recognize("/v2"), Some(Route::NotFound));
        assert_eq!(Route::Preview.to_path(), "/aH6Zr68jap59m62iQEZWdvvVdaZt8K");
    }
}
