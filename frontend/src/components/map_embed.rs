use std::cell::Cell;
use std::rc::Rc;

use log::{error, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::sdk::{roughmap, use_sdks};

/// Container the roughmap widget draws into once its script is loaded.
#[function_component(MapEmbed)]
pub fn map_embed() -> Html {
    let sdks = use_sdks();
    let container_id = config::roughmap_container_id();

    {
        let map = sdks.map.clone();
        let container_id = container_id.clone();
        use_effect_with_deps(
            move |_| {
                let cancelled = Rc::new(Cell::new(false));
                {
                    let cancelled = cancelled.clone();
                    spawn_local(async move {
                        if let Err(err) = map.ensure_loaded().await {
                            warn!("Map left empty: {}", err);
                            return;
                        }
                        if cancelled.get() {
                            return;
                        }

                        let mounted =
                            roughmap::await_container(map.host(), map.policy(), &container_id).await;

                        if cancelled.get() {
                            return;
                        }
                        if !mounted {
                            warn!("Map container {} never mounted", container_id);
                            return;
                        }
                        if let Err(err) = roughmap::render_lander() {
                            error!("Map render failed: {}", err);
                        }
                    });
                }
                move || cancelled.set(true)
            },
            (),
        );
    }

    html! {
        <div class="card map-card">
            <div id={container_id} class="root_daum_roughmap root_daum_roughmap_landing map-container"></div>
        </div>
    }
}
