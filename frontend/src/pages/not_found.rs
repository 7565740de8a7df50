use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles::INVITATION_CSS;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>{INVITATION_CSS}</style>
            <p>{"페이지를 찾을 수 없습니다."}</p>
            <Link<Route> to={Route::Classic}>
                {"청첩장으로 돌아가기"}
            </Link<Route>>
        </div>
    }
}
