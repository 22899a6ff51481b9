use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="btn btn-cta">
                {"Return to Home"}
            </Link<Route>>
        </div>
    }
}
