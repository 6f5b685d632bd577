use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="page">
            <section class="section">
                <div class="container narrow section-header">
                    <h1>{"Page not found"}</h1>
                    <p>{"This reel seems to be missing from the archive."}</p>
                    <Link<Route> to={Route::Home} classes="btn-primary">
                        {"Back to the vault"}
                    </Link<Route>>
                </div>
            </section>
        </main>
    }
}
