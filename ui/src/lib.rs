use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

mod api;
mod components;
mod session;
mod types;

use api::ApiClient;
use components::docs::ApiDocs;
use components::home::Home;
use components::login::Login;
use components::occupation_detail::OccupationDetail;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::from_env());

    view! {
        <Router>
            <main class="min-h-screen bg-gray-50 text-gray-900">
                <Routes fallback=|| "Não encontrado.">
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/occupations/:id") view=OccupationDetail/>
                    <Route path=path!("/docs") view=ApiDocs/>
                    <Route path=path!("/login") view=Login/>
                </Routes>
            </main>
        </Router>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
