//! Login page
//!
//! Target of the forced navigation after a 401. Stores the access token
//! used for the Authorization header on subsequent requests.

use leptos::prelude::*;

use crate::session;

#[component]
pub fn Login() -> impl IntoView {
    let token = RwSignal::new(String::new());
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = token.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        session::store_token(value.trim());
        saved.set(true);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <form on:submit=on_submit class="bg-white rounded-lg shadow p-8 w-full max-w-md space-y-6">
                <div class="space-y-2">
                    <h1 class="text-2xl font-bold text-gray-900">"Entrar"</h1>
                    <p class="text-sm text-gray-500">
                        "Informe o token de acesso para consultar a API autenticada."
                    </p>
                </div>

                <div class="space-y-2">
                    <label class="block text-sm font-medium text-gray-700">"Token de acesso"</label>
                    <input
                        type="password"
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="Cole o token aqui"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    class="w-full px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                    disabled=move || saved.get()
                >
                    {move || if saved.get() { "Salvando..." } else { "Entrar" }}
                </button>
            </form>
        </div>
    }
}
