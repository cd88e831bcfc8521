//! Search box with auto-complete suggestions
//!
//! Controlled input plus a suggestion dropdown with keyboard navigation.
//! The blur handler hides the dropdown after a short delay so a click on a
//! suggestion still lands.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const MAX_SUGGESTIONS: usize = 5;
const BLUR_DELAY_MS: u32 = 150;

#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    /// Raw keystroke notification; the caller debounces lookups.
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] on_clear: Callback<()>,
    #[prop(into)] suggestions: Signal<Vec<String>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(default = "Buscar ocupação...".to_string())] placeholder: String,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let highlighted = RwSignal::new(Option::<usize>::None);
    let focus_generation = StoredValue::new(0u64);

    let visible = Memo::new(move |_| {
        suggestions
            .get()
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .collect::<Vec<_>>()
    });
    let dropdown_open = Memo::new(move |_| {
        focused.get() && !value.get().is_empty() && !visible.get().is_empty()
    });

    // New suggestions reset the keyboard cursor.
    Effect::new(move |_| {
        suggestions.track();
        highlighted.set(None);
    });

    let select = move |suggestion: String| {
        value.set(suggestion.clone());
        on_search.run(suggestion);
        focused.set(false);
        highlighted.set(None);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let open = dropdown_open.get_untracked();
        let options = visible.get_untracked();
        match ev.key().as_str() {
            "ArrowDown" if open => {
                ev.prevent_default();
                highlighted.update(|h| {
                    *h = Some(match *h {
                        Some(index) if index + 1 < options.len() => index + 1,
                        _ => 0,
                    });
                });
            }
            "ArrowUp" if open => {
                ev.prevent_default();
                highlighted.update(|h| {
                    *h = Some(match *h {
                        Some(index) if index > 0 => index - 1,
                        _ => options.len().saturating_sub(1),
                    });
                });
            }
            "Enter" => {
                ev.prevent_default();
                let picked = highlighted
                    .get_untracked()
                    .and_then(|index| options.get(index).cloned());
                match picked {
                    Some(suggestion) if open => select(suggestion),
                    _ => {
                        let query = value.get_untracked();
                        if !query.is_empty() {
                            on_search.run(query);
                        }
                        focused.set(false);
                    }
                }
            }
            "Escape" => {
                ev.prevent_default();
                focused.set(false);
            }
            _ => {}
        }
    };

    let on_blur = move |_| {
        let generation = focus_generation.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(BLUR_DELAY_MS).await;
            if focus_generation.get_value() == generation {
                focused.set(false);
            }
        });
    };

    view! {
        <div class="relative w-full">
            <div class="relative">
                <input
                    type="text"
                    class="w-full pl-4 pr-24 h-12 text-base bg-white border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        value.set(text.clone());
                        highlighted.set(None);
                        on_input.run(text);
                    }
                    on:keydown=on_keydown
                    on:focus=move |_| {
                        focus_generation.update_value(|g| *g += 1);
                        focused.set(true);
                    }
                    on:blur=on_blur
                />

                <div class="absolute right-2 top-1/2 -translate-y-1/2 flex items-center gap-1">
                    <Show when=move || loading.get()>
                        <div class="w-4 h-4 border-2 border-gray-300 border-t-blue-600 rounded-full animate-spin"></div>
                    </Show>
                    <Show when=move || !value.get().is_empty() && !loading.get()>
                        <button
                            type="button"
                            class="h-8 w-8 rounded-lg text-gray-400 hover:text-red-500"
                            aria-label="Limpar busca"
                            on:click=move |_| {
                                value.set(String::new());
                                on_clear.run(());
                            }
                        >
                            "✕"
                        </button>
                    </Show>
                    <button
                        type="button"
                        class="h-8 px-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                        aria-label="Buscar"
                        disabled=move || value.get().is_empty() || loading.get()
                        on:click=move |_| {
                            let query = value.get_untracked();
                            if !query.is_empty() {
                                on_search.run(query);
                            }
                            focused.set(false);
                        }
                    >
                        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/>
                        </svg>
                    </button>
                </div>
            </div>

            <Show when=move || dropdown_open.get()>
                <div class="absolute top-full left-0 right-0 my-2 bg-white border border-gray-200 rounded-xl shadow-lg max-h-60 overflow-y-auto z-50">
                    <div class="p-1 space-y-1">
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, suggestion)| {
                                    let suggestion_for_click = suggestion.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                format!(
                                                    "w-full text-left px-3 py-2 rounded-lg text-sm {}",
                                                    if highlighted.get() == Some(index) {
                                                        "bg-blue-50 text-blue-700"
                                                    } else {
                                                        "hover:bg-gray-100"
                                                    }
                                                )
                                            }
                                            on:mouseenter=move |_| highlighted.set(Some(index))
                                            on:click=move |_| select(suggestion_for_click.clone())
                                        >
                                            {suggestion}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
