//! Home page
//!
//! Hero search with debounced auto-complete, advanced search through the
//! form engine, paginated results, statistics and popular occupations.
//! Search executions carry a sequence number so a slow response that was
//! superseded by a newer one is dropped instead of overwriting it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::{ApiClient, Page};
use crate::components::form::{
    submit_handler, FieldConfig, FieldType, FormBuilder, FormValues, SelectOption,
};
use crate::components::occupation_card::{CardVariant, OccupationCard, OccupationCardSkeleton};
use crate::components::pagination::Paginator;
use crate::components::search_input::SearchInput;
use crate::components::stats::StatsGrid;
use crate::types::{Occupation, SearchParams};

const SEARCH_DEBOUNCE_MS: u32 = 400;
const SUGGESTION_LIMIT: u32 = 5;
const PAGE_SIZE: u32 = 20;

/// Translate submitted advanced-search values into query parameters.
/// Empty strings and the "todos" sentinel are dropped.
fn advanced_params(values: &FormValues) -> SearchParams {
    fn text(values: &FormValues, key: &str) -> Option<String> {
        values
            .get(key)
            .and_then(|value| value.as_text())
            .map(str::trim)
            .filter(|text| !text.is_empty() && *text != "todos")
            .map(String::from)
    }

    SearchParams {
        label: text(values, "label"),
        id: text(values, "id"),
        level: text(values, "level").and_then(|level| level.parse().ok()),
        big_group: text(values, "big_group"),
        per_page: Some(PAGE_SIZE),
        ..Default::default()
    }
}

fn advanced_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("label", FieldType::Text, "Termo de busca")
            .placeholder("Pesquise pelo nome da ocupação..."),
        FieldConfig::new("id", FieldType::Text, "Código específico").placeholder("Ex: 252105"),
        FieldConfig::new("level", FieldType::Select, "Nível hierárquico").options(vec![
            SelectOption::new("todos", "Todos os níveis"),
            SelectOption::new("1", "Nível 1 - Grande Grupo"),
            SelectOption::new("2", "Nível 2 - Subgrupo Principal"),
            SelectOption::new("3", "Nível 3 - Subgrupo"),
            SelectOption::new("4", "Nível 4 - Família"),
            SelectOption::new("5", "Nível 5 - Ocupação"),
        ]),
        FieldConfig::new("big_group", FieldType::Text, "Grande Grupo")
            .placeholder("Ex: Profissionais das ciências e intelectuais"),
    ]
}

#[component]
pub fn Home() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let search_input = RwSignal::new(String::new());
    let debounced_query = RwSignal::new(String::new());
    let debounce_generation = StoredValue::new(0u64);

    let search_params = RwSignal::new(Option::<SearchParams>::None);
    let show_advanced = RwSignal::new(false);
    let searching = RwSignal::new(false);
    let results = RwSignal::new(Option::<Page<Occupation>>::None);
    let search_sequence = StoredValue::new(0u64);

    // Coalesce keystrokes: only the last one inside the quiet window
    // triggers a suggestion lookup.
    let on_query_input = Callback::new(move |text: String| {
        let generation = debounce_generation.with_value(|g| g + 1);
        debounce_generation.set_value(generation);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce_generation.get_value() == generation {
                debounced_query.set(text);
            }
        });
    });

    let client_for_suggestions = client.clone();
    let suggestions = LocalResource::new(move || {
        let client = client_for_suggestions.clone();
        let query = debounced_query.get();
        async move {
            let query = query.trim().to_string();
            if query.chars().count() < 2 {
                return Vec::new();
            }
            match client.auto_complete(&query, SUGGESTION_LIMIT).await {
                Ok(page) => page.items.into_iter().map(|o| o.label).collect(),
                Err(error) => {
                    log::debug!("autocomplete failed: {}", error);
                    Vec::new()
                }
            }
        }
    });
    let suggestion_labels = Signal::derive(move || suggestions.get().unwrap_or_default());
    let loading_suggestions = Signal::derive(move || {
        suggestions.get().is_none() && debounced_query.get().trim().chars().count() >= 2
    });

    let client_for_search = client.clone();
    let execute_search = Callback::new(move |params: SearchParams| {
        let client = client_for_search.clone();
        search_params.set(Some(params.clone()));
        searching.set(true);
        let ticket = search_sequence.with_value(|s| s + 1);
        search_sequence.set_value(ticket);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = client.search_occupations(&params).await;
            if search_sequence.get_value() != ticket {
                // A newer search took over; drop this result.
                return;
            }
            match outcome {
                Ok(page) => results.set(Some(page)),
                Err(error) => {
                    log::error!("search failed: {}", error);
                    results.set(None);
                }
            }
            searching.set(false);
        });
    });

    let on_search = Callback::new(move |query: String| {
        execute_search.run(SearchParams::labelled(query));
    });
    let search_all = Callback::new(move |_: ()| {
        execute_search.run(SearchParams {
            per_page: Some(PAGE_SIZE),
            ..Default::default()
        });
    });
    let on_clear = Callback::new(move |_: ()| {
        debounced_query.set(String::new());
        search_params.set(None);
        results.set(None);
    });
    let on_page = Callback::new(move |page: u32| {
        if let Some(mut params) = search_params.get_untracked() {
            params.page = Some(page);
            execute_search.run(params);
        }
    });
    let clear_results = Callback::new(move |_: ()| {
        search_params.set(None);
        results.set(None);
    });

    let advanced_submit = submit_handler(move |values: FormValues| {
        execute_search.run(advanced_params(&values));
        async move { Ok::<(), String>(()) }
    });

    let open_occupation = Callback::new(move |id: u32| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&format!("/occupations/{}", id));
        }
    });

    let client_for_stats = client.clone();
    let stats = LocalResource::new(move || {
        let client = client_for_stats.clone();
        async move { client.stats().await.ok().flatten() }
    });

    let client_for_popular = client.clone();
    let popular = LocalResource::new(move || {
        let client = client_for_popular.clone();
        async move { client.frequent_occupations(10).await.ok() }
    });

    let busy_signal = Signal::<bool>::from(searching);

    view! {
        <div class="min-h-screen bg-gray-50">
            <section class="relative bg-gradient-to-b from-blue-700 via-blue-600 to-gray-50">
                <div class="container mx-auto px-4 py-20 lg:py-28">
                    <div class="max-w-4xl mx-auto text-center space-y-8">
                        <div class="space-y-4">
                            <h1 class="text-4xl md:text-6xl font-bold text-white">
                                "CBO Explorer"
                            </h1>
                            <p class="text-xl md:text-2xl text-blue-100 max-w-2xl mx-auto leading-relaxed">
                                "Sistema moderno para consulta e exploração da "
                                <span class="font-semibold text-white">
                                    "Classificação Brasileira de Ocupações"
                                </span>
                            </p>
                        </div>

                        <div class="max-w-2xl mx-auto">
                            <SearchInput
                                value=search_input
                                on_input=on_query_input
                                on_search=on_search
                                on_clear=on_clear
                                suggestions=suggestion_labels
                                loading=loading_suggestions
                                placeholder="Busque por profissão, código ou área de atuação...".to_string()
                            />
                        </div>

                        <div class="flex flex-wrap justify-center gap-3">
                            <button
                                class="px-4 py-2 bg-white/10 text-white border border-white/30 rounded-lg hover:bg-white/20 text-sm"
                                on:click=move |_| show_advanced.update(|open| *open = !*open)
                            >
                                "Busca Avançada"
                            </button>
                            <a
                                href="#occupationStats"
                                class="px-4 py-2 bg-white/10 text-white border border-white/30 rounded-lg hover:bg-white/20 text-sm"
                            >
                                "Estatísticas"
                            </a>
                            <A
                                href="/docs"
                                attr:class="px-4 py-2 bg-white/10 text-white border border-white/30 rounded-lg hover:bg-white/20 text-sm"
                            >
                                "API Docs"
                            </A>
                        </div>
                    </div>
                </div>
            </section>

            <div class="container mx-auto px-4 py-12 space-y-12">
                <Show when=move || show_advanced.get()>
                    <section class="bg-white rounded-lg shadow p-6 space-y-6">
                        <div class="flex items-center justify-between">
                            <h2 class="text-2xl font-bold text-gray-900">"Busca Avançada"</h2>
                            <button
                                class="px-3 py-1 text-sm text-gray-500 hover:bg-gray-100 rounded-lg"
                                on:click=move |_| show_advanced.set(false)
                            >
                                "Fechar"
                            </button>
                        </div>
                        <FormBuilder
                            fields=advanced_fields()
                            on_submit=advanced_submit.clone()
                            on_reset=clear_results
                            submit_text="Buscar".to_string()
                            busy=busy_signal
                        />
                    </section>
                </Show>

                <Show when=move || searching.get()>
                    <section>
                        <div class="space-y-6">
                            <div class="flex items-center justify-between">
                                <h2 class="text-2xl font-bold text-gray-900">"Resultados da Busca"</h2>
                            </div>
                            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                {(0..6)
                                    .map(|_| {
                                        view! { <OccupationCardSkeleton variant=CardVariant::Detailed /> }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </section>
                </Show>

                <Show when=move || results.get().is_some() && !searching.get()>
                    <section id="searchResults">
                        {move || {
                            results
                                .get()
                                .map(|page| {
                                    let total = page
                                        .pagination
                                        .as_ref()
                                        .map(|p| p.total_items)
                                        .unwrap_or(page.items.len() as u64);
                                    view! {
                                        <div class="space-y-6">
                                            <div class="flex items-center justify-between">
                                                <h2 class="text-2xl font-bold text-gray-900">
                                                    "Resultados da Busca"
                                                </h2>
                                                <span class="text-sm border border-gray-300 rounded-full px-3 py-1">
                                                    {format!("{} ocupações encontradas", total)}
                                                </span>
                                            </div>
                                            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                                {page
                                                    .items
                                                    .iter()
                                                    .cloned()
                                                    .map(|occupation| {
                                                        view! {
                                                            <OccupationCard
                                                                occupation=occupation
                                                                on_click=open_occupation
                                                                variant=CardVariant::Detailed
                                                            />
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            {page
                                                .pagination
                                                .filter(|p| p.total_pages > 1)
                                                .map(|p| {
                                                    view! {
                                                        <Paginator
                                                            page=p.page
                                                            total_pages=p.total_pages
                                                            on_page=on_page
                                                        />
                                                    }
                                                })}
                                        </div>
                                    }
                                })
                        }}
                    </section>
                </Show>

                <section id="occupationStats">
                    <Suspense fallback=|| ()>
                        {move || {
                            stats
                                .get()
                                .flatten()
                                .map(|stats| {
                                    view! {
                                        <div class="space-y-6">
                                            <div class="text-center space-y-2">
                                                <h2 class="text-2xl font-bold text-gray-900">
                                                    "Estatísticas da CBO"
                                                </h2>
                                                <p class="text-gray-500">
                                                    "Visão geral da estrutura da Classificação Brasileira de Ocupações"
                                                </p>
                                            </div>
                                            <StatsGrid stats=stats />
                                        </div>
                                    }
                                })
                        }}
                    </Suspense>
                </section>

                <section>
                    <Suspense fallback=move || {
                        view! {
                            <div class="space-y-6">
                                <h2 class="text-2xl font-bold text-gray-900">
                                    "Ocupações Mais Consultadas"
                                </h2>
                                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                    {(0..6)
                                        .map(|_| view! { <OccupationCardSkeleton /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    }>
                        {move || {
                            popular
                                .get()
                                .flatten()
                                .filter(|page| !page.items.is_empty())
                                .map(|page| {
                                    view! {
                                        <div class="space-y-6">
                                            <div class="flex items-center justify-between">
                                                <h2 class="text-2xl font-bold text-gray-900">
                                                    "Ocupações Mais Consultadas"
                                                </h2>
                                                <button
                                                    class="px-3 py-1 text-sm border border-gray-300 rounded-lg hover:bg-gray-100"
                                                    on:click=move |_| search_all.run(())
                                                >
                                                    "Ver todas"
                                                </button>
                                            </div>
                                            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                                {page
                                                    .items
                                                    .iter()
                                                    .cloned()
                                                    .map(|occupation| {
                                                        view! {
                                                            <OccupationCard
                                                                occupation=occupation
                                                                on_click=open_occupation
                                                            />
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                    </Suspense>
                </section>

                <section class="text-center space-y-12">
                    <div class="space-y-4">
                        <h2 class="text-3xl font-bold text-gray-900">
                            "Explore a CBO de forma moderna"
                        </h2>
                        <p class="text-xl text-gray-500 max-w-2xl mx-auto">
                            "Busca inteligente, navegação hierárquica e documentação interativa da API"
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-6">
                        <FeatureCard
                            title="Busca Inteligente"
                            text="Encontre ocupações por nome, código ou área de atuação com sugestões automáticas"
                        />
                        <FeatureCard
                            title="Navegação Hierárquica"
                            text="Explore a estrutura da CBO de forma intuitiva, do geral para o específico"
                        />
                        <FeatureCard
                            title="Documentação Interativa"
                            text="Teste os endpoints da API diretamente do navegador"
                        />
                    </div>
                </section>
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6 text-center space-y-2">
            <h3 class="text-xl font-semibold text-gray-900">{title}</h3>
            <p class="text-gray-500">{text}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::form::FieldValue;

    #[test]
    fn test_advanced_params_drop_empty_and_sentinel_values() {
        let values: FormValues = [
            ("label".to_string(), FieldValue::Text("médico".to_string())),
            ("id".to_string(), FieldValue::Text(String::new())),
            ("level".to_string(), FieldValue::Text("todos".to_string())),
            ("big_group".to_string(), FieldValue::Text("  ".to_string())),
        ]
        .into();

        let params = advanced_params(&values);
        assert_eq!(params.label.as_deref(), Some("médico"));
        assert!(params.id.is_none());
        assert!(params.level.is_none());
        assert!(params.big_group.is_none());
        assert_eq!(params.per_page, Some(PAGE_SIZE));
    }

    #[test]
    fn test_advanced_params_parse_level() {
        let values: FormValues =
            [("level".to_string(), FieldValue::Text("3".to_string()))].into();
        assert_eq!(advanced_params(&values).level, Some(3));
    }
}
