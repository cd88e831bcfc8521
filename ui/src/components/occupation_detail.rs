//! Occupation detail page
//!
//! Loads one occupation by the route id. A missing occupation (error or a
//! success envelope with null data) renders a dedicated not-found panel
//! with a way back; it is not treated as a hard failure.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api::ApiClient;
use crate::types::Occupation;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Overview,
    Activities,
    Competencies,
    Education,
    Synonyms,
}

#[component]
pub fn OccupationDetail() -> impl IntoView {
    let params = use_params_map();
    let client = expect_context::<ApiClient>();

    let occupation = LocalResource::new(move || {
        let client = client.clone();
        let id = params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u32>().ok());
        async move {
            match id {
                Some(id) => client.occupation_by_id(id).await,
                None => Ok(None),
            }
        }
    });

    view! {
        <Suspense fallback=move || {
            view! {
                <div class="min-h-screen flex items-center justify-center">
                    <div class="bg-white rounded-lg shadow p-8 text-center space-y-4">
                        <div class="animate-pulse space-y-2">
                            <div class="h-8 bg-gray-200 rounded w-48 mx-auto"></div>
                            <div class="h-4 bg-gray-100 rounded w-32 mx-auto"></div>
                        </div>
                        <p class="text-gray-500">"Carregando ocupação..."</p>
                    </div>
                </div>
            }
        }>
            {move || {
                occupation.get().map(|result| match result {
                    Ok(Some(occupation)) => view! { <DetailView occupation=occupation /> }.into_any(),
                    _ => view! { <NotFound /> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let params = use_params_map();
    let id = params.read().get("id").unwrap_or_default();

    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="bg-white rounded-lg shadow p-8 text-center space-y-4 max-w-md">
                <div class="w-16 h-16 mx-auto rounded-full bg-red-50 flex items-center justify-center">
                    <svg class="w-8 h-8 text-red-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"/>
                    </svg>
                </div>
                <div class="space-y-2">
                    <h2 class="text-xl font-semibold text-gray-900">"Ocupação não encontrada"</h2>
                    <p class="text-gray-500">
                        {format!("A ocupação com código \"{}\" não foi encontrada.", id)}
                    </p>
                </div>
                <A href="/" attr:class="inline-block px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                    "Voltar ao início"
                </A>
            </div>
        </div>
    }
}

#[component]
fn DetailView(occupation: Occupation) -> impl IntoView {
    let active_tab = RwSignal::new(DetailTab::Overview);

    let hierarchy = occupation.hierarchy.clone();
    let breadcrumb: Vec<String> = [
        hierarchy.big_group.clone(),
        hierarchy.main_sub_group.clone(),
        hierarchy.sub_group.clone(),
        hierarchy.family.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();
    let breadcrumb_len = breadcrumb.len();

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="bg-white border-b border-gray-200 sticky top-0 z-10">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                    <A href="/" attr:class="px-3 py-2 rounded-lg text-gray-600 hover:bg-gray-100">
                        "← Voltar"
                    </A>
                </div>
            </div>

            <div class="container mx-auto px-4 py-8 space-y-8">
                <div class="bg-white rounded-lg shadow p-8 space-y-6">
                    <div class="space-y-3">
                        <h1 class="text-3xl font-bold text-gray-900 leading-tight">
                            {occupation.label.clone()}
                        </h1>
                        <div class="flex flex-wrap items-center gap-3">
                            <span class="text-sm border border-gray-300 rounded px-2 py-1">
                                {format!("Código: {}", occupation.id)}
                            </span>
                            <span class="text-sm bg-gray-100 rounded px-2 py-1">
                                {format!("Nível {}", occupation.level)}
                            </span>
                        </div>
                        {occupation
                            .description
                            .clone()
                            .map(|text| {
                                view! {
                                    <p class="text-lg text-gray-500 leading-relaxed">{text}</p>
                                }
                            })}
                    </div>

                    {(!breadcrumb.is_empty())
                        .then(|| {
                            view! {
                                <div class="space-y-2">
                                    <h3 class="text-sm font-medium text-gray-400 uppercase tracking-wide">
                                        "Hierarquia"
                                    </h3>
                                    <div class="flex flex-wrap items-center gap-2 text-sm">
                                        {breadcrumb
                                            .iter()
                                            .cloned()
                                            .enumerate()
                                            .map(|(index, step)| {
                                                let last = index + 1 == breadcrumb_len;
                                                view! {
                                                    <span class=if last {
                                                        "text-blue-600 font-medium"
                                                    } else {
                                                        "text-gray-700 font-medium"
                                                    }>{step}</span>
                                                    {(!last)
                                                        .then(|| view! { <span class="text-gray-400">"→"</span> })}
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })}
                </div>

                <div class="space-y-6">
                    <div class="flex flex-wrap gap-1 bg-white rounded-lg shadow p-1">
                        <DetailTabButton label="Visão Geral" tab=DetailTab::Overview active_tab=active_tab />
                        <DetailTabButton label="Atividades" tab=DetailTab::Activities active_tab=active_tab />
                        <DetailTabButton label="Competências" tab=DetailTab::Competencies active_tab=active_tab />
                        <DetailTabButton label="Formação" tab=DetailTab::Education active_tab=active_tab />
                        <DetailTabButton label="Sinônimos" tab=DetailTab::Synonyms active_tab=active_tab />
                    </div>

                    <Show when=move || active_tab.get() == DetailTab::Overview>
                        <div class="grid md:grid-cols-2 gap-6">
                            <ListPanel
                                title="Condições de Trabalho"
                                items=occupation.work_conditions.clone()
                                empty="Informações sobre condições de trabalho não disponíveis."
                            />
                            <ListPanel
                                title="Recursos de Trabalho"
                                items=occupation.work_resources.clone()
                                empty="Informações sobre recursos de trabalho não disponíveis."
                            />
                        </div>
                    </Show>
                    <Show when=move || active_tab.get() == DetailTab::Activities>
                        <ListPanel
                            title="Principais Atividades"
                            items=occupation.activities.clone()
                            empty="Não há atividades específicas cadastradas para esta ocupação."
                        />
                    </Show>
                    <Show when=move || active_tab.get() == DetailTab::Competencies>
                        <ListPanel
                            title="Competências Requeridas"
                            items=occupation.competencies.clone()
                            empty="Não há competências específicas cadastradas para esta ocupação."
                        />
                    </Show>
                    <Show when=move || active_tab.get() == DetailTab::Education>
                        <ListPanel
                            title="Formação e Especialização"
                            items=occupation.academy.clone()
                            empty="Não há requisitos de formação específicos cadastrados para esta ocupação."
                        />
                    </Show>
                    <Show when=move || active_tab.get() == DetailTab::Synonyms>
                        <ListPanel
                            title="Sinônimos"
                            items=occupation.synonymous.clone()
                            empty="Não há sinônimos cadastrados para esta ocupação."
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetailTabButton(
    label: &'static str,
    tab: DetailTab,
    active_tab: RwSignal<DetailTab>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "px-4 py-2 rounded-lg text-sm font-medium {}",
                    if active_tab.get() == tab {
                        "bg-blue-600 text-white"
                    } else {
                        "text-gray-600 hover:bg-gray-100"
                    }
                )
            }
            on:click=move |_| active_tab.set(tab)
        >
            {label}
        </button>
    }
}

#[component]
fn ListPanel(title: &'static str, items: Vec<String>, empty: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6 space-y-4">
            <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
            {if items.is_empty() {
                view! { <p class="text-sm text-gray-500">{empty}</p> }.into_any()
            } else {
                view! {
                    <div class="space-y-3">
                        {items
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <div class="flex items-start gap-3 p-3 rounded-lg bg-gray-50">
                                        <span class="flex-shrink-0 w-6 h-6 rounded-full bg-blue-50 text-blue-600 text-xs font-medium flex items-center justify-center">
                                            {index + 1}
                                        </span>
                                        <p class="text-sm text-gray-700">{item}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
