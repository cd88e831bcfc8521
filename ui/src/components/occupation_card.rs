//! Occupation result cards and their loading skeletons

use leptos::prelude::*;

use crate::types::Occupation;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Detailed,
}

#[component]
pub fn OccupationCard(
    occupation: Occupation,
    #[prop(into)] on_click: Callback<u32>,
    #[prop(default = CardVariant::Default)] variant: CardVariant,
) -> impl IntoView {
    let id = occupation.id;

    match variant {
        CardVariant::Detailed => view! {
            <div
                class="bg-white rounded-xl shadow p-6 hover:shadow-lg transition-shadow cursor-pointer space-y-4"
                on:click=move |_| on_click.run(id)
            >
                <div class="flex items-start justify-between">
                    <div class="min-w-0 flex-1">
                        <h3 class="font-semibold text-lg text-gray-900 leading-tight">
                            {occupation.label.clone()}
                        </h3>
                        <div class="flex items-center gap-2 mt-1">
                            <span class="text-xs border border-gray-300 rounded px-2 py-0.5">
                                {occupation.id}
                            </span>
                            <span class="text-xs bg-gray-100 rounded px-2 py-0.5">
                                {format!("Nível {}", occupation.level)}
                            </span>
                        </div>
                    </div>
                    <span class="text-gray-400">"→"</span>
                </div>

                {occupation
                    .description
                    .clone()
                    .map(|text| {
                        view! { <p class="text-sm text-gray-500 line-clamp-3">{text}</p> }
                    })}

                <div class="space-y-1 text-xs">
                    {occupation
                        .hierarchy
                        .big_group
                        .clone()
                        .map(|group| {
                            view! {
                                <div>
                                    <span class="text-gray-400">"Grande Grupo: "</span>
                                    <span class="text-gray-700 font-medium">{group}</span>
                                </div>
                            }
                        })}
                    {occupation
                        .hierarchy
                        .sub_group
                        .clone()
                        .map(|group| {
                            view! {
                                <div>
                                    <span class="text-gray-400">"Subgrupo: "</span>
                                    <span class="text-gray-700 font-medium">{group}</span>
                                </div>
                            }
                        })}
                </div>

                <div class="flex flex-wrap gap-2">
                    <CountBadge count=occupation.activities.len() singular="Atividade" plural="Atividades" />
                    <CountBadge count=occupation.competencies.len() singular="Competência" plural="Competências" />
                    <CountBadge count=occupation.academy.len() singular="Formação" plural="Formações" />
                    <CountBadge count=occupation.synonymous.len() singular="Sinônimo" plural="Sinônimos" />
                </div>
            </div>
        }
        .into_any(),
        CardVariant::Default => view! {
            <div
                class="bg-white rounded-xl shadow p-4 hover:shadow-lg transition-shadow cursor-pointer space-y-3"
                on:click=move |_| on_click.run(id)
            >
                <div class="flex items-center justify-between">
                    <div class="min-w-0 flex-1">
                        <h3 class="font-semibold text-gray-900 leading-tight">
                            {occupation.label.clone()}
                        </h3>
                        <div class="flex items-center gap-2 mt-1">
                            <span class="text-sm text-gray-500">{occupation.id}</span>
                            <span class="text-xs bg-gray-100 rounded px-2 py-0.5">
                                {format!("Nível {}", occupation.level)}
                            </span>
                        </div>
                    </div>
                    <span class="text-gray-400">"→"</span>
                </div>

                {occupation
                    .description
                    .clone()
                    .map(|text| {
                        view! { <p class="text-sm text-gray-500 line-clamp-2">{text}</p> }
                    })}

                {occupation
                    .hierarchy
                    .big_group
                    .clone()
                    .map(|group| {
                        view! {
                            <div class="text-xs text-gray-500">
                                <span class="font-medium">"Grande Grupo: "</span>
                                {group}
                            </div>
                        }
                    })}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn CountBadge(count: usize, singular: &'static str, plural: &'static str) -> impl IntoView {
    (count > 0).then(move || {
        let label = if count > 1 { plural } else { singular };
        view! {
            <span class="text-xs border border-gray-200 rounded px-2 py-0.5 text-gray-600">
                {format!("{} {}", count, label)}
            </span>
        }
    })
}

#[component]
pub fn OccupationCardSkeleton(
    #[prop(default = CardVariant::Default)] variant: CardVariant,
) -> impl IntoView {
    let rows = match variant {
        CardVariant::Detailed => 4,
        CardVariant::Default => 3,
    };

    view! {
        <div class="bg-white rounded-xl shadow p-4 space-y-3">
            <div class="animate-pulse rounded-md bg-gray-200 h-5 w-3/4"></div>
            {(0..rows)
                .map(|_| {
                    view! { <div class="animate-pulse rounded-md bg-gray-100 h-3 w-full"></div> }
                })
                .collect_view()}
            <div class="animate-pulse rounded-md bg-gray-100 h-3 w-2/5"></div>
        </div>
    }
}
