//! API documentation page
//!
//! Fetches the OpenAPI document once per load and renders browsable
//! endpoint, schema and parameter sections with text filtering and a
//! try-out launcher. Filtering never touches the expansion maps, so nodes
//! that reappear after a filter change keep their expanded state.

use leptos::prelude::*;
use leptos_router::components::A;
use serde_json::Value;

use super::document::{path_matches, schema_matches, ApiDocument, Operation};
use super::json_tree::{is_expanded, new_expansion_map, toggle, ExpansionMap};
use super::resolver::{ResolveError, ResolvedParameter, Resolver};
use super::try_out::{method_badge_class, SelectedOperation, TryOutPanel};
use crate::api::ApiClient;

const CATEGORIES: [&str; 8] = [
    "Grande Grupo",
    "Família",
    "Sub Grupo",
    "Sub Grupo Principal",
    "Ocupação",
    "Sinônimo",
    "Estatísticas",
    "Perfil Ocupacional",
];

#[derive(Clone)]
struct MethodEntry {
    method: String,
    operation: Operation,
    parameters: Vec<Result<ResolvedParameter, ResolveError>>,
}

#[derive(Clone)]
struct EndpointEntry {
    path: String,
    methods: Vec<MethodEntry>,
}

#[component]
pub fn ApiDocs() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let api_base = client.base_url().to_string();

    let document = LocalResource::new(move || {
        let client = client.clone();
        async move { client.api_docs().await }
    });

    view! {
        <Suspense fallback=move || {
            view! {
                <div class="min-h-screen flex items-center justify-center">
                    <div class="bg-white rounded-lg shadow p-8 flex flex-col items-center">
                        <div class="w-12 h-12 border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin mb-4"></div>
                        <p class="text-gray-600">"Carregando documentação..."</p>
                    </div>
                </div>
            }
        }>
            {
                let api_base = api_base.clone();
                move || {
                    let api_base = api_base.clone();
                    document.get().map(|result| match result {
                        Ok(doc) => view! { <DocsView doc=doc api_base=api_base /> }.into_any(),
                        Err(error) => view! {
                            <div class="min-h-screen flex items-center justify-center">
                                <div class="bg-white rounded-lg shadow p-8 text-center max-w-md">
                                    <div class="w-16 h-16 bg-red-50 rounded-full flex items-center justify-center mx-auto mb-4">
                                        <svg class="w-8 h-8 text-red-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"/>
                                        </svg>
                                    </div>
                                    <h2 class="text-2xl font-bold text-red-600 mb-2">"Erro ao carregar"</h2>
                                    <p class="text-gray-600">{error.message}</p>
                                </div>
                            </div>
                        }
                            .into_any(),
                    })
                }
            }
        </Suspense>
    }
}

#[component]
fn DocsView(doc: ApiDocument, api_base: String) -> impl IntoView {
    let info = doc.info.clone();
    let base_path = doc.base_path().to_string();
    let try_out_base = format!("{}{}", api_base, base_path);
    let raw_docs_url = format!("{}{}/docs.json", api_base, base_path);

    // Resolve every operation's parameters up front; the document never
    // changes after load.
    let mut resolver = Resolver::new(&doc.components);
    let endpoints: Vec<EndpointEntry> = doc
        .paths
        .iter()
        .map(|(path, methods)| EndpointEntry {
            path: path.clone(),
            methods: methods
                .iter()
                .map(|(method, operation)| MethodEntry {
                    method: method.clone(),
                    operation: operation.clone(),
                    parameters: resolver.resolve_parameters(&operation.parameters),
                })
                .collect(),
        })
        .collect();

    let schemas: Vec<(String, Value)> = doc
        .components
        .schemas
        .iter()
        .map(|(name, schema)| (name.clone(), schema.clone()))
        .collect();

    let component_parameters: Vec<Result<ResolvedParameter, ResolveError>> = doc
        .components
        .parameters
        .values()
        .map(|raw| resolver.resolve_parameter(raw))
        .collect();

    let endpoints = StoredValue::new(endpoints);
    let schemas = StoredValue::new(schemas);

    let search = RwSignal::new(String::new());
    let expanded_paths = new_expansion_map();
    let expanded_schemas = new_expansion_map();
    let selected = RwSignal::new(Option::<SelectedOperation>::None);

    let filtered_endpoints = move || {
        let term = search.get();
        endpoints.with_value(|entries| {
            entries
                .iter()
                .filter(|entry| {
                    path_matches(
                        &entry.path,
                        entry.methods.iter().map(|m| &m.operation),
                        &term,
                    )
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let filtered_schemas = move || {
        let term = search.get();
        schemas.with_value(|entries| {
            entries
                .iter()
                .filter(|(name, _)| schema_matches(name, &term))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let title = info.title.clone();
    let footer_title = info.title.clone();
    let footer_description = info.description.clone();
    let version = info.version.clone();
    let footer_version = info.version.clone();

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            <header class="bg-white border-b border-gray-200 sticky top-0 z-40">
                <div class="container mx-auto px-6 py-4 flex items-center justify-between">
                    <A href="/" attr:class="flex items-center gap-4">
                        <div class="w-12 h-12 bg-blue-600 rounded-xl flex items-center justify-center">
                            <svg class="w-6 h-6 text-white" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10"/>
                            </svg>
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold">{title}</h1>
                            <p class="text-gray-500 text-sm">{version.clone()}</p>
                        </div>
                    </A>
                    <div class="flex items-center gap-4">
                        <div class="relative">
                            <input
                                type="text"
                                placeholder="Pesquisar endpoints, schemas..."
                                class="pl-4 pr-10 py-2 border border-gray-300 rounded-lg w-80 focus:outline-none focus:ring-2 focus:ring-blue-500"
                                prop:value=move || search.get()
                                on:input=move |ev| search.set(event_target_value(&ev))
                            />
                            <Show when=move || !search.get().is_empty()>
                                <button
                                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600"
                                    on:click=move |_| search.set(String::new())
                                >
                                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                    </svg>
                                </button>
                            </Show>
                        </div>
                        <div class="bg-gray-100 px-4 py-2 rounded-lg text-sm text-gray-600">
                            {format!("Base URL: {}", base_path)}
                        </div>
                    </div>
                </div>
            </header>

            <div class="container mx-auto px-6 py-8">
                <div class="bg-white rounded-lg shadow p-8 mb-12">
                    <h1 class="text-4xl font-bold mb-4 text-blue-700">{info.title.clone()}</h1>
                    <p class="text-xl text-gray-600 mb-6 max-w-3xl">{info.description.clone()}</p>
                    <div class="flex items-center gap-4 text-sm text-gray-600">
                        <span class="bg-gray-100 px-4 py-2 rounded-lg">"API RESTful"</span>
                        <span class="bg-gray-100 px-4 py-2 rounded-lg">"OpenAPI 3.0.0"</span>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
                    <div class="lg:col-span-1">
                        <div class="bg-white rounded-lg shadow p-6 sticky top-24">
                            <h2 class="text-lg font-semibold mb-4">"Navegação"</h2>
                            <nav class="space-y-2">
                                <a href="#endpoints" class="block py-2 px-3 rounded-lg hover:bg-gray-100">"Endpoints"</a>
                                <a href="#schemas" class="block py-2 px-3 rounded-lg hover:bg-gray-100">"Schemas"</a>
                                <a href="#parameters" class="block py-2 px-3 rounded-lg hover:bg-gray-100">"Parameters"</a>
                            </nav>

                            <h3 class="text-md font-semibold mt-6 mb-3">"Categorias"</h3>
                            <div class="space-y-1">
                                {CATEGORIES
                                    .into_iter()
                                    .map(|category| {
                                        view! {
                                            <button
                                                class="w-full text-left py-1 px-3 rounded-lg text-sm hover:bg-gray-100"
                                                on:click=move |_| search.set(category.to_string())
                                            >
                                                {category}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="lg:col-span-3 space-y-8">
                        <section id="endpoints" class="bg-white rounded-lg shadow p-6">
                            <h2 class="text-2xl font-bold mb-6">"Endpoints da API"</h2>
                            <div class="space-y-4">
                                {move || {
                                    filtered_endpoints()
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <EndpointRow
                                                    entry=entry
                                                    expanded=expanded_paths
                                                    selected=selected
                                                />
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </section>

                        <section id="schemas" class="bg-white rounded-lg shadow p-6">
                            <h2 class="text-2xl font-bold mb-6">"Esquemas de Dados"</h2>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {move || {
                                    filtered_schemas()
                                        .into_iter()
                                        .map(|(name, schema)| {
                                            view! {
                                                <SchemaCard
                                                    name=name
                                                    schema=schema
                                                    expanded=expanded_schemas
                                                />
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </section>

                        <section id="parameters" class="bg-white rounded-lg shadow p-6">
                            <h2 class="text-2xl font-bold mb-6">"Parâmetros"</h2>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {component_parameters
                                    .into_iter()
                                    .map(|resolved| match resolved {
                                        Ok(parameter) => view! {
                                            <div class="bg-gray-50 rounded-lg p-4">
                                                <div class="flex justify-between items-start mb-3">
                                                    <h3 class="font-semibold font-mono">{parameter.name.clone()}</h3>
                                                    <span class="text-xs bg-blue-50 text-blue-700 px-2 py-1 rounded">
                                                        {parameter.location.clone()}
                                                    </span>
                                                </div>
                                                <p class="text-sm text-gray-600 mb-3">{parameter.description.clone()}</p>
                                                <div class="text-xs text-gray-500 flex items-center gap-2">
                                                    <span class="bg-gray-200 px-2 py-1 rounded">
                                                        {format!("Tipo: {}", parameter.schema_type)}
                                                    </span>
                                                    {parameter
                                                        .required
                                                        .then(|| {
                                                            view! {
                                                                <span class="bg-red-50 text-red-600 px-2 py-1 rounded">
                                                                    "Obrigatório"
                                                                </span>
                                                            }
                                                        })}
                                                </div>
                                            </div>
                                        }
                                            .into_any(),
                                        Err(error) => view! {
                                            <div class="bg-red-50 rounded-lg p-4 text-sm text-red-600">
                                                {format!("Parâmetro inválido: {}", error)}
                                            </div>
                                        }
                                            .into_any(),
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    </div>
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .map(|operation| {
                        let base = try_out_base.clone();
                        view! {
                            <TryOutPanel
                                operation=operation
                                base_url=base
                                on_close=Callback::new(move |_| selected.set(None))
                            />
                        }
                    })
            }}

            <footer class="bg-white border-t border-gray-200 mt-12">
                <div class="container mx-auto px-6 py-8 flex items-center justify-between">
                    <div>
                        <h3 class="text-lg font-semibold mb-2">{footer_title}</h3>
                        <p class="text-gray-500 text-sm">{footer_description}</p>
                    </div>
                    <div class="flex items-center gap-4">
                        <span class="text-sm text-gray-500">{format!("Versão {}", footer_version.clone())}</span>
                        <a
                            href=raw_docs_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-sm text-blue-600 hover:text-blue-800"
                        >
                            "JSON Raw"
                        </a>
                    </div>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn EndpointRow(
    entry: EndpointEntry,
    expanded: ExpansionMap,
    selected: RwSignal<Option<SelectedOperation>>,
) -> impl IntoView {
    let path = entry.path.clone();
    let path_for_toggle = entry.path.clone();
    let path_for_show = entry.path.clone();
    let methods = entry.methods.clone();
    let method_badges = entry
        .methods
        .iter()
        .map(|m| (m.method.to_uppercase(), method_badge_class(&m.method)))
        .collect::<Vec<_>>();

    view! {
        <div class="border border-gray-200 rounded-xl overflow-hidden">
            <button
                class="w-full flex items-center justify-between p-4 bg-gray-50 hover:bg-gray-100"
                on:click=move |_| toggle(expanded, &path_for_toggle)
            >
                <div class="flex items-center gap-3">
                    <span class="font-mono text-lg">{path.clone()}</span>
                </div>
                <div class="flex items-center gap-2">
                    {method_badges
                        .into_iter()
                        .map(|(label, class)| {
                            view! {
                                <span class=format!("px-2 py-1 rounded text-xs font-semibold {}", class)>
                                    {label}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </button>

            {move || {
                is_expanded(expanded, &path_for_show)
                    .then(|| {
                        let path = path_for_show.clone();
                        view! {
                            <div class="p-4 space-y-4">
                                {methods
                                    .iter()
                                    .cloned()
                                    .map(|method| {
                                        view! {
                                            <OperationCard
                                                path=path.clone()
                                                method=method
                                                selected=selected
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn OperationCard(
    path: String,
    method: MethodEntry,
    selected: RwSignal<Option<SelectedOperation>>,
) -> impl IntoView {
    let operation = method.operation.clone();
    let tag = operation
        .tags
        .first()
        .cloned()
        .unwrap_or_else(|| "Geral".to_string());

    let valid_parameters: Vec<ResolvedParameter> = method
        .parameters
        .iter()
        .filter_map(|p| p.as_ref().ok().cloned())
        .collect();
    let selection = SelectedOperation {
        path,
        method: method.method.clone(),
        summary: operation.summary.clone(),
        parameters: valid_parameters,
    };

    view! {
        <div class="border border-gray-200 rounded-lg p-4">
            <div class="flex items-start justify-between mb-4">
                <div>
                    <span class=format!(
                        "inline-block px-3 py-1 rounded-full text-sm font-semibold mr-3 {}",
                        method_badge_class(&method.method)
                    )>{method.method.to_uppercase()}</span>
                    <h3 class="inline-block text-lg font-semibold">{operation.summary.clone()}</h3>
                </div>
                <span class="bg-blue-50 text-blue-700 text-xs px-2 py-1 rounded">{tag}</span>
            </div>

            <p class="text-gray-600 mb-4">{operation.description.clone()}</p>

            <div class="mb-4">
                <button
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 text-sm font-medium"
                    on:click=move |_| selected.set(Some(selection.clone()))
                >
                    "Try it out"
                </button>
            </div>

            {(!method.parameters.is_empty())
                .then(|| {
                    view! {
                        <div class="mb-4">
                            <h4 class="font-semibold mb-2">"Parâmetros:"</h4>
                            <div class="space-y-2">
                                {method
                                    .parameters
                                    .iter()
                                    .cloned()
                                    .map(|resolved| match resolved {
                                        Ok(parameter) => view! {
                                            <div class="flex items-center text-sm">
                                                <span class="font-mono bg-gray-100 px-2 py-1 rounded mr-2">
                                                    {parameter.name.clone()}
                                                </span>
                                                <span class="text-gray-500">
                                                    {format!(
                                                        "{} • {}{}",
                                                        parameter.location,
                                                        parameter.schema_type,
                                                        if parameter.required { " • obrigatório" } else { "" }
                                                    )}
                                                </span>
                                            </div>
                                        }
                                            .into_any(),
                                        Err(error) => view! {
                                            <div class="text-sm text-red-600">
                                                {format!("Parâmetro inválido: {}", error)}
                                            </div>
                                        }
                                            .into_any(),
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}

            {(!operation.responses.is_empty())
                .then(|| {
                    view! {
                        <div>
                            <h4 class="font-semibold mb-2">"Respostas:"</h4>
                            <div class="space-y-2">
                                {operation
                                    .responses
                                    .iter()
                                    .map(|(code, response)| {
                                        let content_types = response
                                            .content
                                            .as_ref()
                                            .map(|content| {
                                                content.keys().cloned().collect::<Vec<_>>().join(", ")
                                            });
                                        view! {
                                            <div class="flex items-start">
                                                <span class=format!(
                                                    "px-2 py-1 rounded text-xs font-semibold mr-3 mt-1 {}",
                                                    status_badge_class(code)
                                                )>{code.clone()}</span>
                                                <div>
                                                    <p class="text-sm font-medium">{response.description.clone()}</p>
                                                    {content_types
                                                        .map(|types| {
                                                            view! {
                                                                <div class="mt-1 text-xs text-gray-500">
                                                                    {format!("Content-type: {}", types)}
                                                                </div>
                                                            }
                                                        })}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn SchemaCard(name: String, schema: Value, expanded: ExpansionMap) -> impl IntoView {
    let name_for_toggle = name.clone();
    let name_for_show = name.clone();
    let schema_type = schema
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("object")
        .to_string();
    let description = schema
        .get("description")
        .and_then(Value::as_str)
        .map(String::from);
    let required: Vec<String> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default();
    let properties: Vec<(String, String, Option<String>)> = schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|props| {
            props
                .iter()
                .map(|(prop_name, prop)| {
                    let prop_type = prop
                        .get("type")
                        .and_then(Value::as_str)
                        .unwrap_or("object")
                        .to_string();
                    let example = prop.get("example").map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    });
                    (prop_name.clone(), prop_type, example)
                })
                .collect()
        })
        .unwrap_or_default();

    view! {
        <div class="border border-gray-200 rounded-xl overflow-hidden">
            <button
                class="w-full flex items-center justify-between p-4 bg-gray-50 hover:bg-gray-100"
                on:click=move |_| toggle(expanded, &name_for_toggle)
            >
                <span class="font-semibold">{name.clone()}</span>
                <span class="text-xs text-gray-500 bg-gray-200 px-2 py-1 rounded">{schema_type}</span>
            </button>

            {move || {
                is_expanded(expanded, &name_for_show)
                    .then(|| {
                        let description = description.clone();
                        let required = required.clone();
                        let properties = properties.clone();
                        view! {
                            <div class="p-4">
                                {description
                                    .map(|text| {
                                        view! { <p class="text-gray-600 mb-4 text-sm">{text}</p> }
                                    })}
                                {(!properties.is_empty())
                                    .then(|| {
                                        view! {
                                            <div>
                                                <h4 class="font-semibold mb-2 text-sm">"Propriedades:"</h4>
                                                <div class="space-y-2">
                                                    {properties
                                                        .into_iter()
                                                        .map(|(prop_name, prop_type, example)| {
                                                            let is_required = required.contains(&prop_name);
                                                            view! {
                                                                <div class="flex justify-between items-start text-sm">
                                                                    <div>
                                                                        <span class="font-mono text-blue-600">{prop_name}</span>
                                                                        {is_required
                                                                            .then(|| {
                                                                                view! {
                                                                                    <span class="text-red-500 text-xs ml-2">"obrigatório"</span>
                                                                                }
                                                                            })}
                                                                    </div>
                                                                    <div class="text-right">
                                                                        <span class="text-gray-500">{prop_type}</span>
                                                                        {example
                                                                            .map(|ex| {
                                                                                view! {
                                                                                    <span class="text-gray-400 text-xs block">
                                                                                        {format!("ex: {}", ex)}
                                                                                    </span>
                                                                                }
                                                                            })}
                                                                    </div>
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

fn status_badge_class(code: &str) -> &'static str {
    if code.starts_with('2') {
        "bg-green-100 text-green-700"
    } else if code.starts_with('4') {
        "bg-yellow-100 text-yellow-700"
    } else if code.starts_with('5') {
        "bg-red-100 text-red-700"
    } else {
        "bg-gray-100 text-gray-700"
    }
}
