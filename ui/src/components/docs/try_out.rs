//! Interactive request execution for the documentation viewer
//!
//! One exchange is current at a time; executions carry a sequence number
//! and a completion that is no longer the latest is dropped, so a slow
//! earlier response can never overwrite a fresher one.

use gloo_net::http::Request;
use leptos::prelude::*;
use serde_json::Value;
use std::collections::HashMap;

use super::json_tree::{json_tree, new_expansion_map};
use super::resolver::ResolvedParameter;

/// Operation selected for try-out, with its resolved parameter list.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedOperation {
    pub path: String,
    pub method: String,
    pub summary: String,
    pub parameters: Vec<ResolvedParameter>,
}

/// Outcome of one executed exchange.
#[derive(Clone, Debug, PartialEq)]
pub enum Exchange {
    Success {
        status: u16,
        status_text: String,
        data: Value,
        headers: Vec<(String, String)>,
    },
    Failure {
        message: String,
        status: u16,
    },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Parameters,
    Response,
}

/// Build the request URL from the server base, the path template and the
/// entered values. Path parameters replace their `{name}` segment, query
/// parameters are appended in declaration order; entries with no matching
/// resolved definition are dropped.
pub fn build_request_url(
    base: &str,
    path_template: &str,
    parameters: &[ResolvedParameter],
    values: &HashMap<String, String>,
) -> String {
    let mut url = format!("{}{}", base, path_template);

    for parameter in parameters.iter().filter(|p| p.location == "path") {
        if let Some(value) = values.get(&parameter.name).filter(|v| !v.is_empty()) {
            url = url.replace(
                &format!("{{{}}}", parameter.name),
                &urlencoding::encode(value),
            );
        }
    }

    let query: Vec<String> = parameters
        .iter()
        .filter(|p| p.location == "query")
        .filter_map(|parameter| {
            values
                .get(&parameter.name)
                .filter(|v| !v.is_empty())
                .map(|value| format!("{}={}", parameter.name, urlencoding::encode(value)))
        })
        .collect();

    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }
    url
}

/// Split a `pagination` field out of a response body so it can be rendered
/// in its own sub-view without duplicating the key in the main body.
pub fn split_pagination(data: &Value) -> (Value, Option<Value>) {
    match data {
        Value::Object(map) => {
            let mut rest = map.clone();
            let pagination = rest.shift_remove("pagination");
            (Value::Object(rest), pagination)
        }
        other => (other.clone(), None),
    }
}

/// Issue exactly one request for the operation.
pub async fn execute(method: &str, url: &str) -> Exchange {
    let builder = match method.to_uppercase().as_str() {
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        "PATCH" => Request::patch(url),
        _ => Request::get(url),
    };

    let result = builder
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-store")
        .send()
        .await;

    match result {
        Ok(response) => {
            let status = response.status();
            let status_text = response.status_text();
            let headers: Vec<(String, String)> = response.headers().entries().collect();
            match response.json::<Value>().await {
                Ok(data) => Exchange::Success {
                    status,
                    status_text,
                    data,
                    headers,
                },
                Err(error) => Exchange::Failure {
                    message: error.to_string(),
                    status: 0,
                },
            }
        }
        Err(error) => Exchange::Failure {
            message: error.to_string(),
            status: 0,
        },
    }
}

pub(crate) fn method_badge_class(method: &str) -> &'static str {
    match method.to_lowercase().as_str() {
        "get" => "bg-green-100 text-green-700",
        "post" => "bg-blue-100 text-blue-700",
        "put" => "bg-yellow-100 text-yellow-700",
        "delete" => "bg-red-100 text-red-700",
        _ => "bg-gray-100 text-gray-700",
    }
}

#[component]
pub fn TryOutPanel(
    operation: SelectedOperation,
    /// API host plus the document's server prefix.
    base_url: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let operation = StoredValue::new(operation);
    let base_url = StoredValue::new(base_url);

    let values = RwSignal::new(HashMap::<String, String>::new());
    let exchange = RwSignal::new(Option::<Exchange>::None);
    let executing = RwSignal::new(false);
    let active_tab = RwSignal::new(Tab::Parameters);
    let sequence = StoredValue::new(0u64);
    let response_expanded = new_expansion_map();
    let pagination_expanded = new_expansion_map();
    let headers_open = RwSignal::new(false);

    // Jump to the response tab when a successful exchange lands; stay on
    // the parameters tab after a failure.
    Effect::new(move |_| {
        if let Some(Exchange::Success { .. }) = exchange.get() {
            active_tab.set(Tab::Response);
        }
    });

    let on_execute = move |_| {
        if executing.get_untracked() {
            return;
        }
        executing.set(true);
        let ticket = sequence.with_value(|s| s + 1);
        sequence.set_value(ticket);

        let (method, url) = operation.with_value(|op| {
            let url = base_url.with_value(|base| {
                build_request_url(base, &op.path, &op.parameters, &values.get_untracked())
            });
            (op.method.clone(), url)
        });

        wasm_bindgen_futures::spawn_local(async move {
            let result = execute(&method, &url).await;
            if sequence.get_value() == ticket {
                exchange.set(Some(result));
                executing.set(false);
            }
        });
    };

    let method_label = operation.with_value(|op| op.method.to_uppercase());
    let method_class = operation.with_value(|op| method_badge_class(&op.method));
    let path_label = operation.with_value(|op| op.path.clone());
    let summary = operation.with_value(|op| op.summary.clone());
    let parameters = operation.with_value(|op| op.parameters.clone());
    let has_parameters = !parameters.is_empty();

    view! {
        <div class="fixed inset-0 bg-black bg-opacity-70 flex items-center justify-center z-50 p-4">
            <div class="bg-white rounded-lg shadow-xl max-w-4xl w-full h-[90vh] flex flex-col">
                <div class="flex items-center justify-between p-6 border-b border-gray-200">
                    <h2 class="text-2xl font-bold">"Testar Endpoint"</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600"
                        on:click=move |_| on_close.run(())
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </button>
                </div>

                <div class="flex border-b border-gray-200">
                    <TabButton
                        label="Parâmetros"
                        tab=Tab::Parameters
                        active_tab=active_tab
                    />
                    <TabButton
                        label="Resposta"
                        tab=Tab::Response
                        active_tab=active_tab
                    />
                </div>

                <div class="flex-1 overflow-auto p-6">
                    <Show when=move || active_tab.get() == Tab::Parameters>
                        <div class="space-y-6">
                            <div>
                                <div class="flex items-center gap-3 mb-2">
                                    <span class=format!(
                                        "px-3 py-1 rounded-full text-sm font-semibold {}",
                                        method_class
                                    )>{method_label.clone()}</span>
                                    <span class="font-mono text-lg">{path_label.clone()}</span>
                                </div>
                                <p class="text-gray-600">{summary.clone()}</p>
                            </div>

                            {if has_parameters {
                                view! {
                                    <div class="space-y-4">
                                        <h4 class="font-semibold text-gray-700">"Parâmetros:"</h4>
                                        {parameters
                                            .iter()
                                            .cloned()
                                            .map(|parameter| {
                                                view! { <ParameterInput parameter=parameter values=values /> }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="text-center py-8 text-gray-500">
                                        "Este endpoint não requer parâmetros"
                                    </div>
                                }
                                    .into_any()
                            }}
                        </div>
                    </Show>

                    <Show when=move || active_tab.get() == Tab::Response>
                        <ResponseView
                            exchange=exchange
                            response_expanded=response_expanded
                            headers_open=headers_open
                        />
                    </Show>
                </div>

                <Show when=move || active_tab.get() == Tab::Parameters>
                    <div class="p-6 border-t border-gray-200">
                        <button
                            class="w-full px-8 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50 font-semibold"
                            disabled=move || executing.get()
                            on:click=on_execute
                        >
                            {move || {
                                if executing.get() { "Executando..." } else { "Executar Requisição" }
                            }}
                        </button>
                    </div>
                </Show>

                <Show when=move || {
                    active_tab.get() == Tab::Response
                        && matches!(
                            exchange.get(),
                            Some(Exchange::Success { ref data, .. })
                            if split_pagination(data).1.is_some()
                        )
                }>
                    <div class="p-6 border-t border-gray-200 overflow-auto">
                        <div class="bg-gray-50 rounded-lg p-4">
                            <h4 class="font-semibold mb-3 text-gray-700">"Paginação:"</h4>
                            <div class="font-mono text-sm">
                                {move || {
                                    exchange
                                        .get()
                                        .and_then(|result| match result {
                                            Exchange::Success { data, .. } => split_pagination(&data).1,
                                            Exchange::Failure { .. } => None,
                                        })
                                        .map(|pagination| {
                                            json_tree(&pagination, String::new(), pagination_expanded)
                                        })
                                }}
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn TabButton(label: &'static str, tab: Tab, active_tab: RwSignal<Tab>) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "px-6 py-3 font-medium flex-1 text-center {}",
                    if active_tab.get() == tab {
                        "text-blue-600 border-b-2 border-blue-600"
                    } else {
                        "text-gray-500 hover:text-gray-800"
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
fn ParameterInput(
    parameter: ResolvedParameter,
    values: RwSignal<HashMap<String, String>>,
) -> impl IntoView {
    let name = parameter.name.clone();
    let name_for_input = parameter.name.clone();
    let placeholder = match &parameter.example {
        Some(example) => format!("ex: {}", example),
        None => format!("Digite o valor para {}", parameter.name),
    };

    view! {
        <div class="bg-gray-50 rounded-lg p-4">
            <div class="flex justify-between items-start mb-3">
                <div class="flex items-center gap-2">
                    <span class="font-mono text-blue-600 bg-blue-50 px-2 py-1 rounded">
                        {parameter.name.clone()}
                    </span>
                    <span class="text-xs bg-gray-200 px-2 py-1 rounded">
                        {parameter.location.clone()}
                    </span>
                    {parameter
                        .required
                        .then(|| {
                            view! {
                                <span class="text-red-500 text-xs bg-red-50 px-2 py-1 rounded">
                                    "obrigatório"
                                </span>
                            }
                        })}
                </div>
                <span class="text-gray-500 text-sm">{parameter.schema_type.clone()}</span>
            </div>

            <p class="text-gray-600 text-sm mb-3">{parameter.description.clone()}</p>

            <input
                type="text"
                placeholder=placeholder
                class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || values.get().get(&name).cloned().unwrap_or_default()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    values.update(|map| {
                        map.insert(name_for_input.clone(), value);
                    });
                }
            />
        </div>
    }
}

#[component]
fn ResponseView(
    exchange: RwSignal<Option<Exchange>>,
    response_expanded: super::json_tree::ExpansionMap,
    headers_open: RwSignal<bool>,
) -> impl IntoView {
    view! {
        {move || match exchange.get() {
            None => {
                view! {
                    <div class="h-full flex items-center justify-center text-gray-500">
                        "Execute a requisição para ver a resposta"
                    </div>
                }
                    .into_any()
            }
            Some(Exchange::Failure { message, .. }) => {
                view! {
                    <div class="text-red-600 font-mono text-sm">
                        <span class="font-semibold">"Erro: "</span>
                        {message}
                    </div>
                }
                    .into_any()
            }
            Some(Exchange::Success { status, status_text, data, headers }) => {
                let status_class = if (200..300).contains(&status) {
                    "bg-green-100 text-green-700"
                } else {
                    "bg-yellow-100 text-yellow-700"
                };
                let (body, _) = split_pagination(&data);
                let headers_for_grid = headers.clone();
                view! {
                    <div class="space-y-4">
                        <div class="flex items-center justify-between">
                            <span class=format!(
                                "px-3 py-1 rounded-full text-sm font-semibold {}",
                                status_class
                            )>{format!("{} {}", status, status_text)}</span>
                            {(!headers.is_empty())
                                .then(|| {
                                    view! {
                                        <button
                                            class="text-xs text-gray-500 hover:text-gray-800"
                                            on:click=move |_| headers_open.update(|open| *open = !*open)
                                        >
                                            {move || {
                                                if headers_open.get() {
                                                    "Ocultar Headers"
                                                } else {
                                                    "Mostrar Headers"
                                                }
                                            }}
                                        </button>
                                    }
                                })}
                        </div>

                        <Show when=move || headers_open.get()>
                            <div class="bg-gray-50 rounded-lg p-4">
                                <h4 class="font-semibold mb-3 text-gray-700">"Headers:"</h4>
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-2 text-sm">
                                    {headers_for_grid
                                        .iter()
                                        .cloned()
                                        .map(|(key, value)| {
                                            view! {
                                                <div class="flex">
                                                    <span class="text-blue-600 font-medium w-32 truncate">
                                                        {format!("{}:", key)}
                                                    </span>
                                                    <span class="text-gray-700 flex-1 truncate">{value}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </Show>

                        <div class="bg-gray-50 rounded-lg p-4 font-mono text-sm overflow-auto">
                            {if body.is_null() {
                                view! { <div class="text-gray-500">"Nenhum dado retornado"</div> }
                                    .into_any()
                            } else {
                                json_tree(&body, String::new(), response_expanded)
                            }}
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path_param(name: &str) -> ResolvedParameter {
        ResolvedParameter {
            name: name.to_string(),
            location: "path".to_string(),
            required: true,
            schema_type: "integer".to_string(),
            ..Default::default()
        }
    }

    fn query_param(name: &str) -> ResolvedParameter {
        ResolvedParameter {
            name: name.to_string(),
            location: "query".to_string(),
            schema_type: "string".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_path_parameter_substitution() {
        let parameters = vec![path_param("id")];
        let values = HashMap::from([("id".to_string(), "252105".to_string())]);

        let url = build_request_url("/api", "/occupations/{id}", &parameters, &values);
        assert_eq!(url, "/api/occupations/252105");
    }

    #[test]
    fn test_query_parameter_is_percent_encoded() {
        let parameters = vec![query_param("label")];
        let values = HashMap::from([("label".to_string(), "médico".to_string())]);

        let url = build_request_url("/api", "/occupations/search", &parameters, &values);
        assert_eq!(url, "/api/occupations/search?label=m%C3%A9dico");
    }

    #[test]
    fn test_unmatched_values_are_ignored() {
        let parameters = vec![query_param("label")];
        let values = HashMap::from([
            ("label".to_string(), "médico".to_string()),
            ("bogus".to_string(), "x".to_string()),
        ]);

        let url = build_request_url("/api", "/occupations/search", &parameters, &values);
        assert!(!url.contains("bogus"));
        assert_eq!(url, "/api/occupations/search?label=m%C3%A9dico");
    }

    #[test]
    fn test_query_parameters_follow_declaration_order() {
        let parameters = vec![query_param("label"), query_param("perPage")];
        let values = HashMap::from([
            ("perPage".to_string(), "20".to_string()),
            ("label".to_string(), "a".to_string()),
        ]);

        let url = build_request_url("", "/search", &parameters, &values);
        assert_eq!(url, "/search?label=a&perPage=20");
    }

    #[test]
    fn test_no_entered_values_yields_bare_url() {
        let parameters = vec![query_param("label")];
        let url = build_request_url("/api", "/occupations", &parameters, &HashMap::new());
        assert_eq!(url, "/api/occupations");
    }

    #[test]
    fn test_split_pagination_removes_key_from_body() {
        let data = json!({ "a": 1, "pagination": { "page": 1 } });
        let (body, pagination) = split_pagination(&data);

        assert_eq!(body, json!({ "a": 1 }));
        assert_eq!(pagination, Some(json!({ "page": 1 })));
    }

    #[test]
    fn test_split_pagination_without_key() {
        let data = json!({ "a": 1 });
        let (body, pagination) = split_pagination(&data);
        assert_eq!(body, json!({ "a": 1 }));
        assert!(pagination.is_none());
    }
}
