//! Interactive JSON tree rendering
//!
//! Shared by the response viewer and the pagination viewer. Each caller
//! owns its expansion map, so toggling one tree never affects another.
//! Nodes are keyed by structural path (`parent.key` / `parent[index]`);
//! absent keys mean collapsed. The recursion is unbounded: response bodies
//! are plain JSON and therefore acyclic.

use leptos::prelude::*;
use serde_json::Value;
use std::collections::HashMap;

/// Per-tree expansion state.
pub type ExpansionMap = RwSignal<HashMap<String, bool>>;

pub fn new_expansion_map() -> ExpansionMap {
    RwSignal::new(HashMap::new())
}

pub fn toggle(expanded: ExpansionMap, path: &str) {
    let path = path.to_string();
    expanded.update(|map| toggle_entry(map, &path));
}

fn toggle_entry(map: &mut HashMap<String, bool>, path: &str) {
    let entry = map.entry(path.to_string()).or_insert(false);
    *entry = !*entry;
}

pub fn is_expanded(expanded: ExpansionMap, path: &str) -> bool {
    expanded.with(|map| map.get(path).copied().unwrap_or(false))
}

/// Render a JSON value as a collapsible tree rooted at `path`.
pub fn json_tree(value: &Value, path: String, expanded: ExpansionMap) -> AnyView {
    match value {
        Value::Array(items) => {
            let count = items.len();
            let children: Vec<Value> = items.clone();
            let toggle_path = path.clone();
            let branch_path = path;
            view! {
                <div class="pl-4">
                    <button
                        class="flex items-center text-gray-500 hover:text-gray-800 mb-1"
                        on:click=move |_| toggle(expanded, &toggle_path)
                    >
                        <Chevron path=branch_path.clone() expanded=expanded />
                        <span class="ml-1">{format!("[{} items]", count)}</span>
                    </button>
                    {move || {
                        is_expanded(expanded, &branch_path)
                            .then(|| {
                                view! {
                                    <div class="border-l border-gray-200 pl-4 ml-1">
                                        {children
                                            .iter()
                                            .enumerate()
                                            .map(|(index, item)| {
                                                let child_path = format!("{}[{}]", branch_path, index);
                                                view! {
                                                    <div class="my-1">
                                                        {json_tree(item, child_path, expanded)}
                                                        {(index + 1 < count).then_some(",")}
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                    }}
                </div>
            }
            .into_any()
        }
        Value::Object(map) => {
            let entries: Vec<(String, Value)> =
                map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            let count = entries.len();
            let toggle_path = path.clone();
            let branch_path = path;
            view! {
                <div class="pl-4">
                    <button
                        class="flex items-center text-gray-500 hover:text-gray-800 mb-1"
                        on:click=move |_| toggle(expanded, &toggle_path)
                    >
                        <Chevron path=branch_path.clone() expanded=expanded />
                        <span class="ml-1">"{...}"</span>
                    </button>
                    {move || {
                        is_expanded(expanded, &branch_path)
                            .then(|| {
                                view! {
                                    <div class="border-l border-gray-200 pl-4 ml-1">
                                        {entries
                                            .iter()
                                            .enumerate()
                                            .map(|(index, (key, value))| {
                                                let child_path = if branch_path.is_empty() {
                                                    key.clone()
                                                } else {
                                                    format!("{}.{}", branch_path, key)
                                                };
                                                view! {
                                                    <div class="my-1">
                                                        <span class="text-blue-500">{format!("\"{}\"", key)}</span>
                                                        <span class="text-gray-500">": "</span>
                                                        {json_tree(value, child_path, expanded)}
                                                        {(index + 1 < count).then_some(",")}
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                    }}
                </div>
            }
            .into_any()
        }
        primitive => view! { <span class="text-gray-700">{primitive.to_string()}</span> }.into_any(),
    }
}

#[component]
fn Chevron(path: String, expanded: ExpansionMap) -> impl IntoView {
    view! {
        <svg class="w-3.5 h-3.5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d=move || {
                    if is_expanded(expanded, &path) { "M19 9l-7 7-7-7" } else { "M9 5l7 7-7 7" }
                }
            />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_path_is_collapsed() {
        let map: HashMap<String, bool> = HashMap::new();
        assert!(!map.get("data.items").copied().unwrap_or(false));
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut map = HashMap::new();
        toggle_entry(&mut map, "data[0]");
        assert_eq!(map.get("data[0]"), Some(&true));
        toggle_entry(&mut map, "data[0]");
        assert_eq!(map.get("data[0]"), Some(&false));
    }

    #[test]
    fn test_toggling_one_path_leaves_siblings_alone() {
        let mut map = HashMap::new();
        toggle_entry(&mut map, "data.items");
        toggle_entry(&mut map, "data.total");
        toggle_entry(&mut map, "data.total");
        assert_eq!(map.get("data.items"), Some(&true));
        assert_eq!(map.get("data.total"), Some(&false));
    }
}
