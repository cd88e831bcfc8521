//! Declarative form builder
//!
//! Renders a field list as one form, validates on submit, and hands the
//! typed value map to the caller's async handler. Inputs and both action
//! buttons stay disabled while the handler runs; a handler error is logged
//! and never reaches the view tree.

use leptos::prelude::*;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::fields::FieldControl;
use super::rules::{infer_schema, validate_values, FormSchema};
use super::types::{FieldConfig, FieldType, FieldValue, FormValues};

/// Future returned by a submit handler; runs on the UI thread.
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Async submit handler invoked with the validated value map.
pub type SubmitHandler = Arc<dyn Fn(FormValues) -> SubmitFuture + Send + Sync>;

/// Wrap an async closure into a [`SubmitHandler`].
pub fn submit_handler<F, Fut>(f: F) -> SubmitHandler
where
    F: Fn(FormValues) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    Arc::new(move |values| Box::pin(f(values)))
}

#[component]
pub fn FormBuilder(
    fields: Vec<FieldConfig>,
    on_submit: SubmitHandler,
    /// Explicit whole-form schema; inferred from the fields when absent.
    #[prop(optional)]
    schema: Option<FormSchema>,
    #[prop(into, optional)] on_reset: Option<Callback<()>>,
    #[prop(default = "Enviar".to_string())] submit_text: String,
    #[prop(default = "Limpar".to_string())] reset_text: String,
    #[prop(default = true)] show_reset: bool,
    /// External busy flag (e.g. a search already in flight).
    #[prop(into, optional)]
    busy: MaybeProp<bool>,
) -> impl IntoView {
    let schema = Arc::new(schema.unwrap_or_else(|| infer_schema(&fields)));

    let defaults: FormValues = fields
        .iter()
        .map(|field| {
            let value = field.default.clone().unwrap_or_else(|| {
                schema
                    .get(&field.name)
                    .map(|rule| rule.default_value())
                    .unwrap_or(FieldValue::Text(String::new()))
            });
            (field.name.clone(), value)
        })
        .collect();

    let values = RwSignal::new(defaults.clone());
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let submitting = RwSignal::new(false);

    let busy_flag = busy.clone();
    let is_disabled = Signal::derive(move || {
        submitting.get() || busy_flag.get().unwrap_or(false)
    });

    let schema_for_submit = schema.clone();
    let handler = on_submit.clone();
    let on_submit_ev = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = values.get_untracked();
        let found = validate_values(&schema_for_submit, &current);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(HashMap::new());
        submitting.set(true);
        let future = handler(current);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(error) = future.await {
                log::error!("form submission failed: {}", error);
            }
            // Re-enable on every exit path, including handler errors.
            submitting.set(false);
        });
    };

    let defaults_for_reset = defaults;
    let on_reset_ev = move |_| {
        values.set(defaults_for_reset.clone());
        errors.set(HashMap::new());
        if let Some(callback) = on_reset {
            callback.run(());
        }
    };

    view! {
        <form on:submit=on_submit_ev class="space-y-6">
            <div class="grid gap-4 md:grid-cols-2">
                {fields
                    .into_iter()
                    .map(|field| {
                        let name = field.name.clone();
                        let error = Memo::new(move |_| errors.get().get(&name).cloned());
                        // Checkbox and switch carry their own inline label.
                        let show_label =
                            !matches!(field.field_type, FieldType::Checkbox | FieldType::Switch);
                        let label = field.label.clone();
                        let required = field.required;
                        let description = field.description.clone();
                        view! {
                            <div class="space-y-2">
                                {show_label
                                    .then(|| {
                                        view! {
                                            <label class="block text-sm font-medium text-gray-700">
                                                {label}
                                                {required
                                                    .then(|| {
                                                        view! { <span class="ml-1 text-red-500">"*"</span> }
                                                    })}
                                            </label>
                                        }
                                    })}
                                <FieldControl field=field values=values disabled=is_disabled />
                                {description
                                    .map(|text| {
                                        view! { <p class="text-xs text-gray-500">{text}</p> }
                                    })}
                                {move || {
                                    error
                                        .get()
                                        .map(|message| {
                                            view! { <p class="text-xs text-red-500">{message}</p> }
                                        })
                                }}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="flex gap-3 pt-4">
                <button
                    type="submit"
                    class="flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                    disabled=move || is_disabled.get()
                >
                    {
                        let submit_text = submit_text.clone();
                        move || {
                            if submitting.get() {
                                "Enviando...".to_string()
                            } else {
                                submit_text.clone()
                            }
                        }
                    }
                </button>
                {show_reset
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class="px-4 py-2 text-gray-600 border border-gray-300 rounded-lg hover:bg-gray-100 disabled:opacity-50"
                                disabled=move || is_disabled.get()
                                on:click=on_reset_ev
                            >
                                {reset_text}
                            </button>
                        }
                    })}
            </div>
        </form>
    }
}
