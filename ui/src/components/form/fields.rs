//! Field control renderers
//!
//! One control per field type; the dispatch mirrors the closed `FieldType`
//! set, with plain text as the fallback.

use leptos::prelude::*;

use super::types::{FieldConfig, FieldType, FieldValue, FormValues};

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50 disabled:bg-gray-50";

/// Renders the control matching the field's type.
#[component]
pub fn FieldControl(
    field: FieldConfig,
    values: RwSignal<FormValues>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    match field.field_type {
        FieldType::Number => view! { <NumberControl field=field values=values disabled=disabled /> }.into_any(),
        FieldType::Textarea => view! { <TextareaControl field=field values=values disabled=disabled /> }.into_any(),
        FieldType::Select => view! { <SelectControl field=field values=values disabled=disabled /> }.into_any(),
        FieldType::Checkbox => view! { <CheckboxControl field=field values=values disabled=disabled /> }.into_any(),
        FieldType::Radio => view! { <RadioControl field=field values=values disabled=disabled /> }.into_any(),
        FieldType::Switch => view! { <SwitchControl field=field values=values disabled=disabled /> }.into_any(),
        // Text, email and password share the single-line input.
        _ => view! { <TextControl field=field values=values disabled=disabled /> }.into_any(),
    }
}

#[component]
fn TextControl(
    field: FieldConfig,
    values: RwSignal<FormValues>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let input_type = match field.field_type {
        FieldType::Email => "email",
        FieldType::Password => "password",
        _ => "text",
    };
    let name = field.name.clone();
    let name_for_input = field.name.clone();
    let field_disabled = field.disabled;

    view! {
        <input
            type=input_type
            class=INPUT_CLASS
            placeholder=field.placeholder.unwrap_or_default()
            disabled=move || field_disabled || disabled.get()
            prop:value=move || {
                values
                    .get()
                    .get(&name)
                    .and_then(|v| v.as_text().map(String::from))
                    .unwrap_or_default()
            }
            on:input=move |ev| {
                let value = event_target_value(&ev);
                values.update(|v| {
                    v.insert(name_for_input.clone(), FieldValue::Text(value));
                });
            }
        />
    }
}

#[component]
fn NumberControl(
    field: FieldConfig,
    values: RwSignal<FormValues>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let name = field.name.clone();
    let name_for_input = field.name.clone();
    let field_disabled = field.disabled;
    let min_attr = field.min.map(|v| v.to_string());
    let max_attr = field.max.map(|v| v.to_string());
    let step_attr = field.step.map(|v| v.to_string());

    view! {
        <input
            type="number"
            class=INPUT_CLASS
            placeholder=field.placeholder.unwrap_or_default()
            min=min_attr
            max=max_attr
            step=step_attr
            disabled=move || field_disabled || disabled.get()
            prop:value=move || {
                values.get().get(&name).map(|v| v.display()).unwrap_or_default()
            }
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                // Keep unparseable text so validation can flag it on submit.
                let value = match raw.trim().parse::<f64>() {
                    Ok(n) => FieldValue::Number(n),
                    Err(_) => FieldValue::Text(raw),
                };
                values.update(|v| {
                    v.insert(name_for_input.clone(), value);
                });
            }
        />
    }
}

#[component]
fn TextareaControl(
    field: FieldConfig,
    values: RwSignal<FormValues>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let name = field.name.clone();
    let name_for_input = field.name.clone();
    let field_disabled = field.disabled;
    let rows = field.rows.unwrap_or(3);

    view! {
        <textarea
            class=INPUT_CLASS
            rows=rows
            placeholder=field.placeholder.unwrap_or_default()
            disabled=move || field_disabled || disabled.get()
            prop:value=move || {
                values
                    .get()
                    .get(&name)
                    .and_then(|v| v.as_text().map(String::from))
                    .unwrap_or_default()
            }
            on:input=move |ev| {
                let value = event_target_value(&ev);
                values.update(|v| {
                    v.insert(name_for_input.clone(), FieldValue::Text(value));
                });
            }
        />
    }
}

#[component]
fn SelectControl(
    field: FieldConfig,
    values: RwSignal<FormValues>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let name = field.name.clone();
    let name_for_change = field.name.clone();
    let field_disabled = field.disabled;
    let placeholder = field.placeholder.clone().unwrap_or_else(|| "Selecione...".to_string());

    view! {
        <select
            class=INPUT_CLASS
            disabled=move || field_disabled || disabled.get()
            prop:value=move || {
                values
                    .get()
                    .get(&name)
                    .and_then(|v| v.as_text().map(String::from))
                    .unwrap_or_default()
            }
            on:change=move |ev| {
                let value = event_target_value(&ev);
                values.update(|v| {
                    v.insert(name_for_change.clone(), FieldValue::Text(value));
                });
            }
        >
            <option value="">{placeholder}</option>
            {field
                .options
                .into_iter()
                .map(|option| {
                    view! {
                        <option value=option.value.clone() disabled=option.disabled>
                            {option.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn CheckboxControl(
    field: FieldConfig,
    values: RwSignal<FormValues>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let name = field.name.clone();
    let name_for_change = field.name.clone();
    let field_disabled = field.disabled;

    view! {
        <label class="flex items-center gap-2 text-sm font-medium text-gray-700">
            <input
                type="checkbox"
                class="h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500 disabled:opacity-50"
                disabled=move || field_disabled || disabled.get()
                prop:checked=move || {
                    values.get().get(&name).and_then(|v| v.as_bool()).unwrap_or(false)
                }
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    values.update(|v| {
                        v.insert(name_for_change.clone(), FieldValue::Bool(checked));
                    });
                }
            />
            {field.label}
        </label>
    }
}

#[component]
fn RadioControl(
    field: FieldConfig,
    values: RwSignal<FormValues>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let field_name = field.name.clone();
    let field_disabled = field.disabled;

    view! {
        <div class="flex flex-col gap-2">
            {field
                .options
                .into_iter()
                .map(|option| {
                    let name = field_name.clone();
                    let name_for_change = field_name.clone();
                    let value = option.value.clone();
                    let value_for_change = option.value.clone();
                    let option_disabled = option.disabled;
                    view! {
                        <label class="flex items-center gap-2 text-sm text-gray-700">
                            <input
                                type="radio"
                                name=field_name.clone()
                                class="h-4 w-4 border-gray-300 text-blue-600 focus:ring-blue-500 disabled:opacity-50"
                                disabled=move || field_disabled || option_disabled || disabled.get()
                                prop:checked=move || {
                                    values
                                        .get()
                                        .get(&name)
                                        .and_then(|v| v.as_text().map(String::from))
                                        .as_deref()
                                        == Some(value.as_str())
                                }
                                on:change=move |_| {
                                    values.update(|v| {
                                        v.insert(
                                            name_for_change.clone(),
                                            FieldValue::Text(value_for_change.clone()),
                                        );
                                    });
                                }
                            />
                            {option.label}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SwitchControl(
    field: FieldConfig,
    values: RwSignal<FormValues>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let field_disabled = field.disabled;

    fn is_on(values: RwSignal<FormValues>, name: &str) -> bool {
        values
            .get()
            .get(name)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    let name_for_aria = field.name.clone();
    let name_for_class = field.name.clone();
    let name_for_knob = field.name.clone();
    let name_for_click = field.name.clone();

    view! {
        <div class="flex items-center gap-2">
            <button
                type="button"
                role="switch"
                aria-checked=move || is_on(values, &name_for_aria).to_string()
                class=move || {
                    format!(
                        "relative inline-flex h-6 w-11 items-center rounded-full transition-colors disabled:opacity-50 {}",
                        if is_on(values, &name_for_class) { "bg-blue-600" } else { "bg-gray-300" }
                    )
                }
                disabled=move || field_disabled || disabled.get()
                on:click=move |_| {
                    values.update(|v| {
                        let current = v
                            .get(&name_for_click)
                            .and_then(|value| value.as_bool())
                            .unwrap_or(false);
                        v.insert(name_for_click.clone(), FieldValue::Bool(!current));
                    });
                }
            >
                <span class=move || {
                    format!(
                        "inline-block h-4 w-4 transform rounded-full bg-white transition-transform {}",
                        if is_on(values, &name_for_knob) { "translate-x-6" } else { "translate-x-1" }
                    )
                }></span>
            </button>
            <span class="text-sm font-medium text-gray-700">{field.label}</span>
        </div>
    }
}
