//! Labelled form controls bound to a value signal and a change callback.

use leptos::prelude::*;

/// `(value signal, setter callback)` for one `String` field of a form held
/// in an `RwSignal`.
#[macro_export]
macro_rules! bind_field {
    ($form:ident, $field:ident) => {
        (
            Signal::derive(move || $form.with(|f| f.$field.clone())),
            Callback::new(move |v: String| $form.update(|f| f.$field = v)),
        )
    };
}

/// Options where value and label are the same string.
pub fn plain_options(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}

/// (value, label) options from a static table.
pub fn pair_options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "number", "date", "email", "password"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(3)
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Native select. With `placeholder` an empty first option is rendered so
/// an untouched form stays invalid.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|p| view! {
                    <option value="" selected=move || value.get().is_empty()>{p}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    /// Second line under the label
    #[prop(optional, into)]
    description: Option<String>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox-wrapper">
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">
                {label}
                {description.map(|d| view! { <span class="form__hint">{d}</span> })}
            </span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_builders() {
        assert_eq!(
            plain_options(&["EMEA"]),
            vec![("EMEA".to_string(), "EMEA".to_string())]
        );
        assert_eq!(
            pair_options(&[("high", "High")]),
            vec![("high".to_string(), "High".to_string())]
        );
    }
}
