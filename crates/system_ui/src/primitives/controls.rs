use super::*;

#[component]
/// Single-line text input bound to a caller-owned value.
pub fn TextField(
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class=merge_layout_class("ui-text-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-field"
            placeholder=placeholder
            aria-label=aria_label
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        />
    }
}

#[component]
/// Multi-line text surface bound to a caller-owned value.
pub fn TextArea(
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <textarea
            class=merge_layout_class("ui-text-area", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-area"
            aria-label=aria_label
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        />
    }
}

#[component]
/// Labeled slider over an integer range.
pub fn RangeField(
    #[prop(into)] label: String,
    min: i32,
    max: i32,
    #[prop(into)] value: MaybeSignal<i32>,
    #[prop(optional)] on_input: Option<Callback<i32>>,
) -> impl IntoView {
    view! {
        <label class="ui-range-field" data-ui-primitive="true" data-ui-kind="range-field">
            <span class="ui-field-label">{label}</span>
            <input
                type="range"
                min=min
                max=max
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        let parsed = event_target_value(&ev).parse::<i32>().unwrap_or(min);
                        on_input.call(parsed.clamp(min, max));
                    }
                }
            />
        </label>
    }
}

#[component]
/// Labeled select over a static option table.
pub fn SelectField(
    #[prop(into)] label: String,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <label class="ui-select-field" data-ui-primitive="true" data-ui-kind="select-field">
            <span class="ui-field-label">{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(event_target_value(&ev));
                    }
                }
            >
                {options
                    .iter()
                    .map(|(option_value, option_label)| {
                        view! { <option value=*option_value>{*option_label}</option> }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
/// Pill-style on/off switch.
pub fn Switch(
    #[prop(into)] checked: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-switch"
            data-ui-primitive="true"
            data-ui-kind="switch"
            role="switch"
            aria-label=aria_label
            aria-checked=move || bool_token(checked.get())
            data-ui-checked=move || bool_token(checked.get())
            on:click=move |_| {
                if let Some(on_toggle) = on_toggle.as_ref() {
                    on_toggle.call(!checked.get_untracked());
                }
            }
        >
            <span class="ui-switch-thumb" aria-hidden="true"></span>
        </button>
    }
}

#[component]
/// Settings-style row pairing a label with a [`Switch`].
pub fn ToggleRow(
    #[prop(into)] label: String,
    #[prop(into)] checked: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <div class="ui-toggle-row" data-ui-primitive="true" data-ui-kind="toggle-row">
            <span class="ui-toggle-row-label">{label.clone()}</span>
            <Switch checked=checked on_toggle=on_toggle.unwrap_or_else(|| Callback::new(|_| {})) aria_label=label />
        </div>
    }
}
