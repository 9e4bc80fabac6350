use leptos::*;
use system_ui::prelude::*;

const DEFAULT_DOCUMENT: &str = "Untitled\n\nStart typing. Text lives only in this window and is discarded when it closes.";

const FONT_OPTIONS: &[(&str, &str)] = &[
    ("helvetica", "Helvetica"),
    ("times", "Times New Roman"),
    ("menlo", "Menlo"),
    ("georgia", "Georgia"),
];

const SIZE_OPTIONS: &[(&str, &str)] = &[
    ("11", "11"),
    ("12", "12"),
    ("14", "14"),
    ("18", "18"),
    ("24", "24"),
];

#[component]
pub fn TextEditApp() -> impl IntoView {
    let document = create_rw_signal(DEFAULT_DOCUMENT.to_string());
    let font = create_rw_signal("helvetica".to_string());
    let font_size = create_rw_signal("12".to_string());
    let bold = create_rw_signal(false);
    let italic = create_rw_signal(false);
    let underline = create_rw_signal(false);

    let style_button = move |label: &'static str, flag: RwSignal<bool>| {
        view! {
            <button
                type="button"
                class=move || {
                    if flag.get() {
                        "toolbar-button textedit-style active"
                    } else {
                        "toolbar-button textedit-style"
                    }
                }
                aria-pressed=move || flag.get()
                on:click=move |_| flag.update(|value| *value = !*value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="app app-textedit">
            <ToolBar aria_label="Format toolbar">
                <SelectField
                    label="Font"
                    options=FONT_OPTIONS
                    value=font
                    on_change=Callback::new(move |value| font.set(value))
                />
                <SelectField
                    label="Size"
                    options=SIZE_OPTIONS
                    value=font_size
                    on_change=Callback::new(move |value| font_size.set(value))
                />
                <span class="toolbar-group" role="group" aria-label="Text style">
                    {style_button("B", bold)}
                    {style_button("I", italic)}
                    {style_button("U", underline)}
                </span>
            </ToolBar>
            <div class="textedit-ruler" aria-hidden="true">
                {(0..14).map(|_| view! { <span class="textedit-ruler-tick"></span> }).collect_view()}
            </div>
            <TextArea
                value=document
                on_input=Callback::new(move |value| document.set(value))
                aria_label="Document text"
                layout_class="textedit-page"
            />
            <StatusBar>
                <StatusBarItem>
                    {move || format!("{} characters", document.get().chars().count())}
                </StatusBarItem>
                <StatusBarItem>"RTF — Edited"</StatusBarItem>
            </StatusBar>
        </div>
    }
}
