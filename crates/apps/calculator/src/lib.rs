use leptos::*;

const KEY_ROWS: [&[&str]; 5] = [
    &["AC", "+/-", "%", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["0", ".", "="],
];

fn key_class(key: &str) -> &'static str {
    match key {
        "÷" | "×" | "-" | "+" | "=" => "calc-key calc-key-operator",
        "AC" | "+/-" | "%" => "calc-key calc-key-function",
        "0" => "calc-key calc-key-digit calc-key-zero",
        _ => "calc-key calc-key-digit",
    }
}

#[component]
pub fn CalculatorApp() -> impl IntoView {
    view! {
        <div class="app app-calculator">
            <div class="calc-display" role="status">"0"</div>
            <div class="calc-keys">
                {KEY_ROWS
                    .iter()
                    .map(|row| {
                        view! {
                            <div class="calc-row">
                                {row
                                    .iter()
                                    .map(|key| {
                                        view! {
                                            <button type="button" class=key_class(key)>
                                                {*key}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
