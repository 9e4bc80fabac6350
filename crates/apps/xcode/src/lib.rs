use leptos::*;
use system_ui::prelude::*;

struct SourceLine {
    segments: &'static [(&'static str, &'static str)],
}

struct SourceFile {
    name: &'static str,
    lines: &'static [SourceLine],
}

macro_rules! line {
    ($($class:literal => $text:literal),* $(,)?) => {
        SourceLine { segments: &[$(($class, $text)),*] }
    };
}

const SOURCE_FILES: [SourceFile; 3] = [
    SourceFile {
        name: "ContentView.swift",
        lines: &[
            line!("kw" => "import ", "ty" => "SwiftUI"),
            line!("" => ""),
            line!("kw" => "struct ", "ty" => "ContentView", "" => ": ", "ty" => "View", "" => " {"),
            line!("" => "    ", "kw" => "var ", "" => "body: ", "kw" => "some ", "ty" => "View", "" => " {"),
            line!("" => "        ", "ty" => "Text", "" => "(", "st" => "\"Hello, world!\"", "" => ")"),
            line!("" => "            .", "fn" => "padding", "" => "()"),
            line!("" => "    }"),
            line!("" => "}"),
        ],
    },
    SourceFile {
        name: "Model.swift",
        lines: &[
            line!("kw" => "import ", "ty" => "Foundation"),
            line!("" => ""),
            line!("kw" => "struct ", "ty" => "Item", "" => ": ", "ty" => "Identifiable", "" => " {"),
            line!("" => "    ", "kw" => "let ", "" => "id = ", "ty" => "UUID", "" => "()"),
            line!("" => "    ", "kw" => "var ", "" => "name: ", "ty" => "String"),
            line!("" => "}"),
        ],
    },
    SourceFile {
        name: "App.swift",
        lines: &[
            line!("kw" => "import ", "ty" => "SwiftUI"),
            line!("" => ""),
            line!("at" => "@main"),
            line!("kw" => "struct ", "ty" => "DemoApp", "" => ": ", "ty" => "App", "" => " {"),
            line!("" => "    ", "kw" => "var ", "" => "body: ", "kw" => "some ", "ty" => "Scene", "" => " {"),
            line!("" => "        ", "ty" => "WindowGroup", "" => " { ", "ty" => "ContentView", "" => "() }"),
            line!("" => "    }"),
            line!("" => "}"),
        ],
    },
];

const CONSOLE_LINES: [&str; 3] = [
    "Build target Demo: succeeded (2.4s)",
    "Attaching to process 8121...",
    "Hello, world!",
];

#[component]
pub fn XcodeApp() -> impl IntoView {
    let selected_file = create_rw_signal(0usize);

    view! {
        <div class="app app-xcode">
            <div class="xcode-activity" role="status">
                <span>"Demo › My Mac"</span>
                <span class="xcode-activity-message">"Build Succeeded | Today at 9:41 AM"</span>
            </div>

            <div class="xcode-workspace">
                <Pane layout_class="xcode-navigator" aria_label="Project navigator">
                    <PaneHeader label="Demo" />
                    <Tree aria_label="Project files">
                        {SOURCE_FILES
                            .iter()
                            .enumerate()
                            .map(|(idx, file)| {
                                view! {
                                    <TreeItem
                                        label=file.name
                                        icon=IconName::Document
                                        selected=Signal::derive(move || selected_file.get() == idx)
                                        on_select=Callback::new(move |_| selected_file.set(idx))
                                    />
                                }
                            })
                            .collect_view()}
                    </Tree>
                </Pane>

                <section class="xcode-editor" aria-label="Source editor">
                    <div class="xcode-tabs" role="tablist">
                        {SOURCE_FILES
                            .iter()
                            .enumerate()
                            .map(|(idx, file)| {
                                view! {
                                    <button
                                        type="button"
                                        role="tab"
                                        class=move || {
                                            if selected_file.get() == idx {
                                                "xcode-tab active"
                                            } else {
                                                "xcode-tab"
                                            }
                                        }
                                        aria-selected=move || selected_file.get() == idx
                                        on:click=move |_| selected_file.set(idx)
                                    >
                                        {file.name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="xcode-buffer" role="presentation">
                        {move || {
                            let file = &SOURCE_FILES[selected_file.get()];
                            file.lines
                                .iter()
                                .enumerate()
                                .map(|(number, line)| {
                                    view! {
                                        <div class="xcode-line">
                                            <span class="xcode-line-number">{number + 1}</span>
                                            <code>
                                                {line
                                                    .segments
                                                    .iter()
                                                    .map(|(class, text)| {
                                                        view! {
                                                            <span class=format!("tok-{class}")>{*text}</span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </code>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="xcode-console" role="log" aria-label="Debug console">
                        {CONSOLE_LINES
                            .into_iter()
                            .map(|text| view! { <div class="xcode-console-line">{text}</div> })
                            .collect_view()}
                    </div>
                </section>
            </div>

            <StatusBar>
                <StatusBarItem>{move || SOURCE_FILES[selected_file.get()].name}</StatusBarItem>
                <StatusBarItem>"Line 1, Column 1"</StatusBarItem>
            </StatusBar>
        </div>
    }
}
