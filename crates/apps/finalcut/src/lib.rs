use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Clip {
    name: &'static str,
    duration: &'static str,
    tint: &'static str,
    width_percent: i32,
}

const BROWSER_CLIPS: [Clip; 6] = [
    Clip {
        name: "Opening Shot",
        duration: "0:12",
        tint: "blue",
        width_percent: 18,
    },
    Clip {
        name: "Interview A",
        duration: "1:04",
        tint: "teal",
        width_percent: 30,
    },
    Clip {
        name: "B-Roll City",
        duration: "0:26",
        tint: "purple",
        width_percent: 16,
    },
    Clip {
        name: "Drone Pass",
        duration: "0:19",
        tint: "orange",
        width_percent: 14,
    },
    Clip {
        name: "Interview B",
        duration: "0:48",
        tint: "teal",
        width_percent: 22,
    },
    Clip {
        name: "Closing Card",
        duration: "0:08",
        tint: "slate",
        width_percent: 10,
    },
];

#[component]
pub fn FinalCutApp() -> impl IntoView {
    let selected_clip = create_rw_signal(None::<usize>);
    let playhead = create_rw_signal(34);

    view! {
        <div class="app app-finalcut">
            <div class="fcp-upper">
                <Pane layout_class="fcp-browser" aria_label="Browser">
                    <PaneHeader label="Project Media" />
                    <div class="fcp-clip-grid">
                        {BROWSER_CLIPS
                            .iter()
                            .enumerate()
                            .map(|(idx, clip)| {
                                let clip = *clip;
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if selected_clip.get() == Some(idx) {
                                                "fcp-clip-card selected"
                                            } else {
                                                "fcp-clip-card"
                                            }
                                        }
                                        on:click=move |_| selected_clip.set(Some(idx))
                                    >
                                        <span
                                            class="fcp-thumb"
                                            data-tint=clip.tint
                                            aria-hidden="true"
                                        ></span>
                                        <span class="fcp-clip-name">{clip.name}</span>
                                        <span class="fcp-clip-duration">{clip.duration}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Pane>
                <Pane layout_class="fcp-viewer" aria_label="Viewer">
                    <div class="fcp-canvas">
                        <span class="fcp-canvas-label">
                            {move || {
                                selected_clip
                                    .get()
                                    .map(|idx| BROWSER_CLIPS[idx].name)
                                    .unwrap_or("No Clip Selected")
                            }}
                        </span>
                    </div>
                    <div class="fcp-transport" role="group" aria-label="Transport">
                        <button type="button" class="toolbar-button" aria-label="Previous frame">
                            <Icon icon=IconName::ChevronLeft size=IconSize::Sm />
                        </button>
                        <button type="button" class="toolbar-button" aria-label="Play">
                            <Icon icon=IconName::Play size=IconSize::Sm />
                        </button>
                        <button type="button" class="toolbar-button" aria-label="Next frame">
                            <Icon icon=IconName::ChevronRight size=IconSize::Sm />
                        </button>
                    </div>
                </Pane>
            </div>

            <Pane layout_class="fcp-timeline" aria_label="Timeline">
                <RangeField
                    label="Playhead"
                    min=0
                    max=100
                    value=playhead
                    on_input=Callback::new(move |value| playhead.set(value))
                />
                <div class="fcp-track" data-track="video">
                    {BROWSER_CLIPS
                        .iter()
                        .enumerate()
                        .map(|(idx, clip)| {
                            let clip = *clip;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if selected_clip.get() == Some(idx) {
                                            "fcp-timeline-clip selected"
                                        } else {
                                            "fcp-timeline-clip"
                                        }
                                    }
                                    style=format!("width:{}%;", clip.width_percent)
                                    data-tint=clip.tint
                                    on:click=move |_| selected_clip.set(Some(idx))
                                >
                                    {clip.name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="fcp-track fcp-track-audio" data-track="audio" aria-hidden="true">
                    <span class="fcp-waveform"></span>
                </div>
            </Pane>

            <StatusBar>
                <StatusBarItem>"1080p / 30 fps"</StatusBarItem>
                <StatusBarItem>
                    {move || format!("Playhead {}%", playhead.get())}
                </StatusBarItem>
            </StatusBar>
        </div>
    }
}
