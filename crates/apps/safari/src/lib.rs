use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Favorite {
    title: &'static str,
    host: &'static str,
    tint: &'static str,
}

const FAVORITES: [Favorite; 8] = [
    Favorite {
        title: "Apple",
        host: "apple.com",
        tint: "gray",
    },
    Favorite {
        title: "Developer",
        host: "developer.apple.com",
        tint: "blue",
    },
    Favorite {
        title: "iCloud",
        host: "icloud.com",
        tint: "sky",
    },
    Favorite {
        title: "News",
        host: "news.ycombinator.com",
        tint: "orange",
    },
    Favorite {
        title: "Wikipedia",
        host: "wikipedia.org",
        tint: "slate",
    },
    Favorite {
        title: "Weather",
        host: "weather.com",
        tint: "teal",
    },
    Favorite {
        title: "Maps",
        host: "maps.apple.com",
        tint: "green",
    },
    Favorite {
        title: "Music",
        host: "music.apple.com",
        tint: "red",
    },
];

#[component]
pub fn SafariApp() -> impl IntoView {
    let address = create_rw_signal("apple.com".to_string());
    let selected_favorite = create_rw_signal(None::<usize>);

    view! {
        <div class="app app-safari">
            <ToolBar aria_label="Safari toolbar">
                <button type="button" class="toolbar-button" aria-label="Show sidebar">
                    <Icon icon=IconName::Sidebar size=IconSize::Sm />
                </button>
                <span class="toolbar-group">
                    <button type="button" class="toolbar-button" aria-label="Back" disabled=true>
                        <Icon icon=IconName::ChevronLeft size=IconSize::Sm />
                    </button>
                    <button type="button" class="toolbar-button" aria-label="Forward" disabled=true>
                        <Icon icon=IconName::ChevronRight size=IconSize::Sm />
                    </button>
                </span>
                <TextField
                    value=address
                    on_input=Callback::new(move |value| address.set(value))
                    aria_label="Address and search"
                    layout_class="safari-address"
                />
                <span class="toolbar-group">
                    <button type="button" class="toolbar-button" aria-label="Share">
                        <Icon icon=IconName::Share size=IconSize::Sm />
                    </button>
                    <button type="button" class="toolbar-button" aria-label="New tab">
                        <Icon icon=IconName::Plus size=IconSize::Sm />
                    </button>
                    <button type="button" class="toolbar-button" aria-label="Show tab overview">
                        <Icon icon=IconName::Grid size=IconSize::Sm />
                    </button>
                </span>
            </ToolBar>

            <div class="safari-start-page">
                <section class="safari-section" aria-label="Favorites">
                    <h2>"Favorites"</h2>
                    <div class="safari-favorites">
                        {FAVORITES
                            .iter()
                            .enumerate()
                            .map(|(idx, favorite)| {
                                let favorite = *favorite;
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if selected_favorite.get() == Some(idx) {
                                                "safari-favorite selected"
                                            } else {
                                                "safari-favorite"
                                            }
                                        }
                                        on:click=move |_| {
                                            selected_favorite.set(Some(idx));
                                            address.set(favorite.host.to_string());
                                        }
                                    >
                                        <span
                                            class="safari-favorite-glyph"
                                            data-tint=favorite.tint
                                            aria-hidden="true"
                                        >
                                            {favorite.title.chars().next().unwrap_or('?')}
                                        </span>
                                        <span class="safari-favorite-title">{favorite.title}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="safari-section" aria-label="Privacy report">
                    <h2>"Privacy Report"</h2>
                    <div class="safari-privacy-card">
                        <span class="safari-privacy-count">"42"</span>
                        <p>
                            "In the last seven days, Safari has prevented 42 trackers "
                            "from profiling you."
                        </p>
                    </div>
                </section>
            </div>
        </div>
    }
}
