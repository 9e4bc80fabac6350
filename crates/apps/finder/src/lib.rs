use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FinderItem {
    name: &'static str,
    kind: &'static str,
    modified: &'static str,
    glyph: &'static str,
}

const FINDER_ITEMS: [FinderItem; 9] = [
    FinderItem {
        name: "Projects",
        kind: "Folder",
        modified: "Today, 9:12 AM",
        glyph: "folder",
    },
    FinderItem {
        name: "Screenshots",
        kind: "Folder",
        modified: "Yesterday, 4:48 PM",
        glyph: "folder",
    },
    FinderItem {
        name: "Design Drafts",
        kind: "Folder",
        modified: "Monday, 11:03 AM",
        glyph: "folder",
    },
    FinderItem {
        name: "resume.pages",
        kind: "Pages Document",
        modified: "Jul 29, 2:15 PM",
        glyph: "doc",
    },
    FinderItem {
        name: "budget.numbers",
        kind: "Numbers Spreadsheet",
        modified: "Jul 28, 10:40 AM",
        glyph: "doc",
    },
    FinderItem {
        name: "wallpaper.heic",
        kind: "HEIC Image",
        modified: "Jul 22, 8:02 PM",
        glyph: "image",
    },
    FinderItem {
        name: "demo-reel.mov",
        kind: "QuickTime Movie",
        modified: "Jul 21, 6:30 PM",
        glyph: "movie",
    },
    FinderItem {
        name: "notes.txt",
        kind: "Plain Text",
        modified: "Jul 18, 9:54 AM",
        glyph: "doc",
    },
    FinderItem {
        name: "archive.zip",
        kind: "ZIP Archive",
        modified: "Jul 12, 3:21 PM",
        glyph: "archive",
    },
];

const SIDEBAR_FAVORITES: [&str; 6] = [
    "AirDrop",
    "Recents",
    "Applications",
    "Desktop",
    "Documents",
    "Downloads",
];

const SIDEBAR_LOCATIONS: [&str; 2] = ["iCloud Drive", "Macintosh HD"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Icons,
    List,
}

#[component]
pub fn FinderApp() -> impl IntoView {
    let selected_item = create_rw_signal(None::<usize>);
    let selected_place = create_rw_signal("Desktop".to_string());
    let view_mode = create_rw_signal(ViewMode::Icons);
    let search = create_rw_signal(String::new());

    view! {
        <div class="app app-finder">
            <ToolBar aria_label="Finder toolbar">
                <span class="toolbar-group">
                    <button type="button" class="toolbar-button" aria-label="Back">
                        <Icon icon=IconName::ChevronLeft size=IconSize::Sm />
                    </button>
                    <button type="button" class="toolbar-button" aria-label="Forward" disabled=true>
                        <Icon icon=IconName::ChevronRight size=IconSize::Sm />
                    </button>
                </span>
                <span class="toolbar-title">{move || selected_place.get()}</span>
                <span class="toolbar-spring" aria-hidden="true"></span>
                <span class="toolbar-group" role="group" aria-label="View options">
                    <button
                        type="button"
                        class=move || {
                            if view_mode.get() == ViewMode::Icons {
                                "toolbar-button active"
                            } else {
                                "toolbar-button"
                            }
                        }
                        aria-label="Icon view"
                        on:click=move |_| view_mode.set(ViewMode::Icons)
                    >
                        <Icon icon=IconName::Grid size=IconSize::Sm />
                    </button>
                    <button
                        type="button"
                        class=move || {
                            if view_mode.get() == ViewMode::List {
                                "toolbar-button active"
                            } else {
                                "toolbar-button"
                            }
                        }
                        aria-label="List view"
                        on:click=move |_| view_mode.set(ViewMode::List)
                    >
                        <Icon icon=IconName::List size=IconSize::Sm />
                    </button>
                    <button type="button" class="toolbar-button" aria-label="Column view">
                        <Icon icon=IconName::Columns size=IconSize::Sm />
                    </button>
                </span>
                <TextField
                    value=search
                    on_input=Callback::new(move |value| search.set(value))
                    placeholder="Search"
                    aria_label="Search"
                    layout_class="toolbar-search"
                />
            </ToolBar>

            <div class="finder-workspace">
                <Pane layout_class="finder-sidebar" aria_label="Sidebar">
                    <PaneHeader label="Favorites" />
                    <Tree aria_label="Favorites">
                        {SIDEBAR_FAVORITES
                            .into_iter()
                            .map(|place| {
                                view! {
                                    <TreeItem
                                        label=place
                                        icon=IconName::Folder
                                        selected=Signal::derive(move || {
                                            selected_place.get() == place
                                        })
                                        on_select=Callback::new(move |_| {
                                            selected_place.set(place.to_string());
                                            selected_item.set(None);
                                        })
                                    />
                                }
                            })
                            .collect_view()}
                    </Tree>
                    <PaneHeader label="Locations" />
                    <Tree aria_label="Locations">
                        {SIDEBAR_LOCATIONS
                            .into_iter()
                            .map(|place| {
                                view! {
                                    <TreeItem
                                        label=place
                                        icon=IconName::Document
                                        selected=Signal::derive(move || {
                                            selected_place.get() == place
                                        })
                                        on_select=Callback::new(move |_| {
                                            selected_place.set(place.to_string());
                                            selected_item.set(None);
                                        })
                                    />
                                }
                            })
                            .collect_view()}
                    </Tree>
                </Pane>

                <section class="finder-content" aria-label="Contents">
                    <Show
                        when=move || view_mode.get() == ViewMode::Icons
                        fallback=move || {
                            view! {
                                <table class="finder-list" role="grid" aria-label="File list">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Kind"</th>
                                            <th>"Date Modified"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {FINDER_ITEMS
                                            .iter()
                                            .enumerate()
                                            .map(|(idx, item)| {
                                                let item = *item;
                                                view! {
                                                    <tr
                                                        class=move || {
                                                            if selected_item.get() == Some(idx) {
                                                                "selected"
                                                            } else {
                                                                ""
                                                            }
                                                        }
                                                        on:mousedown=move |_| selected_item.set(Some(idx))
                                                    >
                                                        <td>{item.name}</td>
                                                        <td>{item.kind}</td>
                                                        <td>{item.modified}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                        }
                    >
                        <div class="finder-grid">
                            {FINDER_ITEMS
                                .iter()
                                .enumerate()
                                .map(|(idx, item)| {
                                    let item = *item;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if selected_item.get() == Some(idx) {
                                                    "finder-tile selected"
                                                } else {
                                                    "finder-tile"
                                                }
                                            }
                                            on:click=move |_| selected_item.set(Some(idx))
                                        >
                                            <span
                                                class="finder-tile-glyph"
                                                data-glyph=item.glyph
                                                aria-hidden="true"
                                            ></span>
                                            <span class="finder-tile-name">{item.name}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </section>
            </div>

            <StatusBar>
                <StatusBarItem>
                    {move || {
                        selected_item
                            .get()
                            .map(|idx| format!("\"{}\" selected", FINDER_ITEMS[idx].name))
                            .unwrap_or_else(|| format!("{} items", FINDER_ITEMS.len()))
                    }}
                </StatusBarItem>
                <StatusBarItem>"84.21 GB available"</StatusBarItem>
            </StatusBar>
        </div>
    }
}
