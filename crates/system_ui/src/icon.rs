//! Centralized inline-SVG icon set.
//!
//! Icons are hand-drawn 24x24 stroke glyphs; the stylesheet colors them via
//! `currentColor`. Keep the set small and shared rather than letting apps
//! inline their own SVG.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named glyphs available to the shell and apps.
pub enum IconName {
    /// Apple-logo stand-in for the leftmost menu.
    Apple,
    /// Battery level glyph.
    Battery,
    /// Wi-fi arcs.
    Wifi,
    /// Magnifying glass.
    Search,
    /// Control-center toggles.
    Toggles,
    /// Left chevron.
    ChevronLeft,
    /// Right chevron.
    ChevronRight,
    /// Close cross.
    Dismiss,
    /// Minimize dash.
    Minus,
    /// Maximize corner arrows.
    Expand,
    /// Icon-grid view toggle.
    Grid,
    /// List view toggle.
    List,
    /// Column view toggle.
    Columns,
    /// Sidebar toggle.
    Sidebar,
    /// Share/export arrow.
    Share,
    /// Plus.
    Plus,
    /// Playback triangle.
    Play,
    /// Document sheet.
    Document,
    /// Folder.
    Folder,
}

impl IconName {
    /// Stable token rendered into the `data-ui-icon` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Battery => "battery",
            Self::Wifi => "wifi",
            Self::Search => "search",
            Self::Toggles => "toggles",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Dismiss => "dismiss",
            Self::Minus => "minus",
            Self::Expand => "expand",
            Self::Grid => "grid",
            Self::List => "list",
            Self::Columns => "columns",
            Self::Sidebar => "sidebar",
            Self::Share => "share",
            Self::Plus => "plus",
            Self::Play => "play",
            Self::Document => "document",
            Self::Folder => "folder",
        }
    }

    fn shapes(self) -> View {
        match self {
            Self::Apple => view! {
                <circle cx="10.2" cy="13.2" r="6.2" fill="currentColor" stroke="none" />
                <circle cx="13.8" cy="13.2" r="6.2" fill="currentColor" stroke="none" />
                <path d="M12 7.4 C12 5 13.6 3.4 15.6 3 C15.8 5.2 14.2 7 12 7.4 Z" fill="currentColor" stroke="none" />
            }
            .into_view(),
            Self::Battery => view! {
                <rect x="2" y="8" width="17" height="8" rx="2" />
                <rect x="4" y="10" width="12" height="4" fill="currentColor" stroke="none" />
                <path d="M21 10.5 V13.5" />
            }
            .into_view(),
            Self::Wifi => view! {
                <path d="M4 10.5 C8.5 6.2 15.5 6.2 20 10.5" />
                <path d="M7 14 C10 11.2 14 11.2 17 14" />
                <circle cx="12" cy="17.6" r="1.4" fill="currentColor" stroke="none" />
            }
            .into_view(),
            Self::Search => view! {
                <circle cx="11" cy="11" r="6.5" />
                <path d="M15.8 15.8 L20.5 20.5" />
            }
            .into_view(),
            Self::Toggles => view! {
                <path d="M4 8 H20" />
                <circle cx="15" cy="8" r="2.6" fill="currentColor" stroke="none" />
                <path d="M4 16 H20" />
                <circle cx="9" cy="16" r="2.6" fill="currentColor" stroke="none" />
            }
            .into_view(),
            Self::ChevronLeft => view! { <path d="M14.5 6 L8.5 12 L14.5 18" /> }.into_view(),
            Self::ChevronRight => view! { <path d="M9.5 6 L15.5 12 L9.5 18" /> }.into_view(),
            Self::Dismiss => view! { <path d="M7 7 L17 17 M17 7 L7 17" /> }.into_view(),
            Self::Minus => view! { <path d="M6 12 H18" /> }.into_view(),
            Self::Expand => view! {
                <path d="M14 5 H19 V10" />
                <path d="M10 19 H5 V14" />
                <path d="M19 5 L13.5 10.5 M5 19 L10.5 13.5" />
            }
            .into_view(),
            Self::Grid => view! {
                <rect x="5" y="5" width="6" height="6" rx="1" />
                <rect x="13" y="5" width="6" height="6" rx="1" />
                <rect x="5" y="13" width="6" height="6" rx="1" />
                <rect x="13" y="13" width="6" height="6" rx="1" />
            }
            .into_view(),
            Self::List => view! {
                <path d="M9 7 H19 M9 12 H19 M9 17 H19" />
                <circle cx="5.5" cy="7" r="1" fill="currentColor" stroke="none" />
                <circle cx="5.5" cy="12" r="1" fill="currentColor" stroke="none" />
                <circle cx="5.5" cy="17" r="1" fill="currentColor" stroke="none" />
            }
            .into_view(),
            Self::Columns => view! {
                <rect x="4" y="5" width="16" height="14" rx="1.5" />
                <path d="M9.5 5 V19 M14.5 5 V19" />
            }
            .into_view(),
            Self::Sidebar => view! {
                <rect x="4" y="5" width="16" height="14" rx="1.5" />
                <path d="M9.5 5 V19" />
            }
            .into_view(),
            Self::Share => view! {
                <path d="M12 14 V4" />
                <path d="M8.5 7 L12 3.5 L15.5 7" />
                <path d="M7 10 H5.5 V20 H18.5 V10 H17" />
            }
            .into_view(),
            Self::Plus => view! { <path d="M12 5 V19 M5 12 H19" /> }.into_view(),
            Self::Play => {
                view! { <path d="M8 5.5 L18.5 12 L8 18.5 Z" fill="currentColor" stroke="none" /> }
                    .into_view()
            }
            Self::Document => view! {
                <path d="M7 3.5 H14 L18 7.5 V20.5 H7 Z" />
                <path d="M14 3.5 V7.5 H18" />
            }
            .into_view(),
            Self::Folder => view! {
                <path d="M3.5 7 C3.5 6 4.3 5.2 5.3 5.2 H9.5 L11.5 7.5 H18.7 C19.7 7.5 20.5 8.3 20.5 9.3 V17 C20.5 18 19.7 18.8 18.7 18.8 H5.3 C4.3 18.8 3.5 18 3.5 17 Z" />
            }
            .into_view(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing steps.
pub enum IconSize {
    /// 10px, titlebar control glyphs.
    Xs,
    /// 13px, menu bar status items.
    Sm,
    /// 16px, toolbar buttons.
    Md,
    /// 22px, prominent surfaces.
    Lg,
}

impl IconSize {
    const fn px(self) -> i32 {
        match self {
            Self::Xs => 10,
            Self::Sm => 13,
            Self::Md => 16,
            Self::Lg => 22,
        }
    }
}

#[component]
/// Inline SVG icon.
pub fn Icon(
    /// Glyph to render.
    icon: IconName,
    /// Rendered square size.
    #[prop(default = IconSize::Md)]
    size: IconSize,
) -> impl IntoView {
    view! {
        <svg
            class="ui-icon"
            data-ui-icon=icon.token()
            width=size.px()
            height=size.px()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.6"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.shapes()}
        </svg>
    }
}
