//! Shared contract types between the desktop window-manager runtime and the
//! application content crates.
//!
//! The runtime hosts each application's view as an opaque component: content
//! crates export a plain Leptos component, the runtime registry wraps its
//! constructor in an [`AppModule`], and nothing else crosses the boundary.
//! Apps never receive desktop state and never call back into the window
//! manager directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// The fixed set of hosted applications.
pub enum AppKind {
    /// File manager mockup.
    Finder,
    /// Browser mockup.
    Safari,
    /// System settings mockup.
    Settings,
    /// Terminal mockup.
    Terminal,
    /// Calculator mockup.
    Calculator,
    /// Video editor mockup.
    FinalCut,
    /// Plain text editor mockup.
    TextEdit,
    /// Code editor mockup.
    Xcode,
}

impl AppKind {
    /// Every application kind, in dock order.
    pub const ALL: [AppKind; 8] = [
        Self::Finder,
        Self::Safari,
        Self::Settings,
        Self::Terminal,
        Self::Calculator,
        Self::FinalCut,
        Self::TextEdit,
        Self::Xcode,
    ];

    /// Default window title for the kind.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Finder => "Finder",
            Self::Safari => "Safari",
            Self::Settings => "System Settings",
            Self::Terminal => "Terminal",
            Self::Calculator => "Calculator",
            Self::FinalCut => "Final Cut Pro",
            Self::TextEdit => "TextEdit",
            Self::Xcode => "Xcode",
        }
    }

    /// Stable slug used by boot-query parsing and CSS hooks.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Safari => "safari",
            Self::Settings => "settings",
            Self::Terminal => "terminal",
            Self::Calculator => "calculator",
            Self::FinalCut => "final-cut",
            Self::TextEdit => "textedit",
            Self::Xcode => "xcode",
        }
    }

    /// Resolves a slug back to a kind.
    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == raw.trim())
    }

    /// Stable icon identifier consumed by the dock stylesheet.
    pub const fn icon_id(self) -> &'static str {
        self.slug()
    }

    /// Preferred content color scheme for windows of this kind.
    pub const fn color_scheme(self) -> ColorScheme {
        match self {
            Self::Terminal | Self::Calculator | Self::FinalCut | Self::Xcode => ColorScheme::Dark,
            Self::Finder | Self::Safari | Self::Settings | Self::TextEdit => ColorScheme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Content color scheme applied to a window body.
pub enum ColorScheme {
    /// Light chrome and surfaces.
    Light,
    /// Dark chrome and surfaces.
    Dark,
}

impl ColorScheme {
    /// Stable token rendered into the frame's `data-scheme` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Static content constructor used by the runtime app registry.
pub type AppMountFn = fn() -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable content module descriptor for one application kind.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a content constructor.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Builds a fresh content view for one window instance.
    pub fn mount(self) -> View {
        (self.mount_fn)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_for_every_kind() {
        for kind in AppKind::ALL {
            assert_eq!(AppKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(AppKind::from_slug("  terminal "), Some(AppKind::Terminal));
        assert_eq!(AppKind::from_slug("paint"), None);
    }

    #[test]
    fn dark_scheme_matches_the_catalog() {
        let dark: Vec<AppKind> = AppKind::ALL
            .into_iter()
            .filter(|kind| kind.color_scheme() == ColorScheme::Dark)
            .collect();
        assert_eq!(
            dark,
            vec![
                AppKind::Terminal,
                AppKind::Calculator,
                AppKind::FinalCut,
                AppKind::Xcode
            ]
        );
    }
}
