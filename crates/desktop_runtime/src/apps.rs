use desktop_app_contract::{AppKind, AppModule};
use leptos::*;

use crate::model::Size;

use desktop_app_calculator::CalculatorApp;
use desktop_app_finalcut::FinalCutApp;
use desktop_app_finder::FinderApp;
use desktop_app_safari::SafariApp;
use desktop_app_settings::SettingsApp;
use desktop_app_terminal::TerminalApp;
use desktop_app_textedit::TextEditApp;
use desktop_app_xcode::XcodeApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub kind: AppKind,
    pub dock_label: &'static str,
    pub default_size: Size,
}

const APP_REGISTRY: [AppDescriptor; 8] = [
    AppDescriptor {
        kind: AppKind::Finder,
        dock_label: "Finder",
        default_size: Size { w: 700, h: 350 },
    },
    AppDescriptor {
        kind: AppKind::Safari,
        dock_label: "Safari",
        default_size: Size { w: 600, h: 350 },
    },
    AppDescriptor {
        kind: AppKind::Settings,
        dock_label: "System Settings",
        default_size: Size { w: 600, h: 350 },
    },
    AppDescriptor {
        kind: AppKind::Terminal,
        dock_label: "Terminal",
        default_size: Size { w: 600, h: 350 },
    },
    AppDescriptor {
        kind: AppKind::Calculator,
        dock_label: "Calculator",
        default_size: Size { w: 250, h: 430 },
    },
    AppDescriptor {
        kind: AppKind::FinalCut,
        dock_label: "Final Cut Pro",
        default_size: Size { w: 800, h: 450 },
    },
    AppDescriptor {
        kind: AppKind::TextEdit,
        dock_label: "TextEdit",
        default_size: Size { w: 400, h: 300 },
    },
    AppDescriptor {
        kind: AppKind::Xcode,
        dock_label: "Xcode",
        default_size: Size { w: 800, h: 900 },
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(kind: AppKind) -> &'static AppDescriptor {
    app_registry()
        .iter()
        .find(|entry| entry.kind == kind)
        .expect("app descriptor exists")
}

pub fn default_window_size(kind: AppKind) -> Size {
    app_descriptor(kind).default_size
}

/// Resolves a kind to its content module. Content mounts fresh per window
/// instance and receives no desktop state.
fn app_module(kind: AppKind) -> AppModule {
    match kind {
        AppKind::Finder => AppModule::new(|| view! { <FinderApp /> }.into_view()),
        AppKind::Safari => AppModule::new(|| view! { <SafariApp /> }.into_view()),
        AppKind::Settings => AppModule::new(|| view! { <SettingsApp /> }.into_view()),
        AppKind::Terminal => AppModule::new(|| view! { <TerminalApp /> }.into_view()),
        AppKind::Calculator => AppModule::new(|| view! { <CalculatorApp /> }.into_view()),
        AppKind::FinalCut => AppModule::new(|| view! { <FinalCutApp /> }.into_view()),
        AppKind::TextEdit => AppModule::new(|| view! { <TextEditApp /> }.into_view()),
        AppKind::Xcode => AppModule::new(|| view! { <XcodeApp /> }.into_view()),
    }
}

pub fn render_window_contents(kind: AppKind) -> View {
    app_module(kind).mount()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_covers_every_kind_in_dock_order() {
        let kinds: Vec<AppKind> = app_registry().iter().map(|entry| entry.kind).collect();
        assert_eq!(kinds, AppKind::ALL.to_vec());
    }

    #[test]
    fn default_sizes_match_the_catalog() {
        assert_eq!(
            default_window_size(AppKind::Calculator),
            Size { w: 250, h: 430 }
        );
        assert_eq!(
            default_window_size(AppKind::FinalCut),
            Size { w: 800, h: 450 }
        );
        assert_eq!(
            default_window_size(AppKind::Xcode),
            Size { w: 800, h: 900 }
        );
        assert_eq!(
            default_window_size(AppKind::TextEdit),
            Size { w: 400, h: 300 }
        );
        assert_eq!(default_window_size(AppKind::Finder), Size { w: 700, h: 350 });
    }
}
