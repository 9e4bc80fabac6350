//! Query-string boot scenes.
//!
//! `?open=finder,terminal` opens the named applications at mount, giving
//! demos and browser-level checks a deterministic starting desktop without
//! any persistence layer behind it.

use desktop_app_contract::AppKind;
use leptos::logging;

/// Parses the `open` query parameter into an ordered list of app kinds.
/// Unknown slugs are skipped with a warning.
pub fn parse_boot_apps_from_query(query: &str) -> Vec<AppKind> {
    let mut kinds = Vec::new();
    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != "open" {
            continue;
        }
        for slug in value.split(',').map(str::trim).filter(|slug| !slug.is_empty()) {
            match AppKind::from_slug(slug) {
                Some(kind) => kinds.push(kind),
                None => logging::warn!("boot query: unknown app slug `{slug}`"),
            }
        }
    }
    kinds
}

/// Returns the boot apps requested by the current page URL.
pub fn current_boot_apps() -> Vec<AppKind> {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return Vec::new();
        };
        let Ok(search) = window.location().search() else {
            return Vec::new();
        };
        parse_boot_apps_from_query(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_slugs_in_order() {
        assert_eq!(
            parse_boot_apps_from_query("?open=finder,terminal,final-cut"),
            vec![AppKind::Finder, AppKind::Terminal, AppKind::FinalCut]
        );
    }

    #[test]
    fn skips_unknown_slugs_and_other_params() {
        assert_eq!(
            parse_boot_apps_from_query("?theme=dark&open=safari,paint,%20,xcode"),
            vec![AppKind::Safari, AppKind::Xcode]
        );
        assert_eq!(parse_boot_apps_from_query(""), Vec::new());
        assert_eq!(parse_boot_apps_from_query("?open="), Vec::new());
    }
}
