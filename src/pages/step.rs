//! Step detail page
//!
//! One template serves every step. The page resolves its record from the
//! registry by route, so titles, icons and descriptions are never restated
//! per page.

use askama::Template;

use crate::error::RenderError;
use crate::registry::{ColorTheme, StepRecord, StepRegistry};
use crate::site;

const BACK_CLASSES: &str = "bg-gray-500 hover:bg-gray-600";

/// `index → current step` trail. The root segment links to the landing
/// page; the current segment is plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb<'a> {
    pub root_icon: &'static str,
    pub root_label: &'static str,
    pub root_href: &'static str,
    pub current_icon: &'a str,
    pub current_title: &'a str,
}

impl<'a> Breadcrumb<'a> {
    pub fn for_step(step: &'a StepRecord) -> Self {
        Self {
            root_icon: site::SITE_ICON,
            root_label: site::BREADCRUMB_ROOT,
            root_href: site::LANDING_ROUTE,
            current_icon: &step.icon,
            current_title: &step.title,
        }
    }

    /// Plain-text trail, e.g. "Reisgids → Verantwoorden".
    pub fn trail(&self) -> String {
        format!("{} → {}", self.root_label, self.current_title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink<'a> {
    pub href: &'a str,
    pub label: String,
    pub classes: &'static str,
}

#[derive(Template)]
#[template(path = "pages/step.html")]
pub struct StepTemplate<'a> {
    pub page_title: String,
    pub step: &'a StepRecord,
    /// 1-based position in the journey.
    pub number: usize,
    pub breadcrumb: Breadcrumb<'a>,
    pub back: NavLink<'static>,
    pub forward: Option<NavLink<'a>>,
    /// Background gradient end: the next step's theme, or the step's own on the last page.
    pub gradient_to: ColorTheme,
    pub placeholder_heading: &'static str,
    pub placeholder_text: &'static str,
}

impl<'a> StepTemplate<'a> {
    pub fn for_route(registry: &'a StepRegistry, route: &str) -> Result<Self, RenderError> {
        let (idx, step) = registry.resolve_step(route)?;

        let next = match registry.next_route(&step.route)? {
            Some(next_route) => registry.resolve_step(next_route).map(|(_, s)| Some(s))?,
            None => None,
        };

        let forward = next.map(|next| NavLink {
            href: &next.route,
            label: format!("Volgende: {} →", next.title),
            classes: next.theme.primary(),
        });

        Ok(Self {
            page_title: site::page_title(&step.title),
            step,
            number: idx + 1,
            breadcrumb: Breadcrumb::for_step(step),
            back: NavLink {
                href: site::LANDING_ROUTE,
                label: site::BACK_LABEL.to_string(),
                classes: BACK_CLASSES,
            },
            forward,
            gradient_to: next.map_or(step.theme, |n| n.theme),
            placeholder_heading: site::PLACEHOLDER_HEADING,
            placeholder_text: site::PLACEHOLDER_TEXT,
        })
    }
}

/// Render the page for `route`. Unknown routes fail with `UnknownStep`.
pub fn render_step(registry: &StepRegistry, route: &str) -> Result<String, RenderError> {
    Ok(StepTemplate::for_route(registry, route)?.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::registry::global;

    fn forward_href(html: &str) -> Option<&str> {
        let end = html.find("\" data-nav=\"forward\"")?;
        let start = html[..end].rfind("href=\"")? + "href=\"".len();
        Some(&html[start..end])
    }

    #[test]
    fn test_first_step_scenario() {
        let reg = global();
        let template = StepTemplate::for_route(reg, "/verantwoorden").unwrap();
        assert_eq!(template.breadcrumb.trail(), "Reisgids → Verantwoorden");
        assert_eq!(template.back.href, "/");
        assert_eq!(template.forward.as_ref().map(|f| f.href), Some("/verkennen"));

        let html = template.render().unwrap();
        assert!(html.contains("data-trail=\"Reisgids → Verantwoorden\""));
        assert!(html.contains("<a href=\"/\" data-breadcrumb=\"root\""));
        assert!(html.contains("<a href=\"/\" data-nav=\"back\""));
        assert!(html.contains("Volgende: Verkennen →"));
        assert!(html.contains("Stap 1: Verantwoorden"));
        assert!(html.contains("<title>Verantwoorden • Reisgids voor leraren</title>"));
        assert_eq!(forward_href(&html), Some("/verkennen"));
    }

    #[test]
    fn test_forward_links_follow_registry() {
        let reg = global();
        for i in 0..reg.len() - 1 {
            let html = render_step(reg, &reg.step_at(i).unwrap().route).unwrap();
            assert_eq!(forward_href(&html), Some(reg.step_at(i + 1).unwrap().route.as_str()));
        }
    }

    #[test]
    fn test_last_step_has_no_forward() {
        let reg = global();
        let template = StepTemplate::for_route(reg, "/vormgeven").unwrap();
        assert!(template.forward.is_none());
        assert_eq!(template.gradient_to, ColorTheme::Indigo);

        let html = template.render().unwrap();
        assert!(!html.contains("data-nav=\"forward\""));
        assert!(!html.contains("Volgende:"));
        assert!(html.contains("<a href=\"/\" data-nav=\"back\""));
    }

    #[test]
    fn test_every_page_links_back_to_index() {
        let reg = global();
        for step in reg.all_steps() {
            let html = render_step(reg, &step.route).unwrap();
            assert_eq!(html.matches("data-nav=\"back\"").count(), 1);
            assert!(html.contains("<a href=\"/\" data-nav=\"back\""));
        }
    }

    #[test]
    fn test_breadcrumb_current_is_not_a_link() {
        let html = render_step(global(), "/verbinden").unwrap();
        assert!(html.contains("<span data-breadcrumb=\"current\" aria-current=\"page\""));
        assert!(html.contains("🔗 Verbinden</span>"));
    }

    #[test]
    fn test_forward_uses_next_theme() {
        let template = StepTemplate::for_route(global(), "/verantwoorden").unwrap();
        assert_eq!(template.gradient_to, ColorTheme::Blue);
        assert_eq!(template.forward.unwrap().classes, "bg-blue-500 hover:bg-blue-600");
    }

    #[test]
    fn test_placeholder_is_marked() {
        let html = render_step(global(), "/verdiepen").unwrap();
        assert!(html.contains("data-placeholder"));
        assert!(html.contains("📝 Inhoud wordt toegevoegd"));
    }

    #[test]
    fn test_unknown_step() {
        let err = render_step(global(), "/verdwalen").unwrap_err();
        assert!(matches!(
            err,
            RenderError::Registry(RegistryError::UnknownStep(ref r)) if r == "/verdwalen"
        ));
    }
}
