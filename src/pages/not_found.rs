// Fallback page for routes that have no step. `requested` is `None` for the
// exported 404.html, which a static host serves for every missing URL.

use askama::Template;

use crate::error::RenderError;
use crate::registry::{StepRecord, StepRegistry};
use crate::site;

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub page_title: String,
    pub site_icon: &'static str,
    pub requested: Option<&'a str>,
    pub steps: &'a [StepRecord],
    pub landing_route: &'static str,
    pub back_label: &'static str,
}

pub fn render_not_found(registry: &StepRegistry, requested: Option<&str>) -> Result<String, RenderError> {
    let template = NotFoundTemplate {
        page_title: site::page_title("Pagina niet gevonden"),
        site_icon: site::SITE_ICON,
        requested,
        steps: registry.all_steps(),
        landing_route: site::LANDING_ROUTE,
        back_label: site::BACK_LABEL,
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::global;

    #[test]
    fn test_lists_every_step() {
        let reg = global();
        let html = render_not_found(reg, Some("/verdwaald")).unwrap();
        for step in reg.all_steps() {
            assert!(html.contains(&format!("<a href=\"{}\"", step.route)));
        }
        assert!(html.contains("<a href=\"/\" data-nav=\"back\""));
    }

    #[test]
    fn test_requested_path_is_escaped() {
        let html = render_not_found(global(), Some("<script>")).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_without_requested_path() {
        let html = render_not_found(global(), None).unwrap();
        assert!(!html.contains("data-requested"));
        assert!(html.contains("Kies hieronder een stap van de reis."));
        assert!(html.contains("<a href=\"/\" data-nav=\"back\""));
    }
}
