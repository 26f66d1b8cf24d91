// Landing page: one card per step plus the condensed journey strip.

use askama::Template;

use crate::error::RenderError;
use crate::registry::{StepRecord, StepRegistry};
use crate::site;

/// Card in the step grid. `number` is 1-based.
pub struct StepCard<'a> {
    pub number: usize,
    pub step: &'a StepRecord,
}

/// Entry in the journey strip; `connector` is false only for the last step.
pub struct JourneyStop<'a> {
    pub step: &'a StepRecord,
    pub connector: bool,
}

pub struct Checkpoint {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub page_title: String,
    pub site_icon: &'static str,
    pub site_title: &'static str,
    pub tagline: &'static str,
    pub intro: Vec<&'static str>,
    pub cards: Vec<StepCard<'a>>,
    pub journey: Vec<JourneyStop<'a>>,
    pub journey_heading: &'static str,
    pub journey_subtitle: &'static str,
    pub cta_heading: &'static str,
    pub cta_text: &'static str,
    pub checkpoints: Vec<Checkpoint>,
    pub footer_greeting: &'static str,
}

impl<'a> HomeTemplate<'a> {
    pub fn from_registry(registry: &'a StepRegistry) -> Self {
        let steps = registry.all_steps();

        let cards = steps
            .iter()
            .enumerate()
            .map(|(idx, step)| StepCard { number: idx + 1, step })
            .collect();

        let journey = steps
            .iter()
            .enumerate()
            .map(|(idx, step)| JourneyStop {
                step,
                connector: idx + 1 < steps.len(),
            })
            .collect();

        Self {
            page_title: site::page_title(site::SITE_TITLE),
            site_icon: site::SITE_ICON,
            site_title: site::SITE_TITLE,
            tagline: site::TAGLINE,
            intro: site::INTRO.to_vec(),
            cards,
            journey,
            journey_heading: site::JOURNEY_HEADING,
            journey_subtitle: site::JOURNEY_SUBTITLE,
            cta_heading: site::CTA_HEADING,
            cta_text: site::CTA_TEXT,
            checkpoints: site::CTA_CHECKPOINTS
                .iter()
                .map(|&(icon, label)| Checkpoint { icon, label })
                .collect(),
            footer_greeting: site::FOOTER_GREETING,
        }
    }
}

pub fn render_home(registry: &StepRegistry) -> Result<String, RenderError> {
    Ok(HomeTemplate::from_registry(registry).render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{global, ColorTheme};

    fn positions(html: &str, needles: &[String]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| html.find(n.as_str()).unwrap_or_else(|| panic!("missing {n}")))
            .collect()
    }

    #[test]
    fn test_card_and_strip_counts() {
        let reg = global();
        let html = render_home(reg).unwrap();

        assert_eq!(html.matches("data-step-card=").count(), reg.len());
        assert_eq!(html.matches("data-journey-stop=").count(), reg.len());
        assert_eq!(html.matches("data-journey-connector").count(), reg.len() - 1);
    }

    #[test]
    fn test_cards_in_registry_order() {
        let reg = global();
        let html = render_home(reg).unwrap();

        let cards: Vec<String> = reg
            .all_steps()
            .iter()
            .enumerate()
            .map(|(i, s)| format!("<a href=\"{}\" data-step-card=\"{}\"", s.route, i + 1))
            .collect();
        let pos = positions(&html, &cards);
        assert!(pos.windows(2).all(|w| w[0] < w[1]));

        let stops: Vec<String> = reg
            .all_steps()
            .iter()
            .map(|s| format!("data-journey-stop=\"{}\"", s.slug()))
            .collect();
        let pos = positions(&html, &stops);
        assert!(pos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_last_stop_has_no_connector() {
        let html = render_home(global()).unwrap();
        let last_stop = html.find("data-journey-stop=\"vormgeven\"").unwrap();
        assert!(!html[last_stop..].contains("data-journey-connector"));
    }

    #[test]
    fn test_card_content() {
        let html = render_home(global()).unwrap();
        assert!(html.contains("<title>Reisgids voor leraren</title>"));
        assert!(html.contains("Start Verantwoorden"));
        assert!(html.contains("Hoe visualiseer je je bevindingen?"));
        assert!(html.contains("bg-purple-50 border-purple-200"));
        assert!(html.contains("Jouw onderzoeksreis in vogelvlucht"));
        assert!(html.contains("Pak je onderzoeksrugzak"));
    }

    #[test]
    fn test_custom_registry() {
        let reg = StepRegistry::new(vec![
            StepRecord::new("Alpha", "Eerste", "1", ColorTheme::Green, "/alpha"),
            StepRecord::new("Beta", "Tweede", "2", ColorTheme::Red, "/beta"),
        ])
        .unwrap();
        let template = HomeTemplate::from_registry(&reg);

        assert_eq!(template.cards.len(), 2);
        assert_eq!(template.cards[1].number, 2);
        assert!(template.journey[0].connector);
        assert!(!template.journey[1].connector);
    }
}
