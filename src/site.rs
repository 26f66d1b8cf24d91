//! Site-wide copy and the landing route.

/// Route of the landing page. Every step page links back here.
pub const LANDING_ROUTE: &str = "/";

pub const SITE_ICON: &str = "🧭";
pub const SITE_TITLE: &str = "Reisgids voor leraren";
pub const TAGLINE: &str = "Onderzoek als avontuurlijke reis";

/// Label of the first breadcrumb segment.
pub const BREADCRUMB_ROOT: &str = "Reisgids";

pub const INTRO: [&str; 2] = [
    "Welkom bij jouw persoonlijke gids voor onderzoek in het onderwijs! Net zoals elke goede reis begint met een kaart, begint goed onderzoek met een duidelijke route.",
    "Ontdek de zes essentiële stappen die je helpen om van een onderzoeksvraag naar betekenisvolle resultaten te reizen.",
];

pub const JOURNEY_HEADING: &str = "Jouw onderzoeksreis in vogelvlucht";
pub const JOURNEY_SUBTITLE: &str =
    "Elke stap brengt je dichter bij je bestemming: betekenisvol onderzoek dat impact heeft.";

pub const CTA_HEADING: &str = "Klaar om je onderzoeksreis te beginnen?";
pub const CTA_TEXT: &str =
    "Kies een stap hierboven en start je avontuur in de wereld van onderzoek!";

/// Icon/label pairs shown under the call to action.
pub const CTA_CHECKPOINTS: [(&str, &str); 3] = [
    ("🎒", "Pak je onderzoeksrugzak"),
    ("🗺️", "Volg de kaart"),
    ("🏆", "Bereik je doel"),
];

pub const FOOTER_GREETING: &str = "Veel succes op je onderzoeksreis!";

pub const PLACEHOLDER_HEADING: &str = "📝 Inhoud wordt toegevoegd";
pub const PLACEHOLDER_TEXT: &str =
    "De inhoud van deze stap wordt nog uitgewerkt. Kom binnenkort terug voor opdrachten, voorbeelden en tips.";

pub const BACK_LABEL: &str = "← Terug naar overzicht";

/// Full `<title>` for a page.
pub fn page_title(heading: &str) -> String {
    if heading == SITE_TITLE {
        SITE_TITLE.to_string()
    } else {
        format!("{} • {}", heading, SITE_TITLE)
    }
}
