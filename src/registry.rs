//! Step Registry
//!
//! The ordered list of research phases that drives every page of the guide.
//! Built once, validated, then shared read-only: the landing page, the step
//! pages, the navigation model and the exporter all resolve step data here.
//!
//! Public API:
//! - StepRegistry::new(steps) -> Result<Self, RegistryError>
//! - StepRegistry::research_journey() -> Self (the six built-in phases)
//! - global() -> &'static StepRegistry

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::RegistryError;

/// Named colour bundle for a step. Opaque styling data: the renderer only
/// copies these class strings into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Red,
    Blue,
    Green,
    Purple,
    Orange,
    Indigo,
}

impl ColorTheme {
    /// Solid background used for number badges and buttons.
    pub fn primary(&self) -> &'static str {
        match self {
            ColorTheme::Red => "bg-red-500 hover:bg-red-600",
            ColorTheme::Blue => "bg-blue-500 hover:bg-blue-600",
            ColorTheme::Green => "bg-green-500 hover:bg-green-600",
            ColorTheme::Purple => "bg-purple-500 hover:bg-purple-600",
            ColorTheme::Orange => "bg-orange-500 hover:bg-orange-600",
            ColorTheme::Indigo => "bg-indigo-500 hover:bg-indigo-600",
        }
    }

    /// Card background and border.
    pub fn light(&self) -> &'static str {
        match self {
            ColorTheme::Red => "bg-red-50 border-red-200",
            ColorTheme::Blue => "bg-blue-50 border-blue-200",
            ColorTheme::Green => "bg-green-50 border-green-200",
            ColorTheme::Purple => "bg-purple-50 border-purple-200",
            ColorTheme::Orange => "bg-orange-50 border-orange-200",
            ColorTheme::Indigo => "bg-indigo-50 border-indigo-200",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ColorTheme::Red => "text-red-700",
            ColorTheme::Blue => "text-blue-700",
            ColorTheme::Green => "text-green-700",
            ColorTheme::Purple => "text-purple-700",
            ColorTheme::Orange => "text-orange-700",
            ColorTheme::Indigo => "text-indigo-700",
        }
    }

    /// Tailwind colour name, used to build gradient stops (`from-red-50`).
    pub fn name(&self) -> &'static str {
        match self {
            ColorTheme::Red => "red",
            ColorTheme::Blue => "blue",
            ColorTheme::Green => "green",
            ColorTheme::Purple => "purple",
            ColorTheme::Orange => "orange",
            ColorTheme::Indigo => "indigo",
        }
    }
}

/// One phase of the research journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub theme: ColorTheme,
    pub route: String,
}

impl StepRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        theme: ColorTheme,
        route: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            theme,
            route: route.into(),
        }
    }

    /// Route without the leading slash (`/verkennen` -> `verkennen`).
    pub fn slug(&self) -> &str {
        self.route.trim_start_matches('/')
    }
}

/// Ordered, validated sequence of steps with an O(1) route index.
#[derive(Debug, Clone)]
pub struct StepRegistry {
    steps: Vec<StepRecord>,
    by_route: FxHashMap<String, usize>,
}

impl StepRegistry {
    /// Validate and index a list of steps. Order is kept as given and
    /// determines both display order and "next step" linkage.
    pub fn new(steps: Vec<StepRecord>) -> Result<Self, RegistryError> {
        if steps.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut by_route = FxHashMap::default();
        let mut titles = FxHashMap::default();

        for (idx, step) in steps.iter().enumerate() {
            validate_route(&step.route)?;

            if by_route.insert(step.route.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateRoute(step.route.clone()));
            }
            if titles.insert(step.title.as_str(), idx).is_some() {
                return Err(RegistryError::DuplicateTitle(step.title.clone()));
            }
        }

        Ok(Self { steps, by_route })
    }

    /// The six phases of the teachers' research guide.
    pub fn research_journey() -> Self {
        let steps = research_journey_steps();
        let by_route = steps
            .iter()
            .enumerate()
            .map(|(idx, step)| (step.route.clone(), idx))
            .collect();
        Self { steps, by_route }
    }

    pub fn all_steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a constructed registry; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_at(&self, index: usize) -> Result<&StepRecord, RegistryError> {
        self.steps.get(index).ok_or(RegistryError::OutOfRange {
            index,
            len: self.steps.len(),
        })
    }

    pub fn position(&self, route: &str) -> Option<usize> {
        self.by_route.get(route).copied()
    }

    /// Route of the step after `route`, or `None` when `route` is the last step.
    pub fn next_route(&self, route: &str) -> Result<Option<&str>, RegistryError> {
        let idx = self
            .position(route)
            .ok_or_else(|| RegistryError::UnknownRoute(route.to_string()))?;
        Ok(self.steps.get(idx + 1).map(|s| s.route.as_str()))
    }

    /// Resolve the step page for a route. Fails with `UnknownStep` when no
    /// page exists for it.
    pub fn resolve_step(&self, route: &str) -> Result<(usize, &StepRecord), RegistryError> {
        self.position(route)
            .map(|idx| (idx, &self.steps[idx]))
            .ok_or_else(|| RegistryError::UnknownStep(route.to_string()))
    }
}

/// Process-wide registry, built on first use.
pub fn global() -> &'static StepRegistry {
    static REGISTRY: OnceLock<StepRegistry> = OnceLock::new();
    REGISTRY.get_or_init(StepRegistry::research_journey)
}

/// First path segments the server answers itself; a step cannot live there.
pub const RESERVED_SLUGS: [&str; 2] = ["health", "api"];

fn validate_route(route: &str) -> Result<(), RegistryError> {
    let invalid = |reason| RegistryError::InvalidRoute {
        route: route.to_string(),
        reason,
    };

    let slug = route
        .strip_prefix('/')
        .ok_or_else(|| invalid("must start with '/'"))?;
    if slug.is_empty() {
        return Err(invalid("the landing route cannot be a step"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid("slug may only contain a-z, 0-9 and '-'"));
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err(invalid("slug is reserved by the server"));
    }
    Ok(())
}

fn research_journey_steps() -> Vec<StepRecord> {
    vec![
        StepRecord::new(
            "Verantwoorden",
            "Waarom is dit onderzoek belangrijk?",
            "🎯",
            ColorTheme::Red,
            "/verantwoorden",
        ),
        StepRecord::new(
            "Verkennen",
            "Wat is er al bekend over dit onderwerp?",
            "🔍",
            ColorTheme::Blue,
            "/verkennen",
        ),
        StepRecord::new(
            "Verdiepen",
            "Hoe ga je dieper graven in de materie?",
            "⛏️",
            ColorTheme::Green,
            "/verdiepen",
        ),
        StepRecord::new(
            "Verbeelden",
            "Hoe visualiseer je je bevindingen?",
            "🎨",
            ColorTheme::Purple,
            "/verbeelden",
        ),
        StepRecord::new(
            "Verbinden",
            "Hoe koppel je theorie aan praktijk?",
            "🔗",
            ColorTheme::Orange,
            "/verbinden",
        ),
        StepRecord::new(
            "Vormgeven",
            "Hoe geef je vorm aan je onderzoeksresultaten?",
            "🏗️",
            ColorTheme::Indigo,
            "/vormgeven",
        ),
    ]
}
