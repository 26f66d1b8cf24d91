//! Navigation model between the landing page and the step pages.
//!
//! States are the landing page and one state per registry step. From the
//! landing page any step can be selected; from a step the reader can go
//! back to the landing page or forward to the next step (not from the last
//! one). Page links are built from the same registry lookups, so what the
//! markup offers always matches `Location::available`.

use thiserror::Error;

use crate::error::RegistryError;
use crate::registry::StepRegistry;
use crate::site::LANDING_ROUTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Index,
    Step(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Pick card `i` on the landing page.
    Select(usize),
    Back,
    Forward,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("{transition:?} is not available from {from:?}")]
    NotAvailable { from: Location, transition: Transition },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl Location {
    pub fn from_route(registry: &StepRegistry, route: &str) -> Result<Self, RegistryError> {
        if route == LANDING_ROUTE {
            return Ok(Location::Index);
        }
        registry
            .position(route)
            .map(Location::Step)
            .ok_or_else(|| RegistryError::UnknownRoute(route.to_string()))
    }

    pub fn route<'a>(&self, registry: &'a StepRegistry) -> Result<&'a str, RegistryError> {
        match self {
            Location::Index => Ok(LANDING_ROUTE),
            Location::Step(i) => registry.step_at(*i).map(|s| s.route.as_str()),
        }
    }

    /// Transitions offered from this location, in display order.
    pub fn available(&self, registry: &StepRegistry) -> Vec<Transition> {
        match *self {
            Location::Index => (0..registry.len()).map(Transition::Select).collect(),
            Location::Step(i) if i + 1 < registry.len() => vec![Transition::Back, Transition::Forward],
            Location::Step(_) => vec![Transition::Back],
        }
    }

    pub fn apply(self, registry: &StepRegistry, transition: Transition) -> Result<Self, NavigationError> {
        let not_available = NavigationError::NotAvailable { from: self, transition };
        match (self, transition) {
            (Location::Index, Transition::Select(i)) => {
                registry.step_at(i)?;
                Ok(Location::Step(i))
            }
            (Location::Step(i), Transition::Back) => {
                registry.step_at(i)?;
                Ok(Location::Index)
            }
            (Location::Step(i), Transition::Forward) => {
                registry.step_at(i)?;
                if i + 1 < registry.len() {
                    Ok(Location::Step(i + 1))
                } else {
                    Err(not_available)
                }
            }
            _ => Err(not_available),
        }
    }
}
