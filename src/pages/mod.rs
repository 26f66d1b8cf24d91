//! Page rendering with Askama
//!
//! Every page is a pure function of the step registry: the same registry and
//! route always produce the same markup.
//!
//! - `home`: card grid + journey strip for the landing page
//! - `step`: one generic template for every step page
//! - `not_found`: shown for routes outside the registry

pub mod home;
pub mod not_found;
pub mod step;

pub use home::{render_home, HomeTemplate};
pub use not_found::{render_not_found, NotFoundTemplate};
pub use step::{render_step, Breadcrumb, NavLink, StepTemplate};

use crate::error::RenderError;
use crate::registry::StepRegistry;
use crate::site::LANDING_ROUTE;

/// Dispatch a route to the landing page or the matching step page.
pub fn render_route(registry: &StepRegistry, route: &str) -> Result<String, RenderError> {
    if route == LANDING_ROUTE {
        render_home(registry)
    } else {
        render_step(registry, route)
    }
}
