use opsdesk_core::RoutePath;

use crate::routes::Route;

/// The seam to the routing layer.
///
/// Only the dispatcher calls `navigate`; everything else at most reads the
/// current path. Keeping this a trait lets tests record navigations without
/// a router.
pub trait Navigator {
    fn current_path(&self) -> RoutePath;
    fn navigate(&mut self, route: &Route);
}
