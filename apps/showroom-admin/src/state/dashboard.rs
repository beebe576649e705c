//! # Dashboard State
//!
//! The overview screen's figures. Read-only after startup, so no mutex.

use showroom_core::seed::demo_dashboard;
use showroom_core::DashboardSnapshot;

#[derive(Debug, Clone)]
pub struct DashboardState {
    snapshot: DashboardSnapshot,
}

impl DashboardState {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        DashboardState { snapshot }
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(demo_dashboard())
    }
}
