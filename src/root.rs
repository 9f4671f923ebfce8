use crate::models::UserId;
use crate::storage::IdentifierStore;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Dashboard(UserId),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Dashboard(_) => "dashboard",
        }
    }
}

/// Picks the visible screen from the identifier store and nothing else.
#[derive(Clone)]
pub struct RootController {
    store: Arc<dyn IdentifierStore>,
}

impl RootController {
    pub fn new(store: Arc<dyn IdentifierStore>) -> Self {
        Self { store }
    }

    pub fn screen(&self) -> Screen {
        match self.store.get() {
            Some(id) => Screen::Dashboard(id),
            None => Screen::Onboarding,
        }
    }

    /// True while `id` is still the stored identifier.
    pub fn is_current(&self, id: &UserId) -> bool {
        self.store.get().as_ref() == Some(id)
    }

    pub fn complete_onboarding(&self, id: &UserId) {
        info!(user_id = %id, "switching to dashboard");
        self.store.set(id);
    }

    /// Forgets the local identifier. Nothing is deleted on the backend.
    pub fn reset(&self) {
        info!("resetting to onboarding");
        self.store.clear();
    }
}
