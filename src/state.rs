use crate::api::Backend;
use crate::dashboard::DashboardView;
use crate::onboarding::OnboardingForm;
use crate::root::RootController;
use crate::storage::IdentifierStore;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct AppState<B> {
    pub root: RootController,
    pub backend: Arc<B>,
    pub onboarding: Arc<Mutex<OnboardingForm>>,
    // Held across every dashboard load and write, so refreshes queue.
    pub dashboard: Arc<Mutex<Option<DashboardView>>>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            backend: Arc::clone(&self.backend),
            onboarding: Arc::clone(&self.onboarding),
            dashboard: Arc::clone(&self.dashboard),
        }
    }
}

impl<B: Backend> AppState<B> {
    pub fn new(store: Arc<dyn IdentifierStore>, backend: B) -> Self {
        Self {
            root: RootController::new(store),
            backend: Arc::new(backend),
            onboarding: Arc::new(Mutex::new(OnboardingForm::default())),
            dashboard: Arc::new(Mutex::new(None)),
        }
    }
}
