use crate::api::Backend;
use crate::errors::ApiError;
use crate::models::{
    Badge, CheckinRequest, CravingRequest, DashboardSnapshot, PlanInput, Savings, SnapshotStats,
    SnapshotUser, UserId,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

pub fn snapshot(progress: f64) -> DashboardSnapshot {
    DashboardSnapshot {
        user: SnapshotUser {
            name: "Ana".into(),
            currency: "R$".into(),
        },
        stats: SnapshotStats {
            days_since_quit: 12,
            current_streak: 5,
            smoke_free_days: 10,
            savings: Savings { amount: 48.0 },
            expected_daily_spend: 4.0,
            progress,
        },
        badges: vec![Badge {
            icon: Some("🏅".into()),
            name: "Uma semana".into(),
            description: "7 dias sem fumar".into(),
        }],
    }
}

/// Scripted backend that counts calls. Plan creation and dashboard loads can
/// be held open with [`FakeBackend::gated`] to observe behaviour mid-request.
pub struct FakeBackend {
    create_result: Mutex<Result<UserId, ApiError>>,
    dashboard_result: Mutex<Result<DashboardSnapshot, ApiError>>,
    checkin_result: Mutex<Result<(), ApiError>>,
    craving_result: Mutex<Result<(), ApiError>>,
    last_checkin: Mutex<Option<CheckinRequest>>,
    last_craving: Mutex<Option<CravingRequest>>,
    create_calls: AtomicUsize,
    dashboard_calls: AtomicUsize,
    checkin_calls: AtomicUsize,
    craving_calls: AtomicUsize,
    gate: Option<Gate>,
}

pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            create_result: Mutex::new(Ok(UserId::from("u1"))),
            dashboard_result: Mutex::new(Ok(snapshot(50.0))),
            checkin_result: Mutex::new(Ok(())),
            craving_result: Mutex::new(Ok(())),
            last_checkin: Mutex::new(None),
            last_craving: Mutex::new(None),
            create_calls: AtomicUsize::new(0),
            dashboard_calls: AtomicUsize::new(0),
            checkin_calls: AtomicUsize::new(0),
            craving_calls: AtomicUsize::new(0),
            gate: None,
        }
    }
}

impl FakeBackend {
    pub fn gated() -> Self {
        Self {
            gate: Some(Gate {
                entered: Notify::new(),
                release: Notify::new(),
            }),
            ..Self::default()
        }
    }

    pub fn gate(&self) -> &Gate {
        self.gate.as_ref().expect("backend is not gated")
    }

    pub fn set_create_result(&self, result: Result<UserId, ApiError>) {
        *self.create_result.lock().unwrap() = result;
    }

    pub fn set_dashboard_result(&self, result: Result<DashboardSnapshot, ApiError>) {
        *self.dashboard_result.lock().unwrap() = result;
    }

    pub fn set_checkin_result(&self, result: Result<(), ApiError>) {
        *self.checkin_result.lock().unwrap() = result;
    }

    pub fn set_craving_result(&self, result: Result<(), ApiError>) {
        *self.craving_result.lock().unwrap() = result;
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn dashboard_calls(&self) -> usize {
        self.dashboard_calls.load(Ordering::SeqCst)
    }

    pub fn checkin_calls(&self) -> usize {
        self.checkin_calls.load(Ordering::SeqCst)
    }

    pub fn craving_calls(&self) -> usize {
        self.craving_calls.load(Ordering::SeqCst)
    }

    pub fn last_checkin(&self) -> Option<CheckinRequest> {
        self.last_checkin.lock().unwrap().clone()
    }

    pub fn last_craving(&self) -> Option<CravingRequest> {
        self.last_craving.lock().unwrap().clone()
    }

    async fn hold(&self) {
        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
    }
}

impl Backend for FakeBackend {
    async fn create_user(&self, _plan: &PlanInput) -> Result<UserId, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.hold().await;
        self.create_result.lock().unwrap().clone()
    }

    async fn dashboard(&self, _user_id: &UserId) -> Result<DashboardSnapshot, ApiError> {
        self.dashboard_calls.fetch_add(1, Ordering::SeqCst);
        self.hold().await;
        self.dashboard_result.lock().unwrap().clone()
    }

    async fn checkin(&self, request: &CheckinRequest) -> Result<(), ApiError> {
        self.checkin_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_checkin.lock().unwrap() = Some(request.clone());
        self.checkin_result.lock().unwrap().clone()
    }

    async fn craving(&self, request: &CravingRequest) -> Result<(), ApiError> {
        self.craving_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_craving.lock().unwrap() = Some(request.clone());
        self.craving_result.lock().unwrap().clone()
    }
}
