use crate::api::Backend;
use crate::errors::{ApiError, ValidationError};
use crate::models::{CheckinRequest, CravingRequest, DashboardSnapshot, Intensity, UserId};
use serde::Deserialize;
use tracing::{info, warn};

pub const LOAD_FAILED: &str = "Não foi possível carregar seus dados.";
pub const CHECKIN_FAILED: &str = "Não foi possível registrar o check-in. Tente novamente.";
pub const CRAVING_FAILED: &str = "Não foi possível registrar a vontade. Tente novamente.";
pub const INVALID_INPUT: &str = "Confira os valores informados.";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(DashboardSnapshot),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CravingDraft {
    pub intensity: Intensity,
    pub trigger: String,
    pub note: String,
}

/// Craving fields as posted by the browser.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CravingForm {
    pub intensity: String,
    pub trigger: String,
    pub note: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CheckinForm {
    pub cigarettes_count: String,
}

pub fn parse_count(raw: &str) -> Result<u32, ValidationError> {
    match raw.trim() {
        "" => Ok(0),
        value => value
            .parse()
            .map_err(|_| ValidationError::Negative("cigarettes count")),
    }
}

pub fn parse_intensity(raw: &str) -> Result<Intensity, ValidationError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(Intensity::new)
        .ok_or(ValidationError::Intensity)
}

/// Displayed progress, clamped to 0..=100 at render time.
pub fn progress_percent(raw: f64) -> f64 {
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 100.0) }
}

/// Dashboard state for one identifier.
///
/// Each refresh replaces the load state wholesale. The two write actions
/// refresh exactly once on success and never on failure; either way the view
/// is marked settled so the next render skips its own load.
#[derive(Debug, Clone)]
pub struct DashboardView {
    user_id: UserId,
    pub load: LoadState,
    pub pending_count: u32,
    pub craving: CravingDraft,
    alert: Option<String>,
    settled: bool,
}

impl DashboardView {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            load: LoadState::Loading,
            pending_count: 0,
            craving: CravingDraft::default(),
            alert: None,
            settled: false,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub async fn refresh<B: Backend>(&mut self, backend: &B) {
        self.load = match backend.dashboard(&self.user_id).await {
            Ok(snapshot) => LoadState::Ready(snapshot),
            Err(err) => {
                warn!(user_id = %self.user_id, "dashboard load failed: {err}");
                LoadState::Error(LOAD_FAILED.to_string())
            }
        };
    }

    /// True once after a write action; a render that sees `false` loads a
    /// fresh snapshot first.
    pub fn take_settled(&mut self) -> bool {
        std::mem::take(&mut self.settled)
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Surfaces an input problem without contacting the backend.
    pub fn reject(&mut self, err: ValidationError) {
        warn!(user_id = %self.user_id, "rejected dashboard input: {err}");
        self.alert = Some(INVALID_INPUT.to_string());
        self.settled = true;
    }

    pub async fn submit_checkin<B: Backend>(&mut self, backend: &B) -> Result<(), ApiError> {
        let request = CheckinRequest {
            user_id: self.user_id.clone(),
            cigarettes_count: self.pending_count,
        };
        match backend.checkin(&request).await {
            Ok(()) => {
                info!(user_id = %self.user_id, count = request.cigarettes_count, "check-in recorded");
                self.pending_count = 0;
                self.refresh(backend).await;
                self.settled = true;
                Ok(())
            }
            Err(err) => {
                warn!(user_id = %self.user_id, "check-in failed: {err}");
                self.alert = Some(CHECKIN_FAILED.to_string());
                self.settled = true;
                Err(err)
            }
        }
    }

    pub async fn submit_craving<B: Backend>(&mut self, backend: &B) -> Result<(), ApiError> {
        let request = CravingRequest {
            user_id: self.user_id.clone(),
            intensity: self.craving.intensity,
            trigger: self.craving.trigger.clone(),
            note: self.craving.note.clone(),
        };
        match backend.craving(&request).await {
            Ok(()) => {
                info!(user_id = %self.user_id, intensity = request.intensity.get(), "craving recorded");
                self.craving = CravingDraft::default();
                self.refresh(backend).await;
                self.settled = true;
                Ok(())
            }
            Err(err) => {
                warn!(user_id = %self.user_id, "craving failed: {err}");
                self.alert = Some(CRAVING_FAILED.to_string());
                self.settled = true;
                Err(err)
            }
        }
    }
}
