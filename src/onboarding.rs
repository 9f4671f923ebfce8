use crate::api::Backend;
use crate::errors::{ApiError, ValidationError};
use crate::models::{PlanInput, UserId};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

pub const CREATE_FAILED: &str = "Não foi possível criar seu plano. Tente novamente.";
pub const INVALID_PLAN: &str = "Confira os dados do plano.";
pub const DEFAULT_CURRENCY: &str = "R$";

/// Raw onboarding fields exactly as typed by the user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlanDraft {
    pub name: String,
    pub quit_date: String,
    pub daily_cig_before: String,
    pub price_per_pack: String,
    pub cigs_per_pack: String,
    pub currency: String,
}

impl Default for PlanDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            quit_date: String::new(),
            daily_cig_before: String::new(),
            price_per_pack: String::new(),
            cigs_per_pack: "20".into(),
            currency: DEFAULT_CURRENCY.into(),
        }
    }
}

impl PlanDraft {
    pub fn validate(&self) -> Result<PlanInput, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let quit_date = NaiveDate::parse_from_str(self.quit_date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::MissingQuitDate)?;

        let daily_cig_before = parse_or_zero::<u32>(&self.daily_cig_before)
            .ok_or(ValidationError::Negative("daily cigarettes"))?;

        let price_per_pack = parse_or_zero::<f64>(&self.price_per_pack)
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or(ValidationError::Negative("price per pack"))?;

        let cigs_per_pack = parse_or_zero::<u32>(&self.cigs_per_pack)
            .filter(|count| *count > 0)
            .ok_or(ValidationError::EmptyPack)?;

        let currency = match self.currency.trim() {
            "" => DEFAULT_CURRENCY.to_string(),
            other => other.to_string(),
        };

        Ok(PlanInput {
            name: name.to_string(),
            quit_date,
            daily_cig_before,
            price_per_pack,
            cigs_per_pack,
            currency,
        })
    }
}

// An empty numeric field counts as zero, like a cleared number input.
fn parse_or_zero<T: std::str::FromStr + Default>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(T::default());
    }
    raw.parse().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Editing { error: Option<String> },
    Submitting,
    Created(UserId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingForm {
    pub draft: PlanDraft,
    pub state: FormState,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            draft: PlanDraft::default(),
            state: FormState::Editing { error: None },
        }
    }
}

impl OnboardingForm {
    pub fn edit(&mut self, draft: PlanDraft) {
        if matches!(self.state, FormState::Editing { .. }) {
            self.draft = draft;
        }
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.state, FormState::Editing { .. }) && self.draft.validate().is_ok()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FormState::Editing { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Moves to `Submitting` and hands back the plan to send. A draft that
    /// fails the gate stays in `Editing` with a hint and nothing is sent.
    pub fn begin_submit(&mut self) -> Option<PlanInput> {
        if !matches!(self.state, FormState::Editing { .. }) {
            return None;
        }
        match self.draft.validate() {
            Ok(plan) => {
                self.state = FormState::Submitting;
                Some(plan)
            }
            Err(err) => {
                warn!("onboarding input rejected: {err}");
                self.state = FormState::Editing {
                    error: Some(INVALID_PLAN.to_string()),
                };
                None
            }
        }
    }

    /// Applies the backend answer to a form in `Submitting`.
    pub fn finish_submit(&mut self, result: Result<UserId, ApiError>) -> Option<UserId> {
        match result {
            Ok(id) => {
                self.state = FormState::Created(id.clone());
                Some(id)
            }
            Err(err) => {
                warn!("onboarding failed: {err}");
                self.state = FormState::Editing {
                    error: Some(CREATE_FAILED.to_string()),
                };
                None
            }
        }
    }

    /// Sends the plan once. Returns the new identifier on success; any
    /// failure leaves the form editable with a generic message.
    pub async fn submit<B: Backend>(&mut self, backend: &B) -> Option<UserId> {
        let plan = self.begin_submit()?;
        let result = backend.create_user(&plan).await;
        self.finish_submit(result)
    }
}
