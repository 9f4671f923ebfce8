use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier handed out by the backend when a plan is created.
///
/// The backend may answer with either a JSON string or a JSON integer; the
/// same representation is sent back on every later request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(value) => write!(f, "{value}"),
            UserId::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanInput {
    pub name: String,
    pub quit_date: NaiveDate,
    pub daily_cig_before: u32,
    pub price_per_pack: f64,
    pub cigs_per_pack: u32,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserResponse {
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckinRequest {
    pub user_id: UserId,
    pub cigarettes_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CravingRequest {
    pub user_id: UserId,
    pub intensity: Intensity,
    pub trigger: String,
    pub note: String,
}

/// Craving intensity on the fixed 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Intensity> {
        (Self::MIN..=Self::MAX).map(Intensity)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(3)
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardSnapshot {
    pub user: SnapshotUser,
    pub stats: SnapshotStats,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnapshotUser {
    pub name: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnapshotStats {
    #[serde(default)]
    pub days_since_quit: i64,
    #[serde(default)]
    pub current_streak: i64,
    #[serde(default)]
    pub smoke_free_days: i64,
    #[serde(default)]
    pub savings: Savings,
    #[serde(default)]
    pub expected_daily_spend: f64,
    #[serde(default)]
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Savings {
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Badge {
    #[serde(default)]
    pub icon: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub screen: &'static str,
    pub user_id: Option<UserId>,
}
