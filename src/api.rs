use crate::errors::ApiError;
use crate::models::{
    CheckinRequest, CravingRequest, CreateUserResponse, DashboardSnapshot, PlanInput, UserId,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{info, warn};

/// The four backend operations this client depends on.
pub trait Backend: Send + Sync + 'static {
    fn create_user(&self, plan: &PlanInput)
    -> impl Future<Output = Result<UserId, ApiError>> + Send;

    fn dashboard(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<DashboardSnapshot, ApiError>> + Send;

    fn checkin(&self, request: &CheckinRequest)
    -> impl Future<Output = Result<(), ApiError>> + Send;

    fn craving(&self, request: &CravingRequest)
    -> impl Future<Output = Result<(), ApiError>> + Send;
}

#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Backend for HttpBackend {
    async fn create_user(&self, plan: &PlanInput) -> Result<UserId, ApiError> {
        let response = self
            .client
            .post(self.url("/api/users"))
            .json(plan)
            .send()
            .await;
        let created: CreateUserResponse = decode(checked("create user", response)?).await?;
        info!(user_id = %created.user_id, "user created");
        Ok(created.user_id)
    }

    async fn dashboard(&self, user_id: &UserId) -> Result<DashboardSnapshot, ApiError> {
        let response = self
            .client
            .get(self.url("/api/dashboard"))
            .query(&[("user_id", user_id.to_string())])
            .send()
            .await;
        decode(checked("load dashboard", response)?).await
    }

    async fn checkin(&self, request: &CheckinRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/api/checkins"))
            .json(request)
            .send()
            .await;
        checked("check in", response)?;
        Ok(())
    }

    async fn craving(&self, request: &CravingRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/api/cravings"))
            .json(request)
            .send()
            .await;
        checked("record craving", response)?;
        Ok(())
    }
}

fn checked(action: &str, response: reqwest::Result<Response>) -> Result<Response, ApiError> {
    let response = response.map_err(|err| {
        warn!("{action} failed: {err}");
        ApiError::from(err)
    })?;
    let status = response.status();
    if !status.is_success() {
        warn!("{action} rejected with status {status}");
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
}
