use crate::api::Backend;
use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router<B: Backend>(state: AppState<B>) -> Router {
    Router::new()
        .route("/", get(handlers::index::<B>))
        .route("/onboarding", post(handlers::submit_onboarding::<B>))
        .route("/checkin", post(handlers::submit_checkin::<B>))
        .route("/craving", post(handlers::submit_craving::<B>))
        .route("/reset", post(handlers::reset::<B>))
        .route("/api/session", get(handlers::session::<B>))
        .with_state(state)
}
