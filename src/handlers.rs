use crate::api::Backend;
use crate::dashboard::{
    CheckinForm, CravingDraft, CravingForm, DashboardView, LoadState, parse_count, parse_intensity,
};
use crate::models::{SessionResponse, UserId};
use crate::onboarding::{OnboardingForm, PlanDraft};
use crate::root::Screen;
use crate::state::AppState;
use crate::ui::{render_dashboard, render_onboarding};
use axum::{
    Form, Json,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::info;

pub async fn index<B: Backend>(State(state): State<AppState<B>>) -> Response {
    let id = match state.root.screen() {
        Screen::Onboarding => {
            let form = state.onboarding.lock().await;
            return Html(render_onboarding(&form)).into_response();
        }
        Screen::Dashboard(id) => id,
    };

    let mut slot = state.dashboard.lock().await;
    let view = view_for(&mut slot, &id);
    if !view.take_settled() || matches!(view.load, LoadState::Loading) {
        view.refresh(&*state.backend).await;
    }

    // A reset may have landed while the load was in flight.
    if !state.root.is_current(&id) {
        info!(user_id = %id, "discarding dashboard for a cleared identifier");
        *slot = None;
        return Redirect::to("/").into_response();
    }

    let alert = view.take_alert();
    Html(render_dashboard(view, alert.as_deref())).into_response()
}

pub async fn submit_onboarding<B: Backend>(
    State(state): State<AppState<B>>,
    Form(draft): Form<PlanDraft>,
) -> Redirect {
    if let Screen::Dashboard(_) = state.root.screen() {
        return Redirect::to("/");
    }

    let plan = {
        let mut form = state.onboarding.lock().await;
        form.edit(draft);
        form.begin_submit()
    };
    let Some(plan) = plan else {
        return Redirect::to("/");
    };

    // The form lock is released so `GET /` can render the Submitting state.
    let result = state.backend.create_user(&plan).await;

    let mut form = state.onboarding.lock().await;
    if let Some(id) = form.finish_submit(result) {
        state.root.complete_onboarding(&id);
        *form = OnboardingForm::default();
    }
    Redirect::to("/")
}

pub async fn submit_checkin<B: Backend>(
    State(state): State<AppState<B>>,
    Form(input): Form<CheckinForm>,
) -> Redirect {
    let Screen::Dashboard(id) = state.root.screen() else {
        return Redirect::to("/");
    };

    let mut slot = state.dashboard.lock().await;
    let view = view_for(&mut slot, &id);
    match parse_count(&input.cigarettes_count) {
        Ok(count) => {
            view.pending_count = count;
            if view.submit_checkin(&*state.backend).await.is_err() {
                info!(user_id = %id, "check-in kept for resubmission");
            }
        }
        Err(err) => view.reject(err),
    }
    Redirect::to("/")
}

pub async fn submit_craving<B: Backend>(
    State(state): State<AppState<B>>,
    Form(input): Form<CravingForm>,
) -> Redirect {
    let Screen::Dashboard(id) = state.root.screen() else {
        return Redirect::to("/");
    };

    let mut slot = state.dashboard.lock().await;
    let view = view_for(&mut slot, &id);
    match parse_intensity(&input.intensity) {
        Ok(intensity) => {
            view.craving = CravingDraft {
                intensity,
                trigger: input.trigger,
                note: input.note,
            };
            if view.submit_craving(&*state.backend).await.is_err() {
                info!(user_id = %id, "craving kept for resubmission");
            }
        }
        Err(err) => {
            view.craving.trigger = input.trigger;
            view.craving.note = input.note;
            view.reject(err);
        }
    }
    Redirect::to("/")
}

pub async fn reset<B: Backend>(State(state): State<AppState<B>>) -> Redirect {
    state.root.reset();
    // An in-flight load notices the cleared store and drops the view itself.
    if let Ok(mut slot) = state.dashboard.try_lock() {
        *slot = None;
    }
    Redirect::to("/")
}

pub async fn session<B: Backend>(State(state): State<AppState<B>>) -> Json<SessionResponse> {
    let screen = state.root.screen();
    let user_id = match &screen {
        Screen::Dashboard(id) => Some(id.clone()),
        Screen::Onboarding => None,
    };
    Json(SessionResponse {
        screen: screen.name(),
        user_id,
    })
}

fn view_for<'a>(slot: &'a mut Option<DashboardView>, id: &UserId) -> &'a mut DashboardView {
    if !matches!(slot, Some(view) if view.user_id() == id) {
        *slot = Some(DashboardView::new(id.clone()));
    }
    slot.get_or_insert_with(|| DashboardView::new(id.clone()))
}
