use crate::errors::AppError;
use crate::models::{
    CalendarData, GiftRequest, OpenDayRequest, StateResponse, TaskRequest, ViewRequest,
};
use crate::state::AppState;
use crate::store::{self, FIRST_DAY, LAST_DAY};
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::{Datelike, Local};
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = current_day();
    let data = state.data.lock().await;
    Html(render_index(&snapshot(today, &data)))
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let data = state.data.lock().await;
    Json(snapshot(current_day(), &data))
}

pub async fn open_day(
    State(state): State<AppState>,
    Json(payload): Json<OpenDayRequest>,
) -> Result<Json<StateResponse>, AppError> {
    if !(FIRST_DAY..=LAST_DAY).contains(&payload.day) {
        return Err(AppError::bad_request("day must be between 1 and 25"));
    }

    let today = current_day();
    let mut data = state.data.lock().await;
    let outcome = store::open_day(&mut data, payload.day, today);
    if outcome.applied() {
        info!(day = payload.day, balance = data.balance, "day opened");
    } else {
        debug!(day = payload.day, ?outcome, "open skipped");
    }

    Ok(Json(snapshot(today, &data)))
}

pub async fn select_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskRequest>,
) -> Json<StateResponse> {
    let mut data = state.data.lock().await;
    let outcome = store::select_task(&mut data, payload.task_id);
    debug!(task_id = payload.task_id, ?outcome, "task selected");
    Json(snapshot(current_day(), &data))
}

pub async fn complete_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskRequest>,
) -> Json<StateResponse> {
    let mut data = state.data.lock().await;
    let outcome = store::complete_task(&mut data, payload.task_id);
    if outcome.applied() {
        info!(task_id = payload.task_id, balance = data.balance, "task completed");
    } else {
        debug!(task_id = payload.task_id, ?outcome, "completion skipped");
    }
    Json(snapshot(current_day(), &data))
}

pub async fn buy_gift(
    State(state): State<AppState>,
    Json(payload): Json<GiftRequest>,
) -> Json<StateResponse> {
    let mut data = state.data.lock().await;
    let outcome = store::buy_gift(&mut data, payload.gift_id);
    if outcome.applied() {
        info!(gift_id = payload.gift_id, balance = data.balance, "gift purchased");
    } else {
        debug!(gift_id = payload.gift_id, ?outcome, "purchase skipped");
    }
    Json(snapshot(current_day(), &data))
}

pub async fn switch_view(
    State(state): State<AppState>,
    Json(payload): Json<ViewRequest>,
) -> Json<StateResponse> {
    let mut data = state.data.lock().await;
    data.view = payload.view;
    Json(snapshot(current_day(), &data))
}

fn snapshot(current_day: u32, data: &CalendarData) -> StateResponse {
    StateResponse {
        current_day,
        balance: data.balance,
        opened_days: data.opened_days.iter().copied().collect(),
        selected_day: data.selected_day,
        selected_task: data.selected_task,
        view: data.view,
        tasks: data.tasks.clone(),
        gifts: data.gifts.clone(),
        profile: data.profile.clone(),
    }
}

/// Day-of-month from the server clock. Not clamped to 25: in a month with
/// more days every tile is simply unlockable, matching the calendar rule
/// `day <= current_day`.
fn current_day() -> u32 {
    Local::now().day()
}
