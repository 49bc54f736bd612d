use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ElementRole, EventKind, PageEvent, PageLayout, SubmissionOutcome, UiState};
use crate::page::{Document, EventTable, Page};
use crate::services::intake::deliver;
use crate::state::AppState;

#[derive(Deserialize, Default)]
pub struct NewSession {
    #[serde(default)]
    pub layout: Option<PageLayout>,
    #[serde(default)]
    pub path: Option<String>,
}

/// A visitor action against a simulated page. Values the visitor typed are written
/// to the document before the matching page event fires.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DevEvent {
    Click {
        role: ElementRole,
        target: String,
    },
    Type {
        target: String,
        value: String,
    },
    Focus {
        target: String,
    },
    Blur {
        target: String,
    },
    Scroll {
        y: f64,
    },
    Intersect {
        role: ElementRole,
        target: String,
        #[serde(default = "fully_visible")]
        ratio: f64,
    },
    MouseEnter {
        role: ElementRole,
        target: String,
    },
    MouseLeave {
        role: ElementRole,
        target: String,
    },
    Submit,
    Load {
        path: String,
        #[serde(default)]
        load_ms: Option<u64>,
    },
}

fn fully_visible() -> f64 {
    1.0
}

#[derive(Deserialize)]
pub struct AdvanceRequest {
    pub ms: u64,
}

#[derive(Serialize)]
pub struct Delivery {
    pub accepted: bool,
    pub detail: serde_json::Value,
}

#[derive(Serialize)]
pub struct EventReport {
    pub prevent_default: bool,
    pub deliveries: Vec<Delivery>,
}

#[derive(Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub now_ms: u64,
    pub pending_timers: usize,
    pub state: UiState,
    pub document: Document,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventReport>,
}

#[derive(Serialize)]
pub struct Binding {
    pub role: ElementRole,
    pub kind: EventKind,
}

fn snapshot(id: Uuid, page: &Page<Document>, event: Option<EventReport>) -> SessionSnapshot {
    SessionSnapshot {
        session_id: id,
        now_ms: page.now_ms(),
        pending_timers: page.pending_timers(),
        state: page.state().clone(),
        document: page.view().clone(),
        event,
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("session {id}"))
}

fn input_role(layout: &PageLayout, target: &str) -> Result<ElementRole, AppError> {
    layout
        .input_role(target)
        .ok_or_else(|| AppError::BadRequest(format!("{target} is not a form input")))
}

fn to_page_event(page: &mut Page<Document>, event: DevEvent) -> Result<PageEvent, AppError> {
    let event = match event {
        DevEvent::Click { role, target } => PageEvent::Click { role, target },
        DevEvent::Type { target, value } => {
            let role = input_role(page.layout(), &target)?;
            page.view_mut().set_value(&target, value.clone());
            PageEvent::Input {
                role,
                target,
                value,
            }
        }
        DevEvent::Focus { target } => {
            let role = input_role(page.layout(), &target)?;
            let value = page.view().value(&target).to_string();
            PageEvent::Focus {
                role,
                target,
                value,
            }
        }
        DevEvent::Blur { target } => {
            let role = input_role(page.layout(), &target)?;
            let value = page.view().value(&target).to_string();
            PageEvent::Blur {
                role,
                target,
                value,
            }
        }
        DevEvent::Scroll { y } => PageEvent::Scroll { y },
        DevEvent::Intersect {
            role,
            target,
            ratio,
        } => PageEvent::Intersect {
            role,
            target,
            ratio,
        },
        DevEvent::Submit => PageEvent::Submit {
            form: page.view().form_snapshot(page.layout()),
        },
        DevEvent::MouseEnter { role, target } => PageEvent::MouseEnter { role, target },
        DevEvent::MouseLeave { role, target } => PageEvent::MouseLeave { role, target },
        DevEvent::Load { path, load_ms } => PageEvent::Load { path, load_ms },
    };
    Ok(event)
}

// GET /api/dev/bindings
pub async fn bindings(State(state): State<Arc<AppState>>) -> Json<Vec<Binding>> {
    let table = EventTable::standard(&state.config.behavior);
    Json(
        table
            .bindings()
            .map(|(role, kind)| Binding { role, kind })
            .collect(),
    )
}

// POST /api/dev/sessions
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    body: Option<Json<NewSession>>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let layout = request.layout.unwrap_or_else(PageLayout::practice_site);
    let path = request.path.unwrap_or_else(|| "/index.html".to_string());

    let document = Document::from_layout(&layout);
    let mut page = Page::new(
        layout,
        state.config.behavior.clone(),
        Arc::clone(&state.clock),
        document,
    );
    page.load(&path);

    let id = Uuid::new_v4();
    let snap = snapshot(id, &page, None);
    state.sessions().insert(id, page);

    tracing::info!(session = %id, path, "dev session created");
    (StatusCode::CREATED, Json(snap))
}

// GET /api/dev/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let sessions = state.sessions();
    let page = sessions.get(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(snapshot(id, page, None)))
}

// POST /api/dev/sessions/:id/events
pub async fn post_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(event): Json<DevEvent>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let dispatched = {
        let mut sessions = state.sessions();
        let page = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        let event = to_page_event(page, event)?;
        page.dispatch(&event)
    };

    // The session lock is released while the endpoint is pending.
    let mut deliveries = Vec::with_capacity(dispatched.submissions.len());
    for payload in &dispatched.submissions {
        let outcome = deliver(state.endpoint.as_ref(), payload).await;
        deliveries.push(match &outcome {
            SubmissionOutcome::Accepted(body) => Delivery {
                accepted: true,
                detail: body.clone(),
            },
            SubmissionOutcome::Failed(error) => Delivery {
                accepted: false,
                detail: serde_json::Value::String(error.clone()),
            },
        });

        let mut sessions = state.sessions();
        let page = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        page.settle(outcome);
    }

    let sessions = state.sessions();
    let page = sessions.get(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(snapshot(
        id,
        page,
        Some(EventReport {
            prevent_default: dispatched.prevent_default,
            deliveries,
        }),
    )))
}

// POST /api/dev/sessions/:id/advance
pub async fn advance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<AdvanceRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut sessions = state.sessions();
    let page = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
    page.advance(body.ms);
    Ok(Json(snapshot(id, page, None)))
}

// DELETE /api/dev/sessions/:id
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions()
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| not_found(id))
}
