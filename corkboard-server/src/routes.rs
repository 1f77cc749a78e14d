//! Thin HTTP handlers
//!
//! Each handler does exactly three things: resolve the bearer session,
//! build the matching engine command, and serialize the result. No
//! business logic lives here.

use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use corkboard::activity::ListActivity;
use corkboard::assignment::{
    CreateAssignment, DeleteAssignment, ListCardAssignments, ListUserAssignments,
};
use corkboard::board::{CreateBoard, DeleteBoard, EditBoard, GetBoard, ListBoards};
use corkboard::card::{CreateCard, DeleteCard, EditCard, GetCard};
use corkboard::list::{CreateList, DeleteList, EditList, GetList};
use corkboard::org::{
    CreateOrg, DeleteOrg, EditOrg, GetOrg, JoinOrg, KickMember, LeaveOrg, ListAllOrgs, ListOrgs,
};
use corkboard::store::Store;
use corkboard::types::{AssignmentId, BoardId, CardId, ListId, OrgId, User, UserId};
use corkboard::{CorkboardContext, CorkboardError, Execute, Session};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::ws::board_events;

/// Shared handler state
pub type AppState = Arc<CorkboardContext>;

/// Build the full API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/users", post(create_user))
        .route("/api/v1/users/:user_id/assignments", get(user_assignments))
        .route("/api/v1/orgs", get(all_orgs).post(create_org))
        .route("/api/v1/me/orgs", get(my_orgs))
        .route(
            "/api/v1/orgs/:org_id",
            get(get_org).patch(edit_org).delete(delete_org),
        )
        .route("/api/v1/orgs/:org_id/join", post(join_org))
        .route("/api/v1/orgs/:org_id/leave", post(leave_org))
        .route("/api/v1/orgs/:org_id/kick", post(kick_member))
        .route("/api/v1/orgs/:org_id/activity", get(org_activity))
        .route("/api/v1/orgs/:org_id/boards", get(org_boards))
        .route("/api/v1/boards", post(create_board))
        .route(
            "/api/v1/boards/:board_id",
            get(get_board).patch(edit_board).delete(delete_board),
        )
        .route("/api/v1/boards/:board_id/events", get(board_events))
        .route("/api/v1/lists", post(create_list))
        .route(
            "/api/v1/lists/:list_id",
            get(get_list).patch(edit_list).delete(delete_list),
        )
        .route("/api/v1/cards", post(create_card))
        .route(
            "/api/v1/cards/:card_id",
            get(get_card).patch(edit_card).delete(delete_card),
        )
        .route("/api/v1/cards/:card_id/assignments", get(card_assignments))
        .route("/api/v1/assignments", post(create_assignment))
        .route("/api/v1/assignments/:assignment_id", delete(delete_assignment))
        .with_state(state)
}

/// Engine errors mapped onto HTTP statuses
pub struct ApiError(CorkboardError);

impl From<CorkboardError> for ApiError {
    fn from(err: CorkboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CorkboardError::Unauthorized => StatusCode::UNAUTHORIZED,
            CorkboardError::BoardNotFound { .. }
            | CorkboardError::ListNotFound { .. }
            | CorkboardError::CardNotFound { .. }
            | CorkboardError::OrgNotFound { .. }
            | CorkboardError::UserNotFound { .. }
            | CorkboardError::NotFound { .. } => StatusCode::NOT_FOUND,
            CorkboardError::WrongPassword => StatusCode::FORBIDDEN,
            CorkboardError::InvalidOrderShape { .. }
            | CorkboardError::ReferenceNotFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CorkboardError::QuotaExceeded { .. }
            | CorkboardError::AlreadyMember { .. }
            | CorkboardError::NotAMember { .. }
            | CorkboardError::CannotRemoveOwner
            | CorkboardError::DuplicateAssignment { .. } => StatusCode::CONFLICT,
            CorkboardError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

type ApiResult = Result<Json<Value>, ApiError>;

/// Resolve the bearer session from the Authorization header
pub(crate) fn session(ctx: &CorkboardContext, headers: &HeaderMap) -> Result<Session, ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(CorkboardError::Unauthorized)?;
    Ok(ctx.signer().verify(token)?)
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "healthy", "service": "corkboard" }))
}

// =============================================================================
// Users
// =============================================================================

#[derive(Deserialize)]
struct CreateUserPayload {
    username: String,
    email: String,
}

/// Register an identity and issue its bearer token. Credential checks
/// live outside this service; the directory only mints the record.
async fn create_user(
    State(ctx): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> ApiResult {
    let user = User::new(payload.username, payload.email, "");
    ctx.store().write_user(&user).await?;
    let token = ctx.signer().issue(&user)?;
    Ok(Json(serde_json::json!({
        "user": user.view(),
        "token": token,
    })))
}

async fn user_assignments(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> ApiResult {
    session(&ctx, &headers)?;
    let result = ListUserAssignments::new(UserId::from_string(user_id))
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

// =============================================================================
// Organizations
// =============================================================================

#[derive(Deserialize)]
struct CreateOrgPayload {
    name: String,
    password: String,
}

async fn create_org(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateOrgPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = CreateOrg::new(payload.name, payload.password, session.user)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

async fn all_orgs(State(ctx): State<AppState>) -> ApiResult {
    Ok(Json(ListAllOrgs::new().execute(ctx.as_ref()).await?))
}

async fn my_orgs(State(ctx): State<AppState>, headers: HeaderMap) -> ApiResult {
    let session = session(&ctx, &headers)?;
    Ok(Json(ListOrgs::new(session.user).execute(ctx.as_ref()).await?))
}

async fn get_org(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(org_id): Path<String>,
) -> ApiResult {
    session(&ctx, &headers)?;
    let result = GetOrg::new(OrgId::from_string(org_id))
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
struct EditOrgPayload {
    name: Option<String>,
    old_password: Option<String>,
    password: Option<String>,
    owner: Option<UserId>,
}

async fn edit_org(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(org_id): Path<String>,
    Json(payload): Json<EditOrgPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let mut cmd = EditOrg::new(OrgId::from_string(org_id), session.user);
    cmd.name = payload.name;
    cmd.old_password = payload.old_password;
    cmd.password = payload.password;
    cmd.owner = payload.owner;
    Ok(Json(cmd.execute(ctx.as_ref()).await?))
}

#[derive(Deserialize)]
struct PasswordPayload {
    password: String,
}

async fn delete_org(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(org_id): Path<String>,
    Json(payload): Json<PasswordPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = DeleteOrg::new(OrgId::from_string(org_id), session.user, payload.password)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

async fn join_org(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(org_id): Path<String>,
    Json(payload): Json<PasswordPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = JoinOrg::new(OrgId::from_string(org_id), payload.password, session.user)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

async fn leave_org(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(org_id): Path<String>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = LeaveOrg::new(OrgId::from_string(org_id), session.user)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
struct KickPayload {
    member: UserId,
}

async fn kick_member(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(org_id): Path<String>,
    Json(payload): Json<KickPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = KickMember::new(OrgId::from_string(org_id), payload.member, session.user)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

async fn org_activity(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(org_id): Path<String>,
) -> ApiResult {
    session(&ctx, &headers)?;
    let result = ListActivity::new(OrgId::from_string(org_id))
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

async fn org_boards(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(org_id): Path<String>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = ListBoards::new(OrgId::from_string(org_id), session.user)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

// =============================================================================
// Boards
// =============================================================================

#[derive(Deserialize)]
struct CreateBoardPayload {
    name: String,
    organization: OrgId,
    #[serde(default)]
    background_url: String,
}

async fn create_board(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBoardPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = CreateBoard::new(payload.name, payload.organization, session.user)
        .with_background_url(payload.background_url)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

async fn get_board(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(board_id): Path<String>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = GetBoard::new(BoardId::from_string(board_id), session.user)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
struct EditBoardPayload {
    name: Option<String>,
    background_url: Option<String>,
    list_order: Option<Vec<ListId>>,
    card_order: Option<Vec<Vec<CardId>>>,
}

async fn edit_board(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(board_id): Path<String>,
    Json(payload): Json<EditBoardPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let mut cmd = EditBoard::new(BoardId::from_string(board_id), session.user);
    cmd.name = payload.name;
    cmd.background_url = payload.background_url;
    cmd.list_order = payload.list_order;
    cmd.card_order = payload.card_order;
    Ok(Json(cmd.execute(ctx.as_ref()).await?))
}

async fn delete_board(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(board_id): Path<String>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = DeleteBoard::new(BoardId::from_string(board_id), session.user)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

// =============================================================================
// Lists
// =============================================================================

#[derive(Deserialize)]
struct CreateListPayload {
    name: String,
    board: BoardId,
}

async fn create_list(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateListPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = CreateList::new(payload.name, payload.board, session.user)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

async fn get_list(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(list_id): Path<String>,
) -> ApiResult {
    session(&ctx, &headers)?;
    let result = GetList::new(ListId::from_string(list_id))
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
struct EditListPayload {
    name: String,
    organization: OrgId,
}

async fn edit_list(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(list_id): Path<String>,
    Json(payload): Json<EditListPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = EditList::new(
        ListId::from_string(list_id),
        payload.name,
        session.user,
        payload.organization,
    )
    .execute(ctx.as_ref())
    .await?;
    Ok(Json(result))
}

async fn delete_list(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(list_id): Path<String>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = DeleteList::new(ListId::from_string(list_id), session.user)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

// =============================================================================
// Cards
// =============================================================================

#[derive(Deserialize)]
struct CreateCardPayload {
    content: String,
    list: ListId,
    organization: OrgId,
}

async fn create_card(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCardPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = CreateCard::new(payload.content, payload.list, session.user, payload.organization)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

async fn get_card(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(card_id): Path<String>,
) -> ApiResult {
    session(&ctx, &headers)?;
    let result = GetCard::new(CardId::from_string(card_id))
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
struct EditCardPayload {
    organization: OrgId,
    content: Option<String>,
    priority: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

async fn edit_card(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(card_id): Path<String>,
    Json(payload): Json<EditCardPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let mut cmd = EditCard::new(CardId::from_string(card_id), session.user, payload.organization);
    cmd.name = payload.content;
    cmd.priority = payload.priority;
    cmd.due_date = payload.due_date;
    Ok(Json(cmd.execute(ctx.as_ref()).await?))
}

#[derive(Deserialize)]
struct DeleteCardPayload {
    organization: OrgId,
}

async fn delete_card(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(card_id): Path<String>,
    Json(payload): Json<DeleteCardPayload>,
) -> ApiResult {
    let session = session(&ctx, &headers)?;
    let result = DeleteCard::new(CardId::from_string(card_id), session.user, payload.organization)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

async fn card_assignments(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(card_id): Path<String>,
) -> ApiResult {
    session(&ctx, &headers)?;
    let result = ListCardAssignments::new(CardId::from_string(card_id))
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

// =============================================================================
// Assignments
// =============================================================================

#[derive(Deserialize)]
struct CreateAssignmentPayload {
    user: UserId,
    card: CardId,
}

async fn create_assignment(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAssignmentPayload>,
) -> ApiResult {
    session(&ctx, &headers)?;
    let result = CreateAssignment::new(payload.user, payload.card)
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}

async fn delete_assignment(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(assignment_id): Path<String>,
) -> ApiResult {
    session(&ctx, &headers)?;
    let result = DeleteAssignment::new(AssignmentId::from_string(assignment_id))
        .execute(ctx.as_ref())
        .await?;
    Ok(Json(result))
}
