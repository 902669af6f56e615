use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        job::{ApplyJobDto, CreateJobDto, JobApplicationDto, JobDto, JobListQuery},
    },
    server::{
        controller::util::current_user::get_user_from_session, error::Error, model::app::AppState,
        service::job::JobService,
    },
};

pub static JOB_TAG: &str = "jobs";

/// Create a job posting for the logged in user
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = JOB_TAG,
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Posting created", body = JobDto),
        (status = 400, description = "Title out of bounds", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    session: Session,
    Json(job): Json<CreateJobDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let job_service = JobService::new(&state.db);
    let job = job_service.create_job(user.id, job).await?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// Browse active postings, newest first
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = JOB_TAG,
    params(JobListQuery),
    responses(
        (status = 200, description = "Active postings matching the filters", body = Vec<JobDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let job_service = JobService::new(&state.db);
    let jobs = job_service.list_jobs(query).await?;

    Ok((StatusCode::OK, Json(jobs)))
}

/// List everything the logged in user has applied to, newest first
#[utoipa::path(
    get,
    path = "/api/jobs/applications/mine",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "The user's applications", body = Vec<JobApplicationDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_own_applications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let job_service = JobService::new(&state.db);
    let applications = job_service.list_own_applications(user.id).await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Get a single posting
///
/// Closed postings stay visible to their employer only.
#[utoipa::path(
    get,
    path = "/api/jobs/{job_id}",
    tag = JOB_TAG,
    params(("job_id" = i32, Path, description = "ID of the posting")),
    responses(
        (status = 200, description = "The requested posting", body = JobDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let job_service = JobService::new(&state.db);
    let job = job_service.get_job(job_id, user.id).await?;

    Ok((StatusCode::OK, Json(job)))
}

/// Apply to an active posting
#[utoipa::path(
    post,
    path = "/api/jobs/{job_id}/apply",
    tag = JOB_TAG,
    params(("job_id" = i32, Path, description = "ID of the posting")),
    request_body = ApplyJobDto,
    responses(
        (status = 201, description = "Application stored", body = JobApplicationDto),
        (status = 400, description = "Own posting, or message out of bounds", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 409, description = "Already applied to this posting", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_to_job(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<i32>,
    Json(application): Json<ApplyJobDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let job_service = JobService::new(&state.db);
    let application = job_service.apply(user.id, job_id, application).await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// List applications to a posting, as its employer
#[utoipa::path(
    get,
    path = "/api/jobs/{job_id}/applications",
    tag = JOB_TAG,
    params(("job_id" = i32, Path, description = "ID of the posting")),
    responses(
        (status = 200, description = "Applications to the posting", body = Vec<JobApplicationDto>),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_job_applications(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let job_service = JobService::new(&state.db);
    let applications = job_service.list_applications(user.id, job_id).await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Close a posting, as its employer
///
/// Closing an already closed posting succeeds without changing anything.
#[utoipa::path(
    post,
    path = "/api/jobs/{job_id}/close",
    tag = JOB_TAG,
    params(("job_id" = i32, Path, description = "ID of the posting")),
    responses(
        (status = 200, description = "Posting closed", body = JobDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn close_job(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let job_service = JobService::new(&state.db);
    let job = job_service.close_job(user.id, job_id).await?;

    Ok((StatusCode::OK, Json(job)))
}
