use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;
use velvet::{
    model::job::ApplyJobDto,
    server::{
        controller::job::{apply_to_job, close_job},
        model::session::user::SessionUserId,
    },
};
use velvet_test_utils::prelude::*;

fn application() -> ApplyJobDto {
    ApplyJobDto {
        message: "Five years behind the bar, free on weekends.".to_string(),
    }
}

#[tokio::test]
/// Expect 201 created with the application stored
async fn returns_created_and_stores_application() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let employer = test.user().insert_user("mara@example.com").await?;
    let seeker = test.user().insert_user("noah@example.com").await?;
    let job = test.jobs().insert_job(employer.id, "Berlin").await?;

    SessionUserId::insert(&test.session, seeker.id).await.unwrap();

    let result = apply_to_job(
        State(test.state()),
        test.session.clone(),
        Path(job.id),
        Json(application()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored = entity::prelude::JobApplication::find()
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.applicant_id, seeker.id);
    assert_eq!(stored.job_id, job.id);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when an employer applies to their own posting
async fn returns_bad_request_for_own_job() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let employer = test.user().insert_user("mara@example.com").await?;
    let job = test.jobs().insert_job(employer.id, "Berlin").await?;

    SessionUserId::insert(&test.session, employer.id)
        .await
        .unwrap();

    let result = apply_to_job(
        State(test.state()),
        test.session.clone(),
        Path(job.id),
        Json(application()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the seeker already applied
async fn returns_conflict_for_second_application() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let employer = test.user().insert_user("mara@example.com").await?;
    let seeker = test.user().insert_user("noah@example.com").await?;
    let job = test.jobs().insert_job(employer.id, "Berlin").await?;
    test.jobs().insert_application(job.id, seeker.id).await?;

    SessionUserId::insert(&test.session, seeker.id).await.unwrap();

    let result = apply_to_job(
        State(test.state()),
        test.session.clone(),
        Path(job.id),
        Json(application()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when applying to a closed posting
async fn returns_not_found_for_closed_job() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let employer = test.user().insert_user("mara@example.com").await?;
    let seeker = test.user().insert_user("noah@example.com").await?;
    let job = test.jobs().insert_job(employer.id, "Berlin").await?;

    SessionUserId::insert(&test.session, employer.id)
        .await
        .unwrap();
    close_job(State(test.state()), test.session.clone(), Path(job.id))
        .await
        .unwrap();

    SessionUserId::insert(&test.session, seeker.id).await.unwrap();

    let result = apply_to_job(
        State(test.state()),
        test.session.clone(),
        Path(job.id),
        Json(application()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
