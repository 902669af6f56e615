use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use velvet::server::{
    controller::job::{close_job, get_job},
    model::session::user::SessionUserId,
};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok for an active posting
async fn returns_success_for_active_job() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let employer = test.user().insert_user("mara@example.com").await?;
    let seeker = test.user().insert_user("noah@example.com").await?;
    let job = test.jobs().insert_job(employer.id, "Berlin").await?;

    SessionUserId::insert(&test.session, seeker.id).await.unwrap();

    let result = get_job(State(test.state()), test.session.clone(), Path(job.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when a seeker requests a closed posting
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

    let result = get_job(State(test.state()), test.session.clone(), Path(job.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown posting
async fn returns_not_found_for_missing_job() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_job(State(test.state()), test.session.clone(), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
