use axum::{extract::State, http::StatusCode, response::IntoResponse};
use velvet::server::{controller::job::list_own_applications, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok with the seeker's applications
async fn returns_success_for_applicant() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let employer = test.user().insert_user("mara@example.com").await?;
    let seeker = test.user().insert_user("noah@example.com").await?;
    let job = test.jobs().insert_job(employer.id, "Berlin").await?;
    test.jobs().insert_application(job.id, seeker.id).await?;

    SessionUserId::insert(&test.session, seeker.id).await.unwrap();

    let result = list_own_applications(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when no user is logged in
async fn returns_not_found_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_marketplace_tables!()?;

    let result = list_own_applications(State(test.state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
