use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use velvet::{
    model::dating::UpsertDatingPageDto,
    server::{controller::dating::upsert_dating_page, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

fn profile() -> UpsertDatingPageDto {
    UpsertDatingPageDto {
        display_name: "Mara".to_string(),
        age: 29,
        gender: "woman".to_string(),
        seeking: "man".to_string(),
        bio: "Coffee first.".to_string(),
        city: "Berlin".to_string(),
        photo_url: None,
        active: None,
    }
}

#[tokio::test]
/// Expect 201 created the first time a user submits a profile
async fn returns_created_for_first_profile() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = upsert_dating_page(State(test.state()), test.session.clone(), Json(profile())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored = entity::prelude::DatingPage::find()
        .filter(entity::dating_page::Column::UserId.eq(user.id))
        .one(&test.state.db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 200 ok and the stored profile replaced on a second submit
async fn returns_success_for_existing_profile() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;
    test.dating().insert_page(user.id, "Berlin").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = upsert_dating_page(State(test.state()), test.session.clone(), Json(profile())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::DatingPage::find()
        .filter(entity::dating_page::Column::UserId.eq(user.id))
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.display_name, "Mara");

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an age under eighteen
async fn returns_bad_request_for_minor_age() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let mut page = profile();
    page.age = 17;

    let result = upsert_dating_page(State(test.state()), test.session.clone(), Json(page)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
