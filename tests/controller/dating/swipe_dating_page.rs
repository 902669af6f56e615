use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use velvet::{
    model::dating::SwipeDto,
    server::{controller::dating::swipe_dating_page, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok with the swipe recorded and no match yet
async fn returns_success_without_match() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let swiper = test.user().insert_user("mara@example.com").await?;
    let target = test.user().insert_user("noah@example.com").await?;
    test.dating().insert_page(swiper.id, "Berlin").await?;
    let target_page = test.dating().insert_page(target.id, "Berlin").await?;

    SessionUserId::insert(&test.session, swiper.id).await.unwrap();

    let result = swipe_dating_page(
        State(test.state()),
        test.session.clone(),
        Json(SwipeDto {
            target_page_id: target_page.id,
            liked: true,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let matches = entity::prelude::DatingMatch::find()
        .all(&test.state.db)
        .await?;
    assert!(matches.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect a reciprocal like to create the match and its chat together
async fn creates_match_and_chat_on_reciprocal_like() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let swiper = test.user().insert_user("mara@example.com").await?;
    let target = test.user().insert_user("noah@example.com").await?;
    let swiper_page = test.dating().insert_page(swiper.id, "Berlin").await?;
    let target_page = test.dating().insert_page(target.id, "Berlin").await?;
    test.dating()
        .insert_swipe(target_page.id, swiper_page.id, true)
        .await?;

    SessionUserId::insert(&test.session, swiper.id).await.unwrap();

    let result = swipe_dating_page(
        State(test.state()),
        test.session.clone(),
        Json(SwipeDto {
            target_page_id: target_page.id,
            liked: true,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let matches = entity::prelude::DatingMatch::find()
        .all(&test.state.db)
        .await?;
    assert_eq!(matches.len(), 1);

    let chats = entity::prelude::Chat::find().all(&test.state.db).await?;
    assert_eq!(chats.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when a user swipes their own profile
async fn returns_bad_request_for_self_swipe() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;
    let page = test.dating().insert_page(user.id, "Berlin").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = swipe_dating_page(
        State(test.state()),
        test.session.clone(),
        Json(SwipeDto {
            target_page_id: page.id,
            liked: true,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the same profile is swiped twice
async fn returns_conflict_for_repeat_swipe() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let swiper = test.user().insert_user("mara@example.com").await?;
    let target = test.user().insert_user("noah@example.com").await?;
    let swiper_page = test.dating().insert_page(swiper.id, "Berlin").await?;
    let target_page = test.dating().insert_page(target.id, "Berlin").await?;
    test.dating()
        .insert_swipe(swiper_page.id, target_page.id, false)
        .await?;

    SessionUserId::insert(&test.session, swiper.id).await.unwrap();

    let result = swipe_dating_page(
        State(test.state()),
        test.session.clone(),
        Json(SwipeDto {
            target_page_id: target_page.id,
            liked: true,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a swiper who never created a profile
async fn returns_not_found_without_own_page() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let swiper = test.user().insert_user("mara@example.com").await?;
    let target = test.user().insert_user("noah@example.com").await?;
    let target_page = test.dating().insert_page(target.id, "Berlin").await?;

    SessionUserId::insert(&test.session, swiper.id).await.unwrap();

    let result = swipe_dating_page(
        State(test.state()),
        test.session.clone(),
        Json(SwipeDto {
            target_page_id: target_page.id,
            liked: true,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
