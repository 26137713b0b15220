//! HTTP-level integration tests for the wiki pages.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, location, post_form};
use lore_db::repositories::{ArticleRepo, CharacterRepo, PlaceRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Home and static pages
// ---------------------------------------------------------------------------

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_empty_home_page(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("No articles yet."));
    assert!(html.contains("No characters yet."));
    assert!(html.contains("No places yet."));
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_text_analysis_stub(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/text_analysis").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Text analysis"));
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_add_forms_render(pool: SqlitePool) {
    for (uri, field) in [
        ("/add_article", "name=\"content\""),
        ("/add_character", "name=\"religion\""),
        ("/add_place", "name=\"location\""),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(body_text(response).await.contains(field), "{uri} lacks {field}");
    }
}

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_add_article_redirects_home_and_is_listed(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/add_article",
        &[("title", "  Intro  "), ("content", "Hello")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let app = common::build_test_app(pool.clone());
    let html = body_text(get(app, "/").await).await;
    assert!(html.contains(">Intro</a>"));

    let stored = ArticleRepo::list_all(&pool).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Intro");
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_article_detail_page(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_form(
        app,
        "/add_article",
        &[("title", "Lore"), ("content", "Dragons & kings")],
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/article/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Lore"));
    assert!(html.contains("Dragons &amp; kings"));

    let app = common::build_test_app(pool);
    let response = get(app, "/article/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_article_without_title_fails(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/add_article", &[("content", "Hello")]).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(ArticleRepo::list_all(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_article_with_blank_title_fails(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/add_article", &[("title", "   "), ("content", "x")]).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(ArticleRepo::list_all(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_article_fields_keep_reserved_characters(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/add_article",
        &[("title", "Salt & Iron = 100%"), ("content", "a+b?c/d")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let stored = ArticleRepo::list_all(&pool).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Salt & Iron = 100%");
    assert_eq!(stored[0].content, "a+b?c/d");
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_add_character_redirects_to_detail(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/add_character",
        &[
            ("name", "Hero"),
            ("gender", "m"),
            ("origin", "X"),
            ("religion", "Y"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/character/1");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/character/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("<h1>Hero</h1>"));

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/character/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Optional fields that were never submitted are stored as empty text.
    let stored = CharacterRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(stored.quote.as_deref(), Some(""));
    assert_eq!(stored.age, None);
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_add_character_with_all_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/add_character",
        &[
            ("name", " Aria "),
            ("quote", "Steel remembers."),
            ("gender", "f"),
            ("age", " 27 "),
            ("full_name", "Aria of the Vale"),
            ("origin", "Vale"),
            ("religion", "Old Gods"),
            ("appearance", "Tall"),
            ("personality", "Stubborn"),
            ("history", "Exiled young."),
            ("first_appearance", "Chapter 2"),
            ("image", "https://example.com/aria.png"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let stored = CharacterRepo::list_all(&pool).await.unwrap();
    assert_eq!(stored.len(), 1);
    let aria = &stored[0];
    assert_eq!(aria.name, "Aria");
    assert_eq!(aria.age, Some(27));
    assert_eq!(aria.first_appearance.as_deref(), Some("Chapter 2"));

    let app = common::build_test_app(pool);
    let html = body_text(get(app, location(&response)).await).await;
    assert!(html.contains("Steel remembers."));
    assert!(html.contains("Aria of the Vale"));
    assert!(html.contains("<dd>27</dd>"));
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_add_character_with_bad_age_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/add_character",
        &[
            ("name", "Hero"),
            ("gender", "m"),
            ("age", "very old"),
            ("origin", "X"),
            ("religion", "Y"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(CharacterRepo::list_all(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_add_character_missing_required_fails(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/add_character", &[("name", "Hero")]).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(CharacterRepo::list_all(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_non_numeric_detail_id_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_form(
        app,
        "/add_character",
        &[
            ("name", "Hero"),
            ("gender", "m"),
            ("origin", "X"),
            ("religion", "Y"),
        ],
    )
    .await;

    for uri in [
        "/character/abc",
        "/character/+1",
        "/character/%201",
        "/place/1.5",
        "/article/-1",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_add_place_redirects_to_detail(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/add_place",
        &[
            ("name", "Keep"),
            ("location", "North"),
            ("description", "A windswept keep."),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/place/1");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/place/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>Keep</h1>"));
    assert!(html.contains("A windswept keep."));

    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, "/place/2").await.status(), StatusCode::NOT_FOUND);

    assert_eq!(PlaceRepo::list_all(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrator = "lore_db::MIGRATOR")]
async fn test_home_lists_every_entity_type(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_form(app, "/add_article", &[("title", "Intro"), ("content", "Hi")]).await;
    let app = common::build_test_app(pool.clone());
    post_form(
        app,
        "/add_character",
        &[
            ("name", "Hero"),
            ("gender", "m"),
            ("origin", "X"),
            ("religion", "Y"),
        ],
    )
    .await;
    let app = common::build_test_app(pool.clone());
    post_form(app, "/add_place", &[("name", "Keep"), ("location", "North")]).await;

    let app = common::build_test_app(pool);
    let html = body_text(get(app, "/").await).await;
    assert!(html.contains("href=\"/article/1\""));
    assert!(html.contains("href=\"/character/1\""));
    assert!(html.contains("href=\"/place/1\""));
}
