use sqlx::PgPool;
use std::sync::Arc;

use clifton::domain::entities::{MediaType, Pid, Programme};
use clifton::domain::repositories::{ProgrammesRepository, RepositoryError};
use clifton::infrastructure::persistence::PgProgrammesRepository;

fn repository(pool: PgPool) -> PgProgrammesRepository {
    PgProgrammesRepository::new(Arc::new(pool), 16)
}

fn pid(value: &str) -> Pid {
    Pid::new(value).unwrap()
}

async fn insert_image(pool: &PgPool, pid: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO images (pid) VALUES ($1) RETURNING id")
        .bind(pid)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn insert_master_brand(pool: &PgPool, mid: &str, nid: &str, image_id: i64) -> i64 {
    let network_id: i64 = sqlx::query_scalar(
        "INSERT INTO networks (nid, name, url_key, medium, image_id)
         VALUES ($1, 'BBC One', $1, 'tv', $2) RETURNING id",
    )
    .bind(nid)
    .bind(image_id)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query_scalar(
        "INSERT INTO master_brands (mid, name, image_id, network_id)
         VALUES ($1, 'BBC One Scotland', $2, $3) RETURNING id",
    )
    .bind(mid)
    .bind(image_id)
    .bind(network_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_programme(
    pool: &PgPool,
    pid: &str,
    programme_type: &str,
    image_id: i64,
    parent_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO programmes (pid, programme_type, title, image_id, parent_id, expected_child_count)
         VALUES ($1, $2, $1, $3, $4, 10) RETURNING id",
    )
    .bind(pid)
    .bind(programme_type)
    .bind(image_id)
    .bind(parent_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_category(
    pool: &PgPool,
    pip_id: &str,
    category_type: &str,
    parent_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO categories (pip_id, category_type, title, url_key, parent_id)
         VALUES ($1, $2, $1, $1, $3) RETURNING id",
    )
    .bind(pip_id)
    .bind(category_type)
    .bind(parent_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn attach_category(pool: &PgPool, programme_id: i64, category_id: i64, sort_order: i32) {
    sqlx::query(
        "INSERT INTO programme_categories (programme_id, category_id, sort_order) VALUES ($1, $2, $3)",
    )
    .bind(programme_id)
    .bind(category_id)
    .bind(sort_order)
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test]
async fn test_find_missing_programme(pool: PgPool) {
    let repo = repository(pool);

    let result = repo.find_by_pid_full(&pid("b00000000")).await;

    assert_eq!(result, Ok(None));
}

#[sqlx::test]
async fn test_find_brand(pool: PgPool) {
    let image_id = insert_image(&pool, "p01m5mss").await;
    insert_programme(&pool, "b006q2x0", "brand", image_id, None).await;
    let repo = repository(pool);

    let programme = repo.find_by_pid_full(&pid("b006q2x0")).await.unwrap().unwrap();

    let Programme::Brand(brand) = programme else {
        panic!("expected a brand");
    };
    assert_eq!(brand.core.title, "b006q2x0");
    assert_eq!(brand.core.image.pid.as_str(), "p01m5mss");
    assert_eq!(brand.expected_child_count, Some(10));
    assert!(brand.core.parent.is_none());
}

#[sqlx::test]
async fn test_find_episode_with_ancestors(pool: PgPool) {
    let image_id = insert_image(&pool, "p01m5mss").await;
    let brand_id = insert_programme(&pool, "b006q2x0", "brand", image_id, None).await;
    let series_id = insert_programme(&pool, "b06hgxtt", "series", image_id, Some(brand_id)).await;
    let episode_id =
        insert_programme(&pool, "b06tl32t", "episode", image_id, Some(series_id)).await;

    sqlx::query(
        "UPDATE programmes
         SET media_type = 'audio_video', release_year = 2015, release_month = 12, release_day = 25
         WHERE id = $1",
    )
    .bind(episode_id)
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO versions (pid, programme_id, duration) VALUES ('b06tl3kz', $1, 3600)")
        .bind(episode_id)
        .execute(&pool)
        .await
        .unwrap();

    let repo = repository(pool);
    let programme = repo.find_by_pid_full(&pid("b06tl32t")).await.unwrap().unwrap();

    let pids: Vec<_> = programme
        .ancestry()
        .map(|p| p.pid().as_str().to_string())
        .collect();
    assert_eq!(programme.pid().as_str(), "b06tl32t");
    assert_eq!(pids, ["b06hgxtt", "b006q2x0"]);

    let Programme::Episode(episode) = programme else {
        panic!("expected an episode");
    };
    assert_eq!(episode.media_type, Some(MediaType::Video));
    assert_eq!(
        episode.release_date.map(|d| d.to_date().to_string()),
        Some("2015-12-25".to_string())
    );
    assert_eq!(episode.versions.len(), 1);
    assert_eq!(episode.versions[0].duration, Some(3600));
}

#[sqlx::test]
async fn test_find_loads_ownership(pool: PgPool) {
    let image_id = insert_image(&pool, "p01m5mss").await;
    let master_brand_id =
        insert_master_brand(&pool, "bbc_one_scotland", "bbc_one", image_id).await;
    let series_id = insert_programme(&pool, "b06hgxtt", "series", image_id, None).await;
    sqlx::query("UPDATE programmes SET master_brand_id = $1 WHERE id = $2")
        .bind(master_brand_id)
        .bind(series_id)
        .execute(&pool)
        .await
        .unwrap();

    let repo = repository(pool);
    let programme = repo.find_by_pid_full(&pid("b06hgxtt")).await.unwrap().unwrap();

    let master_brand = programme.core().master_brand.as_ref().unwrap();
    assert_eq!(master_brand.mid.as_str(), "bbc_one_scotland");
    assert_eq!(master_brand.network.nid.as_str(), "bbc_one");
    assert!(master_brand.is_outlet());
}

#[sqlx::test]
async fn test_find_loads_categories(pool: PgPool) {
    let image_id = insert_image(&pool, "p01m5mss").await;
    let series_id = insert_programme(&pool, "b06hgxtt", "series", image_id, None).await;

    let drama = insert_category(&pool, "C00017", "genre", None).await;
    let scifi = insert_category(&pool, "C00045", "genre", Some(drama)).await;
    let films = insert_category(&pool, "PT007", "format", None).await;
    attach_category(&pool, series_id, scifi, 0).await;
    attach_category(&pool, series_id, films, 1).await;

    let repo = repository(pool);
    let programme = repo.find_by_pid_full(&pid("b06hgxtt")).await.unwrap().unwrap();
    let core = programme.core();

    assert_eq!(core.formats.len(), 1);
    assert_eq!(core.formats[0].id, "PT007");
    assert_eq!(core.genres.len(), 1);
    assert_eq!(core.genres[0].id, "C00045");
    let broader: Vec<_> = core.genres[0].ancestry().map(|g| g.id.as_str()).collect();
    assert_eq!(broader, ["C00017"]);
}

#[sqlx::test]
async fn test_ancestor_chain_deeper_than_limit(pool: PgPool) {
    let image_id = insert_image(&pool, "p01m5mss").await;
    let brand_id = insert_programme(&pool, "b006q2x0", "brand", image_id, None).await;
    let series_id = insert_programme(&pool, "b06hgxtt", "series", image_id, Some(brand_id)).await;
    insert_programme(&pool, "b06tl32t", "episode", image_id, Some(series_id)).await;

    let repo = PgProgrammesRepository::new(Arc::new(pool), 1);

    let result = repo.find_by_pid_full(&pid("b06tl32t")).await;

    assert!(matches!(result, Err(RepositoryError::Corrupt(_))));
}

#[sqlx::test]
async fn test_broader_genre_chain_deeper_than_limit(pool: PgPool) {
    let image_id = insert_image(&pool, "p01m5mss").await;
    let series_id = insert_programme(&pool, "b06hgxtt", "series", image_id, None).await;

    let drama = insert_category(&pool, "C00017", "genre", None).await;
    let scifi = insert_category(&pool, "C00045", "genre", Some(drama)).await;
    let space_opera = insert_category(&pool, "C00046", "genre", Some(scifi)).await;
    attach_category(&pool, series_id, space_opera, 0).await;

    let repo = PgProgrammesRepository::new(Arc::new(pool), 1);

    let result = repo.find_by_pid_full(&pid("b06hgxtt")).await;

    assert!(matches!(result, Err(RepositoryError::Corrupt(_))));
}

#[sqlx::test]
async fn test_self_referencing_genre_is_corrupt(pool: PgPool) {
    let image_id = insert_image(&pool, "p01m5mss").await;
    let series_id = insert_programme(&pool, "b06hgxtt", "series", image_id, None).await;

    let genre = insert_category(&pool, "C00017", "genre", None).await;
    sqlx::query("UPDATE categories SET parent_id = id WHERE id = $1")
        .bind(genre)
        .execute(&pool)
        .await
        .unwrap();
    attach_category(&pool, series_id, genre, 0).await;

    let repo = repository(pool);

    let result = repo.find_by_pid_full(&pid("b06hgxtt")).await;

    assert!(matches!(result, Err(RepositoryError::Corrupt(_))));
}

async fn raise(pool: &PgPool, sqlstate: &str) -> RepositoryError {
    let statement =
        format!("DO $$ BEGIN RAISE EXCEPTION 'raised' USING ERRCODE = '{sqlstate}'; END $$");
    let error = sqlx::query(&statement).execute(pool).await.unwrap_err();
    RepositoryError::from(error)
}

#[sqlx::test]
async fn test_connection_exceptions_are_unavailable(pool: PgPool) {
    for sqlstate in ["08006", "08001", "57P01", "53300"] {
        assert!(
            matches!(raise(&pool, sqlstate).await, RepositoryError::Unavailable(_)),
            "{sqlstate}"
        );
    }
}

#[sqlx::test]
async fn test_lock_races_are_transient(pool: PgPool) {
    for sqlstate in ["40P01", "40001", "55P03", "57014"] {
        assert!(
            matches!(raise(&pool, sqlstate).await, RepositoryError::Transient(_)),
            "{sqlstate}"
        );
    }
}

#[sqlx::test]
async fn test_other_database_errors_are_query_failures(pool: PgPool) {
    let error = raise(&pool, "42P01").await;

    assert!(matches!(error, RepositoryError::Query(_)));
    assert!(error.is_failure());
}

#[sqlx::test]
async fn test_missing_table_is_query_failure(pool: PgPool) {
    let error = sqlx::query("SELECT * FROM no_such_table")
        .execute(&pool)
        .await
        .unwrap_err();

    assert!(matches!(RepositoryError::from(error), RepositoryError::Query(_)));
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = repository(pool);

    assert!(repo.ping().await);
}
