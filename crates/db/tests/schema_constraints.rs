//! Schema-level constraint tests.
//!
//! The API itself never writes, but the schema's CHECK and UNIQUE
//! constraints are what the aggregation relies on (no duplicate join rows,
//! only known role values). These tests poke the constraints directly.

use sqlx::PgPool;

use movies_db::models::film_work::FilmWork;
use movies_db::models::genre::Genre;
use movies_db::models::person::Person;

fn is_check_or_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            // 23505 = unique_violation, 23514 = check_violation
            matches!(db_err.code().as_deref(), Some("23505") | Some("23514"))
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Row models decode against the live schema
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
async fn base_table_rows_decode(pool: PgPool) {
    let genres: Vec<Genre> = sqlx::query_as("SELECT * FROM genre ORDER BY name")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(genres.len(), 3);
    assert_eq!(genres[0].name, "Action");

    let people: Vec<Person> = sqlx::query_as("SELECT * FROM person")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(people.len(), 4);

    let films: Vec<FilmWork> = sqlx::query_as("SELECT * FROM film_work ORDER BY created_at")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(films.len(), 3);
    assert_eq!(films[0].title, "Inception");
}

// ---------------------------------------------------------------------------
// CHECK constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn empty_genre_name_is_rejected(pool: PgPool) {
    let err = sqlx::query("INSERT INTO genre (name) VALUES ('')")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(is_check_or_unique_violation(&err));
}

#[sqlx::test(migrations = "./migrations")]
async fn rating_above_100_is_rejected(pool: PgPool) {
    let err = sqlx::query("INSERT INTO film_work (title, type, rating) VALUES ('X', 'movie', 101)")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(is_check_or_unique_violation(&err));
}

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
async fn unknown_role_is_rejected(pool: PgPool) {
    let err = sqlx::query(
        "INSERT INTO person_film_work (film_work_id, person_id, role)
         VALUES ('f0000000-0000-0000-0000-000000000003',
                 'b0000000-0000-0000-0000-000000000001',
                 'producer')",
    )
    .execute(&pool)
    .await
    .unwrap_err();
    assert!(is_check_or_unique_violation(&err));
}

// ---------------------------------------------------------------------------
// UNIQUE constraints on the join tables
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
async fn duplicate_genre_link_is_rejected(pool: PgPool) {
    let err = sqlx::query(
        "INSERT INTO genre_film_work (film_work_id, genre_id)
         VALUES ('f0000000-0000-0000-0000-000000000001',
                 'a0000000-0000-0000-0000-000000000001')",
    )
    .execute(&pool)
    .await
    .unwrap_err();
    assert!(is_check_or_unique_violation(&err));
}

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
async fn duplicate_role_triple_is_rejected_but_second_role_is_not(pool: PgPool) {
    // Same (film, person, role) triple again: rejected.
    let err = sqlx::query(
        "INSERT INTO person_film_work (film_work_id, person_id, role)
         VALUES ('f0000000-0000-0000-0000-000000000001',
                 'b0000000-0000-0000-0000-000000000001',
                 'director')",
    )
    .execute(&pool)
    .await
    .unwrap_err();
    assert!(is_check_or_unique_violation(&err));

    // Same person on the same film under a new role: allowed.
    sqlx::query(
        "INSERT INTO person_film_work (film_work_id, person_id, role)
         VALUES ('f0000000-0000-0000-0000-000000000001',
                 'b0000000-0000-0000-0000-000000000001',
                 'actor')",
    )
    .execute(&pool)
    .await
    .unwrap();
}
