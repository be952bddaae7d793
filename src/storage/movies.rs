use serde::Serialize;
use sqlx::SqlitePool;

/// A stored movie row. Serializes to the flat wire shape: scalar fields only,
/// the genre and director stay plain ids rather than embedded objects.
#[derive(Serialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

const MOVIE_COLUMNS: &str = "id, title, description, trailer, year, rating, genre_id, director_id";

/// Movies have no HTTP write surface; rows are created through direct storage
/// access only.
pub async fn insert(pool: &SqlitePool, movie: &NewMovie) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&movie.title)
    .bind(&movie.description)
    .bind(&movie.trailer)
    .bind(movie.year)
    .bind(movie.rating)
    .bind(movie.genre_id)
    .bind(movie.director_id)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn fetch_by_id(pool: &SqlitePool, movie_id: i64) -> Result<Option<Movie>, sqlx::Error> {
    sqlx::query_as::<_, Movie>(&format!(
        "SELECT {} FROM movie WHERE id = ?",
        MOVIE_COLUMNS
    ))
    .bind(movie_id)
    .fetch_optional(pool)
    .await
}

/// Both filters present narrows to the intersection; one filter narrows to
/// that predicate alone; neither returns every row in natural order.
pub async fn fetch_filtered(
    pool: &SqlitePool,
    director_id: Option<i64>,
    genre_id: Option<i64>,
) -> Result<Vec<Movie>, sqlx::Error> {
    match (director_id, genre_id) {
        (Some(director_id), Some(genre_id)) => {
            sqlx::query_as::<_, Movie>(&format!(
                "SELECT {} FROM movie WHERE director_id = ? AND genre_id = ?",
                MOVIE_COLUMNS
            ))
            .bind(director_id)
            .bind(genre_id)
            .fetch_all(pool)
            .await
        }
        (Some(director_id), None) => {
            sqlx::query_as::<_, Movie>(&format!(
                "SELECT {} FROM movie WHERE director_id = ?",
                MOVIE_COLUMNS
            ))
            .bind(director_id)
            .fetch_all(pool)
            .await
        }
        (None, Some(genre_id)) => {
            sqlx::query_as::<_, Movie>(&format!(
                "SELECT {} FROM movie WHERE genre_id = ?",
                MOVIE_COLUMNS
            ))
            .bind(genre_id)
            .fetch_all(pool)
            .await
        }
        (None, None) => {
            sqlx::query_as::<_, Movie>(&format!("SELECT {} FROM movie", MOVIE_COLUMNS))
                .fetch_all(pool)
                .await
        }
    }
}
