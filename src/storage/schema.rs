use sqlx::SqlitePool;

// The foreign_keys pragma stays off: deleting a referenced genre or director
// must leave the movie rows' references dangling rather than fail or cascade.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS genre (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS director (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movie (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            trailer TEXT NOT NULL,
            year INTEGER NOT NULL,
            rating REAL NOT NULL,
            genre_id INTEGER REFERENCES genre (id),
            director_id INTEGER REFERENCES director (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
