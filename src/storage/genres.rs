use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

pub async fn insert(pool: &SqlitePool, name: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO genre (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn fetch_by_id(pool: &SqlitePool, genre_id: i64) -> Result<Option<Genre>, sqlx::Error> {
    sqlx::query_as::<_, Genre>("SELECT id, name FROM genre WHERE id = ?")
        .bind(genre_id)
        .fetch_optional(pool)
        .await
}

pub async fn update_name(pool: &SqlitePool, genre_id: i64, name: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE genre SET name = ? WHERE id = ?")
        .bind(name)
        .bind(genre_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, genre_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM genre WHERE id = ?")
        .bind(genre_id)
        .execute(pool)
        .await?;
    Ok(())
}
