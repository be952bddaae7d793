use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Director {
    pub id: i64,
    pub name: String,
}

pub async fn insert(pool: &SqlitePool, name: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO director (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn fetch_by_id(
    pool: &SqlitePool,
    director_id: i64,
) -> Result<Option<Director>, sqlx::Error> {
    sqlx::query_as::<_, Director>("SELECT id, name FROM director WHERE id = ?")
        .bind(director_id)
        .fetch_optional(pool)
        .await
}

pub async fn update_name(
    pool: &SqlitePool,
    director_id: i64,
    name: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE director SET name = ? WHERE id = ?")
        .bind(name)
        .bind(director_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, director_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM director WHERE id = ?")
        .bind(director_id)
        .execute(pool)
        .await?;
    Ok(())
}
