use crate::storage::movies;
use crate::util::ResponseMessage;
use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use sqlx::SqlitePool;
use tracing::Instrument;

pub async fn get_movie_info(connection: Data<SqlitePool>, path: Path<i64>) -> HttpResponse {
    let movie_id = path.into_inner();
    let query_span = tracing::info_span!("Fetching movie by id", movie_id);
    let result = movies::fetch_by_id(connection.get_ref(), movie_id)
        .instrument(query_span)
        .await;

    match result {
        Ok(Some(movie)) => HttpResponse::Ok().json(movie),
        // An unknown id is not an error on this route: the body is a bare JSON null.
        Ok(None) => HttpResponse::Ok().json(serde_json::Value::Null),
        Err(err) => {
            tracing::error!("Failed to fetch movie {:?}", err);
            HttpResponse::InternalServerError().json(ResponseMessage::new("Failed to fetch movie"))
        }
    }
}
