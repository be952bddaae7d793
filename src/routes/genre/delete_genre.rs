use crate::storage::genres;
use crate::util::ResponseMessage;
use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use sqlx::SqlitePool;
use tracing::Instrument;

pub async fn delete_genre(connection: Data<SqlitePool>, path: Path<i64>) -> HttpResponse {
    let genre_id = path.into_inner();
    let query_span = tracing::info_span!("Deleting genre", genre_id);

    let genre = match genres::fetch_by_id(connection.get_ref(), genre_id)
        .instrument(query_span.clone())
        .await
    {
        Ok(Some(genre)) => genre,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(ResponseMessage::new("No genre found with that id"))
        }
        Err(err) => {
            tracing::error!("Failed to fetch genre {:?}", err);
            return HttpResponse::InternalServerError()
                .json(ResponseMessage::new("Failed to delete genre"));
        }
    };

    let result = genres::delete(connection.get_ref(), genre.id)
        .instrument(query_span)
        .await;

    match result {
        Ok(()) => {
            tracing::info!("Genre deleted successfully");
            HttpResponse::Ok().finish()
        }
        Err(err) => {
            tracing::error!("Failed to delete genre {:?}", err);
            HttpResponse::InternalServerError().json(ResponseMessage::new("Failed to delete genre"))
        }
    }
}
