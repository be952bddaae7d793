use crate::storage::directors;
use crate::util::ResponseMessage;
use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use sqlx::SqlitePool;
use tracing::Instrument;

pub async fn delete_director(connection: Data<SqlitePool>, path: Path<i64>) -> HttpResponse {
    let director_id = path.into_inner();
    let query_span = tracing::info_span!("Deleting director", director_id);

    let director = match directors::fetch_by_id(connection.get_ref(), director_id)
        .instrument(query_span.clone())
        .await
    {
        Ok(Some(director)) => director,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(ResponseMessage::new("No director found with that id"))
        }
        Err(err) => {
            tracing::error!("Failed to fetch director {:?}", err);
            return HttpResponse::InternalServerError()
                .json(ResponseMessage::new("Failed to delete director"));
        }
    };

    let result = directors::delete(connection.get_ref(), director.id)
        .instrument(query_span)
        .await;

    match result {
        Ok(()) => {
            tracing::info!("Director deleted successfully");
            HttpResponse::Ok().finish()
        }
        Err(err) => {
            tracing::error!("Failed to delete director {:?}", err);
            HttpResponse::InternalServerError()
                .json(ResponseMessage::new("Failed to delete director"))
        }
    }
}
