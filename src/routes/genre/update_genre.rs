use crate::storage::genres;
use crate::util::ResponseMessage;
use actix_web::{
    web::{Data, Form, Path},
    HttpResponse,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::Instrument;

#[derive(Deserialize, Debug)]
pub struct UpdateGenreRequest {
    name: String,
}

pub async fn update_genre(
    connection: Data<SqlitePool>,
    path: Path<i64>,
    body: Form<UpdateGenreRequest>,
) -> HttpResponse {
    let genre_id = path.into_inner();
    let query_span = tracing::info_span!("Renaming genre", genre_id, ?body);

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
                .json(ResponseMessage::new("Failed to update genre"));
        }
    };

    let result = genres::update_name(connection.get_ref(), genre.id, &body.name)
        .instrument(query_span)
        .await;

    match result {
        Ok(()) => {
            tracing::info!("Genre updated successfully");
            HttpResponse::Ok().finish()
        }
        Err(err) => {
            tracing::error!("Failed to update genre {:?}", err);
            HttpResponse::InternalServerError().json(ResponseMessage::new("Failed to update genre"))
        }
    }
}
