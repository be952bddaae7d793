use crate::storage::genres;
use crate::util::ResponseMessage;
use actix_web::{
    web::{Data, Form},
    HttpResponse,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::Instrument;

#[derive(Deserialize, Debug)]
pub struct CreateGenreRequest {
    name: String,
}

pub async fn create_genre(
    connection: Data<SqlitePool>,
    body: Form<CreateGenreRequest>,
) -> HttpResponse {
    let query_span = tracing::info_span!("Saving new genre in the database", ?body);
    let result = genres::insert(connection.get_ref(), &body.name)
        .instrument(query_span)
        .await;

    match result {
        Ok(_) => {
            tracing::info!("Genre created successfully");
            HttpResponse::Ok().finish()
        }
        Err(err) => {
            tracing::error!("Failed to create genre {:?}", err);
            HttpResponse::InternalServerError().json(ResponseMessage::new("Failed to create genre"))
        }
    }
}
