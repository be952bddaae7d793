use crate::storage::directors;
use crate::util::ResponseMessage;
use actix_web::{
    web::{Data, Form},
    HttpResponse,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::Instrument;

#[derive(Deserialize, Debug)]
pub struct CreateDirectorRequest {
    name: String,
}

pub async fn create_director(
    connection: Data<SqlitePool>,
    body: Form<CreateDirectorRequest>,
) -> HttpResponse {
    let query_span = tracing::info_span!("Saving new director in the database", ?body);
    let result = directors::insert(connection.get_ref(), &body.name)
        .instrument(query_span)
        .await;

    match result {
        Ok(_) => {
            tracing::info!("Director created successfully");
            HttpResponse::Ok().finish()
        }
        Err(err) => {
            tracing::error!("Failed to create director {:?}", err);
            HttpResponse::InternalServerError()
                .json(ResponseMessage::new("Failed to create director"))
        }
    }
}
