use crate::storage::directors;
use crate::util::ResponseMessage;
use actix_web::{
    web::{Data, Form, Path},
    HttpResponse,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::Instrument;

#[derive(Deserialize, Debug)]
pub struct UpdateDirectorRequest {
    name: String,
}

pub async fn update_director(
    connection: Data<SqlitePool>,
    path: Path<i64>,
    body: Form<UpdateDirectorRequest>,
) -> HttpResponse {
    let director_id = path.into_inner();
    let query_span = tracing::info_span!("Renaming director", director_id, ?body);

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
                .json(ResponseMessage::new("Failed to update director"));
        }
    };

    let result = directors::update_name(connection.get_ref(), director.id, &body.name)
        .instrument(query_span)
        .await;

    match result {
        Ok(()) => {
            tracing::info!("Director updated successfully");
            HttpResponse::Ok().finish()
        }
        Err(err) => {
            tracing::error!("Failed to update director {:?}", err);
            HttpResponse::InternalServerError()
                .json(ResponseMessage::new("Failed to update director"))
        }
    }
}
