use crate::storage::movies;
use crate::util::ResponseMessage;
use actix_web::{
    web::{Data, Query},
    HttpResponse,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::Instrument;

#[derive(Deserialize, Debug)]
pub struct MovieListFilter {
    pub director_id: Option<i64>,
    pub genre_id: Option<i64>,
}

pub async fn get_movie_list(
    connection: Data<SqlitePool>,
    filter: Query<MovieListFilter>,
) -> HttpResponse {
    let filter = filter.into_inner();
    let query_span = tracing::info_span!("Listing movies", ?filter);
    let result = movies::fetch_filtered(connection.get_ref(), filter.director_id, filter.genre_id)
        .instrument(query_span)
        .await;

    match result {
        Ok(movie_list) => HttpResponse::Ok().json(movie_list),
        Err(err) => {
            tracing::error!("Failed to list movies {:?}", err);
            HttpResponse::InternalServerError().json(ResponseMessage::new("Failed to list movies"))
        }
    }
}
