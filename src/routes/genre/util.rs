use actix_web::{web, Scope};

use super::{create_genre, delete_genre, update_genre};

pub fn genre_source() -> Scope {
    web::scope("/genre")
        .route("/", web::post().to(create_genre))
        .route("/{genre_id}", web::put().to(update_genre))
        .route("/{genre_id}", web::delete().to(delete_genre))
}
