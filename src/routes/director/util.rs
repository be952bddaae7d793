use actix_web::{web, Scope};

use super::{create_director, delete_director, update_director};

pub fn director_source() -> Scope {
    web::scope("/director")
        .route("/", web::post().to(create_director))
        .route("/{director_id}", web::put().to(update_director))
        .route("/{director_id}", web::delete().to(delete_director))
}
