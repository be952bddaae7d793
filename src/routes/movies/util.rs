use actix_web::{web, Scope};

use super::{get_movie_info, get_movie_list};

pub fn movies_source() -> Scope {
    web::scope("/movies").route("/", web::get().to(get_movie_list))
}

pub fn movie_source() -> Scope {
    web::scope("/movie").route("/{movie_id}", web::get().to(get_movie_info))
}
