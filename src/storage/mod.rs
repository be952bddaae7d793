pub mod directors;
pub mod genres;
pub mod movies;
mod schema;

pub use schema::init_schema;
