mod test_startup;

use moviebase_backend::storage::movies::{self, NewMovie};
use moviebase_backend::storage::directors;
use test_startup::*;

#[actix_rt::test]
async fn create_director_persists_exactly_one_row() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/director/", app.address).as_str())
        .form(&[("name", "Alice")])
        .send()
        .await
        .expect("Failed to execute request");

    assert!(res.status().is_success());
    let director = directors::fetch_by_id(&app.db_pool, 1)
        .await
        .expect("Failed to query the database")
        .expect("No director row was created");
    assert_eq!(director.name, "Alice");
}

#[actix_rt::test]
async fn create_director_without_a_name_field_is_rejected() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/director/", app.address).as_str())
        .form(&[("nickname", "Alice")])
        .send()
        .await
        .expect("Failed to execute request");

    assert!(res.status().is_client_error());
}

#[actix_rt::test]
async fn update_director_renames_only_that_row() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let director_id = directors::insert(&app.db_pool, "Alice")
        .await
        .expect("Failed to insert director");
    let movie_id = movies::insert(
        &app.db_pool,
        &NewMovie {
            title: "Untitled".to_string(),
            description: "A movie by Alice".to_string(),
            trailer: "https://example.com/untitled".to_string(),
            year: 2020,
            rating: 6.0,
            genre_id: None,
            director_id: Some(director_id),
        },
    )
    .await
    .expect("Failed to insert movie");

    let res = client
        .put(format!("{}/director/{}", app.address, director_id).as_str())
        .form(&[("name", "Bob")])
        .send()
        .await
        .expect("Failed to execute request");

    assert!(res.status().is_success());
    let director = directors::fetch_by_id(&app.db_pool, director_id)
        .await
        .expect("Failed to query the database")
        .expect("The director row went missing");
    assert_eq!(director.id, director_id);
    assert_eq!(director.name, "Bob");

    let movie = movies::fetch_by_id(&app.db_pool, movie_id)
        .await
        .expect("Failed to query the database")
        .expect("The movie row went missing");
    assert_eq!(movie.director_id, Some(director_id));
}

#[actix_rt::test]
async fn update_director_with_an_unknown_id_returns_404() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/director/42", app.address).as_str())
        .form(&[("name", "Bob")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(res.status().as_u16(), 404);
}

#[actix_rt::test]
async fn delete_director_removes_the_row() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let director_id = directors::insert(&app.db_pool, "Alice")
        .await
        .expect("Failed to insert director");

    let res = client
        .delete(format!("{}/director/{}", app.address, director_id).as_str())
        .send()
        .await
        .expect("Failed to execute request");

    assert!(res.status().is_success());
    let director = directors::fetch_by_id(&app.db_pool, director_id)
        .await
        .expect("Failed to query the database");
    assert!(director.is_none());
}

#[actix_rt::test]
async fn delete_director_with_an_unknown_id_returns_404() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/director/42", app.address).as_str())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(res.status().as_u16(), 404);
}
