//! HTTP tests for the /places routes and /countries/:id/places.

mod common;

use axum::http::StatusCode;
use common::test_app;
use serde_json::json;

#[tokio::test]
async fn create_with_empty_name_is_400() {
    let app = test_app();
    let res = app
        .send(
            "POST",
            "/places/",
            Some(json!({ "name": "", "longitude": 0, "latitude": 0 })),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("name is required"));
}

#[tokio::test]
async fn create_returns_201_with_photos() {
    let app = test_app();
    let cid = app.country("Greece", "Athens").await;
    let place = app
        .place(json!({
            "name": "Acropolis",
            "description": "citadel",
            "longitude": 23.7257,
            "latitude": 37.9715,
            "country_id": cid,
            "photo_urls": ["https://img/a1.jpg", "https://img/a2.jpg"]
        }))
        .await;

    assert!(place["id"].as_i64().unwrap() > 0);
    assert_eq!(place["country_id"], cid);
    assert_eq!(place["photo_urls"], json!(["https://img/a1.jpg", "https://img/a2.jpg"]));
}

#[tokio::test]
async fn places_of_a_country_carry_the_country() {
    let app = test_app();
    let cid = app.country("Egypt", "Cairo").await;
    let other = app.country("Sudan", "Khartoum").await;
    let place = app
        .place(json!({ "name": "Giza", "country_id": cid, "url": ["giza.jpg"] }))
        .await;
    app.place(json!({ "name": "Meroe", "country_id": other })).await;

    let res = app.get(&format!("/countries/{}/places", cid)).await;
    assert_eq!(res.status, StatusCode::OK);
    let places = res.body.as_array().unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0]["id"], place["id"]);
    assert_eq!(places[0]["photo_urls"], json!(["giza.jpg"]));
    assert_eq!(
        places[0]["country"],
        json!({
            "id": cid,
            "name": "Egypt",
            "capital": "Cairo",
            "language": "",
            "currency": "",
            "description": "",
            "photo_url": ""
        })
    );
}

#[tokio::test]
async fn get_by_id_validates_and_enriches() {
    let app = test_app();
    assert_eq!(app.get("/places/0").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get("/places/-4").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get("/places/nope").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get("/places/31").await.status, StatusCode::NOT_FOUND);

    let cid = app.country("Peru", "Lima").await;
    let place = app.place(json!({ "name": "Machu Picchu", "country_id": cid })).await;
    let res = app.get(&format!("/places/{}", place["id"])).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["country"]["name"], "Peru");
}

#[tokio::test]
async fn delete_removes_place_and_photos() {
    let app = test_app();
    let cid = app.country("Cambodia", "Phnom Penh").await;
    let place = app
        .place(json!({
            "name": "Angkor Wat",
            "country_id": cid,
            "photo_urls": ["1.jpg", "2.jpg", "3.jpg"]
        }))
        .await;
    assert_eq!(app.places.photo_count().await, 3);

    let uri = format!("/places/{}", place["id"]);
    let res = app.send("DELETE", &uri, None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(res.body, serde_json::Value::Null);
    assert_eq!(app.places.photo_count().await, 0);

    assert_eq!(app.get(&uri).await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.send("DELETE", &uri, None).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_changes_fields_but_not_photos() {
    let app = test_app();
    let cid = app.country("Norway", "Oslo").await;
    let place = app
        .place(json!({ "name": "Fjord", "country_id": cid, "photo_urls": ["f.jpg"] }))
        .await;
    let uri = format!("/places/{}", place["id"]);

    let res = app
        .send(
            "PUT",
            &uri,
            Some(json!({ "name": "Geirangerfjord", "longitude": 7.2, "latitude": 62.1 })),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Geirangerfjord");
    assert_eq!(res.body["photo_urls"], json!(["f.jpg"]));
    assert_eq!(res.body["country_id"], cid);

    let res = app.send("PUT", &uri, Some(json!({ "name": "" }))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app.send("PUT", "/places/500", Some(json!({ "name": "x" }))).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_fails_when_a_place_has_no_country() {
    let app = test_app();
    let cid = app.country("Kenya", "Nairobi").await;
    app.place(json!({ "name": "Maasai Mara", "country_id": cid })).await;

    let res = app.get("/places/").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_array().unwrap().len(), 1);

    app.place(json!({ "name": "Stateless" })).await;
    let res = app.get("/places").await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["error"]["code"], "integrity_error");
}

#[tokio::test]
async fn search_sorted_limited_and_blank_safe() {
    let app = test_app();
    let cid = app.country("Italy", "Rome").await;
    for name in ["Lake Como", "Lake Garda", "Amalfi Coast", "Lake Maggiore"] {
        app.place(json!({ "name": name, "country_id": cid })).await;
    }

    let res = app.get("/places/search?q=lake&limit=2").await;
    assert_eq!(res.status, StatusCode::OK);
    let names: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Lake Como", "Lake Garda"]);
    assert_eq!(res.body[0]["country"]["name"], "Italy");

    let res = app.get("/places/search?q=como&q=garda").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_array().unwrap().len(), 1);
    assert_eq!(res.body[0]["name"], "Lake Como");

    let res = app.get("/places/search?q=%20").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!([]));
}

#[tokio::test]
async fn options_short_circuits_with_cors_headers() {
    let app = test_app();
    let res = app.send("OPTIONS", "/places/", None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(res.headers["access-control-allow-origin"], "*");
    assert_eq!(
        res.headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );

    let res = app.get("/countries/").await;
    assert_eq!(res.headers["access-control-allow-headers"], "Content-Type, Authorization");
}

#[tokio::test]
async fn operational_routes() {
    let app = test_app();
    assert_eq!(app.get("/health").await.body, json!({ "status": "ok" }));
    assert_eq!(app.get("/version").await.body["name"], "top-places");
    let doc = app.get("/openapi.json").await;
    assert_eq!(doc.status, StatusCode::OK);
    assert!(doc.body["paths"]["/places/{id}"].is_object());
}
