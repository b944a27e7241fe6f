use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use store::{
    consts::consts::StudentName,
    model::{envelope::Envelope, headers::HeaderBag},
    store::request_manager::RequestManager,
};

use crate::error::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_people)
        .service(get_students)
        .service(delete_student)
        .service(add_student);
}

/// Collects the caller's headers into the bag that rides back in the
/// response envelope (and, for `/people`, gets recorded on the roster)
fn visitor_headers(req: &HttpRequest) -> HeaderBag {
    let mut bag = HeaderBag::new();

    for (name, value) in req.headers() {
        bag.insert(name.as_str(), value.to_str().unwrap_or_default());
    }

    bag
}

#[get("/people")]
async fn get_people(
    req: HttpRequest,
    request_manager: web::Data<RequestManager>,
) -> Result<HttpResponse, ApiError> {
    let visitor = visitor_headers(&req);

    let roster = request_manager.send_record_visit(visitor.clone())?;

    Ok(HttpResponse::Ok().json(Envelope::new(roster, visitor)))
}

#[get("/students")]
async fn get_students(
    req: HttpRequest,
    request_manager: web::Data<RequestManager>,
) -> Result<HttpResponse, ApiError> {
    let students = request_manager.send_list_students()?;

    Ok(HttpResponse::Ok().json(Envelope::new(students, visitor_headers(&req))))
}

#[delete("/student/{name}")]
async fn delete_student(
    req: HttpRequest,
    path: web::Path<String>,
    request_manager: web::Data<RequestManager>,
) -> Result<HttpResponse, ApiError> {
    let name = StudentName::new(path.into_inner());

    let students = request_manager.send_remove_students(vec![name])?;

    Ok(HttpResponse::Ok().json(Envelope::new(students, visitor_headers(&req))))
}

#[derive(Deserialize)]
struct NewStudent {
    name: Option<String>,
}

#[post("/student")]
async fn add_student(
    req: HttpRequest,
    request_manager: web::Data<RequestManager>,
    body: web::Json<NewStudent>,
) -> Result<HttpResponse, ApiError> {
    let name = body
        .into_inner()
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or(ApiError::MissingField("name"))?;

    let students = request_manager.send_add_students(vec![StudentName(name)])?;

    Ok(HttpResponse::Ok().json(Envelope::new(students, visitor_headers(&req))))
}

#[cfg(test)]
mod tests {
    use std::{
        sync::mpsc::{self, Receiver, Sender},
        thread,
    };

    use actix_web::{
        body::MessageBody,
        dev::{Service, ServiceResponse},
        http::header,
        test, App, Error,
    };
    use actix_web_lab::middleware::from_fn;
    use store::store::{
        request_manager::StoreRequest,
        store::Store,
    };

    use crate::middleware::{cross_origin_headers, request_log, ALLOWED_ORIGINS};

    use super::*;

    fn spawn_store() -> RequestManager {
        let (store_sender, store_receiver): (Sender<StoreRequest>, Receiver<StoreRequest>) =
            mpsc::channel();

        thread::spawn(move || {
            Store::new(store_receiver).run();
        });

        RequestManager::new(store_sender)
    }

    async fn spawn_app(
    ) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error>
    {
        test::init_service(
            App::new()
                .app_data(web::Data::new(spawn_store()))
                .configure(configure)
                .wrap(from_fn(cross_origin_headers))
                .wrap(from_fn(request_log)),
        )
        .await
    }

    mod cross_origin {
        use super::*;

        #[actix_web::test]
        async fn allow_listed_origins_are_echoed_back() {
            let app = spawn_app().await;

            for origin in ALLOWED_ORIGINS {
                let req = test::TestRequest::get()
                    .uri("/people")
                    .insert_header((header::ORIGIN, origin))
                    .to_request();

                let res = test::call_service(&app, req).await;

                assert!(res.status().is_success());
                assert_eq!(
                    res.headers()
                        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                        .and_then(|value| value.to_str().ok()),
                    Some(origin)
                );
            }
        }

        #[actix_web::test]
        async fn unknown_origin_is_served_without_the_grant() {
            let app = spawn_app().await;

            let req = test::TestRequest::get()
                .uri("/people")
                .insert_header((header::ORIGIN, "http://evil.example"))
                .to_request();

            let res = test::call_service(&app, req).await;

            // Not blocked, just not granted the header
            assert!(res.status().is_success());
            assert!(res
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none());
        }

        #[actix_web::test]
        async fn fixed_security_headers_are_always_set() {
            let app = spawn_app().await;

            let req = test::TestRequest::get().uri("/students").to_request();

            let res = test::call_service(&app, req).await;

            let expectations = [
                (header::X_FRAME_OPTIONS.as_str(), "SAMEORIGIN"),
                (header::CONTENT_SECURITY_POLICY.as_str(), "default-src 'self'"),
                (header::ACCESS_CONTROL_ALLOW_CREDENTIALS.as_str(), "true"),
                ("x-xss-protection", "1; mode=block"),
                (header::CONTENT_TYPE.as_str(), "application/json"),
            ];

            for (name, expected) in expectations {
                assert_eq!(
                    res.headers().get(name).and_then(|value| value.to_str().ok()),
                    Some(expected),
                    "header {} should be set",
                    name
                );
            }
        }
    }

    mod people {
        use super::*;

        #[actix_web::test]
        async fn roster_grows_by_one_visit_per_call() {
            let app = spawn_app().await;

            for call in 1..=3u64 {
                let req = test::TestRequest::get()
                    .uri("/people")
                    .insert_header(("x-visit", call.to_string()))
                    .to_request();

                let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

                let data = body["data"].as_array().expect("data should be an array");

                // Seed people plus every bag recorded by prior calls
                assert_eq!(data.len(), 4 + (call as usize - 1));
            }
        }

        #[actix_web::test]
        async fn envelope_carries_the_callers_own_headers() {
            let app = spawn_app().await;

            let req = test::TestRequest::get()
                .uri("/people")
                .insert_header(("x-inspect-me", "yes"))
                .to_request();

            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

            assert_eq!(body["requestHeaders"]["x-inspect-me"], "yes");

            // The caller's own bag is not duplicated into the rows
            let data = body["data"].as_array().expect("data should be an array");
            assert!(data
                .iter()
                .all(|row| row.get("x-inspect-me").is_none()));
        }
    }

    mod students {
        use super::*;

        #[actix_web::test]
        async fn create_then_delete_round_trip_leaves_no_row() {
            let app = spawn_app().await;

            let post = test::TestRequest::post()
                .uri("/student")
                .set_json(serde_json::json!({ "name": "Amy" }))
                .to_request();

            let created: serde_json::Value = test::call_and_read_body_json(&app, post).await;

            assert_eq!(created["data"], serde_json::json!([{ "name": "Amy" }]));

            let delete = test::TestRequest::delete()
                .uri("/student/Amy")
                .to_request();

            let removed: serde_json::Value = test::call_and_read_body_json(&app, delete).await;

            assert_eq!(removed["data"], serde_json::json!([]));
        }

        #[actix_web::test]
        async fn delete_of_unknown_name_still_returns_the_list() {
            let app = spawn_app().await;

            let req = test::TestRequest::delete()
                .uri("/student/Nobody")
                .to_request();

            let res = test::call_service(&app, req).await;

            assert!(res.status().is_success());
        }

        #[actix_web::test]
        async fn missing_name_is_a_bad_request_naming_the_field() {
            let app = spawn_app().await;

            for body in [serde_json::json!({}), serde_json::json!({ "name": "  " })] {
                let req = test::TestRequest::post()
                    .uri("/student")
                    .set_json(body)
                    .to_request();

                let res = test::call_service(&app, req).await;

                assert_eq!(res.status().as_u16(), 400);

                let body: serde_json::Value = test::read_body_json(res).await;

                assert_eq!(body["error"], "missing required field: name");
            }
        }

        #[actix_web::test]
        async fn malformed_json_body_is_rejected() {
            let app = spawn_app().await;

            let req = test::TestRequest::post()
                .uri("/student")
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload("{ not json")
                .to_request();

            let res = test::call_service(&app, req).await;

            assert!(res.status().is_client_error());
        }

        #[actix_web::test]
        async fn non_json_content_type_is_rejected() {
            let app = spawn_app().await;

            let req = test::TestRequest::post()
                .uri("/student")
                .insert_header((header::CONTENT_TYPE, "text/plain"))
                .set_payload("name=Amy")
                .to_request();

            let res = test::call_service(&app, req).await;

            assert!(res.status().is_client_error());
        }
    }

    mod envelope_contract {
        use super::*;

        #[actix_web::test]
        async fn every_route_responds_with_the_structured_envelope() {
            let app = spawn_app().await;

            let requests = vec![
                test::TestRequest::get().uri("/people").to_request(),
                test::TestRequest::get().uri("/students").to_request(),
                test::TestRequest::delete().uri("/student/Amy").to_request(),
                test::TestRequest::post()
                    .uri("/student")
                    .set_json(serde_json::json!({ "name": "Amy" }))
                    .to_request(),
            ];

            for req in requests {
                let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

                assert!(body["data"].is_array(), "data should be an array");
                assert!(
                    body["requestHeaders"].is_object(),
                    "requestHeaders should be a header mapping"
                );
            }
        }
    }
}
