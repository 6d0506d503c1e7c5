#[cfg(test)]
mod additional_coverage_tests {
    use crate::graphql::schema::create_schema;
    use crate::logging::{MockLogSink, OperatorLog};
    use crate::routes;
    use actix_web::{App, web};
    use chrono::{DateTime, Utc};
    use futures::future::join_all;
    use serde_json::Value;
    use std::sync::Arc;

    // Helper function to create a test app with the full /api/v1 surface
    async fn create_test_app() -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let log = OperatorLog::new();

        actix_web::test::init_service(
            App::new()
                .app_data(web::Data::new(create_schema(log.clone())))
                .app_data(web::Data::new(log))
                .configure(routes::configure),
        )
        .await
    }

    #[actix_web::test]
    async fn test_scoped_live_endpoint() {
        let app = create_test_app().await;

        let req = actix_web::test::TestRequest::get().uri("/api/v1/live").to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = actix_web::test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json["status"], "success");
        assert_eq!(body_json["message"], "Server is healthy");
    }

    #[actix_web::test]
    async fn test_scoped_graphql_endpoint() {
        let app = create_test_app().await;

        let req = actix_web::test::TestRequest::post()
            .uri("/api/v1/graphql")
            .set_json(serde_json::json!({
                "query": "{ liveness { status message } }"
            }))
            .to_request();

        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = actix_web::test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json["data"]["liveness"]["status"], "success");
        assert_eq!(body_json["data"]["liveness"]["message"], "Server is healthy");
    }

    // Both surfaces must present the same probe outcome
    #[actix_web::test]
    async fn test_rest_and_graphql_report_same_payload() {
        let app = create_test_app().await;

        let rest_req = actix_web::test::TestRequest::get().uri("/api/v1/live").to_request();
        let rest_resp = actix_web::test::call_service(&app, rest_req).await;
        let rest_body: Value = serde_json::from_slice(&actix_web::test::read_body(rest_resp).await).unwrap();

        let gql_req = actix_web::test::TestRequest::post()
            .uri("/api/v1/graphql")
            .set_json(serde_json::json!({
                "query": "{ liveness { status message } }"
            }))
            .to_request();
        let gql_resp = actix_web::test::call_service(&app, gql_req).await;
        let gql_body: Value = serde_json::from_slice(&actix_web::test::read_body(gql_resp).await).unwrap();

        assert_eq!(rest_body["status"], gql_body["data"]["liveness"]["status"]);
        assert_eq!(rest_body["message"], gql_body["data"]["liveness"]["message"]);
    }

    #[actix_web::test]
    async fn test_concurrent_invocations_are_independent() {
        // Success-path bursts must never touch the operator log stream
        let mut sink = MockLogSink::new();
        sink.expect_error().times(0);
        let log = OperatorLog::with_sink(Arc::new(sink));

        let app = actix_web::test::init_service(
            App::new()
                .app_data(web::Data::new(create_schema(log.clone())))
                .app_data(web::Data::new(log))
                .configure(routes::configure),
        )
        .await;

        let before = Utc::now();

        let calls = (0..100)
            .map(|_| {
                let req = actix_web::test::TestRequest::get().uri("/api/v1/live").to_request();
                actix_web::test::call_service(&app, req)
            })
            .collect::<Vec<_>>();
        let responses = join_all(calls).await;

        let after = Utc::now();

        assert_eq!(responses.len(), 100);
        for resp in responses {
            assert_eq!(resp.status().as_u16(), 200);

            let body = actix_web::test::read_body(resp).await;
            let body_json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(body_json["status"], "success");
            assert_eq!(body_json["message"], "Server is healthy");

            // Every timestamp falls inside the burst's real-time window
            let timestamp = DateTime::parse_from_rfc3339(body_json["timestamp"].as_str().unwrap())
                .unwrap()
                .with_timezone(&Utc);
            assert!(timestamp >= before && timestamp <= after);
        }
    }

    #[actix_web::test]
    async fn test_repeated_invocations_are_idempotent() {
        let app = create_test_app().await;
        let mut previous_timestamp: Option<DateTime<Utc>> = None;

        for _ in 0..5 {
            let req = actix_web::test::TestRequest::get().uri("/api/v1/live").to_request();
            let resp = actix_web::test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 200);

            let body = actix_web::test::read_body(resp).await;
            let body_json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(body_json["status"], "success");
            assert_eq!(body_json["message"], "Server is healthy");

            // Sequential completions carry non-decreasing timestamps
            let timestamp = DateTime::parse_from_rfc3339(body_json["timestamp"].as_str().unwrap())
                .unwrap()
                .with_timezone(&Utc);
            if let Some(previous) = previous_timestamp {
                assert!(timestamp >= previous);
            }
            previous_timestamp = Some(timestamp);
        }
    }

    #[actix_web::test]
    async fn test_response_invariant_to_request_contents() {
        let app = create_test_app().await;

        // Baseline request
        let req = actix_web::test::TestRequest::get().uri("/api/v1/live").to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        let baseline: Value = serde_json::from_slice(&actix_web::test::read_body(resp).await).unwrap();

        // Garbage query string, junk headers, and an unexpected payload on a GET
        let req = actix_web::test::TestRequest::get()
            .uri("/api/v1/live?debug=true&depth=9999&junk=%7B%7D")
            .insert_header(("x-forwarded-for", "10.0.0.1, 10.0.0.2"))
            .insert_header(("accept", "text/plain"))
            .insert_header(("content-type", "application/octet-stream"))
            .set_payload("\u{0}\u{1}not json at all{{{")
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        let garbage: Value = serde_json::from_slice(&actix_web::test::read_body(resp).await).unwrap();

        // Identical content aside from the timestamp
        assert_eq!(baseline["status"], garbage["status"]);
        assert_eq!(baseline["message"], garbage["message"]);
        assert!(garbage["timestamp"].is_string());
    }

    #[test]
    fn test_graphql_execution_without_actix_harness() {
        let schema = create_schema(OperatorLog::new());

        let result = tokio_test::block_on(schema.execute("{ liveness { status } }"));

        assert!(result.errors.is_empty());
        let data = result.data.into_json().unwrap();
        assert_eq!(data["liveness"]["status"], "success");
    }
}
