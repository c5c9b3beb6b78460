pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::ideas::handlers as ideas;
use crate::prompts::handlers as prompts;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Ideas
        .route(
            "/api/v1/ideas",
            get(ideas::handle_list_ideas).post(ideas::handle_submit_idea),
        )
        .route("/api/v1/ideas/analytics", get(ideas::handle_ideas_analytics))
        .route("/api/v1/ideas/matrix", get(ideas::handle_priority_matrix))
        .route("/api/v1/ideas/pipeline", get(ideas::handle_pipeline_board))
        .route("/api/v1/ideas/stages", get(ideas::handle_stages))
        .route("/api/v1/ideas/dimensions", get(ideas::handle_scoring_model))
        .route("/api/v1/ideas/:id", get(ideas::handle_get_idea))
        .route(
            "/api/v1/ideas/:id/assessment",
            post(ideas::handle_submit_assessment),
        )
        .route("/api/v1/ideas/:id/advance", post(ideas::handle_advance))
        .route("/api/v1/ideas/:id/hold", post(ideas::handle_hold))
        .route("/api/v1/ideas/:id/reject", post(ideas::handle_reject))
        .route("/api/v1/ideas/:id/archive", post(ideas::handle_archive))
        // Prompt library
        .route("/api/v1/prompts", get(prompts::handle_search_prompts))
        .route("/api/v1/prompts/categories", get(prompts::handle_categories))
        .route("/api/v1/prompts/featured", get(prompts::handle_featured))
        .route("/api/v1/prompts/top-rated", get(prompts::handle_top_rated))
        .route("/api/v1/prompts/suggestions", get(prompts::handle_suggestions))
        .route("/api/v1/prompts/analytics", get(prompts::handle_prompt_analytics))
        .route("/api/v1/prompts/:id", get(prompts::handle_get_prompt))
        .route("/api/v1/prompts/:id/copy", post(prompts::handle_copy_prompt))
        .route("/api/v1/prompts/:id/rating", post(prompts::handle_rate_prompt))
        // Moderation
        .route(
            "/api/v1/prompts/submissions",
            post(prompts::handle_submit_prompt),
        )
        .route(
            "/api/v1/prompts/submissions/pending",
            get(prompts::handle_pending_submissions),
        )
        .route(
            "/api/v1/prompts/submissions/:id/approve",
            post(prompts::handle_approve_submission),
        )
        .route(
            "/api/v1/prompts/submissions/:id/reject",
            post(prompts::handle_reject_submission),
        )
        // Export / import
        .route("/api/v1/export", get(export::handle_export))
        .route("/api/v1/import", post(export::handle_import))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::bootstrap::seed_if_empty;
    use crate::config::Config;

    async fn app() -> Router {
        let state = AppState::in_memory(Config::default());
        seed_if_empty(state.ideas.as_ref(), state.prompts.as_ref(), "Assessment Team")
            .await
            .unwrap();
        build_router(state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn idea_form() -> Value {
        json!({
            "title": "Invoice Matching Bot",
            "description": "Match supplier invoices to purchase orders and flag mismatches for finance review.",
            "ai_capability_area": "robotic_process_automation",
            "business_function": "finance",
            "submitter_name": "Dana Lee",
            "submitter_email": "dana.lee@example.com"
        })
    }

    fn all_ratings(level: &str) -> Value {
        json!({
            "value_ratings": {
                "business_growth": level,
                "cost_efficiency": level,
                "business_resilience": level,
                "business_agility": level
            },
            "feasibility_ratings": {
                "technical_feasibility": level,
                "internal_readiness": level,
                "external_readiness": level
            }
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app().await, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_idea_lifecycle_over_http() {
        let app = app().await;

        let (status, idea) = send(&app, Method::POST, "/api/v1/ideas", Some(idea_form())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(idea["status"], "submitted");
        let id = idea["id"].as_str().unwrap().to_string();

        let (status, assessed) = send(
            &app,
            Method::POST,
            &format!("/api/v1/ideas/{id}/assessment"),
            Some(all_ratings("high")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(assessed["status"], "submitted");
        assert_eq!(assessed["assessment"]["quadrant"], "likely_wins");
        assert_eq!(assessed["assessment"]["value_score"], 3.0);

        let (status, advanced) =
            send(&app, Method::POST, &format!("/api/v1/ideas/{id}/advance"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(advanced["status"], "screening");

        let (status, archived) =
            send(&app, Method::POST, &format!("/api/v1/ideas/{id}/archive"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(archived["status"], "archived");

        let (status, body) =
            send(&app, Method::POST, &format!("/api/v1/ideas/{id}/advance"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "NO_NEXT_STAGE");
    }

    #[tokio::test]
    async fn test_invalid_idea_form_lists_field_errors() {
        let mut form = idea_form();
        form["description"] = json!("Too short");
        form["submitter_email"] = json!("dana");

        let (status, body) = send(&app().await, Method::POST, "/api/v1/ideas", Some(form)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        let fields: Vec<&str> = body["error"]["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["description", "submitter_email"]);
    }

    #[tokio::test]
    async fn test_incomplete_assessment_is_422() {
        let app = app().await;
        let (_, idea) = send(&app, Method::POST, "/api/v1/ideas", Some(idea_form())).await;
        let id = idea["id"].as_str().unwrap().to_string();

        let mut ratings = all_ratings("medium");
        ratings["value_ratings"]
            .as_object_mut()
            .unwrap()
            .remove("business_resilience");
        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/ideas/{id}/assessment"),
            Some(ratings),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INCOMPLETE_ASSESSMENT");
        assert_eq!(body["error"]["details"], json!(["business_resilience"]));
    }

    #[tokio::test]
    async fn test_unknown_idea_is_404() {
        let uri = format!("/api/v1/ideas/{}", uuid::Uuid::new_v4());
        let (status, body) = send(&app().await, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_reference_and_report_endpoints() {
        let app = app().await;

        let (_, stages) = send(&app, Method::GET, "/api/v1/ideas/stages", None).await;
        assert_eq!(stages.as_array().unwrap().len(), 11);

        let (_, model) = send(&app, Method::GET, "/api/v1/ideas/dimensions", None).await;
        assert_eq!(model["value"].as_array().unwrap().len(), 4);
        assert_eq!(model["feasibility"].as_array().unwrap().len(), 3);
        assert_eq!(model["threshold"], 2.0);

        let (status, matrix) =
            send(&app, Method::GET, "/api/v1/ideas/matrix?quadrant=likely_wins", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(matrix
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["quadrant"] == "likely_wins"));

        let (status, analytics) = send(&app, Method::GET, "/api/v1/ideas/analytics", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(analytics["assessed_ideas"], 5);

        let (status, board) = send(&app, Method::GET, "/api/v1/ideas/pipeline", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(board["stages"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_prompt_search_and_counters() {
        let app = app().await;

        let (status, results) = send(
            &app,
            Method::GET,
            "/api/v1/prompts?category=technical&min_rating=4.5",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let results = results.as_array().unwrap().clone();
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p["category"] == "technical"));

        let id = results[0]["id"].as_str().unwrap().to_string();
        let before = results[0]["usage_count"].as_u64().unwrap();
        let (_, copied) = send(&app, Method::POST, &format!("/api/v1/prompts/{id}/copy"), None).await;
        assert_eq!(copied["usage_count"].as_u64().unwrap(), before + 1);

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/prompts/{id}/rating"),
            Some(json!({ "rating": 9 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(&app, Method::GET, "/api/v1/prompts?complexity=guru", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, suggestions) =
            send(&app, Method::GET, "/api/v1/prompts/suggestions?q=a", None).await;
        assert_eq!(suggestions, json!([]));
    }

    #[tokio::test]
    async fn test_moderation_flow() {
        let app = app().await;

        let (_, pending) = send(&app, Method::GET, "/api/v1/prompts/submissions/pending", None).await;
        let pending = pending.as_array().unwrap().clone();
        assert_eq!(pending.len(), 3);
        let first = pending[0]["id"].as_str().unwrap().to_string();
        let second = pending[1]["id"].as_str().unwrap().to_string();

        let (status, published) = send(
            &app,
            Method::POST,
            &format!("/api/v1/prompts/submissions/{first}/approve"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(published["status"], "approved");

        let (status, _) = send(&app, Method::GET, &format!("/api/v1/prompts/{first}"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/prompts/submissions/{second}/reject"),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["details"][0]["field"], "feedback");

        let (status, again) = send(
            &app,
            Method::POST,
            &format!("/api/v1/prompts/submissions/{first}/approve"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(again["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_export_and_import() {
        let app = app().await;

        let (status, bundle) = send(&app, Method::GET, "/api/v1/export", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bundle["version"], "1.0");

        let (status, summary) = send(&app, Method::POST, "/api/v1/import", Some(bundle.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["ideas"], bundle["ideas"].as_array().unwrap().len());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/import")
                    .body(Body::from("{ broken"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Failed to parse import file"));
    }
}
