//! HTTP routes and handlers

use agentdeck_content::{resolve_doc, ContentStore, DocPage};
use agentdeck_types::{AgentCategory, ContentBundle, DocumentKind, SkillCategory};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::views::{AgentDetail, AgentSummary, Dashboard, SkillDetail, SkillSummary};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub content: &'static ContentStore,
}

/// Error surfaced to API clients as `{ "error": ... }`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl From<agentdeck_types::Error> for ApiError {
    fn from(e: agentdeck_types::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ListQuery {
    fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    /// Parsed category facet; an empty parameter means no facet selected
    fn category<C: std::str::FromStr<Err = agentdeck_types::Error>>(
        &self,
    ) -> Result<Option<C>, ApiError> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(slug) => Ok(Some(slug.parse()?)),
        }
    }
}

/// Create the complete router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/agents", get(list_agents_handler))
        .route("/agents/:id", get(get_agent_handler))
        .route("/skills", get(list_skills_handler))
        .route("/skills/:id", get(get_skill_handler))
        .route("/content/:kind/:id", get(raw_content_handler));

    Router::new()
        .route("/", get(dashboard_handler))
        .route("/health", get(health_handler))
        .route("/content.json", get(bundle_handler))
        .route("/docs", get(docs_index_handler))
        .route("/docs/*path", get(docs_handler))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// GET / - Dashboard with counts and category facets
async fn dashboard_handler(State(state): State<AppState>) -> Json<Dashboard> {
    Json(Dashboard::build(state.content))
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "content_ready": state.content.is_ready() }))
}

/// GET /content.json - The loaded bundle, empty until the load completes
async fn bundle_handler(State(state): State<AppState>) -> Json<ContentBundle> {
    Json(state.content.bundle().cloned().unwrap_or_default())
}

/// GET /api/agents?q=&category=
async fn list_agents_handler(
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<AgentSummary>>, ApiError> {
    let category: Option<AgentCategory> = params.category()?;
    Ok(Json(crate::views::list_agents(params.query(), category)))
}

/// GET /api/agents/:id
async fn get_agent_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AgentDetail>, ApiError> {
    let record = agentdeck_catalog::agent(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Agent '{}' not found", id)))?;
    Ok(Json(AgentDetail::build(record, state.content)))
}

/// GET /api/skills?q=&category=
async fn list_skills_handler(
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<SkillSummary>>, ApiError> {
    let category: Option<SkillCategory> = params.category()?;
    Ok(Json(crate::views::list_skills(params.query(), category)))
}

/// GET /api/skills/:id
async fn get_skill_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SkillDetail>, ApiError> {
    let record = agentdeck_catalog::skill(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Skill '{}' not found", id)))?;
    Ok(Json(SkillDetail::build(record, state.content)))
}

/// GET /api/content/:kind/:id - Raw document text or placeholder
async fn raw_content_handler(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let kind: DocumentKind = kind.parse()?;
    let text = state.content.lookup(kind, &id).to_string();
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    ))
}

/// GET /docs
async fn docs_index_handler() -> Json<DocPage> {
    Json(resolve_doc(""))
}

/// GET /docs/*path - Documentation page or coming-soon placeholder
async fn docs_handler(Path(path): Path<String>) -> Json<DocPage> {
    let page = resolve_doc(&path);
    if !page.found {
        debug!("No documentation page for '{}'", page.path);
    }
    Json(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn make_state(bundle: Option<ContentBundle>) -> AppState {
        let store: &'static ContentStore = Box::leak(Box::new(ContentStore::new()));
        if let Some(bundle) = bundle {
            store.populate(bundle);
        }
        AppState { content: store }
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
        let response = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(state, uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_readiness() {
        let (status, body) = get_json(make_state(None), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content_ready"], json!(false));

        let (_, body) = get_json(make_state(Some(ContentBundle::new())), "/health").await;
        assert_eq!(body["content_ready"], json!(true));
    }

    #[tokio::test]
    async fn test_list_agents_by_query() {
        let (status, body) = get_json(make_state(None), "/api/agents?q=back").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap().to_string())
            .collect();
        assert!(names.contains(&"Backend Expert".to_string()));
    }

    #[tokio::test]
    async fn test_list_agents_by_category() {
        let (status, body) = get_json(make_state(None), "/api/agents?category=manager").await;
        assert_eq!(status, StatusCode::OK);
        let agents = body.as_array().unwrap();
        assert!(!agents.is_empty());
        assert!(agents.iter().all(|a| a["category"] == json!("manager")));
        assert!(agents.iter().all(|a| a["badge_class"] == json!("badge-purple")));
    }

    #[tokio::test]
    async fn test_unknown_category_is_bad_request() {
        let (status, body) = get_json(make_state(None), "/api/skills?category=cooking").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("cooking"));
    }

    #[tokio::test]
    async fn test_empty_category_means_all() {
        let (status, body) = get_json(make_state(None), "/api/skills?category=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), agentdeck_catalog::SKILLS.len());
    }

    #[tokio::test]
    async fn test_agent_detail() {
        let mut bundle = ContentBundle::new();
        bundle.insert(
            DocumentKind::Agent,
            "backend-expert",
            "status: 'beta'\nupdated: 2025-01-01",
        );
        let (status, body) = get_json(make_state(Some(bundle)), "/api/agents/backend-expert").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], json!("Backend Expert"));
        assert_eq!(
            body["metadata"],
            json!({
                "version": "1.0.0",
                "license": "Apache-2.0",
                "updated": "2025-01-01",
                "status": "beta"
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_agent_is_not_found() {
        let (status, _) = get_json(make_state(None), "/api/agents/nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_raw_content_placeholders() {
        let (status, body) = get(make_state(None), "/api/content/skill/pdf").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Loading...");

        let (_, body) = get(make_state(Some(ContentBundle::new())), "/api/content/skills/pdf").await;
        assert_eq!(body, "Content not found");

        let (status, _) = get(make_state(None), "/api/content/tool/pdf").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_raw_content_is_plain_text() {
        let response = router(make_state(None))
            .oneshot(
                Request::builder()
                    .uri("/api/content/agent/qa-engineer")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_docs_routes() {
        let (status, body) = get_json(make_state(None), "/docs/guides/metadata").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["found"], json!(true));

        let (status, body) = get_json(make_state(None), "/docs/nowhere/yet").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["found"], json!(false));
        assert!(body["content"].as_str().unwrap().contains("/docs/nowhere/yet"));

        let (_, body) = get_json(make_state(None), "/docs").await;
        assert_eq!(body["title"], json!("Documentation"));
    }

    #[tokio::test]
    async fn test_dashboard() {
        let (status, body) = get_json(make_state(None), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["agents"], json!(agentdeck_catalog::AGENTS.len()));
        assert_eq!(body["skill_categories"].as_array().unwrap().len(), 8);
    }
}
