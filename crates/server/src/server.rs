use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{dashboard, entries, notes};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Redirect issued after every mutation: back to the dashboard of the
/// affected month (303 See Other).
pub(crate) fn dashboard_redirect(month_id: i32) -> Redirect {
    Redirect::to(&format!("/dashboard?month={month_id}"))
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(dashboard::show))
        .route("/dashboard", get(dashboard::show))
        .route("/months", get(dashboard::list_months))
        .route("/income", post(entries::income_new))
        .route("/income/delete", post(entries::income_delete))
        .route("/expense", post(entries::expense_new))
        .route("/expense/delete", post(entries::expense_delete))
        .route("/note", post(notes::note_new))
        .route("/note/update", post(notes::note_update))
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use migration::MigratorTrait;
    use tower::ServiceExt;

    async fn test_router() -> Router {
        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        let engine = Engine::builder().database(db).build().await.unwrap();
        router(ServerState {
            engine: Arc::new(engine),
        })
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(res: axum::response::Response) -> serde_json::Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn dashboard_returns_a_fully_populated_structure() {
        let app = test_router().await;

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard?month=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["income_entries"], serde_json::json!([]));
        assert_eq!(json["expense_entries"], serde_json::json!([]));
        assert_eq!(json["notes"], serde_json::json!([]));
        assert_eq!(json["summary"]["month_id"], 3);
        assert_eq!(json["summary"]["net_minor"], 0);
        assert_eq!(json["months"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn income_post_redirects_back_to_the_month_dashboard() {
        let app = test_router().await;

        let res = app
            .clone()
            .oneshot(form_post(
                "/income",
                "month_id=3&description=salary&amount_minor=10000",
            ))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/dashboard?month=3");

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard?month=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = json_body(res).await;
        assert_eq!(json["summary"]["total_income_minor"], 10000);
        assert_eq!(json["income_entries"][0]["description"], "salary");
    }

    #[tokio::test]
    async fn expense_delete_is_a_silent_noop_for_missing_ids() {
        let app = test_router().await;

        let res = app
            .oneshot(form_post("/expense/delete", "id=42&month_id=5"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/dashboard?month=5");
    }

    #[tokio::test]
    async fn note_update_rewrites_all_notes_of_the_month() {
        let app = test_router().await;

        app.clone()
            .oneshot(form_post("/note", "month_id=9&text=first"))
            .await
            .unwrap();
        app.clone()
            .oneshot(form_post("/note", "month_id=9&text=second"))
            .await
            .unwrap();

        let res = app
            .clone()
            .oneshot(form_post("/note/update", "month_id=9&text=rewritten"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard?month=9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = json_body(res).await;
        let notes = json["notes"].as_array().unwrap();
        assert_eq!(notes.len(), 2);
        assert!(notes.iter().all(|n| n["text"] == "rewritten"));
    }

    #[tokio::test]
    async fn months_endpoint_lists_the_seeded_reference_data() {
        let app = test_router().await;

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/months")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        let months = json["months"].as_array().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0]["short_name"], "Jan");
        assert_eq!(months[11]["full_name"], "December");
    }
}
