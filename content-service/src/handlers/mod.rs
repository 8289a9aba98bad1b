pub mod activities;
pub mod auth;
pub mod clientele;
pub mod csr_connects;
pub mod extract;
pub mod gallery;
pub mod health;
pub mod pillars;
pub mod press_releases;
pub mod upload;
pub mod volunteers;

#[cfg(test)]
pub mod test_support {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::db::test_support::seeded_pool;
    use crate::media::MockMediaHost;
    use crate::AppState;

    const BOUNDARY: &str = "----content-service-test-boundary";

    pub fn test_config() -> Config {
        let vars = [
            ("CLOUDINARY_CLOUD_NAME", "demo"),
            ("CLOUDINARY_API_KEY", "1234"),
            ("CLOUDINARY_API_SECRET", "shh"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("CLIENT_BUILD_PATH", "target/no-client-build"),
        ];
        Config::from_lookup(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .expect("test config")
    }

    /// State over a freshly seeded in-memory database.
    pub async fn test_state(media: MockMediaHost) -> AppState {
        AppState {
            config: Arc::new(test_config()),
            db: seeded_pool().await,
            media: Arc::new(media),
        }
    }

    /// A media host that must not be called.
    pub fn no_uploads() -> MockMediaHost {
        let mut media = MockMediaHost::new();
        media.expect_upload().never();
        media
    }

    /// A media host expecting exactly `times` uploads, each answered with `url`.
    pub fn uploads_to(url: &'static str, times: usize) -> MockMediaHost {
        let mut media = MockMediaHost::new();
        media
            .expect_upload()
            .times(times)
            .returning(move |_, _| Ok(url.to_string()));
        media
    }

    pub async fn test_app(media: MockMediaHost) -> (AppState, Router) {
        let state = test_state(media).await;
        let app = crate::create_router(state.clone());
        (state, app)
    }

    pub struct FilePart<'a> {
        pub field: &'a str,
        pub data: &'a [u8],
    }

    impl<'a> FilePart<'a> {
        pub fn new(field: &'a str, data: &'a [u8]) -> Self {
            Self { field, data }
        }
    }

    pub fn multipart_request(
        method: &str,
        uri: &str,
        fields: &[(&str, &str)],
        file: Option<FilePart<'_>>,
    ) -> Request<Body> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some(file) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"upload.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n",
                    file.field
                )
                .as_bytes(),
            );
            body.extend_from_slice(file.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    pub fn json_request(method: &str, uri: &str, json: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    /// Status plus the body as JSON (`Null` when the body is not JSON).
    pub async fn read_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        read_json(response).await
    }
}
