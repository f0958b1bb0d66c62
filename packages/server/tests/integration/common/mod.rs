use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};

use reqwest::Client;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;

use server::config::{AppConfig, AuthConfig, CorsConfig, DatabaseConfig, ServerConfig};
use server::state::AppState;

/// Signing secret used by every test server.
pub const JWT_SECRET: &str = "test-secret-for-integration-tests";

/// Monotonic counter for unique database file names.
static DB_COUNTER: AtomicU32 = AtomicU32::new(0);

pub mod routes {
    pub const REGISTER: &str = "/api/v1/auth/register";
    pub const LOGIN: &str = "/api/v1/auth/login";
    pub const ME: &str = "/api/v1/auth/me";
    pub const BLOGS: &str = "/api/v1/blogs";
    pub const BLOG_STATS: &str = "/api/v1/blogs/stats";

    pub fn blog(id: i32) -> String {
        format!("/api/v1/blogs/{id}")
    }
}

/// A running test server backed by a throwaway SQLite database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    _db_dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_name = format!("test_{}.db", DB_COUNTER.fetch_add(1, Ordering::Relaxed));
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            db_dir.path().join(db_name).display()
        );

        let db = server::database::init_db(&db_url)
            .await
            .expect("Failed to initialize test database");

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            database: DatabaseConfig { url: db_url },
            auth: AuthConfig {
                jwt_secret: JWT_SECRET.to_string(),
            },
        };

        let state = AppState {
            db: db.clone(),
            config: app_config,
        };

        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            _db_dir: db_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_without_token(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_without_token(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn patch_without_token(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PATCH request");

        TestResponse::from_response(res).await
    }

    pub async fn delete_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    pub async fn delete_without_token(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Register a user and log in, returning the auth token.
    pub async fn create_authenticated_user(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let reg = self.post_without_token(routes::REGISTER, &body).await;
        assert_eq!(reg.status, 201, "Registration failed: {}", reg.text);

        let res = self.post_without_token(routes::LOGIN, &body).await;
        assert_eq!(res.status, 200, "Login failed: {}", res.text);

        res.body["token"]
            .as_str()
            .expect("Login response should contain a token")
            .to_string()
    }

    /// Create a blog via the API and return its `id`.
    pub async fn create_blog(&self, token: &str, title: &str, author: &str, likes: i32) -> i32 {
        let res = self
            .post_with_token(
                routes::BLOGS,
                &serde_json::json!({
                    "title": title,
                    "author": author,
                    "url": "https://example.com",
                    "likes": likes,
                }),
                token,
            )
            .await;
        assert_eq!(res.status, 201, "create_blog failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> i32 {
        self.body["id"]
            .as_i64()
            .expect("response body should contain 'id'") as i32
    }
}
