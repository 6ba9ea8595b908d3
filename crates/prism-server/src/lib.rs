mod cors;
mod health;

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use prism_config::Config;
use prism_llm::Gateway;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the Gemini gateway cannot be initialized, most
    /// commonly because no API key is configured
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let gateway = Gateway::initialize(&config.gemini).context("failed to initialize gemini gateway")?;
        Ok(Self::with_gateway(config, gateway))
    }

    /// Build the server around an existing gateway
    #[must_use]
    pub fn with_gateway(config: &Config, gateway: Gateway) -> Self {
        let listen_address = config.server.listen_address();

        let mut app = Router::new();

        // Liveness
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app.merge(prism_llm::gemini_router(gateway, &config.gemini.route_prefix));

        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Self {
            router: app,
            listen_address,
        }
    }

    /// Replace the configured listen address
    #[must_use]
    pub const fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address)
            .await
            .with_context(|| format!("failed to bind {}", self.listen_address))?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;

    fn config(raw: &str) -> Config {
        Config::parse(raw).unwrap()
    }

    async fn status_and_body(router: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn missing_api_key_fails_startup() {
        let Err(err) = Server::new(&config("")) else {
            panic!("server started without an api key");
        };
        assert_eq!(
            format!("{err:#}"),
            "failed to initialize gemini gateway: gemini api key is not configured"
        );
    }

    #[test]
    fn listen_address_override() {
        let server = Server::new(&config("[gemini]\napi_key = \"AIza-test\"")).unwrap();
        assert_eq!(server.listen_address(), SocketAddr::from(([0, 0, 0, 0], 8000)));

        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        assert_eq!(server.with_listen_address(addr).listen_address(), addr);
    }

    #[tokio::test]
    async fn liveness_route_answers_ok() {
        let router = Server::new(&config("[gemini]\napi_key = \"AIza-test\"")).unwrap().into_router();
        let (status, body) = status_and_body(router, Request::get("/health").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn liveness_route_can_be_disabled() {
        let raw = "[server.health]\nenabled = false\n\n[gemini]\napi_key = \"AIza-test\"";
        let router = Server::new(&config(raw)).unwrap().into_router();
        let (status, _) = status_and_body(router, Request::get("/health").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn gemini_routes_follow_prefix() {
        let raw = "[gemini]\napi_key = \"AIza-test\"\nroute_prefix = \"/v1/gemini\"";
        let router = Server::new(&config(raw)).unwrap().into_router();
        let (status, body) =
            status_and_body(router, Request::get("/v1/gemini/models").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("gemini-2.5-flash"));
    }

    #[tokio::test]
    async fn cors_preflight_allows_configured_origin() {
        let raw = r#"
            [server.cors]
            origins = ["http://localhost:3000"]

            [gemini]
            api_key = "AIza-test"
        "#;
        let router = Server::new(&config(raw)).unwrap().into_router();
        let request = Request::options("/gemini/generate")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
    }
}
