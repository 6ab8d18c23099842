//! HTTP client for the game service

use std::sync::Arc;

use reqwest::{cookie::Jar, Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::{
    error::ServiceError,
    game_service::{Direction, GameService},
    responses::{FightReply, MessageReply, MoveReply, SessionReply, StatusReport},
};

/// Name of the session cookie the game service keys its state on
pub const SESSION_COOKIE: &str = "session";

/// Game service reached over HTTP, holding one cookie session for its lifetime
#[derive(Debug, Clone)]
pub struct HttpGameService {
    client: Client,
    base_url: Url,
}

impl HttpGameService {
    /// Build a client for `base_url`, optionally seeding the session cookie
    ///
    /// Endpoints resolve below the base, so a path prefix such as `/game` is kept.
    pub fn new(base_url: &str, session_cookie: Option<&str>) -> Result<Self, ServiceError> {
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| ServiceError::Network(format!("invalid server url {}: {}", base_url, e)))?;

        let jar = Arc::new(Jar::default());
        if let Some(cookie) = session_cookie {
            jar.add_cookie_str(&format!("{}={}", SESSION_COOKIE, cookie), &base_url);
            debug!("Seeded session cookie for {}", base_url);
        }

        let client = Client::builder().cookie_provider(jar).build()?;

        info!("Game service client ready for {}", base_url);
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, ServiceError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ServiceError::Network(format!("invalid endpoint {}: {}", path, e)))
    }

    async fn get(&self, path: &str) -> Result<(StatusCode, Value), ServiceError> {
        debug!("GET {}", path);
        let response = self.client.get(self.url(path)?).send().await?;
        read_body(response).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<(StatusCode, Value), ServiceError> {
        debug!("POST {}", path);
        let mut request = self.client.post(self.url(path)?);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        read_body(response).await
    }

    async fn post_message(&self, path: &str, body: Option<Value>) -> Result<String, ServiceError> {
        let (status, value) = self.post(path, body).await?;
        decode::<MessageReply>(status, value).map(|reply| reply.message)
    }
}

/// Read a JSON body whatever the status, since the service explains some refusals in the body
async fn read_body(response: reqwest::Response) -> Result<(StatusCode, Value), ServiceError> {
    let status = response.status();
    let text = response.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => Ok((status, value)),
        Err(_) if !status.is_success() => Err(ServiceError::Status(status.as_u16())),
        Err(e) => Err(ServiceError::Malformed(e.to_string())),
    }
}

fn decode<T: DeserializeOwned>(status: StatusCode, value: Value) -> Result<T, ServiceError> {
    match serde_json::from_value::<T>(value) {
        Ok(reply) => {
            if !status.is_success() {
                warn!("Game service answered {} with a readable body", status);
            }
            Ok(reply)
        }
        Err(_) if !status.is_success() => Err(ServiceError::Status(status.as_u16())),
        Err(e) => Err(ServiceError::Malformed(e.to_string())),
    }
}

impl GameService for HttpGameService {
    async fn query_session(&self) -> Result<bool, ServiceError> {
        let (status, value) = self.get("/get_game_state").await?;
        decode::<SessionReply>(status, value).map(|reply| reply.game_started)
    }

    async fn notify_start(&self) -> Result<String, ServiceError> {
        self.post_message("/start_game", None).await
    }

    async fn move_to(&self, direction: Direction) -> Result<String, ServiceError> {
        let (status, value) = self
            .post("/move", Some(json!({ "direction": direction })))
            .await?;
        decode::<MoveReply>(status, value).map(|reply| reply.description)
    }

    async fn pickup(&self) -> Result<String, ServiceError> {
        self.post_message("/pickup", None).await
    }

    async fn damage(&self, amount: u32) -> Result<String, ServiceError> {
        self.post_message("/damage", Some(json!({ "amount": amount }))).await
    }

    async fn fight(&self) -> Result<FightReply, ServiceError> {
        let (status, value) = self.post("/fight", None).await?;
        decode::<FightReply>(status, value)
    }

    async fn heal(&self) -> Result<String, ServiceError> {
        self.post_message("/heal", None).await
    }

    async fn query_status(&self) -> Result<StatusReport, ServiceError> {
        let (status, value) = self.get("/status").await?;
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }
        if !value.is_object() {
            return Err(ServiceError::Malformed("status reply is not an object".to_string()));
        }
        Ok(StatusReport::from_value(&value))
    }

    async fn restart(&self) -> Result<String, ServiceError> {
        self.post_message("/restart", None).await
    }

    async fn init_world(&self) -> Result<String, ServiceError> {
        self.post_message("/init", None).await
    }
}
