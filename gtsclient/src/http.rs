use gtscore::{
    error::BackendError,
    platform::{
        GtsPlatform,
        PlatformUrl,
    },
};
use reqwest::{
    Client,
    RequestBuilder,
    Response,
    Url,
};
use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};
use serde_json::Value;
use crate::error::ClientError;

mod impls;

/// The thesis API as served over HTTP.
#[derive(Clone, Debug)]
pub struct HttpPlatform {
    client: Client,
    url: String,
}

#[derive(Deserialize)]
struct Created {
    id: i64,
}

#[derive(Deserialize)]
struct Ack {
    #[serde(default)]
    ok: bool,
}

impl HttpPlatform {
    pub fn new(url: impl Into<String>) -> Result<Self, ClientError> {
        let url = url.into();
        let url = url.trim_end_matches('/').to_string();
        Url::parse(&url)
            .map_err(|e| ClientError::InvalidUrl(url.clone(), e.to_string()))?;
        let client = Client::builder()
            .user_agent(concat!("gtsclient/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, url })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.url, path)
    }

    async fn send(
        &self,
        request: RequestBuilder,
    ) -> Result<Response, BackendError> {
        let response = request.send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        log::trace!("{} {}", status.as_u16(), response.url());
        if status.is_success() {
            Ok(response)
        } else {
            Err(status_error(response).await)
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, BackendError> {
        let url = self.endpoint(path);
        log::trace!("GET {url}");
        decode(self.send(self.client.get(url)).await?).await
    }

    /// A list endpoint; a body that is not a JSON array is read as an
    /// empty listing.
    async fn get_listing<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, BackendError> {
        let value: Value = self.get_json(path).await?;
        match value {
            Value::Array(_) => serde_json::from_value(value)
                .map_err(|e| BackendError::Decode(e.to_string())),
            _ => {
                log::warn!("non-array listing returned from {path}; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        log::trace!("POST {url}");
        decode(self.send(self.client.post(url).json(body)).await?).await
    }

    async fn create<B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<i64, BackendError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let created: Created = self.post_json(path, body).await?;
        Ok(created.id)
    }

    async fn update<B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<bool, BackendError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.endpoint(path);
        log::trace!("PUT {url}");
        let ack: Ack = decode(self.send(self.client.put(url).json(body)).await?).await?;
        Ok(ack.ok)
    }

    async fn delete(
        &self,
        path: &str,
    ) -> Result<bool, BackendError> {
        let url = self.endpoint(path);
        log::trace!("DELETE {url}");
        let ack: Ack = decode(self.send(self.client.delete(url)).await?).await?;
        Ok(ack.ok)
    }
}

impl PlatformUrl for HttpPlatform {
    fn url(&self) -> &str {
        &self.url
    }
}

impl GtsPlatform for HttpPlatform {}

/// The message carried by a failed response: the `error` field of a JSON
/// body, else the raw body when it is not JSON, else `HTTP <status>`.
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value.get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {status}")),
        Err(_) if !body.trim().is_empty() => body.to_string(),
        Err(_) => format!("HTTP {status}"),
    }
}

async fn status_error(response: Response) -> BackendError {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(body) => error_message(status, &body),
        Err(_) => format!("HTTP {status}"),
    };
    log::debug!("request failed with {status}: {message}");
    BackendError::Status { status, message }
}

async fn decode<T: DeserializeOwned>(
    response: Response,
) -> Result<T, BackendError> {
    let body = response.bytes()
        .await
        .map_err(transport_error)?;
    serde_json::from_slice(&body)
        .map_err(|e| BackendError::Decode(e.to_string()))
}

fn transport_error(e: reqwest::Error) -> BackendError {
    if e.is_decode() {
        BackendError::Decode(e.to_string())
    } else {
        BackendError::Transport(e.to_string())
    }
}
