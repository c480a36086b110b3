//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ERRNO_LOCAL, MessageBody, MessageTitle, PushReply, ReplyKind, SendKey, ValidationError,
};
use crate::logger::{LogEvent, PushLogger, SilentLogger};

const DEFAULT_ENDPOINT: &str = "https://sc.ftqq.com";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unexpected HTTP status: {status}")]
/// Non-2xx HTTP response, carried as the source of [`ServerChanError::Transport`].
pub struct UnexpectedHttpStatus {
    pub status: u16,
    pub body: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("endpoint is not a usable base URL: {endpoint}")]
struct BadEndpoint {
    endpoint: String,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ServerChanClient`].
///
/// Every case is distinguishable structurally (via `matches!` or pattern
/// matching); callers never need to parse `Display` output.
pub enum ServerChanError {
    /// The title was rejected before any network I/O.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP-level failure: connection error, non-2xx status
    /// ([`UnexpectedHttpStatus`] source), or an undecodable response body.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The send key is invalid: either empty (rejected before any network
    /// I/O) or reported by ServerChan as `errmsg: "bad pushtoken"`.
    #[error("bad push token")]
    BadPushToken,

    /// ServerChan refused a repeat of recently pushed content.
    #[error("duplicate message")]
    DuplicateMessage,

    /// Any other non-zero `errno`; carries the raw code and message.
    #[error("rejected by serverchan: {errno}: {errmsg}")]
    Rejected { errno: i32, errmsg: String },

    /// The caller-supplied cancellation future fired before the round trip
    /// completed.
    #[error("send cancelled before completion")]
    Cancelled,
}

#[derive(Clone)]
/// Builder for [`ServerChanClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or
/// install a logger up front.
pub struct ServerChanClientBuilder {
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    logger: Option<Arc<dyn PushLogger>>,
}

impl ServerChanClientBuilder {
    /// Create a builder with the default endpoint and a silent logger.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            logger: None,
        }
    }

    /// Override the base endpoint URL (the `<key>.send` path is appended).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Without this the client enforces no timeout of its own; use
    /// [`ServerChanClient::send_with_cancel`] for per-call deadlines.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Install a logging policy.
    pub fn logger(mut self, logger: impl PushLogger + 'static) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Build a [`ServerChanClient`].
    pub fn build(self) -> Result<ServerChanClient, ServerChanError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ServerChanError::Transport(Box::new(err)))?;

        Ok(ServerChanClient {
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
            logger: self.logger.unwrap_or_else(|| Arc::new(SilentLogger)),
        })
    }
}

impl Default for ServerChanClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// ServerChan push client.
///
/// Holds no mutable state besides the replaceable logger reference, so one
/// client can be cloned or shared across tasks; all send methods take `&self`
/// and issue exactly one HTTP POST each.
///
/// A zero-configuration client is immediately usable:
///
/// ```rust,no_run
/// # async fn run() -> Result<(), serverchan::ServerChanError> {
/// let client = serverchan::ServerChanClient::new();
/// client.send("SCU...", "deploy finished", "").await?;
/// # Ok(())
/// # }
/// ```
pub struct ServerChanClient {
    endpoint: String,
    http: Arc<dyn HttpTransport>,
    logger: Arc<dyn PushLogger>,
}

impl ServerChanClient {
    /// Create a client with the default endpoint and a silent logger.
    ///
    /// For more customization, use [`ServerChanClient::builder`].
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            logger: Arc::new(SilentLogger),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> ServerChanClientBuilder {
        ServerChanClientBuilder::new()
    }

    /// Replace the logging policy.
    pub fn set_logger(&mut self, logger: impl PushLogger + 'static) {
        self.logger = Arc::new(logger);
    }

    /// Push a message.
    ///
    /// `send_key` and `title` are trimmed and must be non-empty; `body` may be
    /// empty. Validation failures return immediately without network I/O.
    ///
    /// Errors:
    /// - [`ServerChanError::BadPushToken`] for an empty key (no request is
    ///   made) or a service-reported `bad pushtoken`,
    /// - [`ServerChanError::Validation`] for an empty title,
    /// - [`ServerChanError::Transport`] for connection failures, non-2xx
    ///   responses, or an undecodable body,
    /// - [`ServerChanError::DuplicateMessage`] or [`ServerChanError::Rejected`]
    ///   for other service-reported failures.
    ///
    /// The configured logger is invoked exactly once per call, whatever the
    /// outcome.
    pub async fn send(
        &self,
        send_key: &str,
        title: &str,
        body: &str,
    ) -> Result<(), ServerChanError> {
        self.send_with_cancel(send_key, title, body, std::future::pending())
            .await
    }

    /// Push a message, racing the round trip against `cancel`.
    ///
    /// If `cancel` resolves first, the in-flight request is dropped (reqwest
    /// aborts the connection) and [`ServerChanError::Cancelled`] is returned.
    /// The logger is still invoked exactly once. Pair with
    /// `tokio::time::sleep` for a per-call deadline.
    pub async fn send_with_cancel<F>(
        &self,
        send_key: &str,
        title: &str,
        body: &str,
        cancel: F,
    ) -> Result<(), ServerChanError>
    where
        F: Future<Output = ()> + Send,
    {
        let (code, result) = match prepare(send_key, title, body) {
            Ok((key, title, body)) => {
                let outcome = tokio::select! {
                    reply = self.round_trip(&key, &title, &body) => reply,
                    _ = cancel => Err(ServerChanError::Cancelled),
                };
                match outcome {
                    Ok(reply) => (reply.errno, classify(reply)),
                    Err(err) => (ERRNO_LOCAL, Err(err)),
                }
            }
            Err(err) => (ERRNO_LOCAL, Err(err)),
        };

        self.logger.log(&LogEvent {
            send_key: send_key.trim(),
            title: title.trim(),
            code,
            error: result.as_ref().err(),
        });

        result
    }

    /// Probe whether `send_key` is valid by sending a throwaway message.
    ///
    /// An invalid key is a normal outcome, not an error: `Ok(false)` is
    /// returned when the key is empty (no request is made) or the service
    /// reports `bad pushtoken`. Every other failure propagates unchanged.
    pub async fn check_send_key(
        &self,
        send_key: &str,
        probe_title: &str,
    ) -> Result<bool, ServerChanError> {
        downgrade_bad_token(self.send(send_key, probe_title, "").await)
    }

    /// Cancellable variant of [`ServerChanClient::check_send_key`].
    pub async fn check_send_key_with_cancel<F>(
        &self,
        send_key: &str,
        probe_title: &str,
        cancel: F,
    ) -> Result<bool, ServerChanError>
    where
        F: Future<Output = ()> + Send,
    {
        downgrade_bad_token(
            self.send_with_cancel(send_key, probe_title, "", cancel)
                .await,
        )
    }

    async fn round_trip(
        &self,
        key: &SendKey,
        title: &MessageTitle,
        body: &MessageBody,
    ) -> Result<PushReply, ServerChanError> {
        let url = self.push_url(key)?;
        let params = crate::transport::encode_push_form(title, body);

        let response = self
            .http
            .post_form(&url, params)
            .await
            .map_err(ServerChanError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(ServerChanError::Transport(Box::new(UnexpectedHttpStatus {
                status: response.status,
                body,
            })));
        }

        crate::transport::decode_push_json_response(&response.body)
            .map_err(|err| ServerChanError::Transport(Box::new(err)))
    }

    fn push_url(&self, key: &SendKey) -> Result<String, ServerChanError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|err| ServerChanError::Transport(Box::new(err)))?;
        url.path_segments_mut()
            .map_err(|()| {
                ServerChanError::Transport(Box::new(BadEndpoint {
                    endpoint: self.endpoint.clone(),
                }))
            })?
            .pop_if_empty()
            .push(&format!("{}.send", key.as_str()));
        Ok(url.into())
    }
}

impl Default for ServerChanClient {
    fn default() -> Self {
        Self::new()
    }
}

fn prepare(
    send_key: &str,
    title: &str,
    body: &str,
) -> Result<(SendKey, MessageTitle, MessageBody), ServerChanError> {
    // An empty key gets the same identity as the remote "bad pushtoken"
    // reply, so check_send_key treats both as an invalid credential.
    let key = SendKey::new(send_key).map_err(|_| ServerChanError::BadPushToken)?;
    let title = MessageTitle::new(title)?;
    Ok((key, title, MessageBody::new(body)))
}

fn classify(reply: PushReply) -> Result<(), ServerChanError> {
    match reply.kind() {
        ReplyKind::Success => Ok(()),
        ReplyKind::BadPushToken => Err(ServerChanError::BadPushToken),
        ReplyKind::DuplicateMessage => Err(ServerChanError::DuplicateMessage),
        ReplyKind::Rejected => Err(ServerChanError::Rejected {
            errno: reply.errno,
            errmsg: reply.errmsg,
        }),
    }
}

fn downgrade_bad_token(result: Result<(), ServerChanError>) -> Result<bool, ServerChanError> {
    match result {
        Ok(()) => Ok(true),
        Err(ServerChanError::BadPushToken) => Ok(false),
        Err(err) => Err(err),
    }
}
