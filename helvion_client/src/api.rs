use std::{future::Future, sync::LazyLock};

use anyhow::Context;
use helvion_utils::helvion_version;
use serde::Serialize;
use url::Url;

pub const CONTACT_PATH: &str = "api/contacto";

pub static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("Helvion Contact Client (Version {})", helvion_version()));

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ContactApi: Send + Sync + 'static {
    /// Submit a contact request, any non-success response is an error.
    fn send(&self, request: &ContactRequest) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// JSON body accepted by the relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
}

#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpContactApi {
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        let endpoint = base_url
            .join(CONTACT_PATH)
            .with_context(|| format!("Failed to build the contact endpoint from {base_url}"))?;
        let client = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .context("Failed to build http client")?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactApi for HttpContactApi {
    async fn send(&self, request: &ContactRequest) -> anyhow::Result<()> {
        self.client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(any(test, feature = "mock"))]
impl MockContactApi {
    pub fn with_send(mut self, request: ContactRequest, result: Result<(), &'static str>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| {
                Box::pin(std::future::ready(result.map_err(|err| anyhow::anyhow!(err))))
            });
        self
    }
}
