use crate::domain::ports::{ConfigProvider, HtmlSource};
use crate::utils::error::{GraphError, Result};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;

/// `<base>/users/<username>/contributions?from=<year>-01-01&to=<year>-12-31`.
///
/// The username is inserted verbatim.
pub fn contributions_url(base_url: &str, username: &str, year: i32) -> String {
    format!(
        "{}/users/{}/contributions?from={}-01-01&to={}-12-31",
        base_url.trim_end_matches('/'),
        username,
        year,
        year
    )
}

/// Fetches the contributions page with browser-like headers.
pub struct HttpSource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpSource<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(GraphError::Transport)?;
        Ok(Self { config, client })
    }
}

impl<C: ConfigProvider> HtmlSource for HttpSource<C> {
    async fn fetch_page(&self) -> Result<String> {
        let url = contributions_url(
            self.config.base_url(),
            self.config.username(),
            self.config.year(),
        );

        tracing::info!("Fetching contributions from {}", url);
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.config.user_agent())
            .header(ACCEPT, self.config.accept())
            .send()
            .await
            .map_err(GraphError::Transport)?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(GraphError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(GraphError::BodyRead)?;
        tracing::debug!("Read {} bytes of HTML", body.len());
        Ok(body)
    }
}
