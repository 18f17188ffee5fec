use crate::adapters::html::parse_table;
use crate::config::toml_config::{SourceConfig, StationConfig, TomlConfig};
use crate::domain::model::{PageKey, RawTable};
use crate::domain::ports::PageFetcher;
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches `daily_s1.php` pages for one station.
pub struct JmaPageFetcher {
    client: Client,
    endpoint: Url,
    station: StationConfig,
}

impl JmaPageFetcher {
    pub fn new(source: &SourceConfig, station: StationConfig) -> Result<Self> {
        let endpoint = Url::parse(&source.endpoint).map_err(|e| EtlError::InvalidConfigValueError {
            field: "source.endpoint".to_string(),
            value: source.endpoint.clone(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = source.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        if let Some(agent) = &source.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
            station,
        })
    }

    pub fn from_config(config: &TomlConfig) -> Result<Self> {
        Self::new(&config.source, config.station.clone())
    }

    /// `<endpoint>?prec_no=..&block_no=..&year=Y&month=M&day=01&view=`
    pub fn page_url(&self, key: PageKey) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("prec_no", &self.station.prec_no)
            .append_pair("block_no", &self.station.block_no)
            .append_pair("year", &key.year.to_string())
            .append_pair("month", &key.month.to_string())
            .append_pair("day", "01")
            .append_pair("view", "");
        url
    }
}

#[async_trait]
impl PageFetcher for JmaPageFetcher {
    async fn fetch_page(&self, key: PageKey) -> Result<RawTable> {
        let url = self.page_url(key);
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("{}: response status {}", key, response.status());

        let html = response.error_for_status()?.text().await?;
        parse_table(key, &html)
    }
}
