use crate::domain::model::{DateRange, PageKey, RawTable, TransformResult, WeatherRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn date_range(&self) -> Result<DateRange>;
    fn csv_path(&self) -> &str;
}

/// Downloads the page for one month and returns its observation table.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, key: PageKey) -> Result<RawTable>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<WeatherRecord>>;
    async fn transform(&self, data: Vec<WeatherRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
