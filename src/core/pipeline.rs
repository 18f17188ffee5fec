use crate::core::walker::walk_months;
use crate::core::writer::to_csv_bytes;
use crate::core::{ConfigProvider, PageFetcher, Pipeline, Storage, TransformResult};
use crate::domain::model::WeatherRecord;
use crate::utils::error::Result;

/// Walks the configured months, renders the records as CSV and stores the file.
pub struct JmaPipeline<S: Storage, C: ConfigProvider, F: PageFetcher> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) fetcher: F,
}

impl<S: Storage, C: ConfigProvider, F: PageFetcher> JmaPipeline<S, C, F> {
    pub fn new(storage: S, config: C, fetcher: F) -> Self {
        Self {
            storage,
            config,
            fetcher,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, F: PageFetcher> Pipeline for JmaPipeline<S, C, F> {
    async fn extract(&self) -> Result<Vec<WeatherRecord>> {
        let range = self.config.date_range()?;
        walk_months(&self.fetcher, &range).await
    }

    async fn transform(&self, data: Vec<WeatherRecord>) -> Result<TransformResult> {
        let csv_output = to_csv_bytes(&data)?;
        tracing::debug!("Rendered {} bytes of CSV", csv_output.len());

        Ok(TransformResult {
            records: data,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let path = self.config.csv_path();

        tracing::debug!(
            "Writing {} record(s) ({} bytes) to {}",
            result.records.len(),
            result.csv_output.len(),
            path
        );
        self.storage.write_file(path, &result.csv_output).await?;

        Ok(path.to_string())
    }
}
