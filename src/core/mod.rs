pub mod etl;
pub mod pipeline;
pub mod walker;
pub mod writer;

pub use crate::domain::model::{TransformResult, WeatherRecord};
pub use crate::domain::ports::{ConfigProvider, PageFetcher, Pipeline, Storage};
pub use crate::utils::error::Result;
