mod common;

use anyhow::Result;
use common::{mock_month, month_page, Day, PAGE_PATH};
use httpmock::prelude::*;
use jma_daily_etl::config::toml_config::CONFIG_ENV_VAR;
use jma_daily_etl::domain::ports::PageFetcher;
use jma_daily_etl::utils::validation::Validate;
use jma_daily_etl::{CliConfig, JmaPageFetcher, PageKey, TomlConfig};
use tempfile::TempDir;

/// 設定檔透過環境變數載入，並套用到抓取網址
#[tokio::test]
async fn test_settings_file_from_env() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let config_path = temp_dir.path().join("jma.toml");

    std::env::set_var("JMA_TEST_ENDPOINT", server.url(PAGE_PATH));
    tokio::fs::write(
        &config_path,
        r#"
[source]
endpoint = "${JMA_TEST_ENDPOINT}"
timeout_seconds = 10

[station]
prec_no = "44"
block_no = "47662"

[monitoring]
enabled = true
log_level = "debug"
"#,
    )
    .await?;
    std::env::set_var(CONFIG_ENV_VAR, &config_path);

    let settings = TomlConfig::from_env()?;
    std::env::remove_var(CONFIG_ENV_VAR);
    std::env::remove_var("JMA_TEST_ENDPOINT");

    settings.validate()?;
    assert!(settings.monitoring_enabled());
    assert_eq!(settings.log_level(), "debug");

    let page = mock_month(
        &server,
        2021,
        7,
        month_page(&[Day::new(1, "北"), Day::new(2, "南")]),
    );
    let fetcher = JmaPageFetcher::from_config(&settings)?;
    let table = fetcher.fetch_page(PageKey::new(2021, 7)).await?;

    page.assert();
    // 3 header rows + 2 days + 1 filler row
    assert_eq!(table.rows.len(), 6);
    assert_eq!(table.rows[3].cell(0), Some("1"));
    Ok(())
}

#[test]
fn test_cli_accepts_legacy_and_long_flags() -> Result<()> {
    let config = CliConfig::try_parse_args([
        "jma-daily-etl",
        "-sd",
        "20190101",
        "--endDate",
        "20190401",
        "-cp",
        "./out/2019.csv",
    ])?;

    config.validate()?;
    assert_eq!(config.start_date, "20190101");
    assert_eq!(config.end_date, "20190401");
    assert_eq!(config.csv_path, "./out/2019.csv");
    Ok(())
}

#[test]
fn test_cli_rejects_reversed_range() -> Result<()> {
    let config = CliConfig::try_parse_args(["jma-daily-etl", "-sd", "20210101", "-ed", "20200101"])?;
    assert!(config.validate().is_err());
    Ok(())
}
