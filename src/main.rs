use jma_daily_etl::utils::error::{EtlError, ErrorSeverity};
use jma_daily_etl::utils::{logger, validation::Validate};
use jma_daily_etl::{CliConfig, EtlEngine, JmaPageFetcher, JmaPipeline, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse_args();

    // 設定檔 (JMA_ETL_CONFIG) 需在日誌初始化前載入以取得 log_level
    let settings = match TomlConfig::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger("info");
            exit_with(&e);
        }
    };
    logger::init_cli_logger(settings.log_level());

    tracing::info!("Starting jma-daily-etl");
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = config.validate().and_then(|_| settings.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let fetcher = match JmaPageFetcher::from_config(&settings) {
        Ok(fetcher) => fetcher,
        Err(e) => exit_with(&e),
    };

    // 創建存儲和管道
    let storage = LocalStorage::current_dir();
    let pipeline = JmaPipeline::new(storage, config, fetcher);
    let engine = EtlEngine::new_with_monitoring(pipeline, settings.monitoring_enabled());

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ ETL process completed successfully!");
            println!("✅ Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }
}

fn exit_with(e: &EtlError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
