pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::core::ConfigProvider;
    use crate::domain::model::DateRange;
    use crate::utils::error::{EtlError, Result};
    use crate::utils::validation::{parse_compact_date, validate_path, Validate};
    use clap::Parser;

    /// Two-letter single-dash spellings accepted next to the long flags.
    const LEGACY_FLAGS: [(&str, &str); 3] = [
        ("-sd", "--startDate"),
        ("-ed", "--endDate"),
        ("-cp", "--csvPath"),
    ];

    #[derive(Debug, Clone, Parser)]
    #[command(name = "jma-daily-etl")]
    #[command(about = "Download daily JMA observations month by month into a CSV file")]
    pub struct CliConfig {
        /// First day to fetch (YYYYMMDD); its whole month is fetched
        #[arg(long = "startDate", default_value = "20200101")]
        pub start_date: String,

        /// Stop once the next month step reaches this date (YYYYMMDD)
        #[arg(long = "endDate", default_value = "20210101")]
        pub end_date: String,

        /// Output CSV file, overwritten if present
        #[arg(long = "csvPath", default_value = "./data.csv")]
        pub csv_path: String,
    }

    impl CliConfig {
        /// Parses `std::env::args()`, accepting `-sd`, `-ed` and `-cp`.
        pub fn parse_args() -> Self {
            Self::parse_from(normalize_legacy_args(std::env::args()))
        }

        pub fn try_parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
        where
            I: IntoIterator<Item = T>,
            T: Into<String>,
        {
            Self::try_parse_from(normalize_legacy_args(args.into_iter().map(Into::into)))
        }
    }

    /// Rewrites `-sd X`, `-sd=X` and `-sdX` (likewise `-ed`, `-cp`) into long flags.
    /// The program name and anything after `--` are left alone.
    pub fn normalize_legacy_args<I>(args: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = Vec::new();
        let mut passthrough = false;

        for (index, arg) in args.into_iter().enumerate() {
            if index == 0 || passthrough {
                out.push(arg);
                continue;
            }
            if arg == "--" {
                passthrough = true;
                out.push(arg);
                continue;
            }

            let rewritten = LEGACY_FLAGS.iter().find_map(|(legacy, long)| {
                let rest = arg.strip_prefix(legacy)?;
                Some(if rest.is_empty() {
                    long.to_string()
                } else if let Some(value) = rest.strip_prefix('=') {
                    format!("{}={}", long, value)
                } else {
                    format!("{}={}", long, rest)
                })
            });
            out.push(rewritten.unwrap_or(arg));
        }

        out
    }

    impl ConfigProvider for CliConfig {
        fn date_range(&self) -> Result<DateRange> {
            let start = parse_compact_date("startDate", &self.start_date)?;
            let end = parse_compact_date("endDate", &self.end_date)?;
            if start > end {
                return Err(EtlError::ValidationError {
                    message: format!("startDate {} is after endDate {}", start, end),
                });
            }
            Ok(DateRange::new(start, end))
        }

        fn csv_path(&self) -> &str {
            &self.csv_path
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("csvPath", &self.csv_path)?;
            self.date_range().map(|_| ())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        fn args(values: &[&str]) -> Vec<String> {
            values.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn test_defaults() {
            let config = CliConfig::try_parse_args(["jma-daily-etl"]).unwrap();
            assert_eq!(config.start_date, "20200101");
            assert_eq!(config.end_date, "20210101");
            assert_eq!(config.csv_path, "./data.csv");

            let range = config.date_range().unwrap();
            assert_eq!(range.start, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
            assert_eq!(range.end, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        }

        #[test]
        fn test_long_flags() {
            let config = CliConfig::try_parse_args([
                "jma-daily-etl",
                "--startDate",
                "20190301",
                "--endDate=20190601",
                "--csvPath",
                "out/tokyo.csv",
            ])
            .unwrap();
            assert_eq!(config.start_date, "20190301");
            assert_eq!(config.end_date, "20190601");
            assert_eq!(config.csv_path, "out/tokyo.csv");
        }

        #[test]
        fn test_legacy_short_flags() {
            let config = CliConfig::try_parse_args([
                "jma-daily-etl",
                "-sd",
                "20190301",
                "-ed=20190601",
                "-cpout.csv",
            ])
            .unwrap();
            assert_eq!(config.start_date, "20190301");
            assert_eq!(config.end_date, "20190601");
            assert_eq!(config.csv_path, "out.csv");
        }

        #[test]
        fn test_normalize_leaves_other_args() {
            assert_eq!(
                normalize_legacy_args(args(&["-sd", "-sd", "20200101", "--", "-cp"])),
                args(&["-sd", "--startDate", "20200101", "--", "-cp"])
            );
        }

        #[test]
        fn test_unknown_flag_is_rejected() {
            assert!(CliConfig::try_parse_args(["jma-daily-etl", "--verbose"]).is_err());
        }

        #[test]
        fn test_validate_rejects_bad_dates() {
            let mut config = CliConfig::try_parse_args(["jma-daily-etl"]).unwrap();
            assert!(config.validate().is_ok());

            config.start_date = "2020-01-01".to_string();
            assert!(matches!(
                config.validate(),
                Err(EtlError::InvalidConfigValueError { .. })
            ));

            config.start_date = "20210201".to_string();
            assert!(matches!(
                config.validate(),
                Err(EtlError::ValidationError { .. })
            ));
        }
    }
}
