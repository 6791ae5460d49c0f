use std::{fmt, path::Path};

use config::{Config, File, FileFormat, Map, Source, Value};

use crate::errors::ConfigurationError;

/// Region the staging buckets live in when the settings do not name one.
pub const DEFAULT_REGION: &str = "us-west-2";

const S3: &str = "S3";
const IAM_ROLE: &str = "IAM_ROLE";

/// Warehouse settings the `COPY` statements are built from.
///
/// A `DwhConfig` only exists once every required value is present and
/// non-blank. Values are kept verbatim; they are interpolated into SQL as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct DwhConfig {
    log_data: String,
    log_jsonpath: String,
    song_data: String,
    iam_role_arn: String,
    region: String,
}

impl DwhConfig {
    pub fn new(
        log_data: impl Into<String>,
        log_jsonpath: impl Into<String>,
        song_data: impl Into<String>,
        iam_role_arn: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Ok(DwhConfig {
            log_data: required(Some(log_data.into()), S3, "LOG_DATA")?,
            log_jsonpath: required(Some(log_jsonpath.into()), S3, "LOG_JSONPATH")?,
            song_data: required(Some(song_data.into()), S3, "SONG_DATA")?,
            iam_role_arn: required(Some(iam_role_arn.into()), IAM_ROLE, "ARN")?,
            region: DEFAULT_REGION.to_owned(),
        })
    }

    /// Reads an INI settings file such as `dwh.cfg`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini))
            .build()?;
        let config = Self::from_settings(&settings)?;
        tracing::info!(path = %path.display(), region = %config.region, "loaded warehouse settings");
        Ok(config)
    }

    /// Same as [load](Self::load) with the INI contents given directly.
    pub fn from_ini_str(contents: &str) -> Result<Self, ConfigurationError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Ini))
            .build()?;
        Self::from_settings(&settings)
    }

    fn from_settings(settings: &Config) -> Result<Self, ConfigurationError> {
        let sections = settings.collect()?;
        let get = |section: &'static str, key: &'static str| -> Result<String, ConfigurationError> {
            required(lookup(&sections, section, key)?, section, key)
        };
        let region = match lookup(&sections, S3, "REGION")? {
            None => DEFAULT_REGION.to_owned(),
            region => required(region, S3, "REGION")?,
        };
        Ok(DwhConfig {
            log_data: get(S3, "LOG_DATA")?,
            log_jsonpath: get(S3, "LOG_JSONPATH")?,
            song_data: get(S3, "SONG_DATA")?,
            iam_role_arn: get(IAM_ROLE, "ARN")?,
            region,
        })
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Result<Self, ConfigurationError> {
        self.region = required(Some(region.into()), S3, "REGION")?;
        Ok(self)
    }

    pub fn log_data(&self) -> &str {
        &self.log_data
    }
    pub fn log_jsonpath(&self) -> &str {
        &self.log_jsonpath
    }
    pub fn song_data(&self) -> &str {
        &self.song_data
    }
    pub fn iam_role_arn(&self) -> &str {
        &self.iam_role_arn
    }
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl fmt::Debug for DwhConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DwhConfig")
            .field("log_data", &self.log_data)
            .field("log_jsonpath", &self.log_jsonpath)
            .field("song_data", &self.song_data)
            .field("iam_role_arn", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

/// INI sections and keys are matched without regard to ASCII case.
fn lookup(
    sections: &Map<String, Value>,
    section: &str,
    key: &str,
) -> Result<Option<String>, ConfigurationError> {
    let Some((_, table)) = sections
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(section))
    else {
        return Ok(None);
    };
    let table = table.clone().into_table()?;
    table
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value.into_string())
        .transpose()
        .map_err(ConfigurationError::from)
}

fn required(
    value: Option<String>,
    section: &'static str,
    key: &'static str,
) -> Result<String, ConfigurationError> {
    match value {
        None => Err(ConfigurationError::Missing { section, key }),
        Some(value) if value.trim().is_empty() => Err(ConfigurationError::Empty { section, key }),
        Some(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SETTINGS: &str = "\
[CLUSTER]
HOST=dwhcluster.example.us-west-2.redshift.amazonaws.com
DB_NAME=dwh

[IAM_ROLE]
ARN=arn:aws:iam::123456789012:role/dwhRole

[S3]
LOG_DATA=s3://bucket/log-data/
LOG_JSONPATH=s3://bucket/log_json_path.json
SONG_DATA=s3://bucket/song-data/
";

    fn without_line(prefix: &str) -> String {
        SETTINGS
            .lines()
            .filter(|line| !line.starts_with(prefix))
            .map(|line| format!("{line}\n"))
            .collect()
    }

    #[test]
    fn reads_every_required_value() -> Result<(), anyhow::Error> {
        let config = DwhConfig::from_ini_str(SETTINGS)?;
        assert_eq!(config.log_data(), "s3://bucket/log-data/");
        assert_eq!(config.log_jsonpath(), "s3://bucket/log_json_path.json");
        assert_eq!(config.song_data(), "s3://bucket/song-data/");
        assert_eq!(config.iam_role_arn(), "arn:aws:iam::123456789012:role/dwhRole");
        assert_eq!(config.region(), DEFAULT_REGION);
        Ok(())
    }

    #[test]
    fn missing_values_are_reported_by_name() {
        for (line, section, key) in [
            ("LOG_DATA", "S3", "LOG_DATA"),
            ("LOG_JSONPATH", "S3", "LOG_JSONPATH"),
            ("SONG_DATA", "S3", "SONG_DATA"),
            ("ARN", "IAM_ROLE", "ARN"),
        ] {
            let err = DwhConfig::from_ini_str(&without_line(line)).unwrap_err();
            assert!(
                matches!(err, ConfigurationError::Missing { section: s, key: k } if s == section && k == key),
                "{line}: {err}"
            );
        }
    }

    #[test]
    fn blank_values_are_rejected() {
        for key in ["LOG_DATA", "LOG_JSONPATH", "SONG_DATA", "ARN"] {
            let settings: String = SETTINGS
                .lines()
                .map(|line| {
                    if line.starts_with(&format!("{key}=")) {
                        format!("{key}=   \n")
                    } else {
                        format!("{line}\n")
                    }
                })
                .collect();
            let err = DwhConfig::from_ini_str(&settings).unwrap_err();
            assert!(
                matches!(err, ConfigurationError::Empty { key: k, .. } if k == key),
                "{key}: {err}"
            );
        }
    }

    #[test]
    fn missing_section_is_a_missing_value() {
        let settings = "[S3]\nLOG_DATA=a\nLOG_JSONPATH=b\nSONG_DATA=c\n";
        let err = DwhConfig::from_ini_str(settings).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::Missing {
                section: "IAM_ROLE",
                key: "ARN"
            }
        ));
    }

    #[test]
    fn region_can_be_overridden() -> Result<(), anyhow::Error> {
        let settings = SETTINGS.replace("[S3]\n", "[S3]\nREGION=eu-central-1\n");
        assert_eq!(DwhConfig::from_ini_str(&settings)?.region(), "eu-central-1");

        let settings = SETTINGS.replace("[S3]\n", "[S3]\nREGION=\n");
        assert!(matches!(
            DwhConfig::from_ini_str(&settings),
            Err(ConfigurationError::Empty { key: "REGION", .. })
        ));
        Ok(())
    }

    #[test]
    fn surrounding_quotes_are_stripped() -> Result<(), anyhow::Error> {
        let settings = SETTINGS.replace(
            "LOG_DATA=s3://bucket/log-data/",
            "LOG_DATA='s3://bucket/log-data/'",
        );
        assert_eq!(DwhConfig::from_ini_str(&settings)?.log_data(), "s3://bucket/log-data/");
        Ok(())
    }

    #[test]
    fn loads_from_file() -> Result<(), anyhow::Error> {
        let mut file = tempfile::Builder::new().suffix(".cfg").tempfile()?;
        file.write_all(SETTINGS.as_bytes())?;
        let config = DwhConfig::load(file.path())?;
        assert_eq!(config, DwhConfig::from_ini_str(SETTINGS)?);
        Ok(())
    }

    #[test]
    fn unreadable_file_is_a_configuration_error() {
        let err = DwhConfig::load("/nonexistent/dwh.cfg").unwrap_err();
        assert!(matches!(err, ConfigurationError::Source(_)));
    }

    #[test]
    fn programmatic_config_is_validated() -> Result<(), anyhow::Error> {
        let err = DwhConfig::new("s3://a/", "s3://b.json", "", "arn").unwrap_err();
        assert!(matches!(err, ConfigurationError::Empty { key: "SONG_DATA", .. }));

        let config = DwhConfig::new("s3://a/", "s3://b.json", "s3://c/", "arn")?
            .with_region("us-east-1")?;
        assert_eq!(config.region(), "us-east-1");
        Ok(())
    }

    #[test]
    fn debug_output_hides_the_role() -> Result<(), anyhow::Error> {
        let config = DwhConfig::from_ini_str(SETTINGS)?;
        let debug = format!("{config:?}");
        assert!(!debug.contains("dwhRole"));
        assert!(debug.contains("s3://bucket/log-data/"));
        Ok(())
    }
}
