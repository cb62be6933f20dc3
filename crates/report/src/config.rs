use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_YEAR: i32 = 2025;

/// Sheet names of the export, matched case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetNames {
    pub discovery: String,
    pub engagement: String,
    pub top_posts: String,
    pub followers: String,
    pub demographics: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        SheetNames {
            discovery: "DISCOVERY".to_string(),
            engagement: "ENGAGEMENT".to_string(),
            top_posts: "TOP POSTS".to_string(),
            followers: "FOLLOWERS".to_string(),
            demographics: "DEMOGRAPHICS".to_string(),
        }
    }
}

impl SheetNames {
    /// All required sheets, in workbook order.
    #[must_use]
    pub fn required(&self) -> [&str; 5] {
        [
            self.discovery.as_str(),
            self.engagement.as_str(),
            self.top_posts.as_str(),
            self.followers.as_str(),
            self.demographics.as_str(),
        ]
    }
}

/// Settings fixed when a pipeline is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Calendar year time series are filtered to.
    pub year: i32,
    /// Banner title; derived from `year` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub sheets: SheetNames,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self::for_year(DEFAULT_YEAR)
    }
}

impl ReviewConfig {
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        ReviewConfig {
            year,
            title: None,
            sheets: SheetNames::default(),
        }
    }

    /// Parse and validate a JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ReviewConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1900..=9999).contains(&self.year) {
            Ok(())
        } else {
            Err(ConfigError::InvalidYear(self.year))
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("LinkedIn Year in Review {}", self.year))
    }

    /// File name the rendered review image is offered under.
    #[must_use]
    pub fn image_file_name(&self) -> String {
        format!("LinkedIn_Year_in_Review_{}.png", self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReviewConfig::default();
        assert_eq!(config.year, 2025);
        assert_eq!(config.title(), "LinkedIn Year in Review 2025");
        assert_eq!(config.image_file_name(), "LinkedIn_Year_in_Review_2025.png");
        assert_eq!(
            config.sheets.required(),
            ["DISCOVERY", "ENGAGEMENT", "TOP POSTS", "FOLLOWERS", "DEMOGRAPHICS"]
        );
    }

    #[test]
    fn test_partial_json() {
        let config =
            ReviewConfig::from_json_str(r#"{"year": 2024, "sheets": {"followers": "Followers"}}"#)
                .unwrap();
        assert_eq!(config.year, 2024);
        assert_eq!(config.title(), "LinkedIn Year in Review 2024");
        assert_eq!(config.sheets.followers, "Followers");
        assert_eq!(config.sheets.engagement, "ENGAGEMENT");
    }

    #[test]
    fn test_invalid_year() {
        let err = ReviewConfig::from_json_str(r#"{"year": 12}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidYear(12)));
        assert!(matches!(
            ReviewConfig::from_json_str("{year: 2025}"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("review.json");
        std::fs::write(&path, r#"{"title": "My 2025"}"#).unwrap();

        let config = ReviewConfig::from_path(&path).unwrap();
        assert_eq!(config.title(), "My 2025");

        let missing = ReviewConfig::from_path(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
