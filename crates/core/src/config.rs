//! Configuration for the maintained project
//!
//! All settings live in an optional `chore.yml` at the project root. Every
//! field has a default, so the tool runs against a conventional project
//! layout with no configuration file at all. The resolved configuration is
//! passed explicitly into each task rather than held in global state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ChoreResult;

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "chore.yml";

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory containing the package sources the checkers target.
    pub package: Option<String>,
    /// Manifest file holding the version identifier.
    pub manifest: Option<String>,
    /// Git remote used when pushing tags.
    pub remote: Option<String>,
    pub style: Option<StyleConfig>,
    pub analysis: Option<AnalysisConfig>,
    pub format: Option<FormatConfig>,
    pub docs: Option<DocsConfig>,
    pub publish: Option<PublishConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleConfig {
    /// Rule codes the style checker should ignore.
    pub ignore: Option<Vec<String>>,
    /// Directory names excluded from style checking.
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Warning class passed to the static analyzer's suppression flag.
    pub suppress: Option<String>,
    /// Run the package test suite as a third validation step. Off by
    /// default; retained from an earlier revision of the release process.
    pub run_tests: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatConfig {
    /// File extensions that mark a directory as containing source files.
    pub extensions: Option<Vec<String>>,
    /// Glob patterns excluded from the directory walk.
    pub excludes: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocsConfig {
    /// Documentation source directory, relative to the project root.
    pub source: Option<String>,
    /// Build output directory, relative to the project root.
    pub output: Option<String>,
    /// Convert the README to reStructuredText before building. Off by
    /// default; retained from an earlier revision of the release process.
    pub convert_readme: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PublishConfig {
    /// Command that builds and uploads the source distribution.
    pub upload: Option<Vec<String>>,
}

impl ProjectConfig {
    pub fn package(&self) -> &str {
        self.package.as_deref().unwrap_or("src")
    }

    pub fn manifest(&self) -> &str {
        self.manifest.as_deref().unwrap_or("pyproject.toml")
    }

    pub fn remote(&self) -> &str {
        self.remote.as_deref().unwrap_or("origin")
    }

    pub fn style_ignore(&self) -> Vec<String> {
        self.style
            .as_ref()
            .and_then(|s| s.ignore.clone())
            .unwrap_or_else(|| vec!["E501".to_string(), "E225".to_string()])
    }

    pub fn style_exclude(&self) -> Vec<String> {
        self.style
            .as_ref()
            .and_then(|s| s.exclude.clone())
            .unwrap_or_else(|| vec!["migrations".to_string()])
    }

    pub fn analysis_suppress(&self) -> String {
        self.analysis
            .as_ref()
            .and_then(|a| a.suppress.clone())
            .unwrap_or_else(|| "W".to_string())
    }

    pub fn run_tests(&self) -> bool {
        self.analysis
            .as_ref()
            .and_then(|a| a.run_tests)
            .unwrap_or(false)
    }

    pub fn format_extensions(&self) -> Vec<String> {
        self.format
            .as_ref()
            .and_then(|f| f.extensions.clone())
            .unwrap_or_else(|| vec!["py".to_string()])
    }

    pub fn format_excludes(&self) -> Vec<String> {
        self.format
            .as_ref()
            .and_then(|f| f.excludes.clone())
            .unwrap_or_default()
    }

    pub fn docs_source(&self) -> &str {
        self.docs
            .as_ref()
            .and_then(|d| d.source.as_deref())
            .unwrap_or("docs")
    }

    pub fn docs_output(&self) -> &str {
        self.docs
            .as_ref()
            .and_then(|d| d.output.as_deref())
            .unwrap_or("html")
    }

    pub fn convert_readme(&self) -> bool {
        self.docs
            .as_ref()
            .and_then(|d| d.convert_readme)
            .unwrap_or(false)
    }

    pub fn upload_command(&self) -> Vec<String> {
        self.publish
            .as_ref()
            .and_then(|p| p.upload.clone())
            .unwrap_or_else(|| {
                ["python", "setup.py", "sdist", "upload"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
    }
}

pub fn parse_project_config(yaml_str: &str) -> ChoreResult<ProjectConfig> {
    let config: ProjectConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.package(), "src");
        assert_eq!(config.manifest(), "pyproject.toml");
        assert_eq!(config.remote(), "origin");
        assert_eq!(config.style_ignore(), vec!["E501", "E225"]);
        assert_eq!(config.style_exclude(), vec!["migrations"]);
        assert_eq!(config.analysis_suppress(), "W");
        assert!(!config.run_tests());
        assert_eq!(config.format_extensions(), vec!["py"]);
        assert_eq!(config.docs_source(), "docs");
        assert_eq!(config.docs_output(), "html");
        assert!(!config.convert_readme());
        assert_eq!(
            config.upload_command(),
            vec!["python", "setup.py", "sdist", "upload"]
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
package: mypkg
style:
  ignore: ["E501"]
docs:
  output: _build
"#;
        let config = parse_project_config(yaml).unwrap();
        assert_eq!(config.package(), "mypkg");
        assert_eq!(config.style_ignore(), vec!["E501"]);
        // Unset fields keep their defaults
        assert_eq!(config.style_exclude(), vec!["migrations"]);
        assert_eq!(config.docs_source(), "docs");
        assert_eq!(config.docs_output(), "_build");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let yaml = "package: pkg\nunknownField: 1\n";
        assert!(parse_project_config(yaml).is_err());
    }

    #[test]
    fn test_retired_steps_opt_in() {
        let yaml = "analysis:\n  runTests: true\ndocs:\n  convertReadme: true\n";
        let config = parse_project_config(yaml).unwrap();
        assert!(config.run_tests());
        assert!(config.convert_readme());
    }
}
