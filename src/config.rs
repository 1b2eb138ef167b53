use crate::error::CheckError;
use crate::filter::MetricFilter;

use log::debug;

/// Connection settings for CloudWatch
#[derive(Debug, Clone, Default)]
pub struct CloudwatchConfig {
    /// Explicit region, otherwise the default provider chain is used
    pub region: Option<String>,
    /// Named profile from the shared AWS config
    pub profile: Option<String>,
}

/// Which filter fields must be supplied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredFields {
    pub namespace_required: bool,
    pub name_required: bool,
    pub dimensions_required: bool,
}

/// Predefined policies selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Requirement {
    /// List anything the account exposes
    #[default]
    None,
    /// Namespace must be given
    Namespace,
    /// Namespace and metric name must be given
    Metric,
    /// Namespace, metric name and dimensions must be given
    Dimensions,
}

impl From<Requirement> for RequiredFields {
    fn from(requirement: Requirement) -> Self {
        match requirement {
            Requirement::None => RequiredFields::default(),
            Requirement::Namespace => RequiredFields {
                namespace_required: true,
                ..Default::default()
            },
            Requirement::Metric => RequiredFields {
                namespace_required: true,
                name_required: true,
                dimensions_required: false,
            },
            Requirement::Dimensions => RequiredFields {
                namespace_required: true,
                name_required: true,
                dimensions_required: true,
            },
        }
    }
}

/// Settings for one check invocation
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub namespace: Option<String>,
    pub metric_name: Option<String>,
    pub metric_dimensions: Option<String>,
    pub max_pages: u32,
    pub required: RequiredFields,
    pub cloudwatch: CloudwatchConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            namespace: None,
            metric_name: None,
            metric_dimensions: None,
            max_pages: 1,
            required: RequiredFields::default(),
            cloudwatch: CloudwatchConfig::default(),
        }
    }
}

fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl CheckConfig {
    /// Enforce the required-field policy and the page limit
    pub fn validate(&self) -> Result<(), CheckError> {
        debug!("Validating {:?}", self);
        if self.required.namespace_required && is_missing(&self.namespace) {
            return Err(CheckError::MissingField("namespace"));
        }
        if self.required.name_required && is_missing(&self.metric_name) {
            return Err(CheckError::MissingField("metric-name"));
        }
        if self.required.dimensions_required && is_missing(&self.metric_dimensions) {
            return Err(CheckError::MissingField("metric-dimensions"));
        }
        if self.max_pages == 0 {
            return Err(CheckError::InvalidArgument(
                "max-pages must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate and build the request filter
    pub fn filter(&self) -> Result<MetricFilter, CheckError> {
        self.validate()?;
        Ok(MetricFilter::build(
            self.namespace.as_deref(),
            self.metric_name.as_deref(),
            self.metric_dimensions.as_deref(),
        )?)
    }
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> CheckConfig {
        CheckConfig {
            required: Requirement::Dimensions.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_permissive_accepts_nothing() {
        let filter = CheckConfig::default().filter().unwrap();
        assert_eq!(filter, MetricFilter::default());
    }

    #[test]
    fn test_strict_reports_first_missing_field() {
        let mut config = strict();
        assert!(matches!(
            config.validate(),
            Err(CheckError::MissingField("namespace"))
        ));
        config.namespace = Some("AWS/EC2".to_string());
        assert!(matches!(
            config.validate(),
            Err(CheckError::MissingField("metric-name"))
        ));
        config.metric_name = Some("CPUUtilization".to_string());
        assert!(matches!(
            config.validate(),
            Err(CheckError::MissingField("metric-dimensions"))
        ));
        config.metric_dimensions = Some("InstanceId=i-123".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let config = CheckConfig {
            namespace: Some(String::new()),
            required: Requirement::Namespace.into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_pages_rejected() {
        let config = CheckConfig {
            max_pages: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CheckError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_malformed_dimensions_rejected() {
        let config = CheckConfig {
            metric_dimensions: Some("InstanceId".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.filter(), Err(CheckError::Filter(_))));
    }

    #[test]
    fn test_requirement_policies() {
        let metric: RequiredFields = Requirement::Metric.into();
        assert!(metric.namespace_required);
        assert!(metric.name_required);
        assert!(!metric.dimensions_required);
        assert_eq!(RequiredFields::from(Requirement::None), RequiredFields::default());
    }
}
