/// Filter sent with every page request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricFilter {
    pub namespace: Option<String>,
    pub metric_name: Option<String>,
    pub dimension_filters: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("malformed dimension filter '{0}', expected name=value")]
    MissingSeparator(String),
}

/// Parse `name=value,name=value` into ordered pairs.
/// Each token is split on the first `=`, so values may contain `=` as well.
pub fn parse_dimensions(raw: &str) -> Result<Vec<(String, String)>, FilterError> {
    if raw.is_empty() {
        return Ok(vec![]);
    }
    raw.split(',')
        .map(|token| {
            token
                .split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| FilterError::MissingSeparator(token.to_string()))
        })
        .collect()
}

impl MetricFilter {
    pub fn build(
        namespace: Option<&str>,
        metric_name: Option<&str>,
        dimensions: Option<&str>,
    ) -> Result<MetricFilter, FilterError> {
        Ok(MetricFilter {
            namespace: namespace.map(str::to_string),
            metric_name: metric_name.map(str::to_string),
            dimension_filters: parse_dimensions(dimensions.unwrap_or(""))?,
        })
    }
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_dimensions("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_keeps_order() {
        let parsed = parse_dimensions("a=1,b=2").unwrap();
        assert_eq!(parsed, vec![pair("a", "1"), pair("b", "2")]);
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        let parsed = parse_dimensions("query=a=b,env=").unwrap();
        assert_eq!(parsed, vec![pair("query", "a=b"), pair("env", "")]);
    }

    #[test]
    fn test_parse_allows_duplicates() {
        let parsed = parse_dimensions("env=prod,env=dev").unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            parse_dimensions("a=1,broken"),
            Err(FilterError::MissingSeparator("broken".to_string()))
        );
        assert!(parse_dimensions("a=1,").is_err());
    }

    #[test]
    fn test_build_passes_names_verbatim() {
        let filter = MetricFilter::build(Some("AWS/EC2"), Some("cpuUtilization"), None).unwrap();
        assert_eq!(filter.namespace.as_deref(), Some("AWS/EC2"));
        assert_eq!(filter.metric_name.as_deref(), Some("cpuUtilization"));
        assert!(filter.dimension_filters.is_empty());
    }
}
