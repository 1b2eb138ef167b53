use crate::lister::MetricDescriptor;

use std::fmt;

impl fmt::Display for MetricDescriptor {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimensions = self
            .dimensions
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<String>>()
            .join(", ");
        write!(fmt, "{}/{} ({})", self.namespace, self.metric_name, dimensions)
    }
}

/// Render a metric as `namespace/name (dim=value, ...)`
pub fn format_descriptor(descriptor: &MetricDescriptor) -> String {
    descriptor.to_string()
}
