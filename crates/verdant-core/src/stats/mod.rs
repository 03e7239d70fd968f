pub mod metric;
pub mod metrics;

pub use metric::{Metric, Statistic, TimeStatistic};
pub use metrics::{MetricSet, metric_names};
