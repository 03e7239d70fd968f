use super::metric::Metric;
use std::collections::BTreeMap;
use std::time::Duration;

/// The well-known metric names recorded by the engine. Kept in one place so
/// listeners and reports agree on spelling.
pub mod metric_names {
    pub const INITIALIZATION: &str = "initialization";
    pub const EVALUATION: &str = "evaluation";
    pub const EVALUATION_COUNT: &str = "evaluation_count";
    pub const PARENT_SELECTION: &str = "parent_selection";
    pub const SURVIVOR_SELECTION: &str = "survivor_selection";
    pub const ALTERATION: &str = "alteration";
    pub const GENERATION_TIME: &str = "generation_time";
    pub const SCORE: &str = "score";
    pub const STEADY_GENERATIONS: &str = "steady_generations";
}

/// A collection of named [Metric]s. Iteration order is the lexicographic
/// order of the names, so rendered reports are deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricSet {
    metrics: BTreeMap<&'static str, Metric>,
}

impl MetricSet {
    pub fn new() -> Self {
        MetricSet {
            metrics: BTreeMap::new(),
        }
    }

    pub fn upsert_value(&mut self, name: &'static str, value: f32) {
        self.metric_mut(name).record_value(value);
    }

    pub fn upsert_time(&mut self, name: &'static str, duration: Duration) {
        self.metric_mut(name).record_time(duration);
    }

    fn metric_mut(&mut self, name: &'static str) -> &mut Metric {
        self.metrics.entry(name).or_insert_with(|| Metric::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.metrics.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &&'static str> {
        self.metrics.keys()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn clear(&mut self) {
        self.metrics.clear();
    }
}
