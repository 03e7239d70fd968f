use std::time::Duration;

/// Running statistics over the `f32` samples recorded under one metric.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Statistic {
    count: usize,
    sum: f32,
    min: f32,
    max: f32,
    last: f32,
}

impl Statistic {
    pub fn add(&mut self, value: f32) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }

        self.count += 1;
        self.sum += value;
        self.last = value;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f32 {
        self.sum
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn last(&self) -> f32 {
        self.last
    }

    pub fn mean(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f32
        }
    }
}

/// Running statistics over the durations recorded under one metric.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TimeStatistic {
    count: usize,
    sum: Duration,
    min: Duration,
    max: Duration,
}

impl TimeStatistic {
    pub fn add(&mut self, duration: Duration) {
        if self.count == 0 {
            self.min = duration;
            self.max = duration;
        } else {
            self.min = self.min.min(duration);
            self.max = self.max.max(duration);
        }

        self.count += 1;
        self.sum += duration;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> Duration {
        self.sum
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn mean(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            self.sum / self.count as u32
        }
    }
}

/// One named metric: a value statistic, a time statistic, or both - whatever
/// has been recorded under the name so far.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    name: &'static str,
    value: Statistic,
    time: TimeStatistic,
}

impl Metric {
    pub fn new(name: &'static str) -> Self {
        Metric {
            name,
            value: Statistic::default(),
            time: TimeStatistic::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn record_value(&mut self, value: f32) {
        self.value.add(value);
    }

    pub fn record_time(&mut self, duration: Duration) {
        self.time.add(duration);
    }

    pub fn value(&self) -> &Statistic {
        &self.value
    }

    pub fn time(&self) -> &TimeStatistic {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistic() {
        let mut statistic = Statistic::default();
        statistic.add(3.0);
        statistic.add(1.0);
        statistic.add(2.0);

        assert_eq!(statistic.count(), 3);
        assert_eq!(statistic.sum(), 6.0);
        assert_eq!(statistic.min(), 1.0);
        assert_eq!(statistic.max(), 3.0);
        assert_eq!(statistic.mean(), 2.0);
        assert_eq!(statistic.last(), 2.0);
    }

    #[test]
    fn test_time_statistic() {
        let mut statistic = TimeStatistic::default();
        statistic.add(Duration::from_millis(30));
        statistic.add(Duration::from_millis(10));

        assert_eq!(statistic.count(), 2);
        assert_eq!(statistic.sum(), Duration::from_millis(40));
        assert_eq!(statistic.min(), Duration::from_millis(10));
        assert_eq!(statistic.max(), Duration::from_millis(30));
        assert_eq!(statistic.mean(), Duration::from_millis(20));
    }

    #[test]
    fn test_metric_records_both_kinds() {
        let mut metric = Metric::new("evaluation");
        metric.record_value(12.0);
        metric.record_time(Duration::from_millis(5));

        assert_eq!(metric.name(), "evaluation");
        assert_eq!(metric.value().count(), 1);
        assert_eq!(metric.time().count(), 1);
    }
}
