use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how the travel times observed for one stop pair across trips are
/// combined into the single weight of its edge.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EdgeAggregation {
    /// fastest observed time, for optimistic reachability bounds
    #[default]
    Minimum,
    /// rounded mean of the observed times, for typical travel time
    Mean,
}

/// running observations for one stop pair. accumulators merge in any order,
/// so partial results from different threads can be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelTimeAccumulator {
    min: u32,
    sum: u64,
    count: u64,
}

impl TravelTimeAccumulator {
    pub fn new(travel_seconds: u32) -> Self {
        Self {
            min: travel_seconds,
            sum: travel_seconds as u64,
            count: 1,
        }
    }

    pub fn add(&mut self, travel_seconds: u32) {
        self.min = self.min.min(travel_seconds);
        self.sum += travel_seconds as u64;
        self.count += 1;
    }

    pub fn merge(&mut self, other: &TravelTimeAccumulator) {
        self.min = self.min.min(other.min);
        self.sum += other.sum;
        self.count += other.count;
    }

    /// number of observations
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn finish(&self, aggregation: &EdgeAggregation) -> u32 {
        match aggregation {
            EdgeAggregation::Minimum => self.min,
            EdgeAggregation::Mean => {
                // mean of u32 values never exceeds u32::MAX
                ((self.sum + self.count / 2) / self.count) as u32
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{EdgeAggregation, TravelTimeAccumulator};

    #[test]
    fn test_minimum_and_mean() {
        let mut acc = TravelTimeAccumulator::new(300);
        acc.add(280);
        acc.add(305);
        assert_eq!(acc.count(), 3);
        assert_eq!(acc.finish(&EdgeAggregation::Minimum), 280);
        assert_eq!(acc.finish(&EdgeAggregation::Mean), 295);
    }

    #[test]
    fn test_merge_matches_sequential_adds() {
        let mut left = TravelTimeAccumulator::new(120);
        left.add(90);
        let mut right = TravelTimeAccumulator::new(61);
        right.add(200);
        left.merge(&right);

        let mut sequential = TravelTimeAccumulator::new(120);
        for s in [90, 61, 200] {
            sequential.add(s);
        }
        assert_eq!(left, sequential);
        assert_eq!(left.finish(&EdgeAggregation::Minimum), 61);
        assert_eq!(left.finish(&EdgeAggregation::Mean), 118);
    }
}
