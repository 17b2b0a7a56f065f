/// Running sum and count over present values of one column.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    pub fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Sum of present values; `0.0` when there were none.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Sum of present values, or `None` when there were none.
    pub fn sum_if_any(&self) -> Option<f64> {
        (self.count > 0).then_some(self.sum)
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

impl FromIterator<Option<f64>> for Accumulator {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        let mut acc = Accumulator::default();
        for value in iter {
            acc.push(value);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_excluded() {
        let acc: Accumulator = [Some(100.0), Some(200.0), Some(300.0), None, Some(400.0)]
            .into_iter()
            .collect();
        assert_eq!(acc.count(), 4);
        assert_eq!(acc.mean(), Some(250.0));
        assert_eq!(acc.sum(), 1000.0);
    }

    #[test]
    fn test_empty_accumulator() {
        let acc: Accumulator = [None, None].into_iter().collect();
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.sum_if_any(), None);
        assert_eq!(acc.sum(), 0.0);
    }
}
