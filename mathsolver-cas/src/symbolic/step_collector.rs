use std::fmt::Display;
use tracing::trace;

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// want to know the steps taken by an algorithm.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}

/// A [`StepCollector`] that forwards every step to a `trace`-level log event, and counts them.
#[derive(Debug, Default)]
pub struct Traced {
    /// The number of steps pushed so far.
    pub count: usize,
}

impl<S: Display> StepCollector<S> for Traced {
    fn push(&mut self, step: S) {
        self.count += 1;
        trace!(%step, "applied rule");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_three(collector: &mut dyn StepCollector<&'static str>) {
        collector.push("a");
        collector.push("b");
        collector.push("c");
    }

    #[test]
    fn vec_collects_in_order() {
        let mut steps = Vec::new();
        collect_three(&mut steps);
        assert_eq!(steps, vec!["a", "b", "c"]);
    }

    #[test]
    fn traced_counts() {
        let mut traced = Traced::default();
        collect_three(&mut traced);
        assert_eq!(traced.count, 3);
    }
}
