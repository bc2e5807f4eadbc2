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

/// A [`StepCollector`] that counts the steps passing through it and logs each one at `trace`
/// level before forwarding it to the wrapped collector.
pub(crate) struct StepCounter<'a, S> {
    inner: &'a mut dyn StepCollector<S>,
    count: usize,
}

impl<'a, S> StepCounter<'a, S> {
    /// Wraps the given collector.
    pub(crate) fn new(inner: &'a mut dyn StepCollector<S>) -> Self {
        Self { inner, count: 0 }
    }

    /// Returns the number of steps collected so far.
    pub(crate) fn count(&self) -> usize {
        self.count
    }
}

impl<S: std::fmt::Debug> StepCollector<S> for StepCounter<'_, S> {
    fn push(&mut self, step: S) {
        trace!(target: "symcalc_compute::simplify", ?step, "applied rule");
        self.count += 1;
        self.inner.push(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_forwards_steps() {
        let mut steps: Vec<&str> = Vec::new();
        let mut counter = StepCounter::<&str>::new(&mut steps);
        counter.push("a");
        counter.push("b");
        assert_eq!(counter.count(), 2);
        assert_eq!(steps, vec!["a", "b"]);
    }

    #[test]
    fn unit_discards_steps() {
        let mut unit = ();
        let mut counter = StepCounter::<i32>::new(&mut unit);
        counter.push(1);
        assert_eq!(counter.count(), 1);
    }
}
