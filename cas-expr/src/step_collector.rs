/// A type that collects the steps taken while rewriting an expression.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. Use it
/// when only the final result is of interest.
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
        Vec::push(self, step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pushes through the trait so the call resolves to [`StepCollector::push`].
    fn push_all(collector: &mut dyn StepCollector<u8>, steps: &[u8]) {
        for &step in steps {
            collector.push(step);
        }
    }

    #[test]
    fn vec_keeps_order() {
        let mut steps: Vec<u8> = Vec::new();
        push_all(&mut steps, &[3, 1, 2]);
        assert_eq!(steps, vec![3, 1, 2]);
    }

    #[test]
    fn unit_discards() {
        push_all(&mut (), &[1, 2, 3]);
    }
}
