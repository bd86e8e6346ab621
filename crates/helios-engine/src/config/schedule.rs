/// Per-bounce-depth sample counts for one transport type
/// (diffuse / specular / refraction).
///
/// A fixed-length lookup table indexed by bounce depth. The sequence is owned
/// and read-only; consumers cannot mutate shared configuration state through
/// it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SampleSchedule {
    counts: Box<[u32]>,
}

impl SampleSchedule {
    /// A schedule casting `count` samples at every depth up to `len`.
    pub fn uniform(count: u32, len: usize) -> Self {
        Self {
            counts: vec![count; len].into_boxed_slice(),
        }
    }

    /// Sample count at the given bounce depth.
    ///
    /// # Panics
    /// Panics if `depth >= len()`. Schedules must be provisioned with at
    /// least `ray_depth` entries; reading past that is a caller error, not a
    /// recoverable condition.
    #[inline]
    pub fn at(&self, depth: usize) -> u32 {
        self.counts[depth]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }
}

impl From<Vec<u32>> for SampleSchedule {
    fn from(counts: Vec<u32>) -> Self {
        Self {
            counts: counts.into_boxed_slice(),
        }
    }
}

impl<const N: usize> From<[u32; N]> for SampleSchedule {
    fn from(counts: [u32; N]) -> Self {
        Self {
            counts: Box::new(counts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_fills_every_depth() {
        let s = SampleSchedule::uniform(3, 8);
        assert_eq!(s.len(), 8);
        assert!(s.as_slice().iter().all(|&n| n == 3));
    }

    #[test]
    fn at_indexes_by_bounce_depth() {
        let s: SampleSchedule = [4, 2, 1].into();
        assert_eq!(s.at(0), 4);
        assert_eq!(s.at(1), 2);
        assert_eq!(s.at(2), 1);
    }

    #[test]
    #[should_panic]
    fn at_past_provisioned_length_panics() {
        let s: SampleSchedule = [1, 1].into();
        s.at(2);
    }

    #[test]
    fn from_vec_preserves_order() {
        let s = SampleSchedule::from(vec![0, 0, 5]);
        assert_eq!(s.as_slice(), &[0, 0, 5]);
    }
}
