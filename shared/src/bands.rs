//! Ordered classification bands
//!
//! A band table is a list of `(upper_bound, label)` pairs in ascending order of
//! bound plus a label for everything at or above the last bound. A value
//! belongs to the first band whose upper bound it is strictly below, so lower
//! bounds are inclusive and upper bounds exclusive.

/// Contiguous, non-overlapping bands over the real line
#[derive(Debug, Clone, Copy)]
pub struct BandTable<T: 'static> {
    bands: &'static [(f64, T)],
    top: T,
}

impl<T: Copy + PartialEq + 'static> BandTable<T> {
    pub const fn new(bands: &'static [(f64, T)], top: T) -> Self {
        Self { bands, top }
    }

    /// First-match-wins lookup
    pub fn classify(&self, value: f64) -> T {
        self.bands
            .iter()
            .find(|(upper, _)| value < *upper)
            .map(|(_, label)| *label)
            .unwrap_or(self.top)
    }

    /// `[lower, upper)` covered by `label`
    ///
    /// The first band starts at negative infinity and the top band ends at
    /// positive infinity. Returns `None` for a label the table does not use.
    pub fn range(&self, label: T) -> Option<(f64, f64)> {
        let mut lower = f64::NEG_INFINITY;
        for (upper, band) in self.bands {
            if *band == label {
                return Some((lower, *upper));
            }
            lower = *upper;
        }
        (self.top == label).then_some((lower, f64::INFINITY))
    }

    /// Labels in ascending order
    pub fn labels(&self) -> impl Iterator<Item = T> + '_ {
        self.bands
            .iter()
            .map(|(_, label)| *label)
            .chain(std::iter::once(self.top))
    }
}
