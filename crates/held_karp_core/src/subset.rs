use std::fmt;

use crate::constants::{MAX_LOCATIONS, ORIGIN};

/// A set of non-origin locations. Bit `k` is set when location `k` is a
/// member; bit 0 (the origin) never is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subset(u32);

impl Subset {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn singleton(location: usize) -> Self {
        Self::empty().with(location)
    }

    /// Every location except the origin for a problem of `n` locations.
    pub fn non_origin(n: usize) -> Self {
        debug_assert!(n <= MAX_LOCATIONS);
        let all = if n >= MAX_LOCATIONS {
            u32::MAX
        } else {
            (1_u32 << n) - 1
        };
        Self(all & !(1 << ORIGIN))
    }

    pub fn from_locations(locations: impl IntoIterator<Item = usize>) -> Self {
        locations
            .into_iter()
            .fold(Self::empty(), |subset, location| subset.with(location))
    }

    #[must_use]
    pub fn with(self, location: usize) -> Self {
        debug_assert!(location != ORIGIN && location < MAX_LOCATIONS);
        Self(self.0 | (1 << location))
    }

    #[must_use]
    pub fn without(self, location: usize) -> Self {
        debug_assert!(location < MAX_LOCATIONS);
        Self(self.0 & !(1 << location))
    }

    pub fn contains(self, location: usize) -> bool {
        location < MAX_LOCATIONS && self.0 & (1 << location) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Members in ascending index order.
    pub fn locations(self) -> Locations {
        Locations(self.0)
    }

    /// All subsets of `{1, .., n-1}` with exactly `size` members, in ascending
    /// bitmask order.
    pub fn of_size(n: usize, size: usize) -> OfSize {
        OfSize::new(n.saturating_sub(1), size)
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, location) in self.locations().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{location}")?;
        }
        f.write_str("}")
    }
}

#[derive(Clone, Debug)]
pub struct Locations(u32);

impl Iterator for Locations {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let location = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(location)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Locations {}

/// Walks fixed-popcount masks over `width` bits with Gosper's hack.
///
/// Masks are kept compact (bit `i` stands for location `i + 1`) and in `u64`
/// so the carry out of the top bit never overflows.
#[derive(Clone, Debug)]
pub struct OfSize {
    next: Option<u64>,
    limit: u64,
}

impl OfSize {
    fn new(width: usize, size: usize) -> Self {
        let next = (size <= width).then(|| (1_u64 << size) - 1);
        Self {
            next,
            limit: 1_u64 << width,
        }
    }
}

impl Iterator for OfSize {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        let current = self.next?;
        self.next = if current == 0 {
            None
        } else {
            let lowest = current & current.wrapping_neg();
            let ripple = current + lowest;
            let successor = (((ripple ^ current) >> 2) / lowest) | ripple;
            (successor < self.limit).then_some(successor)
        };
        Some(Subset((current << 1) as u32))
    }
}
