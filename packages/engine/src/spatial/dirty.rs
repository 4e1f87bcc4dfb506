//! DirtySet - cell indices changed since the last physics pass
//!
//! BitSet for O(1) idempotent marking plus an insertion list so iteration
//! and clearing cost O(dirty cells) rather than O(grid area).

pub struct DirtySet {
    bits: Vec<u64>,
    indices: Vec<usize>,
}

impl DirtySet {
    pub fn new(size: usize) -> Self {
        Self {
            bits: vec![0; (size + 63) / 64],
            indices: Vec::with_capacity(256),
        }
    }

    #[inline(always)]
    fn locate(idx: usize) -> (usize, u64) {
        (idx >> 6, 1u64 << (idx & 63))
    }

    /// Mark `idx`. Returns false if it was already marked or out of range.
    #[inline]
    pub fn insert(&mut self, idx: usize) -> bool {
        let (word, mask) = Self::locate(idx);
        let Some(bits) = self.bits.get_mut(word) else {
            return false;
        };
        if *bits & mask != 0 {
            return false;
        }
        *bits |= mask;
        self.indices.push(idx);
        true
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        let (word, mask) = Self::locate(idx);
        self.bits.get(word).is_some_and(|bits| bits & mask != 0)
    }

    pub fn clear(&mut self) {
        for &idx in self.indices.iter() {
            self.bits[idx >> 6] = 0;
        }
        self.indices.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Marked indices in first-marked order
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = DirtySet::new(100);
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert!(set.insert(64));
        assert_eq!(set.as_slice(), &[5, 64]);
        assert!(set.contains(5) && set.contains(64));
        assert!(!set.contains(6));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut set = DirtySet::new(10);
        assert!(!set.insert(200));
        assert!(!set.contains(200));
        assert!(set.is_empty());
    }

    #[test]
    fn clear_resets_bits_and_list() {
        let mut set = DirtySet::new(300);
        for idx in [0, 63, 64, 299] {
            set.insert(idx);
        }
        set.clear();
        assert!(set.is_empty());
        for idx in [0, 63, 64, 299] {
            assert!(!set.contains(idx));
            assert!(set.insert(idx));
        }
        assert_eq!(set.len(), 4);
    }
}
