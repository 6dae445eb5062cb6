//! Growable collection of rasterized lattice points.

/// An integer lattice point `[x, y, z]`.
pub type Voxel = [i64; 3];

/// Voxels produced by rasterization, in scan order.
///
/// Order carries no meaning and duplicates are kept: adjacent triangles that
/// share an edge both emit it. Call [`VoxelSet::dedup`] at the point where the
/// voxels are written into a grid if idempotent insertion is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoxelSet {
    voxels: Vec<Voxel>,
}

impl VoxelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            voxels: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, voxel: Voxel) {
        self.voxels.push(voxel);
    }

    /// Move all voxels of `other` to the end of this set.
    pub fn append(&mut self, other: &mut VoxelSet) {
        self.voxels.append(&mut other.voxels);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.voxels.reserve(additional);
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    pub fn contains(&self, voxel: &Voxel) -> bool {
        self.voxels.contains(voxel)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Voxel> {
        self.voxels.iter()
    }

    /// The voxels as an N x 3 array.
    pub fn as_slice(&self) -> &[Voxel] {
        &self.voxels
    }

    pub fn into_vec(self) -> Vec<Voxel> {
        self.voxels
    }

    /// Inclusive `(min, max)` corners, or `None` for an empty set.
    pub fn bounds(&self) -> Option<(Voxel, Voxel)> {
        let first = *self.voxels.first()?;
        Some(self.voxels.iter().fold((first, first), |(mut lo, mut hi), v| {
            for axis in 0..3 {
                lo[axis] = lo[axis].min(v[axis]);
                hi[axis] = hi[axis].max(v[axis]);
            }
            (lo, hi)
        }))
    }

    /// Sort the voxels and drop repeated ones.
    pub fn dedup(&mut self) {
        self.voxels.sort_unstable();
        self.voxels.dedup();
    }
}

impl FromIterator<Voxel> for VoxelSet {
    fn from_iter<I: IntoIterator<Item = Voxel>>(iter: I) -> Self {
        Self {
            voxels: iter.into_iter().collect(),
        }
    }
}

impl Extend<Voxel> for VoxelSet {
    fn extend<I: IntoIterator<Item = Voxel>>(&mut self, iter: I) {
        self.voxels.extend(iter);
    }
}

impl IntoIterator for VoxelSet {
    type Item = Voxel;
    type IntoIter = std::vec::IntoIter<Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.voxels.into_iter()
    }
}

impl<'a> IntoIterator for &'a VoxelSet {
    type Item = &'a Voxel;
    type IntoIter = std::slice::Iter<'a, Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.voxels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(VoxelSet::new().bounds(), None);
        let set: VoxelSet = [[1, 5, -2], [3, 0, 4], [-1, 2, 0]].into_iter().collect();
        assert_eq!(set.bounds(), Some(([-1, 0, -2], [3, 5, 4])));
    }

    #[test]
    fn test_dedup() {
        let mut set: VoxelSet = [[1, 0, 0], [0, 0, 0], [1, 0, 0], [0, 0, 0]]
            .into_iter()
            .collect();
        set.dedup();
        assert_eq!(set.as_slice(), &[[0, 0, 0], [1, 0, 0]]);
    }

    #[test]
    fn test_append_keeps_order() {
        let mut a: VoxelSet = [[0, 0, 0]].into_iter().collect();
        let mut b: VoxelSet = [[2, 2, 2], [1, 1, 1]].into_iter().collect();
        a.append(&mut b);
        assert!(b.is_empty());
        assert_eq!(a.into_vec(), vec![[0, 0, 0], [2, 2, 2], [1, 1, 1]]);
    }
}
