//! A fixed-size set of cell indices using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` grid
//! is packed into an unsigned integer `T`, one bit per row-major cell index.
//! Ownership sets, neighbour sets and capturable sets are all `CellMask`s.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by cell mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellMaskError {
    /// Requested grid size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Cell index is out of bounds [0..N*N).
    IndexOutOfBounds { index: usize },
}

impl core::fmt::Display for CellMaskError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CellMaskError::SizeTooLarge { n, capacity } => {
                write!(
                    f,
                    "SizeTooLarge: N*N={} exceeds T::BITS={}",
                    n * n,
                    capacity
                )
            }
            CellMaskError::IndexOutOfBounds { index } => {
                write!(f, "IndexOutOfBounds: index={}", index)
            }
        }
    }
}

/// A set of cells of an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellMask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of cells in the grid (`N * N`).
    pub const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS >= mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Create an empty mask without size check.
    #[inline]
    pub fn new() -> Self {
        CellMask { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, CellMaskError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(CellMaskError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(CellMask { bits: T::zero() })
        }
    }

    /// Mask with every cell of the grid set.
    #[inline]
    pub fn full() -> Self {
        CellMask { bits: Self::mask() }
    }

    /// Number of cells in the set.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every cell of the grid is set.
    pub fn is_full(&self) -> bool {
        self.bits == Self::mask()
    }

    /// Membership test. Out-of-range indices are never members.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < Self::CELLS && ((self.bits >> index) & T::one()) != T::zero()
    }

    /// Adds `index` to the set.
    pub fn insert(&mut self, index: usize) -> Result<(), CellMaskError> {
        self.check_bounds(index)?;
        self.bits = self.bits | (T::one() << index);
        Ok(())
    }

    /// Removes `index` from the set.
    pub fn remove(&mut self, index: usize) -> Result<(), CellMaskError> {
        self.check_bounds(index)?;
        self.bits = self.bits & !(T::one() << index);
        Ok(())
    }

    /// `true` if every member of `self` is also in `other`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        (self.bits & !other.bits).is_zero()
    }

    /// `true` if the two sets share no cell.
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        (self.bits & other.bits).is_zero()
    }

    #[inline]
    fn check_bounds(&self, index: usize) -> Result<(), CellMaskError> {
        if index >= Self::CELLS {
            Err(CellMaskError::IndexOutOfBounds { index })
        } else {
            Ok(())
        }
    }

    /// Creates a mask from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        CellMask {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a mask from an iterator over cell indices.
    #[inline]
    pub fn from_indices<I>(iter: I) -> Result<Self, CellMaskError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut mask = Self::new();
        for i in iter {
            mask.insert(i)?;
        }
        Ok(mask)
    }

    /// Iterator over the member indices in ascending order.
    #[inline]
    pub fn iter(&self) -> Indices<T, N> {
        Indices {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellMask<{}, {}>", any::type_name::<T>(), N)?;
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> fmt::Display for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(r * N + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the member indices of a mask.
#[derive(Clone, Copy)]
pub struct Indices<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Indices<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(idx);
            }
        }
        None
    }
}

impl<T, const N: usize> IntoIterator for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = usize;
    type IntoIter = Indices<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Union.
impl<T, const N: usize> BitOr for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellMask::from_raw(self.bits | rhs.bits)
    }
}

/// Intersection.
impl<T, const N: usize> BitAnd for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask::from_raw(self.bits & rhs.bits)
    }
}

/// Difference.
impl<T, const N: usize> Sub for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        CellMask::from_raw(self.bits & !rhs.bits)
    }
}

/// Complement within the grid.
impl<T, const N: usize> Not for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl<T, const N: usize> BitAndAssign for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T, const N: usize> BitOrAssign for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
