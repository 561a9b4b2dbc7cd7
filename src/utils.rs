//! Hashing utilities for `ChainedHashSet` implementations

/// Multiplier of the standalone string hash
const STRING_HASH_MULTIPLIER: i32 = 37;

/// Multiplier of the string hash code used by [`TableHash`] for `str`
const HASH_CODE_MULTIPLIER: i32 = 31;

/// Hash capability required from elements stored in a `ChainedHashSet`.
///
/// The returned code may be negative; the table reduces it into a valid bucket
/// index. Implementations must agree with `Eq`: equal values hash identically,
/// and hashing the same value twice yields the same code.
pub trait TableHash {
    /// Returns the signed hash code of the value
    fn table_hash(&self) -> i32;
}

impl TableHash for str {
    fn table_hash(&self) -> i32 {
        self.encode_utf16()
            .fold(0_i32, |h, unit| h.wrapping_mul(HASH_CODE_MULTIPLIER).wrapping_add(i32::from(unit)))
    }
}

impl TableHash for String {
    fn table_hash(&self) -> i32 {
        self.as_str().table_hash()
    }
}

impl TableHash for i32 {
    fn table_hash(&self) -> i32 {
        *self
    }
}

impl TableHash for u32 {
    fn table_hash(&self) -> i32 {
        i32::from_ne_bytes(self.to_ne_bytes())
    }
}

impl TableHash for u64 {
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn table_hash(&self) -> i32 {
        // fold the high half onto the low half
        ((*self ^ (*self >> 32)) as u32).table_hash()
    }
}

impl TableHash for i64 {
    fn table_hash(&self) -> i32 {
        u64::from_ne_bytes(self.to_ne_bytes()).table_hash()
    }
}

impl TableHash for usize {
    fn table_hash(&self) -> i32 {
        u64::try_from(*self).unwrap_or(u64::MAX).table_hash()
    }
}

impl TableHash for char {
    fn table_hash(&self) -> i32 {
        u32::from(*self).table_hash()
    }
}

impl TableHash for bool {
    fn table_hash(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }
}

impl<T: TableHash + ?Sized> TableHash for &T {
    fn table_hash(&self) -> i32 {
        (**self).table_hash()
    }
}

/// Reduces a signed hash code into `[0, modulus)`.
///
/// A zero modulus maps everything to bucket 0.
#[must_use]
pub(crate) fn reduce(hash: i32, modulus: usize) -> usize {
    let modulus = i64::try_from(modulus).unwrap_or(i64::MAX);
    // Euclidean remainder equals "remainder, plus modulus when negative"
    i64::from(hash)
        .checked_rem_euclid(modulus)
        .and_then(|index| usize::try_from(index).ok())
        .unwrap_or(0)
}

/// Hashes a string into `[0, table_size)` with the polynomial `h = 37 * h + c`.
///
/// The polynomial runs over the UTF-16 code units of `key` in wrapping 32-bit
/// signed arithmetic, so the result is reproducible for a given key and size.
/// A `table_size` of 0 is treated as 1.
///
/// ```rust
/// assert_eq!(chainset::hash("abc", 101), 67);
/// ```
#[must_use]
pub fn hash(key: &str, table_size: usize) -> usize {
    let hash_val = key.encode_utf16().fold(0_i32, |h, unit| {
        h.wrapping_mul(STRING_HASH_MULTIPLIER).wrapping_add(i32::from(unit))
    });

    reduce(hash_val, table_size.max(1))
}
