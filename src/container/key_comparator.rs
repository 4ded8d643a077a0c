/// Decides whether two keys name the same slot.
///
/// Any `Fn(&K, &K) -> bool` closure qualifies.
pub trait KeyComparator<K: ?Sized> {
    fn keys_equal(&self, lhs: &K, rhs: &K) -> bool;
}

impl<K, F> KeyComparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn keys_equal(&self, lhs: &K, rhs: &K) -> bool {
        self(lhs, rhs)
    }
}

/// Compares keys with their `PartialEq` implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalEq;

impl<K: PartialEq + ?Sized> KeyComparator<K> for NaturalEq {
    #[inline]
    fn keys_equal(&self, lhs: &K, rhs: &K) -> bool {
        lhs == rhs
    }
}
