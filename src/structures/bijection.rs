use std::collections::{BTreeMap, BTreeSet};
use core::fmt;

/// A mapping of a finite domain onto itself, stored as an explicit table.
///
/// Every value owns its own table, so two bijections never share state and
/// equality, ordering and hashing are all structural: two bijections are the
/// same element exactly when they send every point to the same image.
///
/// Points that are not keys of the table are fixed by [`Bijection::apply`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bijection<T> {
    map: BTreeMap<T, T>,
}

impl<T: Ord + Clone> Bijection<T> {
    /// Build a bijection from `(point, image)` pairs.
    ///
    /// Nothing is validated; a repeated point keeps its last image. Use
    /// [`Bijection::is_bijective`] or
    /// [`BijectionGroup::bijection`](crate::BijectionGroup::bijection)
    /// when the input is untrusted.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// Tabulate `f` over `domain`.
    pub fn from_fn<F>(domain: &BTreeSet<T>, f: F) -> Self
    where
        F: Fn(&T) -> T,
    {
        Self {
            map: domain.iter().map(|x| (x.clone(), f(x))).collect(),
        }
    }

    /// The identity on `domain`.
    pub fn identity(domain: &BTreeSet<T>) -> Self {
        Self::from_fn(domain, T::clone)
    }

    /// Image of `x`.
    #[inline]
    pub fn apply<'a>(&'a self, x: &'a T) -> &'a T {
        self.map.get(x).unwrap_or(x)
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    ///
    /// The result is defined on the union of both tables.
    pub fn compose(&self, other: &Self) -> Self {
        let points: BTreeSet<&T> = self.map.keys().chain(other.map.keys()).collect();
        Self {
            map: points
                .into_iter()
                .map(|x| (x.clone(), self.apply(other.apply(x)).clone()))
                .collect(),
        }
    }

    /// Whether the table is a bijection of its own key set.
    pub fn is_bijective(&self) -> bool {
        let images: BTreeSet<&T> = self.map.values().collect();
        images.len() == self.map.len() && images.into_iter().all(|y| self.map.contains_key(y))
    }

    /// Points the table is defined on, in order.
    pub fn domain(&self) -> impl Iterator<Item = &T> {
        self.map.keys()
    }

    /// `(point, image)` pairs in point order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &T)> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Bijection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

/// Writes `"<n> --> <f(n)>; "` for each point in order.
impl<T: fmt::Display> fmt::Display for Bijection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, y) in &self.map {
            write!(f, "{} --> {}; ", x, y)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Bijection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.map.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Bijection<T>
where
    T: serde::Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pairs: Vec<(T, T)> = Vec::deserialize(deserializer)?;
        Ok(Self::from_pairs(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cycle() -> Bijection<i32> {
        Bijection::from_pairs([(1, 2), (2, 3), (3, 1)])
    }

    #[test]
    fn apply_follows_table() {
        let f = cycle();
        assert_eq!(*f.apply(&1), 2);
        assert_eq!(*f.apply(&2), 3);
        assert_eq!(*f.apply(&3), 1);
    }

    #[test]
    fn points_outside_the_table_are_fixed() {
        let f = cycle();
        assert_eq!(*f.apply(&42), 42);
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let f = cycle();
        let swap = Bijection::from_pairs([(1, 2), (2, 1), (3, 3)]);
        let h = f.compose(&swap);
        // h(1) = f(swap(1)) = f(2) = 3
        assert_eq!(*h.apply(&1), 3);
        assert_eq!(*h.apply(&2), 2);
        assert_eq!(*h.apply(&3), 1);

        let k = swap.compose(&f);
        assert_eq!(*k.apply(&1), 1);
        assert_eq!(*k.apply(&2), 3);
        assert_eq!(*k.apply(&3), 2);
    }

    #[test]
    fn compose_extends_to_union_of_tables() {
        let f = Bijection::from_pairs([(1, 2), (2, 1)]);
        let g = Bijection::from_pairs([(3, 4), (4, 3)]);
        let h = f.compose(&g);
        assert_eq!(h.len(), 4);
        assert!(h.is_bijective());
    }

    #[test]
    fn equality_is_structural() {
        let a = cycle();
        let b = Bijection::from_pairs([(3, 1), (1, 2), (2, 3)]);
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn from_fn_tabulates_closure() {
        let domain: BTreeSet<i32> = (0..5).collect();
        let f = Bijection::from_fn(&domain, |x| (x + 1) % 5);
        assert_eq!(f.len(), 5);
        assert_eq!(*f.apply(&4), 0);
        assert!(f.is_bijective());
    }

    #[test]
    fn detects_non_bijective_tables() {
        assert!(cycle().is_bijective());
        assert!(!Bijection::from_pairs([(1, 1), (2, 1)]).is_bijective());
        // image leaves the key set
        assert!(!Bijection::from_pairs([(1, 2)]).is_bijective());
        assert!(Bijection::<i32>::from_pairs([]).is_bijective());
    }

    #[test]
    fn display_format() {
        assert_eq!(cycle().to_string(), "1 --> 2; 2 --> 3; 3 --> 1; ");
        assert_eq!(format!("{:?}", cycle()), "{1: 2, 2: 3, 3: 1}");
    }
}
