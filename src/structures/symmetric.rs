//! The symmetric group: all bijections of a finite set under composition.

use std::collections::{BTreeMap, BTreeSet};

use crate::algebra::group::{Group, GroupError};
use crate::structures::bijection::Bijection;
use crate::structures::permutations::permutations;
use crate::utils::factorial;

/// The group of bijections of a fixed finite domain, under composition.
///
/// The domain is fixed at construction. Elements are [`Bijection`] values
/// tabulated over that domain.
///
/// # Example
///
/// ```
/// use symgroup::{BijectionGroup, Group};
///
/// let s3 = BijectionGroup::new([1, 2, 3]);
/// let elements = s3.elements();
/// assert_eq!(elements.len(), 6);
///
/// for f in &elements {
///     let e = s3.binary_operation(f, &s3.inverse_of(f));
///     assert_eq!(e, s3.identity());
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BijectionGroup<T> {
    domain: BTreeSet<T>,
}

/// Build a [`BijectionGroup`] over `domain`.
pub fn bijection_group<T, I>(domain: I) -> BijectionGroup<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = T>,
{
    BijectionGroup::new(domain)
}

impl<T: Ord + Clone> BijectionGroup<T> {
    pub fn new<I>(domain: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            domain: domain.into_iter().collect(),
        }
    }

    /// The set being permuted.
    pub fn domain(&self) -> &BTreeSet<T> {
        &self.domain
    }

    /// Every bijection of `domain` onto itself, `|domain|!` of them.
    ///
    /// Enumeration is factorial in time and memory; keep domains small.
    /// An empty domain yields the single empty bijection.
    pub fn bijections_of(domain: &BTreeSet<T>) -> BTreeSet<Bijection<T>> {
        let set_list: Vec<T> = domain.iter().cloned().collect();
        let orderings = permutations(&set_list);
        tracing::debug!(
            domain_size = set_list.len(),
            count = orderings.len(),
            "enumerated bijections"
        );

        orderings
            .into_iter()
            .map(|images| Bijection::from_pairs(set_list.iter().cloned().zip(images)))
            .collect()
    }

    /// All elements of the group.
    pub fn elements(&self) -> BTreeSet<Bijection<T>> {
        Self::bijections_of(&self.domain)
    }

    /// Number of elements, `|domain|!`, or `None` if that overflows a `u64`.
    pub fn order(&self) -> Option<u64> {
        factorial(self.domain.len() as u64)
    }

    /// Tabulate `f` over the domain, checking that it is a bijection of it.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::NotABijection` if `f` sends two points to the
    /// same image or sends a point outside the domain.
    pub fn bijection<F>(&self, f: F) -> Result<Bijection<T>, GroupError>
    where
        F: Fn(&T) -> T,
    {
        let candidate = Bijection::from_fn(&self.domain, f);
        if self.contains(&candidate) {
            Ok(candidate)
        } else {
            Err(GroupError::NotABijection)
        }
    }

    /// Whether `f` is a bijection of exactly this domain.
    pub fn contains(&self, f: &Bijection<T>) -> bool {
        f.len() == self.domain.len() && f.domain().eq(self.domain.iter()) && f.is_bijective()
    }

    /// A uniformly random element.
    #[cfg(feature = "rand")]
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Bijection<T> {
        use rand::seq::SliceRandom;

        let mut images: Vec<T> = self.domain.iter().cloned().collect();
        images.shuffle(rng);
        Bijection::from_pairs(self.domain.iter().cloned().zip(images))
    }
}

impl<T: Ord + Clone> Group for BijectionGroup<T> {
    type Element = Bijection<T>;

    /// `x ↦ f(g(x))` over the domain.
    fn binary_operation(&self, f: &Bijection<T>, g: &Bijection<T>) -> Bijection<T> {
        Bijection::from_fn(&self.domain, |x| f.apply(g.apply(x)).clone())
    }

    fn identity(&self) -> Bijection<T> {
        Bijection::identity(&self.domain)
    }

    /// Looks each image up in a freshly built `f(x) ↦ x` table.
    ///
    /// `f` is not validated. If it is not injective, later domain points
    /// overwrite earlier ones and the result is only a partial inverse.
    fn inverse_of(&self, f: &Bijection<T>) -> Bijection<T> {
        let mut table = BTreeMap::new();
        for x in &self.domain {
            if table.insert(f.apply(x).clone(), x.clone()).is_some() {
                tracing::debug!("inverse_of: mapping is not injective, image overwritten");
            }
        }
        Bijection::from_pairs(table)
    }
}
