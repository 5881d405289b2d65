//! Key ordering used to decide sibling equivalence.

/// Strict weak ordering over keys.
///
/// `precedes(a, b)` is true iff `a` strictly precedes `b`. Two keys are
/// equivalent when neither precedes the other. The ordering must stay
/// consistent and transitive for the lifetime of the tree that uses it.
///
/// Closures `Fn(&K, &K) -> bool` implement this trait directly:
///
/// ```
/// use nodetree::NodeTree;
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// let mut tree: NodeTree<&str, u8, _> = NodeTree::with_comparator(by_len);
/// let root = tree.add(&["root"], vec![]).unwrap();
/// let first = tree.insert(root, "abc", vec![1]).unwrap();
/// // "xyz" has the same length, so it is equivalent to "abc"
/// assert_eq!(tree.insert(root, "xyz", vec![2]), Some(first));
/// assert_eq!(tree.values(first), Some(&[1, 2][..]));
/// ```
pub trait KeyCompare<K: ?Sized> {
    fn precedes(&self, a: &K, b: &K) -> bool;

    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.precedes(a, b) && !self.precedes(b, a)
    }
}

/// Ordering given by the key's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> KeyCompare<K> for NaturalOrder {
    fn precedes(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

impl<K: ?Sized, F> KeyCompare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    fn precedes(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_natural_order_when_comparing_then_equivalence_is_equality() {
        assert!(NaturalOrder.precedes(&1, &2));
        assert!(!NaturalOrder.precedes(&2, &1));
        assert!(NaturalOrder.equivalent("a", "a"));
        assert!(!NaturalOrder.equivalent("a", "b"));
    }

    #[test]
    fn given_case_insensitive_closure_when_comparing_then_case_is_ignored() {
        let cmp = |a: &String, b: &String| a.to_lowercase() < b.to_lowercase();
        assert!(cmp.equivalent(&"Key".to_string(), &"kEY".to_string()));
        assert!(cmp.precedes(&"alpha".to_string(), &"Beta".to_string()));
    }
}
