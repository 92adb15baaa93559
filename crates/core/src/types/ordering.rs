//! Explicit `order` fields on CMS list items.
//!
//! The CMS may or may not honor `order(order asc)` in projections, so every
//! orderable list is sorted again before render.

/// A list item carrying an explicit position.
pub trait Ordered {
    /// Position of the item. Items without one sort after all positioned items.
    fn order(&self) -> Option<i64>;
}

/// Stable ascending sort by [`Ordered::order`], missing positions last.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| (item.order().is_none(), item.order().unwrap_or_default()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str, Option<i64>);

    impl Ordered for Item {
        fn order(&self) -> Option<i64> {
            self.1
        }
    }

    #[test]
    fn test_sorts_ascending() {
        let mut items = vec![Item("c", Some(3)), Item("a", Some(1)), Item("b", Some(2))];
        sort_by_order(&mut items);
        let names: Vec<_> = items.iter().map(|i| i.0).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_missing_order_last_and_stable() {
        let mut items = vec![
            Item("x", None),
            Item("b", Some(2)),
            Item("y", None),
            Item("a", Some(2)),
            Item("first", Some(-1)),
        ];
        sort_by_order(&mut items);
        let names: Vec<_> = items.iter().map(|i| i.0).collect();
        assert_eq!(names, ["first", "b", "a", "x", "y"]);
    }
}
