//! Model-based testing: random operation sequences against a `Vec` model.

use super::common::{assert_matches_model, Model};
use proptest::prelude::*;
use sortlink::{Element, SortedLinkedList};

#[derive(Debug, Clone)]
enum Op {
    Insert(Element),
    Remove(Element),
    Contains(Element),
    Clear,
}

/// Mostly integers with a sprinkling of text, so mismatches and kind resets
/// both get exercised.
fn element_strategy() -> impl Strategy<Value = Element> {
    prop_oneof![
        4 => (-6i64..6).prop_map(Element::from),
        1 => "[a-c]{0,2}".prop_map(Element::from),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => element_strategy().prop_map(Op::Insert),
        3 => element_strategy().prop_map(Op::Remove),
        2 => element_strategy().prop_map(Op::Contains),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    /// Property: The list and the model agree after every operation.
    #[test]
    fn prop_list_matches_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut list = SortedLinkedList::new();
        let mut model = Model::default();

        for op in ops {
            match op {
                Op::Insert(value) => {
                    let accepted = model.insert(value.clone());
                    prop_assert_eq!(list.insert(value).is_ok(), accepted);
                }
                Op::Remove(value) => {
                    let expected = model.remove(&value);
                    prop_assert_eq!(list.remove(&value).ok(), expected);
                }
                Op::Contains(value) => {
                    let expected = model.contains(&value);
                    prop_assert_eq!(list.contains(&value).ok(), expected);
                }
                Op::Clear => {
                    model.clear();
                    list.clear();
                }
            }
            assert_matches_model(&list, &model);
        }
    }
}
