// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary operation sequences.
//!
//! Drives a list and a plain `Vec` model with the same operations and checks
//! they never disagree. Values are drawn from small pools so duplicates, kind
//! mismatches and clears all happen often.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sortlink::{check_well_formed, Element, Kind, SortedLinkedList};

#[derive(Debug, Clone)]
enum Op {
    Insert(Element),
    Remove(Element),
    Contains(Element),
    Clear,
}

#[derive(Debug)]
struct OperationInput {
    ops: Vec<Op>,
}

fn arbitrary_element(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Element> {
    Ok(match u.int_in_range(0..=3)? {
        0 => Element::Integer(u.int_in_range(-4..=4)?),
        1 => Element::Integer(u.arbitrary()?),
        2 => {
            // Short lowercase/uppercase text so byte order matters
            let len = u.int_in_range(0..=3)?;
            let bytes: Vec<u8> = (0..len)
                .map(|_| u.choose(b"aAbBz").copied())
                .collect::<Result<_, _>>()?;
            Element::Text(String::from_utf8(bytes).unwrap_or_default())
        }
        _ => Element::Text(u.arbitrary()?),
    })
}

impl<'a> arbitrary::Arbitrary<'a> for OperationInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let count = u.int_in_range(0..=128)?;
        let mut ops = Vec::with_capacity(count);
        for _ in 0..count {
            let op = match u.int_in_range(0..=9)? {
                0..=4 => Op::Insert(arbitrary_element(u)?),
                5..=6 => Op::Remove(arbitrary_element(u)?),
                7..=8 => Op::Contains(arbitrary_element(u)?),
                _ => Op::Clear,
            };
            ops.push(op);
        }
        Ok(OperationInput { ops })
    }
}

/// Fuzz target for operation sequences.
///
/// Tests critical invariants:
/// - INVARIANT 1: Contents always equal the stable-sorted model
/// - INVARIANT 2: Any value-taking call fixes an unset kind; mismatches change nothing
/// - INVARIANT 3: remove reports presence exactly
/// - INVARIANT 4: check_well_formed never fails
fuzz_target!(|input: OperationInput| {
    let mut list = SortedLinkedList::new();
    let mut model: Vec<Element> = Vec::new();
    let mut kind = Kind::Unset;

    for op in input.ops {
        match op {
            Op::Insert(value) => {
                let ok = !kind.is_set() || kind == value.kind();
                assert_eq!(list.insert(value.clone()).is_ok(), ok, "insert {:?}", value);
                if ok {
                    kind = value.kind();
                    let at = model.partition_point(|e| match (e, &value) {
                        (Element::Integer(a), Element::Integer(b)) => a <= b,
                        (Element::Text(a), Element::Text(b)) => a.as_bytes() <= b.as_bytes(),
                        _ => unreachable!("model holds one kind"),
                    });
                    model.insert(at, value);
                }
            }
            Op::Remove(value) => {
                let result = list.remove(&value);
                if kind.is_set() && kind != value.kind() {
                    assert!(result.is_err());
                } else {
                    kind = value.kind();
                    let at = model.iter().position(|e| *e == value);
                    assert_eq!(result, Ok(at.is_some()));
                    if let Some(at) = at {
                        model.remove(at);
                    }
                }
            }
            Op::Contains(value) => {
                let result = list.contains(&value);
                if kind.is_set() && kind != value.kind() {
                    assert!(result.is_err());
                } else {
                    kind = value.kind();
                    assert_eq!(result, Ok(model.contains(&value)));
                }
            }
            Op::Clear => {
                list.clear();
                model.clear();
                kind = Kind::Unset;
            }
        }

        assert_eq!(list.to_vec(), model);
        assert_eq!(list.kind(), kind);
        assert!(check_well_formed(&list).is_ok());
    }
});
