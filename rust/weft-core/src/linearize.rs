//! Linearization of (possibly self-referential) lists into joined text.
//!
//! Reproduces the browser runtime's array-to-string coercion: elements
//! are comma-joined with no added whitespace, null elements contribute
//! nothing, and nested lists flatten inline rather than bracketing.
//! Two bounds keep the walk finite. Lists nested more than
//! [`MAX_DEPTH`] levels below the root are cut, and a list already on
//! the current recursion path is cut at its first re-entry. Both cuts
//! emit the [`TOO_DEEP`] marker in place of the subtree.

use crate::coerce;
use crate::values::{ListRef, Value};

/// Marker emitted in place of an over-deep or cyclic subtree.
pub const TOO_DEEP: &str = "Too Deep";

/// Nested list levels below the root that still expand.
const MAX_DEPTH: usize = 4;

/// Join `list` into its comma-separated linear form.
pub fn linearize(list: &ListRef) -> String {
    let mut ancestors = vec![list.id()];
    join(list, 0, &mut ancestors)
}

fn join(list: &ListRef, depth: usize, ancestors: &mut Vec<usize>) -> String {
    let mut parts = Vec::with_capacity(list.len());
    for item in list.items() {
        match &item {
            Value::List(nested) => {
                if ancestors.contains(&nested.id()) || depth >= MAX_DEPTH {
                    parts.push(TOO_DEEP.to_string());
                } else {
                    ancestors.push(nested.id());
                    parts.push(join(nested, depth + 1, ancestors));
                    ancestors.pop();
                }
            }
            other => parts.push(coerce::format_string(other)),
        }
    }
    parts.join(",")
}
