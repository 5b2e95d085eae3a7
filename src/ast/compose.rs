//! Helpers that assemble printed output from parts that may be absent.
//!
//! Every printing rule is expressed as literal segments interleaved with [`Slot`]s. A slot is
//! absent when its source value is missing or prints to nothing, and an absent slot drops its
//! leading segment along with it, so optional punctuation never surrounds a missing value.

use super::printer::PrintNode;
use std::{borrow::Cow, fmt, fmt::Write};

/// A rendered part of the output, or `None` when the part is absent.
pub(crate) type Slot<'s> = Option<Cow<'s, str>>;

/// Prints a node into a slot, which is absent when the node prints to nothing.
#[inline]
pub(crate) fn stringify<N: PrintNode + ?Sized>(node: &N) -> Slot<'static> {
    let text = node.print();
    if text.is_empty() {
        None
    } else {
        Some(Cow::Owned(text))
    }
}

/// Passes a scalar through as a slot. Only the empty string is absent.
#[inline]
pub(crate) fn text(value: &str) -> Slot<'_> {
    if value.is_empty() {
        None
    } else {
        Some(Cow::Borrowed(value))
    }
}

/// A keyword slot that's only present when `flag` is set, e.g. `repeatable`.
#[inline]
pub(crate) fn keyword(flag: bool, keyword: &'static str) -> Slot<'static> {
    flag.then_some(Cow::Borrowed(keyword))
}

/// Writes `values` interleaved with `segments`, where `segments` has one more entry than `values`.
///
/// Each present value is preceded by the segment before it. The trailing segment is written only
/// when the last value is present.
pub(crate) fn join_with_separators(
    buffer: &mut dyn Write,
    segments: &[&str],
    values: &[Slot<'_>],
) -> fmt::Result {
    debug_assert_eq!(segments.len(), values.len() + 1);
    let last = values.len().saturating_sub(1);
    for (index, value) in values.iter().enumerate() {
        if let Some(value) = value {
            buffer.write_str(segments[index])?;
            buffer.write_str(value)?;
            if index == last {
                buffer.write_str(segments[index + 1])?;
            }
        }
    }
    Ok(())
}

/// Writes `prefix`, `value`, and `suffix` if the value is present, and nothing otherwise.
#[inline]
pub(crate) fn wrap_if_present(
    buffer: &mut dyn Write,
    prefix: &str,
    value: Slot<'_>,
    suffix: &str,
) -> fmt::Result {
    match value {
        Some(value) => {
            buffer.write_str(prefix)?;
            buffer.write_str(&value)?;
            buffer.write_str(suffix)
        }
        None => Ok(()),
    }
}

/// Prints each node and joins the non-empty outputs with `glue`.
///
/// The result is absent when there are no nodes or all of them print to nothing.
pub(crate) fn join_list<'n, N, I>(nodes: I, glue: &str) -> Slot<'static>
where
    N: PrintNode + 'n,
    I: IntoIterator<Item = &'n N>,
{
    let mut out = String::new();
    for part in nodes.into_iter().filter_map(|node| stringify(node)) {
        if !out.is_empty() {
            out.push_str(glue);
        }
        out.push_str(&part);
    }
    if out.is_empty() {
        None
    } else {
        Some(Cow::Owned(out))
    }
}
