//! Block reordering.
//!
//! Standard list-splice semantics: remove the element at `source`, then
//! insert it at `destination` in the shortened sequence. The destination is
//! therefore a *post-removal* index: moving the first of three blocks to
//! destination 1 puts it between the other two, not after the block that sat
//! at index 1 before the move.
//!
//! # Range policy
//!
//! Both indices are rejected, never clamped:
//! - `source` must satisfy `source < len` ([`DocError::SourceOutOfRange`])
//! - `destination` must satisfy `destination < len`, i.e. a valid insertion
//!   point in the `len - 1` sequence ([`DocError::DestinationOutOfRange`])
//!
//! A missing destination (dropped outside any target) is a no-op.

use crate::{Block, DocError, Result};

/// Outcome of a drag gesture, as reported by the structured surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropResult {
    pub source: usize,
    /// `None` when the block was released outside any valid target.
    pub destination: Option<usize>,
}

impl DropResult {
    pub fn new(source: usize, destination: Option<usize>) -> Self {
        Self {
            source,
            destination,
        }
    }
}

/// Check both indices against `len` without touching any data.
///
/// Returns `Ok(None)` for a no-op (no destination), `Ok(Some(dest))` otherwise.
fn validate(len: usize, source: usize, destination: Option<usize>) -> Result<Option<usize>> {
    if source >= len {
        return Err(DocError::SourceOutOfRange { index: source, len });
    }
    match destination {
        None => Ok(None),
        Some(dest) if dest >= len => Err(DocError::DestinationOutOfRange { index: dest, len }),
        Some(dest) => Ok(Some(dest)),
    }
}

/// Move one block within `blocks`, in place.
///
/// Returns `true` if the sequence changed.
pub fn reorder_in_place(
    blocks: &mut Vec<Block>,
    source: usize,
    destination: Option<usize>,
) -> Result<bool> {
    let Some(dest) = validate(blocks.len(), source, destination)? else {
        return Ok(false);
    };
    if dest == source {
        return Ok(false);
    }
    let moved = blocks.remove(source);
    blocks.insert(dest, moved);
    Ok(true)
}

/// Pure form of [`reorder_in_place`]: returns the new sequence.
///
/// The input is never modified; a no-op returns an identical copy.
pub fn reorder(blocks: &[Block], source: usize, destination: Option<usize>) -> Result<Vec<Block>> {
    let mut next = blocks.to_vec();
    reorder_in_place(&mut next, source, destination)?;
    Ok(next)
}

/// Apply a [`DropResult`] to a sequence.
pub fn apply_drop(blocks: &[Block], drop: DropResult) -> Result<Vec<Block>> {
    reorder(blocks, drop.source, drop.destination)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockKind;
    use rand::Rng;

    fn seq(n: usize) -> Vec<Block> {
        (0..n).map(|i| Block::paragraph(format!("b{i}"))).collect()
    }

    fn contents(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.content.as_str()).collect()
    }

    #[test]
    fn test_move_forward_uses_post_removal_index() {
        let s = seq(3);
        let out = reorder(&s, 0, Some(1)).unwrap();
        assert_eq!(contents(&out), ["b1", "b0", "b2"]);
    }

    #[test]
    fn test_move_to_end() {
        let s = seq(4);
        let out = reorder(&s, 1, Some(3)).unwrap();
        assert_eq!(contents(&out), ["b0", "b2", "b3", "b1"]);
    }

    #[test]
    fn test_move_backward() {
        let s = seq(4);
        let out = reorder(&s, 3, Some(0)).unwrap();
        assert_eq!(contents(&out), ["b3", "b0", "b1", "b2"]);
    }

    #[test]
    fn test_no_destination_is_noop() {
        let s = seq(3);
        let out = reorder(&s, 2, None).unwrap();
        assert_eq!(out.len(), s.len());
        assert!(out.iter().zip(&s).all(|(a, b)| a.same_content(b)));
    }

    #[test]
    fn test_same_index_is_noop() {
        let mut s = seq(3);
        let changed = reorder_in_place(&mut s, 1, Some(1)).unwrap();
        assert!(!changed);
        assert_eq!(contents(&s), ["b0", "b1", "b2"]);
    }

    #[test]
    fn test_source_out_of_range_rejected() {
        let s = seq(2);
        assert_eq!(
            reorder(&s, 2, Some(0)).unwrap_err(),
            DocError::SourceOutOfRange { index: 2, len: 2 }
        );
        assert_eq!(
            reorder(&[], 0, None).unwrap_err(),
            DocError::SourceOutOfRange { index: 0, len: 0 }
        );
    }

    #[test]
    fn test_destination_out_of_range_rejected() {
        let s = seq(3);
        assert_eq!(
            reorder(&s, 0, Some(3)).unwrap_err(),
            DocError::DestinationOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn test_failed_reorder_leaves_input_untouched() {
        let mut s = seq(3);
        assert!(reorder_in_place(&mut s, 0, Some(9)).is_err());
        assert_eq!(contents(&s), ["b0", "b1", "b2"]);
    }

    #[test]
    fn test_ids_survive_reorder() {
        let s = vec![
            Block::heading("Title"),
            Block::new(BlockKind::Image, "cover.png"),
            Block::divider(),
        ];
        let out = apply_drop(&s, DropResult::new(0, Some(2))).unwrap();
        assert_eq!(out[2].id(), s[0].id());
        assert_eq!(out[0].id(), s[1].id());
    }

    #[test]
    fn test_random_reorders_are_permutations() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let n = rng.gen_range(1..12);
            let s = seq(n);
            let src = rng.gen_range(0..n);
            let dst = rng.gen_range(0..n);
            let out = reorder(&s, src, Some(dst)).unwrap();

            assert_eq!(out.len(), s.len());
            let mut before: Vec<_> = s.iter().map(Block::id).collect();
            let mut after: Vec<_> = out.iter().map(Block::id).collect();
            before.sort();
            after.sort();
            assert_eq!(before, after);

            // Everything except the moved block keeps its relative order.
            let moved = s[src].id();
            let rest_before: Vec<_> = s.iter().filter(|b| b.id() != moved).map(Block::id).collect();
            let rest_after: Vec<_> = out.iter().filter(|b| b.id() != moved).map(Block::id).collect();
            assert_eq!(rest_before, rest_after);
            assert_eq!(out[dst].id(), moved);
        }
    }
}
