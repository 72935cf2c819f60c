//! Head/tail assembly of sibling parameters

use abikit_primitives::{U256, WORD_SIZE};
use bytes::BufMut;

use crate::leaf::encode_word;

/// An encoded fragment awaiting placement by its parent.
///
/// Static fragments go straight into the head; dynamic ones go into the
/// tail and leave an offset word behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PreparedParam {
    pub dynamic: bool,
    pub encoded: Vec<u8>,
}

impl PreparedParam {
    pub fn fixed(encoded: impl Into<Vec<u8>>) -> Self {
        Self {
            dynamic: false,
            encoded: encoded.into(),
        }
    }

    pub fn dynamic(encoded: Vec<u8>) -> Self {
        Self {
            dynamic: true,
            encoded,
        }
    }

    /// Bytes this item occupies in its parent's head
    fn head_len(&self) -> usize {
        if self.dynamic {
            WORD_SIZE
        } else {
            self.encoded.len()
        }
    }
}

/// Lay out siblings as head ‖ tail.
///
/// Offsets are relative to the start of this assembly.
pub(crate) fn assemble(items: &[PreparedParam]) -> Vec<u8> {
    let static_size: usize = items.iter().map(PreparedParam::head_len).sum();
    let dynamic_size: usize = items
        .iter()
        .filter(|p| p.dynamic)
        .map(|p| p.encoded.len())
        .sum();

    let mut head = Vec::with_capacity(static_size + dynamic_size);
    let mut tail = Vec::with_capacity(dynamic_size);

    for item in items {
        if item.dynamic {
            let offset = static_size + tail.len();
            head.put_slice(&encode_word(U256::from(offset)));
            tail.put_slice(&item.encoded);
        } else {
            head.put_slice(&item.encoded);
        }
    }

    head.put_slice(&tail);
    head
}

/// Concatenate static siblings with no offsets
pub(crate) fn concat(items: &[PreparedParam]) -> Vec<u8> {
    items.iter().flat_map(|p| p.encoded.iter().copied()).collect()
}
