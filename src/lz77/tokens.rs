use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Represents a single token in the LZ77 stream
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LZ77Token {
    /// A literal symbol
    Literal(u8),
    /// A back-reference: copy `length` symbols from `distance` symbols back
    ///
    /// `length` may exceed `distance`, in which case the copy reads symbols
    /// it has just written and repeats the last `distance` symbols.
    Copy { distance: usize, length: usize },
}

impl LZ77Token {
    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            LZ77Token::Literal(_) => 1,
            LZ77Token::Copy { length, .. } => *length,
        }
    }

    /// Whether this back-reference reads symbols it produces itself
    pub fn is_self_overlapping(&self) -> bool {
        matches!(self, LZ77Token::Copy { distance, length } if length > distance)
    }
}

/// Check a token stream without decoding it and return its decoded length
///
/// Every back-reference must have a non-zero length and point inside the
/// output produced before it; the total length must fit in `usize`.
pub fn checked_output_len(tokens: &[LZ77Token]) -> Result<usize> {
    let mut len = 0usize;
    for token in tokens {
        match *token {
            LZ77Token::Literal(_) => {}
            LZ77Token::Copy { distance, length: 0 } => {
                return Err(Error::MalformedToken(format!(
                    "back-reference at distance {distance} has zero length"
                )));
            }
            LZ77Token::Copy { distance, .. } if distance == 0 || distance > len => {
                return Err(Error::DanglingReference { distance, available: len });
            }
            LZ77Token::Copy { .. } => {}
        }
        len = len.checked_add(token.uncompressed_size()).ok_or_else(|| {
            Error::MalformedToken("decoded length overflows usize".to_string())
        })?;
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncompressed_size() {
        let tokens = vec![
            LZ77Token::Literal(7),
            LZ77Token::Copy { distance: 1, length: 4 },
            LZ77Token::Literal(1),
        ];
        assert_eq!(checked_output_len(&tokens).unwrap(), 6);
    }

    #[test]
    fn test_checked_len_dangling_before_size() {
        let tokens = vec![LZ77Token::Copy { distance: 10, length: usize::MAX / 2 }];
        assert!(matches!(
            checked_output_len(&tokens),
            Err(Error::DanglingReference { distance: 10, available: 0 })
        ));

        let tokens = vec![
            LZ77Token::Literal(1),
            LZ77Token::Copy { distance: 10, length: usize::MAX },
        ];
        assert!(matches!(
            checked_output_len(&tokens),
            Err(Error::DanglingReference { distance: 10, available: 1 })
        ));
    }

    #[test]
    fn test_checked_len_overflow() {
        let tokens = vec![
            LZ77Token::Literal(1),
            LZ77Token::Copy { distance: 1, length: usize::MAX },
        ];
        assert!(matches!(checked_output_len(&tokens), Err(Error::MalformedToken(_))));
    }

    #[test]
    fn test_checked_len_zero_length() {
        let tokens = vec![LZ77Token::Literal(1), LZ77Token::Copy { distance: 1, length: 0 }];
        assert!(matches!(checked_output_len(&tokens), Err(Error::MalformedToken(_))));
    }

    #[test]
    fn test_self_overlapping() {
        assert!(LZ77Token::Copy { distance: 1, length: 4 }.is_self_overlapping());
        assert!(!LZ77Token::Copy { distance: 3, length: 3 }.is_self_overlapping());
        assert!(!LZ77Token::Literal(0).is_self_overlapping());
    }
}
