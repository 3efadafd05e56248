use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Longest code a [`Code`] can hold
pub const MAX_CODE_LENGTH: u8 = 64;

/// A variable-length binary code, stored MSB-first in the low `len` bits
///
/// Serializes as its bit string, e.g. `"0110"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Code {
    bits: u64,
    len: u8,
}

impl Code {
    /// The zero-length code (only valid as an accumulator, never in a table)
    pub const EMPTY: Code = Code { bits: 0, len: 0 };

    pub fn new(bits: u64, len: u8) -> Result<Self> {
        if len > MAX_CODE_LENGTH || (len < 64 && bits >> len != 0) {
            return Err(Error::InvalidCodeTable(format!("{bits:#b} does not fit in {len} bits")));
        }
        Ok(Self { bits, len })
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append one bit, or `None` if the code is already [`MAX_CODE_LENGTH`] long
    #[inline]
    pub fn push_bit(self, bit: bool) -> Option<Code> {
        if self.len >= MAX_CODE_LENGTH {
            return None;
        }
        Some(Code { bits: (self.bits << 1) | bit as u64, len: self.len + 1 })
    }

    /// Whether `self` is a prefix of (or equal to) `other`
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len
            && other.bits.checked_shr((other.len - self.len) as u32).unwrap_or(0) == self.bits
    }

    /// Sort key giving lexicographic order of the bit strings
    fn lexicographic_key(&self) -> (u64, u8) {
        let aligned = if self.len == 0 { 0 } else { self.bits << (64 - self.len as u32) };
        (aligned, self.len)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shift in (0..self.len).rev() {
            f.write_str(if (self.bits >> shift) & 1 == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut code = Code::EMPTY;
        for c in s.chars() {
            let bit = match c {
                '0' => false,
                '1' => true,
                other => {
                    return Err(Error::InvalidCodeTable(format!("invalid bit {other:?} in {s:?}")))
                }
            };
            code = code.push_bit(bit).ok_or_else(|| {
                Error::InvalidCodeTable(format!("code longer than {MAX_CODE_LENGTH} bits"))
            })?;
        }
        Ok(code)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for Code {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Mapping from symbol to its prefix-free code
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: u8, code: Code) {
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes.iter().map(|(&s, &c)| (s, c))
    }

    /// Length of the longest code (0 for an empty table)
    pub fn max_code_length(&self) -> u8 {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Dense symbol-indexed lookup for encoding
    pub fn to_lookup(&self) -> [Option<Code>; 256] {
        let mut lookup = [None; 256];
        for (symbol, code) in self.iter() {
            lookup[symbol as usize] = Some(code);
        }
        lookup
    }

    /// Check that no code is empty, duplicated, or a prefix of another
    pub fn validate(&self) -> Result<()> {
        let mut sorted: Vec<(u8, Code)> = self.iter().collect();
        if let Some((symbol, _)) = sorted.iter().find(|(_, c)| c.is_empty()) {
            return Err(Error::InvalidCodeTable(format!("symbol {symbol} has an empty code")));
        }

        // In lexicographic order any prefix sits directly before a code it prefixes
        sorted.sort_by_key(|(_, c)| c.lexicographic_key());
        for pair in sorted.windows(2) {
            let (a_sym, a) = pair[0];
            let (b_sym, b) = pair[1];
            if a == b {
                return Err(Error::InvalidCodeTable(format!(
                    "symbols {a_sym} and {b_sym} share code {a}"
                )));
            }
            if a.is_prefix_of(&b) {
                return Err(Error::InvalidCodeTable(format!(
                    "code {a} (symbol {a_sym}) is a prefix of {b} (symbol {b_sym})"
                )));
            }
        }
        Ok(())
    }

    /// Validate and invert the table for decoding
    pub fn to_reverse_map(&self) -> Result<HashMap<Code, u8>> {
        self.validate()?;
        Ok(self.iter().map(|(symbol, code)| (code, symbol)).collect())
    }
}

impl FromIterator<(u8, Code)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (u8, Code)>>(iter: I) -> Self {
        Self { codes: iter.into_iter().collect() }
    }
}
