/*!
 Contains logic to walk a type encoding one token at a time.
*/

use crate::{
    error::encoding::EncodingError,
    util::typesize::models::{EncodingToken, TERMINATOR},
};

/// Opens a fixed-length array, i.e. `[12i]`
const ARRAY_OPEN: u8 = b'[';
/// Closes a fixed-length array
const ARRAY_CLOSE: u8 = b']';
/// Opens a struct, i.e. `{CGPoint=dd}`
const STRUCT_OPEN: u8 = b'{';
/// Closes a struct
const STRUCT_CLOSE: u8 = b'}';
/// Opens a union, i.e. `(Value=iq)`
const UNION_OPEN: u8 = b'(';
/// Closes a union
const UNION_CLOSE: u8 = b')';
/// Prefixes the encoding of the pointee
const POINTER: u8 = b'^';
/// Prefixes the width of a bitfield, i.e. `b5`
const BITFIELD: u8 = b'b';
/// An object, optionally followed by a quoted class name or the block marker
const OBJECT: u8 = b'@';
/// Follows [`OBJECT`] when the object is a block
const BLOCK: u8 = b'?';
/// Delimits class and field names
const QUOTE: u8 = b'"';

/// A forward-only position within a type encoding
///
/// The end of the slice and a NUL byte both mark the end of the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingCursor<'a> {
    /// The encoding we are walking
    encoding: &'a [u8],
    /// The index of the next unread byte
    idx: usize,
}

impl<'a> EncodingCursor<'a> {
    pub fn new(encoding: &'a [u8]) -> Self {
        Self { encoding, idx: 0 }
    }

    /// The index of the next unread byte
    pub fn position(&self) -> usize {
        self.idx
    }

    /// The unread part of the encoding
    pub fn remaining(&self) -> &'a [u8] {
        &self.encoding[self.idx..]
    }

    /// Read the current byte without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.encoding
            .get(self.idx)
            .copied()
            .filter(|byte| *byte != TERMINATOR)
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_none()
    }

    /// Consume the current byte
    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.idx += 1;
        Some(byte)
    }

    /// Classify the current byte and consume it
    ///
    /// At the end of the encoding nothing is consumed and the token is
    /// [`UnsupportedKind::End`](crate::util::typesize::models::UnsupportedKind::End).
    pub fn next_token(&mut self) -> EncodingToken {
        let token = EncodingToken::classify(self.remaining());
        self.bump();
        token
    }

    /// Consume a run of decimal digits and return the number they spell
    ///
    /// If there are no digits, nothing is consumed and the result is `0`. Values too large for
    /// a [`usize`] saturate to [`usize::MAX`], but the whole run of digits is still consumed.
    pub fn advance_past_integer(&mut self) -> usize {
        let mut value: usize = 0;
        while let Some(digit) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .saturating_mul(10)
                .saturating_add(usize::from(digit - b'0'));
            self.idx += 1;
        }
        value
    }

    /// Consume exactly one complete field encoding and return it
    ///
    /// Brackets are matched with nesting, so `[2{Pair=ii}]` is a single field. Unlike sizing, this
    /// requires the closing bracket to be present.
    pub fn next_field(&mut self) -> Result<&'a [u8], EncodingError> {
        let start = self.idx;
        self.skip_field()?;
        Ok(&self.encoding[start..self.idx])
    }

    fn skip_field(&mut self) -> Result<(), EncodingError> {
        // `^^i` is a pointer to a pointer to an int
        while self.peek() == Some(POINTER) {
            let pointer_idx = self.idx;
            self.idx += 1;
            if self.is_at_end() {
                return Err(EncodingError::MissingPointee(pointer_idx));
            }
        }

        let field_idx = self.idx;
        match self.bump() {
            None => Err(EncodingError::EmptyField(field_idx)),
            Some(opener @ (ARRAY_OPEN | STRUCT_OPEN | UNION_OPEN)) => {
                self.skip_bracketed(field_idx, opener)
            }
            Some(closer @ (ARRAY_CLOSE | STRUCT_CLOSE | UNION_CLOSE)) => {
                Err(EncodingError::UnexpectedCloser(field_idx, closer))
            }
            Some(BITFIELD) => {
                self.advance_past_integer();
                Ok(())
            }
            Some(OBJECT) => self.skip_object_suffix(),
            Some(_) => Ok(()),
        }
    }

    /// Consume everything up to and including the bracket that closes `opener`
    fn skip_bracketed(&mut self, opener_idx: usize, opener: u8) -> Result<(), EncodingError> {
        let mut open = vec![(opener_idx, opener)];
        while let Some((innermost_idx, innermost)) = open.last().copied() {
            let idx = self.idx;
            match self.bump() {
                None => return Err(EncodingError::Unbalanced(innermost_idx, innermost)),
                Some(byte @ (ARRAY_OPEN | STRUCT_OPEN | UNION_OPEN)) => open.push((idx, byte)),
                Some(byte @ (ARRAY_CLOSE | STRUCT_CLOSE | UNION_CLOSE)) => {
                    if byte != closer_for(innermost) {
                        return Err(EncodingError::UnexpectedCloser(idx, byte));
                    }
                    open.pop();
                }
                Some(QUOTE) => self.skip_quoted(idx)?,
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Consume a quoted name whose opening quote at `quote_idx` was already consumed
    fn skip_quoted(&mut self, quote_idx: usize) -> Result<(), EncodingError> {
        loop {
            match self.bump() {
                None => return Err(EncodingError::UnterminatedName(quote_idx)),
                Some(QUOTE) => return Ok(()),
                Some(_) => {}
            }
        }
    }

    /// Consume the class name of `@"NSString"` or the marker of the block `@?`
    fn skip_object_suffix(&mut self) -> Result<(), EncodingError> {
        match self.peek() {
            Some(QUOTE) => {
                let quote_idx = self.idx;
                self.idx += 1;
                self.skip_quoted(quote_idx)
            }
            Some(BLOCK) => {
                self.idx += 1;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn closer_for(opener: u8) -> u8 {
    match opener {
        ARRAY_OPEN => ARRAY_CLOSE,
        STRUCT_OPEN => STRUCT_CLOSE,
        _ => UNION_CLOSE,
    }
}

/// Consume the decimal digits at the start of `encoding`, returning their value and the rest of the encoding
///
/// `"123c"` yields `(123, "c")`, while `"c"` yields `(0, "c")`.
pub fn advance_past_integer(encoding: &[u8]) -> (usize, &[u8]) {
    let mut cursor = EncodingCursor::new(encoding);
    let value = cursor.advance_past_integer();
    (value, cursor.remaining())
}
