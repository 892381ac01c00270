/*!
 Contains logic to determine the size of a value described by a type encoding.

 Sizes follow the C data model selected by an [`Architecture`]; only `long` and pointers change between data models.
 Encodings for types whose layout this crate does not compute, such as structs, unions, bitfields, and objects,
 resolve to [`ResolvedSize::Indeterminate`]. Callers decide whether that is fatal or whether they can supply an
 explicit size with [`ResolvedSize::or_explicit`].
*/

use crate::{
    error::encoding::EncodingError,
    util::{
        platform::Architecture,
        typesize::{
            cursor::EncodingCursor,
            models::{EncodingToken, ResolvedSize},
        },
    },
};

/// Size of a `char`, encoded as `c` or `C`
const CHAR_SIZE: usize = 1;
/// Size of a `short`, encoded as `s` or `S`
const SHORT_SIZE: usize = 2;
/// Size of an `int`, encoded as `i` or `I`
const INT_SIZE: usize = 4;
/// Size of a `long long`, encoded as `q` or `Q`
const LONG_LONG_SIZE: usize = 8;
/// Size of a `float`, encoded as `f`
const FLOAT_SIZE: usize = 4;
/// Size of a `double`, encoded as `d`
const DOUBLE_SIZE: usize = 8;

/// A single field of a record encoding and its size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSize<'a> {
    /// The complete encoding of the field, i.e. `[4c]`
    pub encoding: &'a [u8],
    /// The resolved size of the field
    pub size: ResolvedSize,
}

impl<'a> FieldSize<'a> {
    fn new(encoding: &'a [u8], size: ResolvedSize) -> Self {
        Self { encoding, size }
    }
}

/// Determines the size of type encodings for a given [`Architecture`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeResolver {
    /// Supplies the width of `long` and pointers
    architecture: Architecture,
}

impl SizeResolver {
    pub fn new(architecture: Architecture) -> Self {
        Self { architecture }
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    /// Size of a single token
    ///
    /// [`EncodingToken::Array`] is indeterminate here because the element type is not part of the token.
    pub fn resolve_token(&self, token: EncodingToken) -> ResolvedSize {
        match token {
            EncodingToken::Char | EncodingToken::UnsignedChar => ResolvedSize::Bytes(CHAR_SIZE),
            EncodingToken::Short | EncodingToken::UnsignedShort => ResolvedSize::Bytes(SHORT_SIZE),
            EncodingToken::Int | EncodingToken::UnsignedInt => ResolvedSize::Bytes(INT_SIZE),
            EncodingToken::Long | EncodingToken::UnsignedLong => {
                ResolvedSize::Bytes(self.architecture.long_size())
            }
            EncodingToken::LongLong | EncodingToken::UnsignedLongLong => {
                ResolvedSize::Bytes(LONG_LONG_SIZE)
            }
            EncodingToken::Float => ResolvedSize::Bytes(FLOAT_SIZE),
            EncodingToken::Double => ResolvedSize::Bytes(DOUBLE_SIZE),
            // Pointers are archived as addresses, so the pointee is irrelevant
            EncodingToken::Pointer => ResolvedSize::Bytes(self.architecture.pointer_size()),
            EncodingToken::Array | EncodingToken::Unsupported(_) => ResolvedSize::Indeterminate,
        }
    }

    /// Size of the type described by the start of `encoding`
    ///
    /// Only the prefix needed to size the leading type is read: for `[4[3i]]` that is `[4[3i`,
    /// so closing brackets and any trailing fields are ignored.
    pub fn resolve<T: AsRef<[u8]> + ?Sized>(&self, encoding: &T) -> ResolvedSize {
        let (lengths, element) = peel_arrays(encoding.as_ref());

        // Innermost array first: `[4[3i` is 4 * (3 * 4)
        lengths
            .iter()
            .rev()
            .fold(self.resolve_token(element), |size, length| size.times(*length))
    }

    /// Split a record encoding such as `i[4c]^d` into its fields and size each of them
    pub fn resolve_fields<'a>(
        &self,
        encoding: &'a [u8],
    ) -> Result<Vec<FieldSize<'a>>, EncodingError> {
        let mut cursor = EncodingCursor::new(encoding);
        let mut fields = vec![];
        while !cursor.is_at_end() {
            let field = cursor.next_field()?;
            fields.push(FieldSize::new(field, self.resolve(field)));
        }
        Ok(fields)
    }
}

/// Consume every array header at the start of `encoding`
///
/// Returns the declared lengths, outermost first, and the token of the innermost element.
fn peel_arrays(encoding: &[u8]) -> (Vec<usize>, EncodingToken) {
    let mut cursor = EncodingCursor::new(encoding);
    let mut lengths = vec![];
    loop {
        match cursor.next_token() {
            EncodingToken::Array => lengths.push(cursor.advance_past_integer()),
            element => return (lengths, element),
        }
    }
}

/// The token of the innermost array element, or the leading token if `encoding` is not an array
///
/// Useful to explain why an encoding is indeterminate: `[5{foo=ii}]` yields a struct token.
pub fn element_token<T: AsRef<[u8]> + ?Sized>(encoding: &T) -> EncodingToken {
    peel_arrays(encoding.as_ref()).1
}

/// Size of the type described by the start of `encoding` under `architecture`
pub fn resolve_size<T: AsRef<[u8]> + ?Sized>(
    encoding: &T,
    architecture: Architecture,
) -> ResolvedSize {
    SizeResolver::new(architecture).resolve(encoding)
}
