/*!
 Data structures used to classify type encodings and describe their sizes.
*/

use std::fmt::{Display, Formatter, Result};

use crate::error::encoding::EncodingError;

/// Legacy numeric stand-in for [`ResolvedSize::Indeterminate`], for callers that store sizes as a bare `usize`
pub const INDETERMINATE_SENTINEL: usize = usize::MAX;

/// Terminates a C string; an encoding ends here even if the slice continues
pub(crate) const TERMINATOR: u8 = 0x00;

/// Reasons a type encoding is not sized by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedKind {
    /// A `char *`, encoded as `*`
    CString,
    /// A `Class`, encoded as `#`
    Class,
    /// A `SEL`, encoded as `:`
    Selector,
    /// A `struct`, encoded as `{name=...}`
    Struct,
    /// A `union`, encoded as `(name=...)`
    Union,
    /// A bitfield, encoded as `b` followed by its width in bits
    Bitfield,
    /// An unknown type such as a function pointer, encoded as `?`
    Unknown,
    /// An object or block, encoded as `@`
    Object,
    /// The encoding ended before a type was found
    End,
    /// A byte that is not part of the encoding alphabet
    Unrecognized(u8),
}

impl Display for UnsupportedKind {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            UnsupportedKind::CString => write!(fmt, "C string"),
            UnsupportedKind::Class => write!(fmt, "class"),
            UnsupportedKind::Selector => write!(fmt, "selector"),
            UnsupportedKind::Struct => write!(fmt, "struct"),
            UnsupportedKind::Union => write!(fmt, "union"),
            UnsupportedKind::Bitfield => write!(fmt, "bitfield"),
            UnsupportedKind::Unknown => write!(fmt, "unknown type"),
            UnsupportedKind::Object => write!(fmt, "object"),
            UnsupportedKind::End => write!(fmt, "end of encoding"),
            UnsupportedKind::Unrecognized(byte) => {
                write!(fmt, "unrecognized byte {byte:#04x}")
            }
        }
    }
}

/// Represents the leading token of a type encoding
///
/// Every byte maps to exactly one variant; anything this crate cannot size is
/// [`EncodingToken::Unsupported`] rather than a fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingToken {
    /// An [`i8`], encoded as `c`
    Char,
    /// A [`u8`], encoded as `C`
    UnsignedChar,
    /// An [`i16`], encoded as `s`
    Short,
    /// A [`u16`], encoded as `S`
    UnsignedShort,
    /// An [`i32`], encoded as `i`
    Int,
    /// A [`u32`], encoded as `I`
    UnsignedInt,
    /// A C `long`, encoded as `l`; the width depends on the [`Architecture`](crate::util::platform::Architecture)
    Long,
    /// A C `unsigned long`, encoded as `L`
    UnsignedLong,
    /// An [`i64`], encoded as `q`
    LongLong,
    /// A [`u64`], encoded as `Q`
    UnsignedLongLong,
    /// An [`f32`], encoded as `f`
    Float,
    /// An [`f64`], encoded as `d`
    Double,
    /// A pointer to the type that follows, encoded as `^`
    Pointer,
    /// The start of a fixed-length array, encoded as `[` followed by the length and element type
    Array,
    /// Anything that cannot be sized
    Unsupported(UnsupportedKind),
}

impl EncodingToken {
    pub fn from_byte(byte: &u8) -> Self {
        match byte {
            b'c' => Self::Char,
            b'C' => Self::UnsignedChar,
            b's' => Self::Short,
            b'S' => Self::UnsignedShort,
            b'i' => Self::Int,
            b'I' => Self::UnsignedInt,
            b'l' => Self::Long,
            b'L' => Self::UnsignedLong,
            b'q' => Self::LongLong,
            b'Q' => Self::UnsignedLongLong,
            b'f' => Self::Float,
            b'd' => Self::Double,
            b'^' => Self::Pointer,
            b'[' => Self::Array,
            b'*' => Self::Unsupported(UnsupportedKind::CString),
            b'#' => Self::Unsupported(UnsupportedKind::Class),
            b':' => Self::Unsupported(UnsupportedKind::Selector),
            b'{' => Self::Unsupported(UnsupportedKind::Struct),
            b'(' => Self::Unsupported(UnsupportedKind::Union),
            b'b' => Self::Unsupported(UnsupportedKind::Bitfield),
            b'?' => Self::Unsupported(UnsupportedKind::Unknown),
            b'@' => Self::Unsupported(UnsupportedKind::Object),
            &TERMINATOR => Self::Unsupported(UnsupportedKind::End),
            other => Self::Unsupported(UnsupportedKind::Unrecognized(*other)),
        }
    }

    /// Classify the first token of an encoding
    pub fn classify(encoding: &[u8]) -> Self {
        encoding
            .first()
            .map_or(Self::Unsupported(UnsupportedKind::End), Self::from_byte)
    }
}

/// The number of bytes a value described by a type encoding occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedSize {
    /// A known size, in bytes
    Bytes(usize),
    /// The size cannot be determined from the encoding
    Indeterminate,
}

impl ResolvedSize {
    /// The size in bytes, if known
    pub fn bytes(&self) -> Option<usize> {
        match self {
            ResolvedSize::Bytes(bytes) => Some(*bytes),
            ResolvedSize::Indeterminate => None,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, ResolvedSize::Indeterminate)
    }

    /// The size of `length` consecutive values of this size
    ///
    /// An indeterminate element stays indeterminate, even for a zero length. A product that does
    /// not fit below [`INDETERMINATE_SENTINEL`] is indeterminate.
    pub fn times(self, length: usize) -> Self {
        match self {
            ResolvedSize::Bytes(bytes) => ResolvedSize::checked(bytes.checked_mul(length)),
            ResolvedSize::Indeterminate => ResolvedSize::Indeterminate,
        }
    }

    /// Sum the sizes of consecutive fields; indeterminate if any field is
    pub fn total<I: IntoIterator<Item = ResolvedSize>>(sizes: I) -> Self {
        ResolvedSize::checked(
            sizes
                .into_iter()
                .try_fold(0usize, |total, size| total.checked_add(size.bytes()?)),
        )
    }

    /// Keep a computed size only if it cannot be mistaken for [`INDETERMINATE_SENTINEL`]
    fn checked(bytes: Option<usize>) -> Self {
        bytes
            .filter(|bytes| *bytes != INDETERMINATE_SENTINEL)
            .map_or(ResolvedSize::Indeterminate, ResolvedSize::Bytes)
    }

    /// The size in bytes, falling back to a size supplied by the caller when indeterminate
    pub fn or_explicit(self, explicit: usize) -> usize {
        self.bytes().unwrap_or(explicit)
    }

    /// Convert to the legacy representation, where [`INDETERMINATE_SENTINEL`] marks an indeterminate size
    pub fn into_raw(self) -> usize {
        self.bytes().unwrap_or(INDETERMINATE_SENTINEL)
    }

    /// Convert from the legacy representation, where [`INDETERMINATE_SENTINEL`] marks an indeterminate size
    pub fn from_raw(raw: usize) -> Self {
        match raw {
            INDETERMINATE_SENTINEL => ResolvedSize::Indeterminate,
            bytes => ResolvedSize::Bytes(bytes),
        }
    }
}

impl TryFrom<ResolvedSize> for usize {
    type Error = EncodingError;

    fn try_from(size: ResolvedSize) -> std::result::Result<Self, Self::Error> {
        size.bytes().ok_or(EncodingError::IndeterminateSize)
    }
}

impl Display for ResolvedSize {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            ResolvedSize::Bytes(bytes) => write!(fmt, "{bytes}"),
            ResolvedSize::Indeterminate => write!(fmt, "indeterminate"),
        }
    }
}
