/*!
 Contains data structures used to describe the data model of the platform that produced an archive.
*/

use std::fmt::Display;

/// Width of a 32-bit machine word, in bytes
const WORD_32: usize = 4;
/// Width of a 64-bit machine word, in bytes
const WORD_64: usize = 8;

/// Represents the C data model a type encoding was produced under
///
/// Only `long` and pointers change width between the supported data models; every other
/// scalar in a type encoding has the same size everywhere.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Architecture {
    /// 32-bit `long` and pointers, i.e. `armv7` or `i386`
    ILP32,
    /// 64-bit `long` and pointers, i.e. `arm64` or `x86_64` on Apple platforms and Linux
    LP64,
    /// 32-bit `long` with 64-bit pointers, i.e. 64-bit Windows
    LLP64,
}

impl Architecture {
    /// The size of a C `long`, encoded as `l` or `L`
    pub fn long_size(&self) -> usize {
        match self {
            Architecture::ILP32 | Architecture::LLP64 => WORD_32,
            Architecture::LP64 => WORD_64,
        }
    }

    /// The size of a pointer, encoded as `^`
    pub fn pointer_size(&self) -> usize {
        match self {
            Architecture::ILP32 => WORD_32,
            Architecture::LP64 | Architecture::LLP64 => WORD_64,
        }
    }

    /// Given user's input, return a variant if the input matches one
    pub fn from_cli(architecture: &str) -> Option<Self> {
        match architecture.to_lowercase().as_str() {
            "ilp32" | "32" => Some(Self::ILP32),
            "lp64" | "64" => Some(Self::LP64),
            "llp64" => Some(Self::LLP64),
            _ => None,
        }
    }
}

impl Default for Architecture {
    /// The default Architecture is [`Architecture::LP64`].
    fn default() -> Self {
        Self::LP64
    }
}

impl Display for Architecture {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Architecture::ILP32 => write!(fmt, "ilp32"),
            Architecture::LP64 => write!(fmt, "lp64"),
            Architecture::LLP64 => write!(fmt, "llp64"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::util::platform::Architecture;

    #[test]
    fn can_parse_lp64_any_case() {
        assert!(matches!(Architecture::from_cli("lp64"), Some(Architecture::LP64)));
        assert!(matches!(Architecture::from_cli("LP64"), Some(Architecture::LP64)));
        assert!(matches!(Architecture::from_cli("Lp64"), Some(Architecture::LP64)));
        assert!(matches!(Architecture::from_cli("64"), Some(Architecture::LP64)));
    }

    #[test]
    fn can_parse_ilp32_any_case() {
        assert!(matches!(Architecture::from_cli("ilp32"), Some(Architecture::ILP32)));
        assert!(matches!(Architecture::from_cli("ILP32"), Some(Architecture::ILP32)));
        assert!(matches!(Architecture::from_cli("32"), Some(Architecture::ILP32)));
    }

    #[test]
    fn can_parse_llp64_any_case() {
        assert!(matches!(Architecture::from_cli("llp64"), Some(Architecture::LLP64)));
        assert!(matches!(Architecture::from_cli("LLP64"), Some(Architecture::LLP64)));
    }

    #[test]
    fn cant_parse_invalid() {
        assert!(Architecture::from_cli("x86").is_none());
        assert!(Architecture::from_cli("16").is_none());
        assert!(Architecture::from_cli("").is_none());
    }

    #[test]
    fn widths_follow_data_model() {
        assert_eq!(Architecture::ILP32.long_size(), 4);
        assert_eq!(Architecture::ILP32.pointer_size(), 4);
        assert_eq!(Architecture::LP64.long_size(), 8);
        assert_eq!(Architecture::LP64.pointer_size(), 8);
        assert_eq!(Architecture::LLP64.long_size(), 4);
        assert_eq!(Architecture::LLP64.pointer_size(), 8);
    }

    #[test]
    fn default_is_lp64() {
        assert_eq!(Architecture::default(), Architecture::LP64);
        assert_eq!(Architecture::default().to_string(), "lp64");
    }
}
