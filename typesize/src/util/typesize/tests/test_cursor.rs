#[cfg(test)]
mod cursor_tests {
    use crate::{
        error::encoding::EncodingError,
        util::typesize::{
            cursor::{advance_past_integer, EncodingCursor},
            models::{EncodingToken, UnsupportedKind},
        },
    };

    #[test]
    fn can_advance_past_integer() {
        let mut cursor = EncodingCursor::new(b"123c");

        assert_eq!(cursor.advance_past_integer(), 123);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.peek(), Some(b'c'));
    }

    #[test]
    fn can_advance_past_missing_integer() {
        let mut cursor = EncodingCursor::new(b"c");

        assert_eq!(cursor.advance_past_integer(), 0);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.peek(), Some(b'c'));
    }

    #[test]
    fn can_advance_past_integer_at_end() {
        let mut cursor = EncodingCursor::new(b"904");

        assert_eq!(cursor.advance_past_integer(), 904);
        assert!(cursor.is_at_end());
        assert!(cursor.remaining().is_empty());
    }

    #[test]
    fn can_advance_past_integer_free_function() {
        let (value, rest) = advance_past_integer(b"123c");
        assert_eq!(value, 123);
        assert_eq!(rest, b"c");

        let (value, rest) = advance_past_integer(b"c");
        assert_eq!(value, 0);
        assert_eq!(rest, b"c");
    }

    #[test]
    fn advance_past_integer_saturates() {
        let encoding = b"99999999999999999999999999999999999999c";
        let mut cursor = EncodingCursor::new(encoding);

        assert_eq!(cursor.advance_past_integer(), usize::MAX);
        assert_eq!(cursor.peek(), Some(b'c'));
        assert_eq!(cursor.position(), encoding.len() - 1);
    }

    #[test]
    fn stops_at_terminator() {
        let mut cursor = EncodingCursor::new(b"12\x003c");

        assert_eq!(cursor.advance_past_integer(), 12);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn can_get_next_token() {
        let mut cursor = EncodingCursor::new(b"[3i");

        assert_eq!(cursor.next_token(), EncodingToken::Array);
        assert_eq!(cursor.advance_past_integer(), 3);
        assert_eq!(cursor.next_token(), EncodingToken::Int);
        assert_eq!(
            cursor.next_token(),
            EncodingToken::Unsupported(UnsupportedKind::End)
        );
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn can_get_scalar_fields() {
        let mut cursor = EncodingCursor::new(b"icd");

        assert_eq!(cursor.next_field().unwrap(), b"i");
        assert_eq!(cursor.next_field().unwrap(), b"c");
        assert_eq!(cursor.next_field().unwrap(), b"d");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn can_get_nested_fields() {
        let mut cursor = EncodingCursor::new(b"[2{Pair=ii}](Value=iq)^^fb5@\"NSString\"@?q");

        assert_eq!(cursor.next_field().unwrap(), b"[2{Pair=ii}]");
        assert_eq!(cursor.next_field().unwrap(), b"(Value=iq)");
        assert_eq!(cursor.next_field().unwrap(), b"^^f");
        assert_eq!(cursor.next_field().unwrap(), b"b5");
        assert_eq!(cursor.next_field().unwrap(), b"@\"NSString\"");
        assert_eq!(cursor.next_field().unwrap(), b"@?");
        assert_eq!(cursor.next_field().unwrap(), b"q");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn can_get_field_with_quoted_brackets() {
        let mut cursor = EncodingCursor::new(b"{Box=\"items\"[2i]\"owner\"@\"Node\"}i");

        assert_eq!(
            cursor.next_field().unwrap(),
            b"{Box=\"items\"[2i]\"owner\"@\"Node\"}"
        );
        assert_eq!(cursor.next_field().unwrap(), b"i");
    }

    #[test]
    fn cant_get_unbalanced_field() {
        let mut cursor = EncodingCursor::new(b"i[4c");

        assert_eq!(cursor.next_field().unwrap(), b"i");
        assert_eq!(cursor.next_field(), Err(EncodingError::Unbalanced(1, b'[')));
    }

    #[test]
    fn cant_get_mismatched_field() {
        let mut cursor = EncodingCursor::new(b"[4c}");

        assert_eq!(
            cursor.next_field(),
            Err(EncodingError::UnexpectedCloser(3, b'}'))
        );
    }

    #[test]
    fn cant_get_stray_closer() {
        let mut cursor = EncodingCursor::new(b"]");

        assert_eq!(
            cursor.next_field(),
            Err(EncodingError::UnexpectedCloser(0, b']'))
        );
    }

    #[test]
    fn cant_get_pointer_without_pointee() {
        let mut cursor = EncodingCursor::new(b"i^");

        assert_eq!(cursor.next_field().unwrap(), b"i");
        assert_eq!(cursor.next_field(), Err(EncodingError::MissingPointee(1)));
    }

    #[test]
    fn cant_get_unterminated_class_name() {
        let mut cursor = EncodingCursor::new(b"@\"NSStri");

        assert_eq!(
            cursor.next_field(),
            Err(EncodingError::UnterminatedName(1))
        );
    }

    #[test]
    fn cant_get_field_at_end() {
        let mut cursor = EncodingCursor::new(b"");

        assert_eq!(cursor.next_field(), Err(EncodingError::EmptyField(0)));
    }
}
