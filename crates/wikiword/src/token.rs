use core::fmt;

use bstr::{BStr, ByteSlice};

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Kind {
    /// The scan stopped on malformed input. Nothing follows this token.
    Error,
    /// Plain text, passed through untouched.
    Text,
    /// A `[A][B]` or `[A](B)` construct.
    Link,
    /// A `![A][B]` or `![A](B)` construct.
    Image,
    /// A run of letters, digits and underscores with two or more uppercase
    /// letters.
    WikiWord,
    /// The scan consumed all of its input. Nothing follows this token.
    EndOfInput,
}

impl Kind {
    /// Returns `true` for the two kinds that end a token stream.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Kind::Error | Kind::EndOfInput)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Error => "error",
            Kind::Text => "text",
            Kind::Link => "link",
            Kind::Image => "image",
            Kind::WikiWord => "wiki word",
            Kind::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A typed, verbatim slice of the scanned input.
///
/// The value borrows from the input buffer: concatenating the values of every
/// token of a successful scan reproduces the input byte for byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    kind: Kind,
    value: &'src [u8],
}

impl<'src> Token<'src> {
    pub(crate) fn new(kind: Kind, value: &'src [u8]) -> Self {
        Self { kind, value }
    }

    /// The category of this token.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The bytes of input this token covers.
    #[must_use]
    pub fn value(&self) -> &'src [u8] {
        self.value
    }

    /// The value as a byte string, convenient for display and comparisons.
    #[must_use]
    pub fn as_bstr(&self) -> &'src BStr {
        self.value.as_bstr()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.as_bstr())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Token<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Token", 2)?;
        s.serialize_field("kind", &self.kind)?;
        s.serialize_field("value", &self.value.to_str_lossy())?;
        s.end()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_and_lossy_value() {
        let token = Token::new(Kind::WikiWord, b"FrontPage");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"WikiWord","value":"FrontPage"}"#);

        let token = Token::new(Kind::Text, b"a\xffb");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "{\"kind\":\"Text\",\"value\":\"a\u{FFFD}b\"}");
    }
}
