use std::fmt;

/// Table identifier for `MethodDef` rows (high byte of a method token).
pub const TABLE_METHOD_DEF: u8 = 0x06;

/// A metadata token referencing an entry in the assembly's method table.
///
/// Tokens are 32-bit values where the high byte (bits 24-31) indicates the
/// table and the low 24 bits the row index within that table. This facade
/// only materializes the method table, which is the one table the
/// reachability scanner resolves through; every other member kind is carried
/// inline on its declaring type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(pub u32);

impl Token {
    /// Creates a new token from a raw 32-bit value
    #[must_use]
    pub fn new(value: u32) -> Self {
        Token(value)
    }

    /// Creates a method-table token for the given 1-based row index
    #[must_use]
    pub fn method(row: u32) -> Self {
        Token((u32::from(TABLE_METHOD_DEF) << 24) | (row & 0x00FF_FFFF))
    }

    /// Returns the raw token value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Extracts the table type from the token (high byte)
    #[must_use]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Extracts the row index from the token (low 24 bits)
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// Returns true if this is a null token (value 0)
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_token_layout() {
        let token = Token::method(1);
        assert_eq!(token.value(), 0x06000001);
        assert_eq!(token.table(), TABLE_METHOD_DEF);
        assert_eq!(token.row(), 1);
        assert!(!token.is_null());
    }

    #[test]
    fn test_null_token() {
        assert!(Token::new(0).is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::method(0x2a).to_string(), "0x0600002a");
    }
}
