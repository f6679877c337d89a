use zip_ir::TokenKind;

/// Binding power of an operator, weakest first.
///
/// Binary operators are left-associative: the right operand is parsed at
/// the operator's own precedence, so an operator of equal strength ends
/// the operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/` `%`
    Product,
    /// unary `-` `!`
    Prefix,
    /// `f(...)`
    Call,
}

impl Precedence {
    /// Precedence of `kind` in infix position. Tokens that never continue
    /// an expression get `Lowest`.
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Modulo => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_weakest_first() {
        assert!(Precedence::Lowest < Precedence::Equals);
        assert!(Precedence::Equals < Precedence::LessGreater);
        assert!(Precedence::LessGreater < Precedence::Sum);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Product < Precedence::Prefix);
        assert!(Precedence::Prefix < Precedence::Call);
    }

    #[test]
    fn non_operators_are_lowest() {
        assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
        assert_eq!(Precedence::of(TokenKind::Bang), Precedence::Lowest);
        assert_eq!(Precedence::of(TokenKind::LBracket), Precedence::Lowest);
    }
}
