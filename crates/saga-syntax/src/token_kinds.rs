//! Single list of token kind names shared by `TokenKind` and `SyntaxKind`.
//!
//! The order must match the declaration order of [`crate::lexer::TokenKind`]
//! so that the `u16` discriminants line up with the raw rowan kinds.

macro_rules! for_each_token_kind {
    ($callback:ident) => {
        $callback! {
            Whitespace,
            Newline,
            Indent,
            Dedent,
            LineComment,
            Colon,
            Comma,
            Dot,
            LBracket,
            RBracket,
            LBrace,
            RBrace,
            Assign,
            EqEq,
            Neq,
            Lt,
            LtEq,
            Gt,
            GtEq,
            Plus,
            Minus,
            Star,
            Slash,
            Percent,
            Power,
            KwIf,
            KwElse,
            KwFor,
            KwForeach,
            KwAs,
            KwIn,
            KwWait,
            KwNext,
            KwTrue,
            KwFalse,
            IntLiteral,
            SingleQuoted,
            DoubleQuoted,
            Filepath,
            Ident,
            Error,
            Eof,
        }
    };
}

pub(crate) use for_each_token_kind;
