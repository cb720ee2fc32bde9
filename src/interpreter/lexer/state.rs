/// A state of the lexer's finite automaton.
///
/// The machine starts in [`State::Initial`], walks one state per consumed
/// character, and returns to `Initial` whenever a token is emitted. Keyword
/// states encode the matched prefix in their name (`KwFu` = saw `fu`); on a
/// divergence they fall through to [`State::Ident`], so keywords and
/// identifiers share one scanning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Start state; classifies the next character.
    Initial,
    /// Input exhausted.
    End,

    /// Inside an identifier.
    Ident,
    /// Inside an integer literal.
    Num,
    /// Saw a lone `_`; becomes an identifier if more name characters
    /// follow, otherwise the underline separator.
    Underscore,
    /// Recovery state for a lexeme that started with a digit but continued
    /// with identifier characters (`1abc`). Consumes the remainder and
    /// records an error instead of a token.
    DigitIdent,

    // Single-character symbols. These are entered and resolved on the same
    // character; they exist so every emitted token has a named accept state.
    Comma,
    Dot,
    Colon,
    Semicolon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Plus,
    Asterisk,
    Slash,

    // Symbols that may extend by one more character. The short state waits
    // for the follow-up; the long state accepts on the next character.
    /// `=`, may extend to `==`.
    Assign,
    /// `==`
    Eq,
    /// `-`, may extend to `->`.
    Minus,
    /// `->`
    Arrow,
    /// `!`, may extend to `!=`.
    Bang,
    /// `!=`
    NotEq,
    /// `<`, may extend to `<=` or `<<`.
    Lt,
    /// `<=`
    Le,
    /// `<<`
    ShiftLeft,
    /// `>`, may extend to `>=` or `>>`.
    Gt,
    /// `>=`
    Ge,
    /// `>>`
    ShiftRight,
    /// `&`, may extend to `&&`.
    BitAnd,
    /// `&&`
    And,
    /// `|`, may extend to `||`.
    BitOr,
    /// `||`
    Or,

    // Keyword chains. `func` and `false` share their first state.
    /// `f` (func / false)
    KwF,
    /// `fu`
    KwFu,
    /// `fun`
    KwFun,
    /// `func`
    KwFunc,
    /// `fa`
    KwFa,
    /// `fal`
    KwFal,
    /// `fals`
    KwFals,
    /// `false`
    KwFalse,

    /// `m`
    KwM,
    /// `me`
    KwMe,
    /// `met`
    KwMet,
    /// `meth`
    KwMeth,

    /// `v`
    KwV,
    /// `va`
    KwVa,
    /// `var`
    KwVar,

    /// `b`
    KwB,
    /// `bo`
    KwBo,
    /// `boo`
    KwBoo,
    /// `bool`
    KwBool,

    /// `t`
    KwT,
    /// `tr`
    KwTr,
    /// `tru`
    KwTru,
    /// `true`
    KwTrue,

    /// `i`
    KwI,
    /// `if`
    KwIf,

    /// `e`
    KwE,
    /// `el`
    KwEl,
    /// `els`
    KwEls,
    /// `else`
    KwElse,

    /// `r`
    KwR,
    /// `re`
    KwRe,
    /// `ret`
    KwRet,
    /// `retu`
    KwRetu,
    /// `retur`
    KwRetur,
    /// `return`
    KwReturn,
}
