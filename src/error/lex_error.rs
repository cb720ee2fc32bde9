#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that the lexer can record while scanning.
///
/// Lexical errors never abort the scan; they are collected so a single pass
/// can report every problem in the input. Positions are character offsets
/// into the scanned source.
pub enum LexError {
    /// A character that belongs to no lexeme class.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Character offset of the character in the source.
        position:  usize,
    },
    /// A lexeme that starts with a digit but continues like an identifier,
    /// such as `1abc`.
    DigitLedIdentifier {
        /// The full malformed lexeme.
        literal: String,
        /// Character offset where the lexeme starts.
        start:   usize,
        /// Character offset one past the end of the lexeme.
        end:     usize,
    },
    /// A symbol lexeme the machine assembled that the token table does not
    /// define.
    UndefinedSymbol {
        /// The unrecognized symbol text.
        literal: String,
        /// Character offset where the symbol starts.
        start:   usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, position } => {
                write!(f, "Illegal character '{character}' at position {position}.")
            },

            Self::DigitLedIdentifier { literal, start, end } => write!(f,
                                                                       "Identifier must not start with a digit: '{literal}' at positions {start}..{end}."),

            Self::UndefinedSymbol { literal, start } => {
                write!(f, "Undefined symbol '{literal}' at position {start}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
