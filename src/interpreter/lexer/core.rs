use crate::{
    error::LexError,
    interpreter::lexer::{
        state::State,
        token::{Token, TokenKind, lookup},
    },
};

/// The lexical analyzer: a deterministic finite automaton over decoded
/// characters.
///
/// The machine keeps a base cursor marking the start of the lexeme in
/// progress and a current [`State`]. Each character either advances the
/// state or closes the current lexeme, emits its token, and re-classifies
/// the character from [`State::Initial`]. Scanning never aborts: problems
/// are recorded as [`LexError`]s and the machine keeps going so that one
/// pass reports every error in the input.
///
/// # Example
/// ```
/// use woclang::interpreter::lexer::{core::Lexer, token::TokenKind};
///
/// let lexer = Lexer::new("var age = 5;");
/// let kinds: Vec<TokenKind> = lexer.tokens().iter().map(|t| t.kind()).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Var,
///                 TokenKind::Ident,
///                 TokenKind::Assign,
///                 TokenKind::Num,
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// assert!(lexer.errors().is_empty());
/// ```
pub struct Lexer {
    /// Decoded source characters, with a trailing newline sentinel so the
    /// final lexeme always gets flushed.
    code:   Vec<char>,
    /// Start of the lexeme currently being scanned.
    base:   usize,
    /// Current automaton state.
    state:  State,
    /// Tokens emitted so far, in source order.
    tokens: Vec<Token>,
    /// Errors recorded so far, in source order.
    errors: Vec<LexError>,
}

impl Lexer {
    /// Scans the given source text completely.
    ///
    /// The entire token sequence and error list are available as soon as
    /// the constructor returns.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut code: Vec<char> = source.chars().collect();
        code.push('\n');

        let mut lexer = Self { code,
                               base: 0,
                               state: State::Initial,
                               tokens: Vec::new(),
                               errors: Vec::new() };
        lexer.tokenize();
        lexer
    }

    /// The emitted tokens, ending with the end-of-input token.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The lexical errors recorded during the scan.
    ///
    /// Consumers must check this list before trusting [`Self::tokens`];
    /// lexemes that produced an error are absent from the token sequence.
    #[must_use]
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consumes the lexer, handing its token sequence to the caller.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Runs the automaton over the whole input.
    ///
    /// [`Self::step`] reports whether the current character was consumed;
    /// when a lexeme closes, the closing character is re-examined from
    /// `Initial`, so a single character is visited at most twice.
    fn tokenize(&mut self) {
        let mut index = 0;
        while index < self.code.len() {
            let ch = self.code[index];
            if self.step(index, ch) {
                index += 1;
            }
        }

        self.state = State::End;
        self.tokens.push(Token::new(TokenKind::Eof, ""));
    }

    /// Advances the automaton by one character. Returns whether the
    /// character was consumed.
    fn step(&mut self, index: usize, ch: char) -> bool {
        match self.state {
            State::Initial => {
                self.classify(index, ch);
                true
            },

            State::End => true,

            // Accept states for single-character symbols resolve in
            // `classify` on the same character; reaching one here means the
            // token was already emitted and the machine reset.
            State::Comma
            | State::Dot
            | State::Colon
            | State::Semicolon
            | State::LParen
            | State::RParen
            | State::LBracket
            | State::RBracket
            | State::LBrace
            | State::RBrace
            | State::Plus
            | State::Asterisk
            | State::Slash => {
                self.classify(index, ch);
                true
            },

            // ======================= words =======================
            State::Ident => {
                if is_name_char(ch) {
                    true
                } else {
                    self.emit_word(index);
                    false
                }
            },

            State::Underscore => {
                if is_name_char(ch) {
                    self.state = State::Ident;
                    true
                } else {
                    self.emit_word(index);
                    false
                }
            },

            State::Num => {
                if ch.is_ascii_digit() {
                    true
                } else if is_name_char(ch) {
                    self.state = State::DigitIdent;
                    true
                } else {
                    self.emit_word(index);
                    false
                }
            },

            State::DigitIdent => {
                if is_name_char(ch) {
                    true
                } else {
                    let literal: String = self.code[self.base..index].iter().collect();
                    self.errors.push(LexError::DigitLedIdentifier { literal,
                                                                    start: self.base,
                                                                    end: index });
                    self.base = index;
                    self.state = State::Initial;
                    false
                }
            },

            // ==================== two-character symbols ====================
            State::Assign => self.operator_step(index, ch, &[('=', State::Eq)]),
            State::Minus => self.operator_step(index, ch, &[('>', State::Arrow)]),
            State::Bang => self.operator_step(index, ch, &[('=', State::NotEq)]),
            State::Lt => {
                self.operator_step(index, ch, &[('=', State::Le), ('<', State::ShiftLeft)])
            },
            State::Gt => {
                self.operator_step(index, ch, &[('=', State::Ge), ('>', State::ShiftRight)])
            },
            State::BitAnd => self.operator_step(index, ch, &[('&', State::And)]),
            State::BitOr => self.operator_step(index, ch, &[('|', State::Or)]),

            State::Eq
            | State::Arrow
            | State::NotEq
            | State::Le
            | State::ShiftLeft
            | State::Ge
            | State::ShiftRight
            | State::And
            | State::Or => {
                self.emit_symbol(index);
                false
            },

            // ======================= keywords =======================
            State::KwF => self.keyword_step(index, ch, &[('u', State::KwFu), ('a', State::KwFa)]),
            State::KwFu => self.keyword_step(index, ch, &[('n', State::KwFun)]),
            State::KwFun => self.keyword_step(index, ch, &[('c', State::KwFunc)]),
            State::KwFa => self.keyword_step(index, ch, &[('l', State::KwFal)]),
            State::KwFal => self.keyword_step(index, ch, &[('s', State::KwFals)]),
            State::KwFals => self.keyword_step(index, ch, &[('e', State::KwFalse)]),

            State::KwM => self.keyword_step(index, ch, &[('e', State::KwMe)]),
            State::KwMe => self.keyword_step(index, ch, &[('t', State::KwMet)]),
            State::KwMet => self.keyword_step(index, ch, &[('h', State::KwMeth)]),

            State::KwV => self.keyword_step(index, ch, &[('a', State::KwVa)]),
            State::KwVa => self.keyword_step(index, ch, &[('r', State::KwVar)]),

            State::KwB => self.keyword_step(index, ch, &[('o', State::KwBo)]),
            State::KwBo => self.keyword_step(index, ch, &[('o', State::KwBoo)]),
            State::KwBoo => self.keyword_step(index, ch, &[('l', State::KwBool)]),

            State::KwT => self.keyword_step(index, ch, &[('r', State::KwTr)]),
            State::KwTr => self.keyword_step(index, ch, &[('u', State::KwTru)]),
            State::KwTru => self.keyword_step(index, ch, &[('e', State::KwTrue)]),

            State::KwI => self.keyword_step(index, ch, &[('f', State::KwIf)]),

            State::KwE => self.keyword_step(index, ch, &[('l', State::KwEl)]),
            State::KwEl => self.keyword_step(index, ch, &[('s', State::KwEls)]),
            State::KwEls => self.keyword_step(index, ch, &[('e', State::KwElse)]),

            State::KwR => self.keyword_step(index, ch, &[('e', State::KwRe)]),
            State::KwRe => self.keyword_step(index, ch, &[('t', State::KwRet)]),
            State::KwRet => self.keyword_step(index, ch, &[('u', State::KwRetu)]),
            State::KwRetu => self.keyword_step(index, ch, &[('r', State::KwRetur)]),
            State::KwRetur => self.keyword_step(index, ch, &[('n', State::KwReturn)]),

            // Complete keywords: one more name character demotes them back
            // to a plain identifier (`funcs`, `iffy`).
            State::KwFunc
            | State::KwFalse
            | State::KwMeth
            | State::KwVar
            | State::KwBool
            | State::KwTrue
            | State::KwIf
            | State::KwElse
            | State::KwReturn => self.keyword_step(index, ch, &[]),
        }
    }

    /// Classifies a character from the start state and enters the matching
    /// lexeme family.
    fn classify(&mut self, index: usize, ch: char) {
        if is_blank(ch) {
            self.base = index + 1;
            return;
        }

        if ch.is_ascii_digit() {
            self.state = State::Num;
            return;
        }

        if ch == '_' {
            self.state = State::Underscore;
            return;
        }

        if ch.is_ascii_alphabetic() {
            self.state = letter_state(ch);
            return;
        }

        match ch {
            ',' => self.emit_single(index, State::Comma, TokenKind::Comma),
            '.' => self.emit_single(index, State::Dot, TokenKind::Dot),
            ':' => self.emit_single(index, State::Colon, TokenKind::Colon),
            ';' => self.emit_single(index, State::Semicolon, TokenKind::Semicolon),
            '(' => self.emit_single(index, State::LParen, TokenKind::LParen),
            ')' => self.emit_single(index, State::RParen, TokenKind::RParen),
            '[' => self.emit_single(index, State::LBracket, TokenKind::LBracket),
            ']' => self.emit_single(index, State::RBracket, TokenKind::RBracket),
            '{' => self.emit_single(index, State::LBrace, TokenKind::LBrace),
            '}' => self.emit_single(index, State::RBrace, TokenKind::RBrace),
            '+' => self.emit_single(index, State::Plus, TokenKind::Plus),
            '*' => self.emit_single(index, State::Asterisk, TokenKind::Asterisk),
            '/' => self.emit_single(index, State::Slash, TokenKind::Slash),

            '=' => self.state = State::Assign,
            '-' => self.state = State::Minus,
            '!' => self.state = State::Bang,
            '<' => self.state = State::Lt,
            '>' => self.state = State::Gt,
            '&' => self.state = State::BitAnd,
            '|' => self.state = State::BitOr,

            _ => {
                self.errors.push(LexError::IllegalCharacter { character: ch,
                                                              position:  index, });
                self.base = index + 1;
            },
        }
    }

    /// Continues a keyword chain: a matching character advances along the
    /// chain, any other name character demotes to [`State::Ident`], and
    /// anything else closes the word.
    fn keyword_step(&mut self, index: usize, ch: char, nexts: &[(char, State)]) -> bool {
        for &(expected, next) in nexts {
            if ch == expected {
                self.state = next;
                return true;
            }
        }

        if is_name_char(ch) {
            self.state = State::Ident;
            true
        } else {
            self.emit_word(index);
            false
        }
    }

    /// Continues a symbol that may extend by one more character; any other
    /// character closes the one-character operator instead.
    fn operator_step(&mut self, index: usize, ch: char, nexts: &[(char, State)]) -> bool {
        for &(expected, next) in nexts {
            if ch == expected {
                self.state = next;
                return true;
            }
        }

        self.emit_symbol(index);
        false
    }

    /// Emits a one-character token consumed at `index`.
    fn emit_single(&mut self, index: usize, accept: State, kind: TokenKind) {
        self.state = accept;
        let literal: String = self.code[index].to_string();
        self.tokens.push(Token::new(kind, &literal));
        self.base = index + 1;
        self.state = State::Initial;
    }

    /// Closes a word-shaped lexeme ending just before `end`.
    ///
    /// The lookup table is the authority on keywords: a hit emits the
    /// keyword kind, a miss emits an identifier.
    fn emit_word(&mut self, end: usize) {
        let literal: String = self.code[self.base..end].iter().collect();
        let kind = match self.state {
            State::Num => TokenKind::Num,
            _ => lookup(&literal).unwrap_or(TokenKind::Ident),
        };
        self.tokens.push(Token::new(kind, &literal));
        self.base = end;
        self.state = State::Initial;
    }

    /// Closes a symbol lexeme ending just before `end`, validating it
    /// against the lookup table. A miss records an undefined-symbol error
    /// and emits nothing.
    fn emit_symbol(&mut self, end: usize) {
        let literal: String = self.code[self.base..end].iter().collect();
        match lookup(&literal) {
            Some(kind) => self.tokens.push(Token::new(kind, &literal)),
            None => self.errors.push(LexError::UndefinedSymbol { literal,
                                                                 start: self.base, }),
        }
        self.base = end;
        self.state = State::Initial;
    }
}

/// The state entered on the first letter of a word: the keyword chain
/// starting with that letter, or the generic identifier state when no
/// keyword does.
const fn letter_state(ch: char) -> State {
    match ch {
        'f' => State::KwF,
        'm' => State::KwM,
        'v' => State::KwV,
        'b' => State::KwB,
        't' => State::KwT,
        'i' => State::KwI,
        'e' => State::KwE,
        'r' => State::KwR,
        _ => State::Ident,
    }
}

/// Characters that may appear inside an identifier.
const fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Whitespace the lexer treats as a separator.
const fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}
