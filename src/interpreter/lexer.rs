use logos::Logos;

use crate::{ast::Loc, error::LexError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. Whitespace and
/// comments are consumed but never emitted.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// String literal tokens. The quotes are stripped; there are no escape
    /// sequences, a string simply runs to the next `"` on the same line.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// `int`
    #[token("int")]
    IntKw,
    /// `str`
    #[token("str")]
    StrKw,
    /// `bool`
    #[token("bool")]
    BoolKw,
    /// `var`
    #[token("var")]
    VarKw,
    /// `static`
    #[token("static")]
    Static,
    /// `ary`
    #[token("ary")]
    Ary,
    /// `dic`
    #[token("dic")]
    Dic,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `goto`
    #[token("goto")]
    Goto,
    /// `return`
    #[token("return")]
    Return,
    /// `print`
    #[token("print")]
    Print,
    /// `#include`
    #[token("#include")]
    Include,
    /// Identifier tokens; variable, function or label names such as `x`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AmpAmp,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `.`
    #[token(".")]
    Dot,

    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*[^/])*\*/", skip_block_comment)]
    MultiLineComment,
    /// A block comment that reaches the end of input without its `*/`.
    /// Always rejected; the closed form above wins whenever it matches.
    #[regex(r"/\*([^*]|\*[^/])*\*?", reject_unterminated_comment)]
    UnterminatedComment,
    /// Newlines advance the line counter and are otherwise discarded.
    #[token("\n", skip_newline)]
    NewLine,
    /// Tabs, spaces and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset of the start of that
/// line, so that every token can be given a line and column for error
/// reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset at which the current line starts.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Parses a floating-point literal from the current token slice.
fn parse_real(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice. Literals that do
/// not fit in an `i64` produce a lexing failure.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice.
fn parse_bool(lex: &mut logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the surrounding quotes from a string literal slice.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Advances the line counter past a newline and records where the new line
/// begins.
fn skip_newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Turns an unterminated block comment into a lexing failure.
fn reject_unterminated_comment(_lex: &mut logos::Lexer<Token>) -> Result<(), ()> {
    Err(())
}

/// Discards a block comment while keeping the line counter accurate for any
/// newlines the comment spans.
fn skip_block_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let span = lex.span();
    let comment = lex.slice();
    let newlines = comment.chars().filter(|&c| c == '\n').count();
    if newlines > 0 {
        lex.extras.line += newlines;
        if let Some(pos) = comment.rfind('\n') {
            lex.extras.line_start = span.start + pos + 1;
        }
    }
    logos::Skip
}

/// Tokenizes an entire source text.
///
/// Produces the ordered sequence of tokens paired with their source
/// locations, or the first lexical failure encountered. The token stream is
/// finite and can be re-parsed from the start as often as needed.
///
/// # Errors
/// Returns a [`LexError`] for unterminated strings or block comments,
/// unrepresentable numeric literals, and characters outside the language.
///
/// # Example
/// ```
/// use lumen::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("int x 5;").unwrap();
/// let kinds: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds.len(), 4);
/// assert_eq!(kinds[0], &Token::IntKw);
/// assert_eq!(kinds[2], &Token::Integer(5));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Loc)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(item) = lexer.next() {
        let span = lexer.span();
        let loc = Loc::new(lexer.extras.line,
                           span.start - lexer.extras.line_start + 1);
        match item {
            Ok(token) => tokens.push((token, loc)),
            Err(()) => return Err(classify_failure(source, span.start, loc)),
        }
    }

    Ok(tokens)
}

/// Decides which lexical error a failed match represents, based on what the
/// source looks like at the failure offset.
fn classify_failure(source: &str, offset: usize, loc: Loc) -> LexError {
    let rest = &source[offset..];
    if rest.starts_with('"') {
        LexError::UnterminatedString { loc }
    } else if rest.starts_with("/*") {
        LexError::UnterminatedComment { loc }
    } else if rest.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        LexError::InvalidNumber { loc }
    } else {
        LexError::InvalidCharacter { found: rest.chars().next().unwrap_or('\0'),
                                     loc }
    }
}
