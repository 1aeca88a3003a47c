use super::*;

#[test]
fn every_punctuation_character_has_a_kind() {
    for c in PUNCTUATION.chars() {
        let kind = TokenKind::from_punct(c);
        assert!(kind.is_some(), "no kind for {c:?}");
        assert_eq!(kind.map(TokenKind::display_name), Some(c.to_string().as_str()));
    }
}

#[test]
fn non_punctuation_has_no_kind() {
    assert_eq!(TokenKind::from_punct('+'), None);
    assert_eq!(TokenKind::from_punct('-'), None);
    assert_eq!(TokenKind::from_punct('a'), None);
}

#[test]
fn keyword_classification() {
    assert!(TokenKind::Const.is_keyword());
    assert!(TokenKind::Version.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
    assert!(!TokenKind::Semicolon.is_keyword());
}

#[test]
fn integer_classification() {
    assert!(TokenKind::DecInt.is_integer());
    assert!(TokenKind::HexInt.is_integer());
    assert!(!TokenKind::Ident.is_integer());
}

#[test]
fn terminal_tokens() {
    assert!(Token::eof(Position::new(1, 1)).is_terminal());
    assert!(Token::new(TokenKind::Error, "$", Position::new(1, 1)).is_terminal());
    assert!(!Token::new(TokenKind::Ident, "x", Position::new(1, 1)).is_terminal());
}

#[test]
fn token_display() {
    let pos = Position::new(1, 1);
    assert_eq!(Token::new(TokenKind::Ident, "FOO", pos).to_string(), "identifier `FOO`");
    assert_eq!(Token::new(TokenKind::Enum, "enum", pos).to_string(), "keyword `enum`");
    assert_eq!(Token::new(TokenKind::Semicolon, ";", pos).to_string(), "`;`");
    assert_eq!(Token::eof(pos).to_string(), "end of input");
    assert_eq!(
        Token::new(TokenKind::Error, "$", pos).to_string(),
        "invalid character \"$\""
    );
}
