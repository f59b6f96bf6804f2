use abre::{CompileError, Config, Construction, Error, Pattern};

#[test]
fn invalid_symbol() {
    assert_eq!(
        Pattern::new("a.c").unwrap_err(),
        Error::InvalidSymbol { position: 2, symbol: 'c' }
    );
}

#[test]
fn empty_regex() {
    assert_eq!(Pattern::new("").unwrap_err(), Error::EmptyExpression);
    assert_eq!("".parse::<Pattern>().unwrap_err(), Error::EmptyExpression);
}

#[test]
fn implicit_concatenation() {
    assert_eq!(
        Pattern::new("(a|b)*ab").unwrap_err(),
        Error::InvalidConstruction("ab".to_string())
    );
}

#[test]
fn unbalanced() {
    assert_eq!(Pattern::new("(a.b").unwrap_err(), Error::UnbalancedParentheses);
}

#[test]
fn unvalidated_input_still_fails_cleanly() {
    let err = Pattern::builder()
        .configure(Config::new().validate(false))
        .build("a)")
        .unwrap_err();
    assert_eq!(err, Error::Compile(CompileError::UnbalancedParenthesis));

    let err = Pattern::builder()
        .configure(Config::new().validate(false))
        .build("a|")
        .unwrap_err();
    assert_eq!(err, Error::Compile(CompileError::MissingOperand('|')));
}

#[test]
fn size_limit() {
    for construction in [Construction::Thompson, Construction::Subset, Construction::Direct] {
        let err = Pattern::builder()
            .construction(construction)
            .size_limit(Some(2))
            .build("(a|b)*.a.b")
            .unwrap_err();
        assert_eq!(err, Error::Compile(CompileError::TooComplex), "{:?}", construction);
    }
    assert!(Pattern::builder().size_limit(Some(64)).build("(a|b)*.a.b").is_ok());
}

#[test]
fn error_messages() {
    let err = Pattern::new("a.c").unwrap_err();
    assert!(err.to_string().contains("position 2"));
    let err: Error = CompileError::TooComplex.into();
    assert_eq!(err.to_string(), "regex pattern is too complex");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn from_str() -> anyhow::Result<()> {
    let pattern: Pattern = "a.b*".parse()?;
    assert_eq!(pattern.as_str(), "a.b*");
    assert_eq!(pattern.to_string(), "a.b*");
    Ok(())
}
