//! Token actions: single-token grammar snippets that record special tokens.
//!
//! `temporaryToken` and the `STRATEGY_*` constants are members of the generated parser.

pub(super) const RPAREN: &str = r#"try{temporaryToken=<RPAREN>  {this.addSpecialToken(temporaryToken);}}catch(ParseException e){handleRParensNearButNotCurrent(e);}"#;

pub(super) const COLON: &str = r#"temporaryToken=<COLON>  {this.addSpecialToken(temporaryToken);}"#;

pub(super) const AT: &str = r#"temporaryToken=<AT>  {this.addSpecialToken(temporaryToken, STRATEGY_BEFORE_NEXT);}"#;

pub(super) const COMMA: &str = r#"temporaryToken=<COMMA>  {this.addSpecialToken(temporaryToken);}"#;

pub(super) const RAISE: &str = r#"temporaryToken=<RAISE> {this.addSpecialToken(temporaryToken, STRATEGY_BEFORE_NEXT);}"#;

pub(super) const DEF_START: &str = r#"<DEF> {this.markLastAsSuiteStart();} Name()"#;

pub(super) const LPAREN1: &str = r#"temporaryToken=<LPAREN>  {this.addSpecialToken(temporaryToken, STRATEGY_BEFORE_NEXT);}"#;

pub(super) const LPAREN2: &str = r#"temporaryToken=<LPAREN>{this.addSpecialToken(temporaryToken);}"#;

pub(super) const LPAREN3: &str = r#"temporaryToken=<LPAREN>  {this.addSpecialToken(temporaryToken, STRATEGY_ADD_AFTER_PREV);}"#;

pub(super) const LAMBDA_COLON: &str = "temporaryToken=<COLON> {
if(hasArgs)
    this.addSpecialToken(temporaryToken);
else\x20
    this.addSpecialToken(temporaryToken,STRATEGY_BEFORE_NEXT);}
";

pub(super) const START_CLASS: &str = r#"<CLASS> {this.markLastAsSuiteStart();} Name()"#;

pub(super) const EQUAL: &str = r#"temporaryToken=<EQUAL>{this.addSpecialToken(temporaryToken);}"#;

pub(super) const EQUAL2: &str = r#"temporaryToken=<EQUAL> {this.addSpecialToken(temporaryToken, STRATEGY_BEFORE_NEXT);}"#;

pub(super) const IN: &str = r#"temporaryToken=<IN> {this.addSpecialToken(temporaryToken);}"#;

pub(super) const IF_COMP: &str = r#"temporaryToken=<IF>  {this.addSpecialToken(temporaryToken);}"#;

pub(super) const FOR_COMP: &str = r#"temporaryToken=<FOR> {this.addSpecialToken(temporaryToken);}"#;

pub(super) const IMPORT: &str = r#"temporaryToken=<IMPORT> {this.addSpecialToken(temporaryToken);}"#;

pub(super) const AS: &str = r#"temporaryToken=<AS> {this.addSpecialToken(temporaryToken);}"#;

pub(super) const AS2: &str = r#"temporaryToken=<AS> {this.addSpecialToken(temporaryToken, STRATEGY_BEFORE_NEXT);}"#;

pub(super) const CALL_ASSERT: &str = r#"temporaryToken=<ASSERT> assert_stmt() {addToPeek(temporaryToken, false); }
"#;
