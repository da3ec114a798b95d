//! Grammar productions shared by every grammar version.
//!
//! `FILE_INPUT`, `SUITE` and `SIMPLE_STMT` carry a `$NEWLINE` sentinel that is spliced at
//! construction time. `DICTMAKER`, `IF` and `ASSERT` bind `$COLON` / `$COMMA` from the
//! token actions.

pub(super) const FILE_INPUT: &str = "
//file_input: (NEWLINE | stmt)* ENDMARKER
modType file_input(): {}
{
    ($NEWLINE | stmt())* try{<EOF>}catch(ParseException e){handleNoEof(e);}
    { return (modType) jjtree.popNode(); }
}
";

pub(super) const NAME_DEFINITION: &str = "
Token Name() #Name:
{
    Token t;
}
{
    try{
        t = <NAME>\x20
    }catch(ParseException e){
        t = handleErrorInName(e);
    }

        { ((Name)jjtThis).id = t.image; return t; } {}

}
";

pub(super) const YIELD: &str = r#"
//yield_expr: 'yield' [testlist]
void yield_expr(): {Token spStr;}
{ spStr=<YIELD> [SmartTestList()] {this.addToPeek(spStr, false, Yield.class);}}
"#;

pub(super) const SUITE: &str = "
//suite: simple_stmt | NEWLINE INDENT stmt+ DEDENT
void suite(): {}
{\x20

try{
        simple_stmt()\x20
    | \x20
   \x20
        try{$NEWLINE<INDENT>}catch(ParseException e){handleErrorInIndent(e);}
       \x20
        (try{stmt()}catch(ParseException e){handleErrorInStmt(e);})+\x20
       \x20
        try{<DEDENT>}catch(ParseException e){handleErrorInDedent(e);}\x20
   \x20
    |
        <INDENT>
        {handleNoNewlineInSuiteFound();} //this only happens when we already had some error!
       \x20
        (try{stmt()}catch(ParseException e){handleErrorInStmt(e);})+\x20
       \x20
        try{<DEDENT>}catch(ParseException e){handleErrorInDedent(e);}\x20
   \x20
       \x20

}catch(ParseException e){
    handleNoSuiteMatch(e);
   \x20
}catch(EmptySuiteException e){
    /*Just ignore: This was thrown in the handleErrorInIndent*/
}


}
";

pub(super) const STMT: &str = "
//stmt: simple_stmt | compound_stmt
void stmt() #void: {}
{\x20
        simple_stmt()\x20
    |\x20
        try{
            compound_stmt()
        }catch(ParseException e){
            handleErrorInCompountStmt(e);}\x20
        }
";

pub(super) const SIMPLE_STMT: &str = "
//simple_stmt: small_stmt (';' small_stmt)* [';'] NEWLINE
void simple_stmt() #void: {}
{\x20
    small_stmt() (LOOKAHEAD(2) <SEMICOLON> small_stmt())*\x20
    [<SEMICOLON>]\x20
    $NEWLINE
}
";

pub(super) const IMPORT_STMT: &str = "
//import_stmt: 'import' dotted_name (',' dotted_name)* | 'from' dotted_name 'import' ('*' | NAME (',' NAME)*)
void import_stmt() #void: {Import imp; Object spStr;}
{ \x20
    try{
        spStr=<IMPORT> imp = Import() {imp.addSpecial(spStr,false);}\x20
        |
        temporaryToken=<FROM> {this.addSpecialToken(temporaryToken,STRATEGY_BEFORE_NEXT);} ImportFrom()
    }catch(ParseException e){handleErrorInImport(e);}
}
";

pub(super) const DICTMAKER: &str = "
//dictmaker: test ':' test (',' test ':' test)* [',']
void dictmaker() #void: {}
{
    test() $COLON\x20
   \x20
    try{
        test()
    }catch(ParseException e){
        handleNoValInDict(e);
    }\x20
   \x20
    (LOOKAHEAD(2) $COMMA test() $COLON test())*\x20
   \x20
    [$COMMA]}
";

pub(super) const IF: &str = "
//if_stmt: 'if' test ':' suite ('elif' test ':' suite)* ['else' ':' suite]
void if_stmt(): {}
{
    temporaryToken=<IF> {this.markLastAsSuiteStart();} {this.addSpecialTokenToLastOpened(temporaryToken);} test() $COLON suite()
         (begin_elif_stmt() test() $COLON suite())*\x20
             [ temporaryToken=<ELSE>  {this.addSpecialToken(temporaryToken);}\x20
               temporaryToken=<COLON>{this.addSpecialToken(temporaryToken);} suite()]
}
";

pub(super) const ASSERT: &str = r#"
//assert_stmt: 'assert' test [',' test]
void assert_stmt(): {}
{ test() [$COMMA test()] }
"#;

pub(super) const PASS_STMT: &str = r#"//pass_stmt: 'pass'
Token pass_stmt(): {Token spStr;}
{ spStr=<PASS> {return spStr;}}"#;

pub(super) const DELL_STMT: &str = r#"//del_stmt: 'del' exprlist
void del_stmt(): {}
{ begin_del_stmt() exprlist() }

void begin_del_stmt(): {}
{ temporaryToken=<DEL> {this.addToPeek(temporaryToken,false);}
}
"#;

pub(super) const IF_EXP: &str = r#"void if_exp():{}
{temporaryToken=<IF> {this.addSpecialToken(temporaryToken,STRATEGY_ADD_AFTER_PREV);} or_test() temporaryToken=<ELSE> {this.addSpecialToken(temporaryToken);} test()}"#;
