use super::*;
use crate::debug::normalize_dump;
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text, 1)
}

fn number(text: &str, value: i64) -> Expression {
    Expression::Number(NumberLiteral {
        token: tok(TokenKind::Number, text),
        value,
    })
}

#[test]
fn infix_statement_dump() {
    let program = Program {
        statements: vec![Statement::Expression(ExpressionStatement {
            token: tok(TokenKind::Number, "1"),
            expression: Expression::Infix(InfixExpression {
                token: tok(TokenKind::Plus, "+"),
                left: Box::new(number("1", 1)),
                operator: tok(TokenKind::Plus, "+"),
                right: Box::new(number("2", 2)),
            }),
        })],
    };

    let expected = "
        Program {
          ExpressionStatement {
            Token: Token { Type: NUMBER, Value: 1, Line: 1, },
            Expression: InfixExpression {
              Token: Token { Type: PLUS, Value: +, Line: 1, },
              Left: NumberExpression {
                Token: Token { Type: NUMBER, Value: 1, Line: 1, },
                Value: 1,
              },
              Operator: Token { Type: PLUS, Value: +, Line: 1, },
              Right: NumberExpression {
                Token: Token { Type: NUMBER, Value: 2, Line: 1, },
                Value: 2,
              },
            },
          },
        }";

    assert_eq!(
        normalize_dump(&program.debug_string()),
        normalize_dump(expected)
    );
}

#[test]
fn empty_program_dump() {
    assert_eq!(Program::new().debug_string(), "Program {\n}");
    assert!(Program::new().is_empty());
}

#[test]
fn function_literal_dump_lists_parameters() {
    let function = Expression::Function(FunctionLiteral {
        token: tok(TokenKind::Function, "fn"),
        parameters: vec![Identifier::from_token(tok(TokenKind::Identifier, "x"))],
        body: BlockStatement {
            token: tok(TokenKind::LBrace, "{"),
            statements: vec![],
        },
    });

    let expected = "
        FunctionExpression {
          Token: Token { Type: FUNCTION, Value: fn, Line: 1, },
          Parameters: [
            IdentifierExpression {
              Token: Token { Type: IDENTIFIER, Value: x, Line: 1, },
              Value: x,
            },
          ],
          Body: BlockStatement {
            Token: Token { Type: LBRACE, Value: {, Line: 1, },
            Statements: [],
          },
        }";

    assert_eq!(
        normalize_dump(&function.debug_string()),
        normalize_dump(expected)
    );
}

#[test]
fn token_value_reports_introducing_token() {
    let statement = Statement::Return(ReturnStatement {
        token: tok(TokenKind::Return, "return"),
        value: number("5", 5),
    });
    assert_eq!(statement.token_value(), "return");
    assert_eq!(number("42", 42).token_value(), "42");
}

#[test]
fn binding_kind_follows_operator() {
    assert_eq!(
        BindingKind::from_operator(TokenKind::Const),
        Some(BindingKind::DeclareConst)
    );
    assert_eq!(
        BindingKind::from_operator(TokenKind::Var),
        Some(BindingKind::DeclareVar)
    );
    assert_eq!(
        BindingKind::from_operator(TokenKind::Assign),
        Some(BindingKind::Reassign)
    );
    assert_eq!(BindingKind::from_operator(TokenKind::Eq), None);
}

#[test]
fn invalid_expression_is_flagged() {
    let hole = Expression::invalid(tok(TokenKind::RParen, ")"));
    assert!(hole.is_invalid());
    assert_eq!(hole.type_name(), "InvalidExpression");
}
