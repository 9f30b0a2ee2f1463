// ============================================================================
// vlcvideo-cli/src/script.rs
// ============================================================================
//
// SCRIPT EVALUATION: A Small Line-Oriented Expression Language
//
// Scripts drive the host one statement per line:
//
//   # comment
//   video.contrast = 1.5
//   video.tracks
//   video.deinterlace.enable("yadif")
//   second = new VlcVideo(player)
//   VlcVideo()
//
// Values are numbers, double-quoted strings, `true`/`false`, `null`,
// `undefined`, variable paths, method calls and constructor calls.
// Expression statements yield their value; assignments yield nothing.
//
// KEY COMPONENTS:
// - Grammar: nom parsers for literals, paths, calls and statements
// - evaluate_line / run_script: Evaluate against a Host
// - parse_literal: Value parsing for `vlcvideo set`

// ---- Internal crate imports ----
use crate::error::CliResult;
use crate::host::Host;

// ---- External crate imports ----
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag},
    character::complete::{alpha1, alphanumeric1, char, multispace0, space0, space1},
    combinator::{all_consuming, map, map_opt, map_res, opt, recognize, rest, value},
    multi::{many0_count, separated_list0, separated_list1},
    number::complete::recognize_float,
    sequence::{delimited, pair, preceded},
};
use vlcvideo_core::binding::video::VIDEO_CLASS_NAME;
use vlcvideo_core::{CoreError, EntryMode, HostValue, VideoEngine};

type ParseResult<'a, O> = IResult<&'a str, O>;

#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Literal(HostValue),
    Path(Vec<String>),
    Call { path: Vec<String>, args: Vec<Expr> },
    New { class: String, args: Vec<Expr> },
}

#[derive(Debug, Clone, PartialEq)]
enum Statement {
    Assign { target: Vec<String>, value: Expr },
    Expr(Expr),
}

// ============================================================================
// GRAMMAR
// ============================================================================

fn identifier(input: &str) -> ParseResult<&str> {
    recognize(pair(
        alt((alpha1, tag("_"), tag("$"))),
        many0_count(alt((alphanumeric1, tag("_"), tag("$")))),
    ))(input)
}

fn number(input: &str) -> ParseResult<f64> {
    map_res(recognize_float, str::parse::<f64>)(input)
}

/// Double-quoted string with `\n`, `\t`, `\\` and `\"` escapes.
fn string_literal(input: &str) -> ParseResult<String> {
    let body = escaped_transform(
        is_not("\\\""),
        '\\',
        alt((
            value("\n", char('n')),
            value("\t", char('t')),
            value("\\", char('\\')),
            value("\"", char('"')),
        )),
    );
    delimited(
        char('"'),
        map(opt(body), |text: Option<String>| text.unwrap_or_default()),
        char('"'),
    )(input)
}

fn keyword(word: &str) -> Option<HostValue> {
    match word {
        "true" => Some(HostValue::Bool(true)),
        "false" => Some(HostValue::Bool(false)),
        "null" => Some(HostValue::Null),
        "undefined" => Some(HostValue::Undefined),
        _ => None,
    }
}

fn literal(input: &str) -> ParseResult<HostValue> {
    alt((
        map(number, HostValue::Number),
        map(string_literal, HostValue::String),
        map_opt(identifier, keyword),
    ))(input)
}

fn arguments(input: &str) -> ParseResult<Vec<Expr>> {
    delimited(
        pair(char('('), space0),
        separated_list0(delimited(space0, char(','), space0), expression),
        pair(space0, char(')')),
    )(input)
}

/// `new Class` or `new Class(args)`
fn constructor(input: &str) -> ParseResult<Expr> {
    map(
        preceded(
            pair(tag("new"), space1),
            pair(identifier, opt(preceded(space0, arguments))),
        ),
        |(class, args)| Expr::New {
            class: class.to_string(),
            args: args.unwrap_or_default(),
        },
    )(input)
}

/// `a.b.c` or `a.b.c(args)`
fn member(input: &str) -> ParseResult<Expr> {
    map(
        pair(
            separated_list1(delimited(space0, char('.'), space0), identifier),
            opt(preceded(space0, arguments)),
        ),
        |(segments, args)| {
            let path = segments.into_iter().map(str::to_string).collect();
            match args {
                Some(args) => Expr::Call { path, args },
                None => Expr::Path(path),
            }
        },
    )(input)
}

fn expression(input: &str) -> ParseResult<Expr> {
    alt((map(literal, Expr::Literal), constructor, member))(input)
}

fn assignment_value(input: &str) -> ParseResult<Expr> {
    preceded(delimited(space0, char('='), space0), expression)(input)
}

fn comment(input: &str) -> ParseResult<&str> {
    preceded(char('#'), rest)(input)
}

/// A whole line: optional `expr [= expr]`, then an optional comment.
fn line(input: &str) -> ParseResult<Option<(Expr, Option<Expr>)>> {
    all_consuming(delimited(
        multispace0,
        opt(pair(expression, opt(assignment_value))),
        pair(multispace0, opt(comment)),
    ))(input)
}

fn syntax_error(source: &str, err: nom::Err<nom::error::Error<&str>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let column = source.len() - e.input.len() + 1;
            format!("syntax error at column {}: '{}'", column, e.input.trim_end())
        }
        nom::Err::Incomplete(_) => "incomplete statement".to_string(),
    }
}

fn parse_line(source: &str) -> Result<Option<Statement>, String> {
    let (_, parsed) = line(source).map_err(|e| syntax_error(source, e))?;
    match parsed {
        None => Ok(None),
        Some((expr, None)) => Ok(Some(Statement::Expr(expr))),
        Some((Expr::Path(target), Some(value))) => Ok(Some(Statement::Assign { target, value })),
        Some((_, Some(_))) => Err("invalid assignment target".to_string()),
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

fn evaluate<E: VideoEngine + 'static>(host: &Host<E>, expr: &Expr) -> CliResult<HostValue> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Path(path) => host.read(path),
        Expr::Call { path, args } => {
            let args = evaluate_all(host, args)?;
            host.call(path, &args)
        }
        Expr::New { class, args } => {
            if class != VIDEO_CLASS_NAME {
                return Err(CoreError::InvalidArgument(format!(
                    "'{}' is not a constructor",
                    class
                )));
            }
            let args = evaluate_all(host, args)?;
            host.construct(EntryMode::Construct, &args)
        }
    }
}

fn evaluate_all<E: VideoEngine + 'static>(
    host: &Host<E>,
    exprs: &[Expr],
) -> CliResult<Vec<HostValue>> {
    exprs.iter().map(|expr| evaluate(host, expr)).collect()
}

/// Evaluates one line. Returns the value of an expression statement, or
/// `None` for blank lines, comments and assignments.
pub fn evaluate_line<E: VideoEngine + 'static>(
    host: &mut Host<E>,
    line: &str,
) -> CliResult<Option<HostValue>> {
    let statement = match parse_line(line).map_err(CoreError::InvalidArgument)? {
        Some(statement) => statement,
        None => return Ok(None),
    };

    match statement {
        Statement::Assign { target, value } => {
            let value = evaluate(host, &value)?;
            host.write(&target, value)?;
            Ok(None)
        }
        Statement::Expr(expr) => evaluate(host, &expr).map(Some),
    }
}

/// Evaluates a whole script, handing each expression value to `emit`.
///
/// Stops at the first failing line; the error carries its 1-based number.
pub fn run_script<E, F>(host: &mut Host<E>, source: &str, mut emit: F) -> CliResult<usize>
where
    E: VideoEngine + 'static,
    F: FnMut(&HostValue) -> CliResult<()>,
{
    let mut evaluated = 0;
    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let result = evaluate_line(host, line).map_err(|e| CoreError::Script {
            line: line_no,
            message: e.to_string(),
        })?;
        if let Some(value) = result {
            log::debug!("line {}: {}", line_no, value);
            emit(&value)?;
            evaluated += 1;
        }
    }
    Ok(evaluated)
}

/// Parses a value literal given on the command line.
///
/// Anything that is not a number, a quoted string or a keyword is taken as a
/// bare string.
pub fn parse_literal(text: &str) -> HostValue {
    match all_consuming(delimited(multispace0, literal, multispace0))(text) {
        Ok((_, value)) => value,
        Err(_) => HostValue::String(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use vlcvideo_core::engine::mocks::{EngineCall, MockVideoEngine};
    use vlcvideo_core::{BindingConfig, Player};

    fn host(engine: &MockVideoEngine) -> Host<MockVideoEngine> {
        Host::new(Rc::new(Player::new(engine.clone()))).unwrap()
    }

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identifier_and_number() {
        assert_eq!(identifier("video.contrast"), Ok((".contrast", "video")));
        assert_eq!(identifier("$tmp_1 ="), Ok((" =", "$tmp_1")));
        assert!(identifier("1abc").is_err());
        assert_eq!(number("-30)"), Ok((")", -30.0)));
        assert_eq!(number("1.5e1"), Ok(("", 15.0)));
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal(r#""yadif" rest"#), Ok((" rest", "yadif".to_string())));
        assert_eq!(string_literal(r#""""#), Ok(("", String::new())));
        assert_eq!(
            string_literal(r#""a \"b\"\n""#),
            Ok(("", "a \"b\"\n".to_string()))
        );
        assert!(string_literal("\"open").is_err());
    }

    #[test]
    fn test_parse_call_with_comment() {
        let statement = parse_line(r#"video.deinterlace.enable("yadif") # go"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            statement,
            Statement::Expr(Expr::Call {
                path: path(&["video", "deinterlace", "enable"]),
                args: vec![Expr::Literal(HostValue::String("yadif".into()))],
            })
        );
        assert_eq!(parse_line("# only a comment").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert!(parse_line("\"open").is_err());
    }

    #[test]
    fn test_parse_negative_number_assignment() {
        let statement = parse_line("video.hue = -30").unwrap().unwrap();
        assert_eq!(
            statement,
            Statement::Assign {
                target: path(&["video", "hue"]),
                value: Expr::Literal(HostValue::Number(-30.0)),
            }
        );
    }

    #[test]
    fn test_parse_constructor_and_arguments() {
        let statement = parse_line("second = new VlcVideo( player , 1 )").unwrap().unwrap();
        assert_eq!(
            statement,
            Statement::Assign {
                target: path(&["second"]),
                value: Expr::New {
                    class: "VlcVideo".into(),
                    args: vec![
                        Expr::Path(path(&["player"])),
                        Expr::Literal(HostValue::Number(1.0)),
                    ],
                },
            }
        );
        assert_eq!(
            parse_line("newest").unwrap(),
            Some(Statement::Expr(Expr::Path(path(&["newest"]))))
        );
        assert_eq!(
            parse_line("trueish").unwrap(),
            Some(Statement::Expr(Expr::Path(path(&["trueish"]))))
        );
    }

    #[test]
    fn test_parse_rejects_trailing_tokens() {
        assert!(parse_line("video.contrast 1").is_err());
        assert!(parse_line("video.").is_err());
        assert!(parse_line("video.enable(1,)").is_err());
        assert_eq!(
            parse_line("1 = 2"),
            Err("invalid assignment target".to_string())
        );
    }

    #[test]
    fn test_script_assign_and_read() {
        let engine = MockVideoEngine::with_names(&["Main", "Alt"]);
        let mut host = host(&engine);
        let mut seen = Vec::new();
        let count = run_script(
            &mut host,
            "# adjust\nvideo.contrast = 1.5\nvideo.contrast\nvideo.tracks\n\n",
            |value| {
                seen.push(value.clone());
                Ok(())
            },
        )
        .unwrap();

        assert_eq!(count, 2);
        assert_eq!(seen[0], HostValue::Number(1.5));
        assert_eq!(
            seen[1],
            HostValue::from(vec!["Main".to_string(), "Alt".to_string()])
        );
    }

    #[test]
    fn test_script_method_call_reaches_engine() {
        let engine = MockVideoEngine::new();
        let mut host = host(&engine);
        engine.clear_calls();
        evaluate_line(&mut host, "video.deinterlace.enable(\"yadif\")").unwrap();
        assert_eq!(
            engine.calls(),
            vec![EngineCall::SetDeinterlace(Some("yadif".to_string()))]
        );
    }

    #[test]
    fn test_script_constructor_forms() {
        let engine = MockVideoEngine::new();
        let mut host = host(&engine);
        assert!(evaluate_line(&mut host, "second = new VlcVideo(player)").is_ok());
        assert!(matches!(
            host.global("second").unwrap(),
            HostValue::Object(_)
        ));
        assert!(evaluate_line(&mut host, "VlcVideo(player)").is_ok());
        assert!(matches!(
            evaluate_line(&mut host, "new VlcVideo()"),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(evaluate_line(&mut host, "new Other(player)").is_err());
    }

    #[test]
    fn test_lenient_constructor_yields_undefined() {
        let engine = MockVideoEngine::new();
        let player = Rc::new(Player::with_config(engine, BindingConfig::lenient()));
        let mut host = Host::new(player).unwrap();
        assert_eq!(
            evaluate_line(&mut host, "VlcVideo(42)").unwrap(),
            Some(HostValue::Undefined)
        );
    }

    #[test]
    fn test_script_error_reports_line() {
        let engine = MockVideoEngine::new();
        let mut host = host(&engine);
        let err = run_script(&mut host, "video.contrast\nvideo.tracks = 1\n", |_| Ok(()))
            .unwrap_err();
        assert!(matches!(err, CoreError::Script { line: 2, .. }));

        let err = run_script(&mut host, "video.contrast = = 1\n", |_| Ok(())).unwrap_err();
        assert!(
            matches!(err, CoreError::Script { line: 1, ref message } if message.contains("column"))
        );
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse_literal("1.25"), HostValue::Number(1.25));
        assert_eq!(parse_literal("-5"), HostValue::Number(-5.0));
        assert_eq!(parse_literal(" true "), HostValue::Bool(true));
        assert_eq!(parse_literal("null"), HostValue::Null);
        assert_eq!(parse_literal("\"a b\""), HostValue::String("a b".into()));
        assert_eq!(parse_literal("yadif"), HostValue::String("yadif".into()));
        assert_eq!(parse_literal("1.5x"), HostValue::String("1.5x".into()));
    }
}
