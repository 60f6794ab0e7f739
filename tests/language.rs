use std::fs::{self};

use plume::{
    ast::{BinaryOperator, Expr},
    error::{Error, ErrorKind, ParseError, RuntimeError},
    evaluate_source,
    interpreter::{
        cursor::{Cursor, END_OF_INPUT, SourcePos},
        evaluator::{core::Context, function::core::BUILTIN_FUNCTIONS},
        parser::core::parse_program,
        value::{
            core::{Tag, Value},
            heap::Heap,
        },
    },
    run_script,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_plume_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut context = Context::with_output(Vec::new());
            if let Err(e) = context.evaluate_source(&code) {
                panic!("plume example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No plume examples found in book/src");
}

fn extract_plume_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```plume") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: Value) {
    match evaluate_source(src) {
        Ok(value) => assert_eq!(value, expected, "unexpected result for {src:?}"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_parse_failure(src: &str) -> ParseError {
    match evaluate_source(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Script {src:?} was expected to fail to parse, got {other:?}"),
    }
}

fn assert_runtime_failure(src: &str) -> RuntimeError {
    let mut context = Context::with_output(Vec::new());
    match context.evaluate_source(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Script {src:?} was expected to fail at runtime, got {other:?}"),
    }
}

fn captured_output(src: &str) -> String {
    let mut context = Context::with_output(Vec::new());
    if let Err(e) = context.evaluate_source(src) {
        panic!("Script {src:?} failed: {e}");
    }
    String::from_utf8(context.output().clone()).unwrap()
}

#[test]
fn decimal_literals() {
    for n in [0_i64, 7, 10, 42, 1234, 987_654_321, i64::MAX] {
        assert_value(&n.to_string(), Value::Int64(n));
    }
    assert_value("007", Value::Int64(7));
}

#[test]
fn radix_prefixed_literals() {
    assert_value("0xFF", Value::Int64(255));
    assert_value("0Xff", Value::Int64(255));
    assert_value("0b101", Value::Int64(5));
    assert_value("0x7FFFFFFFFFFFFFFF", Value::Int64(i64::MAX));
}

#[test]
fn boolean_literals() {
    assert_value("true", Value::True);
    assert_value("false", Value::False);
    assert_value("  true  ", Value::True);
}

#[test]
fn relational_operators_match_integer_comparison() {
    let samples = [0_i64, 1, 2, 9, 100];

    for a in samples {
        for b in samples {
            assert_value(&format!("{a} < {b}"), Value::from(a < b));
            assert_value(&format!("{a} <= {b}"), Value::from(a <= b));
            assert_value(&format!("{a} > {b}"), Value::from(a > b));
            assert_value(&format!("{a} >= {b}"), Value::from(a >= b));
            assert_value(&format!("{a} == {b}"), Value::from(a == b));
            assert_value(&format!("{a} != {b}"), Value::from(a != b));
        }
    }
}

#[test]
fn boolean_equality() {
    assert_value("true == true", Value::True);
    assert_value("true == false", Value::False);
    assert_value("false != true", Value::True);
    assert_value("1 == true", Value::False);
}

#[test]
fn strings_compare_by_identity() {
    assert_value("'a' == 'a'", Value::False);
    assert_value("'a' != 'a'", Value::True);
}

#[test]
fn arithmetic_and_precedence() {
    assert_value("1 + 2 * 3", Value::Int64(7));
    assert_value("(1 + 2) * 3", Value::Int64(9));
    assert_value("10 - 4 - 3", Value::Int64(3));
    assert_value("20 / 2 / 5", Value::Int64(2));
    assert_value("7 % 3", Value::Int64(1));
    assert_value("0 - 7 / 2", Value::Int64(-3));
    assert_value("2 * 3 == 6", Value::True);
    assert_value("1+2", Value::Int64(3));
}

#[test]
fn conditionals() {
    assert_value("if true then 1 else 0", Value::Int64(1));
    assert_value("if false then 1 else 0", Value::Int64(0));
    assert_value("if 0 then 1 else 0", Value::Int64(0));
    assert_value("if 1 then 777", Value::Int64(777));
    assert_value("if 'abc' then 777", Value::Int64(777));
    assert_value("if '' then 777 else 0", Value::Int64(0));
    assert_value("if 1 < 2 then if false then 1 else 2 else 3", Value::Int64(2));
}

#[test]
fn conditional_without_else_yields_void() {
    assert_value("if false then 1", Value::Void);
    assert_value("if 0 then 1", Value::Void);
}

#[test]
fn only_the_selected_branch_is_evaluated() {
    assert_value("if true then 1 else 1 / 0", Value::Int64(1));
    assert_value("if false then $nope(1) else 2", Value::Int64(2));
}

#[test]
fn last_expression_wins() {
    assert_value("1 2 3", Value::Int64(3));
    assert_value("\n  1\n\t true  ", Value::True);
}

#[test]
fn evaluation_is_idempotent() {
    for src in ["1 + 2", "'abc'", "if '' then 1", "0b11 * 0x10", "true != false"] {
        let first = evaluate_source(src).unwrap();
        let second = evaluate_source(src).unwrap();
        assert_eq!(first, second, "{src:?} gave different results");
    }
}

#[test]
fn identifiers_do_not_swallow_literals() {
    let mut heap = Heap::new();

    let program = parse_program("0xFF 12 true truex iffy", &mut heap).unwrap();
    assert_eq!(program.len(), 5);
    assert!(matches!(&program[0], Expr::Const { value: Value::Int64(255), .. }));
    assert!(matches!(&program[1], Expr::Const { value: Value::Int64(12), .. }));
    assert!(matches!(&program[2], Expr::Const { value: Value::True, .. }));
    assert!(matches!(&program[3], Expr::Ident { name, .. } if name == "truex"));
    assert!(matches!(&program[4], Expr::Ident { name, .. } if name == "iffy"));
}

#[test]
fn unterminated_string_is_parse_failure() {
    let src = "1 'abc";
    let err = assert_parse_failure(src);

    assert!(matches!(err, ParseError::UnterminatedString { .. }));
    assert_eq!(err.pos().offset, 2);
    assert!(err.pos().offset <= src.len());
}

#[test]
fn unknown_character_is_parse_failure() {
    for src in ["#", "1 @", "  ~", ")", "1 + 2 ]"] {
        let err = assert_parse_failure(src);
        assert!(err.pos().offset <= src.len(), "{src:?}: {err}");
    }

    let err = assert_parse_failure("1 @");
    assert!(matches!(err, ParseError::NoMatch { .. }));
    assert_eq!(err.pos().offset, 2);
    assert_eq!(err.to_string(), "failed to parse expression, at 1:3");
}

#[test]
fn adjacent_expressions_are_parse_failures() {
    for (src, offset) in [("0b12", 3), ("0b102", 4), ("7true", 1), ("'a''b'", 3), ("1'x'", 1), ("12abc", 2)] {
        let err = assert_parse_failure(src);
        assert!(matches!(err, ParseError::NoMatch { .. }), "{src:?}: {err}");
        assert_eq!(err.pos().offset, offset, "{src:?}");
    }

    let mut heap = Heap::new();
    assert!(parse_program("0b12", &mut heap).is_err());
}

#[test]
fn whitespace_separates_expressions() {
    assert_value("1 2 3", Value::Int64(3));
    assert_value("1\n2\t3 ", Value::Int64(3));
    assert_eq!(captured_output("$print_i64(1) $print_i64(2)"), "12");
}

#[test]
fn earlier_expressions_run_before_a_separator_error() {
    let mut context = Context::with_output(Vec::new());
    let err = context.evaluate_source("$print_i64(1) 2'x'").unwrap_err();

    assert!(matches!(err, Error::Parse(ParseError::NoMatch { .. })));
    assert_eq!(context.output(), b"1");
}

#[test]
fn cursor_stops_at_end_of_input() {
    let mut input = Cursor::new("a");

    assert!(!input.at_end());
    assert_eq!(input.advance(), 'a');
    assert!(input.at_end());
    assert_eq!(input.peek(), END_OF_INPUT);
    assert_eq!(input.advance(), END_OF_INPUT);
    assert_eq!(input.offset(), 1);

    let mut input = Cursor::new("é");
    assert_eq!(input.advance(), 'é');
    assert_eq!(input.offset(), 2);
    assert!(input.at_end());

    let mut input = Cursor::new("");
    assert!(input.at_end());
    assert_eq!(input.advance(), END_OF_INPUT);
    assert_eq!(input.offset(), 0);
}

#[test]
fn string_literals_are_allocated_while_parsing() {
    let mut heap = Heap::new();
    let program = parse_program("'a' 'b' 1", &mut heap).unwrap();

    assert_eq!(program.len(), 3);
    assert_eq!(heap.object_count(), 2);
}

#[test]
fn builtin_names() {
    assert_eq!(BUILTIN_FUNCTIONS, ["$print_i64", "$print_str"]);

    for name in BUILTIN_FUNCTIONS {
        let err = assert_runtime_failure(&format!("{name}()"));
        assert!(matches!(err, RuntimeError::ArgumentCountMismatch { expected: 1, found: 0, .. }));
    }
}

#[test]
fn empty_source_is_parse_failure() {
    let err = assert_parse_failure("   ");
    assert!(matches!(err, ParseError::NoMatch { .. }));
}

#[test]
fn incomplete_expressions_are_parse_failures() {
    assert!(matches!(assert_parse_failure("1 +"), ParseError::Expected { .. }));
    assert!(matches!(assert_parse_failure("if true 1"), ParseError::Expected { .. }));
    assert!(matches!(assert_parse_failure("(1 + 2"), ParseError::Expected { .. }));
    assert!(matches!(assert_parse_failure("fun x"), ParseError::Expected { .. }));
}

#[test]
fn oversized_literal_is_parse_failure() {
    let err = assert_parse_failure("9223372036854775808");
    assert!(matches!(err, ParseError::LiteralTooLarge { .. }));

    let err = assert_parse_failure("0x10000000000000000");
    assert!(matches!(err, ParseError::LiteralTooLarge { .. }));
}

#[test]
fn division_by_zero_is_runtime_fault() {
    for src in ["1 / 0", "1 % 0"] {
        let err = assert_runtime_failure(src);
        assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
        assert_eq!(err.kind(), ErrorKind::RuntimeFault);
    }
}

#[test]
fn overflow_is_runtime_fault() {
    for src in ["9223372036854775807 + 1", "0 - 9223372036854775807 - 2", "0x4000000000000000 * 2"] {
        let err = assert_runtime_failure(src);
        assert!(matches!(err, RuntimeError::Overflow { .. }), "{src:?}: {err}");
        assert_eq!(err.kind(), ErrorKind::RuntimeFault);
    }
}

#[test]
fn arithmetic_on_non_integers_is_type_error() {
    for src in ["true + 1", "'a' * 2", "1 < 'b'", "false > true"] {
        let err = assert_runtime_failure(src);
        assert!(matches!(err, RuntimeError::TypeError { .. }), "{src:?}: {err}");
    }
}

#[test]
fn indexing_arrays() {
    let mut context = Context::with_output(Vec::new());
    let array = context.heap
                       .alloc_array(vec![Value::Int64(10), Value::Int64(20), Value::True]);

    let index = |i: i64| Expr::BinOp { left:  Box::new(Expr::Const { value: Value::Array(array),
                                                                     pos:   SourcePos::default(), }),
                                       op:    BinaryOperator::Index,
                                       right: Box::new(Expr::Const { value: Value::Int64(i),
                                                                     pos:   SourcePos::default(), }),
                                       pos:   SourcePos::default(), };

    assert_eq!(context.eval(&index(0)).unwrap(), Value::Int64(10));
    assert_eq!(context.eval(&index(2)).unwrap(), Value::True);
    assert!(matches!(context.eval(&index(3)),
                     Err(RuntimeError::IndexOutOfBounds { len: 3, found: 3, .. })));
    assert!(matches!(context.eval(&index(-1)),
                     Err(RuntimeError::IndexOutOfBounds { found: -1, .. })));
}

#[test]
fn indexing_a_non_array_is_type_error() {
    let err = assert_runtime_failure("'abc'[0]");
    assert!(matches!(err, RuntimeError::TypeError { .. }));
}

#[test]
fn array_literals_are_unsupported() {
    let err = assert_runtime_failure("[1, 2]");
    assert!(matches!(err, RuntimeError::Unsupported { .. }));
    assert_eq!(err.kind(), ErrorKind::EvalFailure);
}

#[test]
fn bare_identifiers_are_unbound() {
    let err = assert_runtime_failure("foo");
    assert!(matches!(err, RuntimeError::UnboundIdentifier { ref name, .. } if name == "foo"));
    assert_eq!(err.kind(), ErrorKind::EvalFailure);
}

#[test]
fn function_expressions_evaluate_to_themselves() {
    let value = evaluate_source("fun (x, y) x + y").unwrap();
    assert_eq!(value.tag(), Tag::Fun);

    let Value::Fun(def) = value else {
        panic!("expected a function value");
    };
    assert_eq!(def.params, ["x", "y"]);

    assert_value("if fun () 0 then 1 else 2", Value::Int64(1));
}

#[test]
fn builtins_print_without_separators() {
    assert_eq!(captured_output("$print_i64(7)"), "7");
    assert_eq!(captured_output("$print_str('hello')"), "hello");
    assert_eq!(captured_output("$print_str('a b') $print_i64(0x10) $print_i64(0 - 3)"), "a b16-3");
    assert_eq!(captured_output("'$print_i64'(5)"), "5");
}

#[test]
fn builtins_return_true() {
    let mut context = Context::with_output(Vec::new());
    assert_eq!(context.evaluate_source("$print_i64(1)").unwrap(), Value::True);
}

#[test]
fn unknown_builtin_is_eval_failure() {
    let err = assert_runtime_failure("$print_f64(1)");
    assert!(matches!(err, RuntimeError::UnknownBuiltin { ref name, .. } if name == "$print_f64"));
    assert_eq!(err.kind(), ErrorKind::EvalFailure);
}

#[test]
fn builtin_is_resolved_before_arguments() {
    let err = assert_runtime_failure("$nope(1 / 0)");
    assert!(matches!(err, RuntimeError::UnknownBuiltin { .. }));

    let err = assert_runtime_failure("$print_i64(1 / 0, 2)");
    assert!(matches!(err, RuntimeError::ArgumentCountMismatch { expected: 1, found: 2, .. }));
}

#[test]
fn wrong_builtin_arity_is_error() {
    let err = assert_runtime_failure("$print_i64()");
    assert!(matches!(err, RuntimeError::ArgumentCountMismatch { expected: 1, found: 0, .. }));
}

#[test]
fn wrong_builtin_argument_type_is_error() {
    let err = assert_runtime_failure("$print_i64('7')");
    assert!(matches!(err, RuntimeError::TypeError { .. }));

    let err = assert_runtime_failure("$print_str(7)");
    assert!(matches!(err, RuntimeError::TypeError { .. }));
}

#[test]
fn only_names_can_be_called() {
    let err = assert_runtime_failure("5(1)");
    assert!(matches!(err, RuntimeError::UnsupportedCall { callee: Some(Tag::Int64), .. }));

    let err = assert_runtime_failure("(fun (x) x)(1)");
    assert!(matches!(err, RuntimeError::UnsupportedCall { .. }));
    assert_eq!(err.kind(), ErrorKind::EvalFailure);
}

#[test]
fn call_needs_adjacent_parenthesis() {
    let err = assert_runtime_failure("$print_i64 (7)");
    assert!(matches!(err, RuntimeError::UnboundIdentifier { .. }));
}

#[test]
fn errors_carry_source_positions() {
    let err = assert_runtime_failure("1\n2 / 0");
    assert_eq!(err.to_string().split(':').next(), Some("Error at 2"));

    let err = assert_parse_failure("1\n  'x");
    assert_eq!(err.pos().line, 2);
    assert_eq!(err.pos().column, 3);
}

#[test]
fn run_script_reports_failures() {
    assert!(run_script("1 + 1", false).is_ok());
    assert!(run_script("1 +", false).is_err());
    assert!(run_script("$print_i64(true)", false).is_err());
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.plume").unwrap();
    let output = captured_output(&contents);
    assert_eq!(output, "hello, plume\n255\n7\n");
}
