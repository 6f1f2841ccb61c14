use std::fs::{self};

use seta::{
    error::{Error, ParseError, RuntimeError},
    get_result, interpret,
    interpreter::{
        evaluator::{
            core::{Config, Context},
            function::{assert, builtin::Arity, inspect},
        },
        lexer::TokenKind,
        value::{
            core::{Value, ValueKind},
            output::BufferOutput,
        },
    },
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "seta"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut context = quiet_context();
        if let Err(e) = interpret(&content, &mut context) {
            panic!("Script {path:?} failed:\n{content}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn quiet_context() -> Context {
    Context::with_output(Box::new(BufferOutput::new()))
}

fn eval(src: &str) -> Value {
    interpret(src, &mut quiet_context()).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn runtime_error(src: &str) -> RuntimeError {
    match interpret(src, &mut quiet_context()) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error from {src:?}, got {other:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match interpret(src, &mut quiet_context()) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error from {src:?}, got {other:?}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = interpret(src, &mut quiet_context()) {
        panic!("Script failed: {e}\n{src}");
    }
}

#[test]
fn scripts_can_assert_their_own_results() {
    assert_success("val x = 1 + 2\nassert(x == 3)");
    assert_success("val s = \"ab\" + \"c\"\nassert(len(s) == 3)");
    assert_success("fn sq(x) -> x * x .\nassert(sq(4) == 16)");
}

#[test]
fn arithmetic_respects_precedence() {
    assert_eq!(eval("1+2*3"), Value::Number(7.0));
    assert_eq!(eval("(1+2)*3"), Value::Number(9.0));
    assert_eq!(eval("2^3"), Value::Number(8.0));
    assert_eq!(eval("2 * 3 ^ 2"), Value::Number(18.0));
    assert_eq!(eval("-2 + 5"), Value::Number(3.0));
}

#[test]
fn arithmetic_folds_left() {
    assert_eq!(eval("10 - 4 - 3"), Value::Number(3.0));
    assert_eq!(eval("64 / 4 / 2"), Value::Number(8.0));
    assert_eq!(eval("2 ^ 3 ^ 2"), Value::Number(64.0));
}

#[test]
fn numbers_keep_their_fraction() {
    assert_eq!(eval("3.7"), Value::Number(3.7));
    assert_eq!(eval("7 / 2"), Value::Number(3.5));
    assert_eq!(eval("str(0.5 + 0.25)"), Value::from("0.75"));
}

#[test]
fn plus_concatenates_only_strings() {
    assert_eq!(eval("\"a\" + \"b\""), Value::from("ab"));

    let err = runtime_error("\"a\" + 1");
    assert_eq!(err,
               RuntimeError::TypeError { expected:  ValueKind::Number,
                                         got:       "\"a\"".to_string(),
                                         operation: "+".to_string(), });
}

#[test]
fn other_operators_reject_strings() {
    assert!(matches!(runtime_error("\"a\" - \"b\""), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("\"a\" < \"b\""), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("+\"5\""), RuntimeError::TypeError { .. }));
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(runtime_error("5/0"), RuntimeError::DivisionByZero { position: 2 });
    assert!(matches!(runtime_error("0 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("val z = 0 1 / z"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn declared_variables_can_be_read() {
    assert_eq!(eval("val x = 5 ; x"), Value::Number(5.0));
    assert_eq!(eval("val x = 5 val y = x * 2 y"), Value::Number(10.0));
}

#[test]
fn declarations_take_full_expressions() {
    assert_eq!(eval("val ok = 1 < 2 and 2 < 3 ok"), Value::Bool(true));
    assert_eq!(eval("val ok = 1 ok = 1 == 2 ok"), Value::Bool(false));
}

#[test]
fn assignment_requires_declaration() {
    assert_eq!(runtime_error("x = 5"),
               RuntimeError::NotFoundVar { name:     "x".to_string(),
                                           position: 0, });
    assert_eq!(eval("val x = 1 x = 5 x"), Value::Number(5.0));
}

#[test]
fn blocks_discard_inner_declarations() {
    let err = runtime_error("val x = 1\nif true -> val y = 2 x = x + y .\ny");
    assert!(matches!(err, RuntimeError::NotFoundVar { ref name, .. } if name == "y"));

    assert_eq!(eval("val x = 1\nif true -> val y = 2 x = x + y .\nx"),
               Value::Number(3.0));
    assert_eq!(eval("val x = 1 -> -> x = 10 . . x"), Value::Number(10.0));
}

#[test]
fn inner_declarations_shadow_outer_ones() {
    assert_eq!(eval("val x = 1 -> val x = 2 x = 3 . x"), Value::Number(1.0));
    assert_eq!(eval("val x = 1 -> val x = 2 x = 3 x ."), Value::Number(3.0));
}

#[test]
fn argument_count_must_match() {
    let err = runtime_error("fn f(a, b) -> a + b . f(1)");
    assert_eq!(err,
               RuntimeError::IncorrectArgNumber { expected: 2,
                                                  got:      1,
                                                  function: "f".to_string(), });

    let err = runtime_error("fn f(a, b) -> a + b . f(1, 2, 3)");
    assert!(matches!(err, RuntimeError::IncorrectArgNumber { expected: 2, got: 3, .. }));

    assert_eq!(eval("fn f(a, b) -> a + b . f(1, 2)"), Value::Number(3.0));
}

#[test]
fn functions_cannot_see_caller_locals() {
    let err = runtime_error("fn g() -> hidden . fn h() -> val hidden = 1 g() . h()");
    assert!(matches!(err, RuntimeError::NotFoundVar { ref name, .. } if name == "hidden"));

    let err = runtime_error("fn inner -> n . fn outer(n) -> inner() . outer(1)");
    assert!(matches!(err, RuntimeError::NotFoundVar { ref name, .. } if name == "n"));
}

#[test]
fn functions_see_and_update_globals() {
    assert_eq!(eval("val base = 10 fn add(n) -> base + n . add(5)"),
               Value::Number(15.0));
    assert_eq!(eval("val count = 0 fn inc -> count = count + 1 . inc() inc() count"),
               Value::Number(2.0));
}

#[test]
fn parameters_shadow_globals() {
    assert_eq!(eval("val n = 100 fn id(n) -> n . id(1) + n"), Value::Number(101.0));
}

#[test]
fn parameters_keep_their_argument_kind() {
    assert_eq!(eval("fn kind(v) -> type(v) . kind(\"s\")"), Value::from("String"));
    assert_eq!(eval("fn kind(v) -> type(v) . kind([1])"), Value::from("Array"));
    assert_eq!(eval("fn kind(v) -> type(v) . kind(kind)"), Value::from("Function"));
}

#[test]
fn recursion_works() {
    let src = "fn fact(n) -> if n <= 1 -> 1 . else -> n * fact(n - 1) . . fact(10)";
    assert_eq!(eval(src), Value::Number(3_628_800.0));

    let src = "fn fib(n) -> if n < 2 -> n . else -> fib(n - 1) + fib(n - 2) . . fib(15)";
    assert_eq!(eval(src), Value::Number(610.0));
}

#[test]
fn calls_do_not_share_locals() {
    let src = "fn f(n) -> if n == 2 -> secret . else -> val secret = n secret . . f(1) f(2)";
    assert!(matches!(runtime_error(src),
                     RuntimeError::NotFoundVar { ref name, .. } if name == "secret"));

    let src = "fn f(n) ->
                   if n == 2 -> secret . else -> 0 .
                   val secret = n .
               f(1) f(2)";
    assert!(matches!(runtime_error(src),
                     RuntimeError::NotFoundVar { ref name, .. } if name == "secret"));

    let src = "fn f(n) -> val secret = n . f(1) secret";
    assert!(matches!(runtime_error(src),
                     RuntimeError::NotFoundVar { ref name, .. } if name == "secret"));

    assert_eq!(eval("fn f(n) -> val local = n * 2 local . f(1) + f(20)"),
               Value::Number(42.0));
}

#[test]
fn equality_is_strict() {
    assert_eq!(eval("1==\"1\""), Value::Bool(false));
    assert_eq!(eval("1==1"), Value::Bool(true));
    assert_eq!(eval("nil == false"), Value::Bool(false));
    assert_eq!(eval("nil == nil"), Value::Bool(true));
    assert_eq!(eval("[1, \"a\"] == [1, \"a\"]"), Value::Bool(true));
    assert_eq!(eval("[1, 2] == [2, 1]"), Value::Bool(false));
    assert_eq!(eval("1 != 2"), Value::Bool(true));
    assert_eq!(eval("\"a\" != \"a\""), Value::Bool(false));
}

#[test]
fn functions_compare_by_definition() {
    assert_eq!(eval("fn f -> 1 . fn g -> 1 . f == f"), Value::Bool(true));
    assert_eq!(eval("fn f -> 1 . fn g -> 1 . f == g"), Value::Bool(false));
    assert_eq!(eval("fn f -> 1 . val h = f h == f"), Value::Bool(true));
}

#[test]
fn elif_branches_are_taken_in_order() {
    let src = |n: u32| {
        format!("val n = {n}
                 if n < 3 -> \"small\" .
                 elif n < 10 -> \"medium\" .
                 elif n < 100 -> \"large\" .
                 else -> \"huge\" .")
    };

    assert_eq!(eval(&src(1)), Value::from("small"));
    assert_eq!(eval(&src(5)), Value::from("medium"));
    assert_eq!(eval(&src(50)), Value::from("large"));
    assert_eq!(eval(&src(500)), Value::from("huge"));
}

#[test]
fn conditionals_without_a_match_yield_nil() {
    assert_eq!(eval("if false -> 1 ."), Value::Nil);
    assert_eq!(eval("if false -> 1 . elif false -> 2 ."), Value::Nil);
    assert_eq!(eval("if 0 -> 1 . else -> 2 ."), Value::Number(2.0));
    assert_eq!(eval("if nil -> 1 . else -> 2 ."), Value::Number(2.0));
}

#[test]
fn conditions_need_a_truth_value() {
    let err = runtime_error("if \"yes\" -> 1 .");
    assert!(matches!(err, RuntimeError::TypeError { expected: ValueKind::Bool, .. }));
}

#[test]
fn not_yields_a_bool() {
    assert_eq!(eval("!true"), Value::Bool(false));
    assert_eq!(eval("!0"), Value::Bool(true));
    assert_eq!(eval("!!3"), Value::Bool(true));
    assert_eq!(eval("!nil"), Value::Bool(true));
}

#[test]
fn logical_operators_short_circuit() {
    assert_eq!(eval("false and missing"), Value::Bool(false));
    assert_eq!(eval("true or missing"), Value::Bool(true));
    assert_eq!(eval("true and 1 < 2"), Value::Bool(true));
    assert_eq!(eval("false or 0"), Value::Bool(false));

    assert!(matches!(runtime_error("true and missing"), RuntimeError::NotFoundVar { .. }));
    assert!(matches!(runtime_error("\"s\" and true"), RuntimeError::TypeError { .. }));
}

#[test]
fn calls_require_commas() {
    let err = parse_error("fn f(a, b) -> a . f(1 2)");
    assert!(matches!(err,
                     ParseError::Syntax { expected: TokenKind::RParen,
                                          got: TokenKind::Number,
                                          .. }));

    assert!(matches!(parse_error("f(1,)"), ParseError::Syntax { .. }));
    assert_eq!(eval("fn zero() -> 0 . zero()"), Value::Number(0.0));
}

#[test]
fn comparisons_do_not_chain() {
    assert!(matches!(parse_error("1 < 2 < 3"), ParseError::Syntax { .. }));
}

#[test]
fn syntax_errors_report_what_was_expected() {
    let err = parse_error("val = 3");
    assert_eq!(err,
               ParseError::Syntax { expected: TokenKind::Identifier,
                                    got:      TokenKind::Equals,
                                    position: 4, });

    assert!(matches!(parse_error("if true -> 1"),
                     ParseError::Syntax { expected: TokenKind::Dot,
                                          got: TokenKind::Eof,
                                          .. }));
    assert!(matches!(parse_error("1 +"),
                     ParseError::Syntax { expected: TokenKind::Number,
                                          got: TokenKind::Eof,
                                          .. }));
}

#[test]
fn functions_are_top_level_only() {
    assert!(matches!(parse_error("-> fn f -> 1 . ."), ParseError::Syntax { .. }));
}

#[test]
fn tokenizer_errors_surface_through_the_parser() {
    assert_eq!(parse_error("val s = \"abc"),
               ParseError::NotFinishedString { position: 8 });
    assert_eq!(parse_error("val x = 1 @ 2"),
               ParseError::Unrecognized { text:     "@".to_string(),
                                          position: 10, });
}

#[test]
fn parse_errors_stop_before_evaluation() {
    let output = BufferOutput::new();
    let mut context = Context::with_output(Box::new(output.clone()));

    assert!(interpret("print(1) )", &mut context).is_err());
    assert_eq!(output.contents(), "");
}

#[test]
fn comments_and_separators_are_ignored() {
    assert_eq!(eval("# leading comment\nval a = 1 # trailing\n;; val b = 2;\na + b"),
               Value::Number(3.0));
    assert_eq!(eval(""), Value::Nil);
    assert_eq!(eval("# nothing here"), Value::Nil);
    assert_eq!(eval("-> ."), Value::Nil);
}

#[test]
fn unknown_and_non_functions_are_rejected() {
    assert_eq!(runtime_error("nope(1)"),
               RuntimeError::NotFoundFunction { name:     "nope".to_string(),
                                                position: 0, });
    assert_eq!(runtime_error("val x = 3 x()"),
               RuntimeError::NotAFunction { value:    "3".to_string(),
                                            position: 10, });
}

#[test]
fn functions_are_values() {
    assert_eq!(eval("fn f -> 41 . val g = f g() + 1"), Value::Number(42.0));
    assert_eq!(eval("fn f -> 1 . str(f)"), Value::from("<fn f>"));
    assert_eq!(eval("fn f -> 1 . type(f)"), Value::from("Function"));
}

#[test]
fn unbounded_recursion_is_reported() {
    let mut context = quiet_context().with_config(Config { max_call_depth: 40 });

    let result = interpret("fn spin(n) -> spin(n + 1) . spin(0)", &mut context);
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::RecursionTooDeep { limit: 40, .. }))));
    assert_eq!(context.frame_count(), 1);
    assert_eq!(context.scope_depth(), 1);
}

#[test]
fn recursion_within_the_limit_succeeds() {
    let mut context = quiet_context().with_config(Config { max_call_depth: 20 });
    let src = "fn down(n) -> if n > 0 -> down(n - 1) . else -> \"done\" . .";

    interpret(src, &mut context).unwrap();
    assert_eq!(interpret("down(19)", &mut context).unwrap(), Value::from("done"));
    assert!(interpret("down(20)", &mut context).is_err());
}

#[test]
fn errors_unwind_frames_and_scopes() {
    let mut context = quiet_context();
    interpret("val x = 1 fn bad(n) -> -> if true -> n / 0 . . .", &mut context).unwrap();

    assert!(interpret("-> -> bad(x) . .", &mut context).is_err());
    assert_eq!(context.frame_count(), 1);
    assert_eq!(context.scope_depth(), 1);

    assert!(interpret("if true -> val y = 2 if true -> missing . .", &mut context).is_err());
    assert_eq!(context.frame_count(), 1);
    assert_eq!(context.scope_depth(), 1);

    assert_eq!(interpret("x", &mut context).unwrap(), Value::Number(1.0));
}

#[test]
fn nested_programs_are_not_evaluated() {
    use seta::ast::Node;

    let mut context = quiet_context();
    let nested = Node::Program { statements: vec![],
                                 position:   0, };

    assert!(matches!(context.evaluate(&nested), Err(RuntimeError::NotImplemented { .. })));
    assert_eq!(context.run(&nested).unwrap(), Value::Nil);
}

#[test]
fn context_keeps_globals_between_runs() {
    let mut context = quiet_context();

    interpret("val a = 2 fn triple(n) -> n * 3 .", &mut context).unwrap();
    assert_eq!(interpret("triple(a)", &mut context).unwrap(), Value::Number(6.0));
}

#[test]
fn builtins_take_priority_over_user_functions() {
    assert_eq!(eval("fn len(x) -> 99 . len([1, 2, 3])"), Value::Number(3.0));
}

#[test]
fn print_writes_through_the_output_sink() {
    let output = BufferOutput::new();
    let mut context = Context::with_output(Box::new(output.clone()));

    let value = interpret("print(\"a\", 1) println(\"b\", [1, \"c\"]) println()", &mut context).unwrap();

    assert_eq!(value, Value::Nil);
    assert_eq!(output.contents(), "a 1b [1, \"c\"]\n\n");
}

#[test]
fn builtin_functions() {
    assert_eq!(eval("len(\"héllo\")"), Value::Number(5.0));
    assert_eq!(eval("len([1, [2, 3], nil])"), Value::Number(3.0));
    assert_eq!(eval("type(nil)"), Value::from("Nil"));
    assert_eq!(eval("type(1 < 2)"), Value::from("Bool"));
    assert_eq!(eval("str(1.5) + \"!\""), Value::from("1.5!"));
    assert_eq!(eval("str([true, nil])"), Value::from("[true, nil]"));
    assert_eq!(eval("num(\"42\") + 1"), Value::Number(43.0));
    assert_eq!(eval("assert(2 > 1)"), Value::Bool(true));

    assert!(matches!(runtime_error("len(1)"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("num(\"x\")"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("num(nil)"), RuntimeError::TypeError { .. }));
    assert_eq!(runtime_error("\n assert(1 == 2)"),
               RuntimeError::AssertionFailed { position: 2 });
    assert_eq!(runtime_error("len(1, 2)"),
               RuntimeError::IncorrectArgNumber { expected: 1,
                                                  got:      2,
                                                  function: "len".to_string(), });
}

#[test]
fn builtins_check_their_own_arguments() {
    let mut context = quiet_context();

    let err = inspect::len(&mut context, &[], 0).unwrap_err();
    assert_eq!(err,
               RuntimeError::IncorrectArgNumber { expected: 1,
                                                  got:      0,
                                                  function: "len".to_string(), });
    assert!(inspect::type_of(&mut context, &[], 0).is_err());
    assert!(inspect::render(&mut context, &[Value::Nil, Value::Nil], 0).is_err());
    assert!(inspect::num(&mut context, &[], 0).is_err());
    assert!(assert::assert_fn(&mut context, &[], 0).is_err());

    context.register_builtin("size", Arity::Any, inspect::len);
    assert_eq!(interpret("size([1, 2])", &mut context).unwrap(), Value::Number(2.0));
    assert!(matches!(interpret("size()", &mut context),
                     Err(Error::Runtime(RuntimeError::IncorrectArgNumber { got: 0, .. }))));
}

#[test]
fn hosts_can_register_builtins() {
    let mut context = quiet_context();
    context.register_builtin("sum", Arity::Any, |_, args, _| {
               let mut total = 0.0;
               for arg in args {
                   total += arg.to_number("sum")?;
               }
               Ok(Value::Number(total))
           });

    assert!(context.is_builtin("sum"));
    assert_eq!(interpret("sum(1, 2, 3)", &mut context).unwrap(), Value::Number(6.0));
    assert_eq!(interpret("sum()", &mut context).unwrap(), Value::Number(0.0));
}

#[test]
fn get_result_reports_line_and_column() {
    assert!(get_result("val a = 1\nval b = a + 1", false).is_ok());

    let err = get_result("val a = 1\nval b = a / 0", false).unwrap_err();
    assert_eq!(err.to_string(), "Error at line 2, column 13: Division by zero.");

    let err = get_result("val a = \"x\" - 1", false).unwrap_err();
    assert_eq!(err.to_string(),
               "Error: Type error: '-' expected Number, found \"x\".");
}
