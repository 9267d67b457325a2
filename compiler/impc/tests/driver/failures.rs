//! Runs that stop early: fatal runtime errors and frontend failures.

use pretty_assertions::assert_eq;

use crate::common::{program, run_program, run_with, TreeBuilder};
use imp_eval::EvalErrorKind;
use imp_ir::build::{make_block_stmt, make_if_else};
use imp_ir::{BinaryOp, StringInterner};
use impc::{FrontendOutput, RunOptions, RunOutcome};

fn runtime_error(outcome: RunOutcome) -> EvalErrorKind {
    match outcome {
        RunOutcome::RuntimeFailed(err) => err.kind,
        other => panic!("expected a runtime failure, got {other:?}"),
    }
}

#[test]
fn division_by_zero_prints_no_dump() {
    // var x = 10 / 0;
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let stmt = t.decl("x", Some(t.bin(BinaryOp::Div, t.int(10), t.int(0))));

    let result = run_program(program(vec![stmt]), &interner);

    assert_eq!(result.outcome.status(), 1);
    assert_eq!(runtime_error(result.outcome), EvalErrorKind::DivisionByZero);
    assert_eq!(result.stdout, "");
    assert_eq!(result.stderr, "error[E6004]: division by zero\n  --> line 1\n");
}

#[test]
fn assignment_to_undeclared_variable() {
    // x = 5;
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);

    let result = run_program(program(vec![t.assign("x", t.int(5))]), &interner);

    assert_eq!(
        runtime_error(result.outcome),
        EvalErrorKind::UndeclaredAssignment {
            name: "x".to_string()
        }
    );
    assert_eq!(
        result.stderr,
        "\
error[E6002]: assignment to undeclared variable `x`
  --> line 1
  = note: declare it first with `var x;`
"
    );
}

#[test]
fn redeclaration_reports_second_declaration() {
    let interner = StringInterner::new();
    let mut t = TreeBuilder::new(&interner);
    t.at(1);
    let first = t.decl("x", Some(t.int(1)));
    t.at(4);
    let second = t.decl("x", Some(t.int(2)));

    let result = run_program(program(vec![first, second]), &interner);

    assert_eq!(
        runtime_error(result.outcome),
        EvalErrorKind::Redeclaration {
            name: "x".to_string()
        }
    );
    assert!(result.stderr.starts_with("error[E6001]"));
    assert!(result.stderr.contains("--> line 4"));
    assert_eq!(result.stdout, "");
}

#[test]
fn undefined_variable_in_expression() {
    let interner = StringInterner::new();
    let mut t = TreeBuilder::new(&interner);
    t.at(3);
    let stmt = t.decl("a", Some(t.bin(BinaryOp::Add, t.var("b"), t.int(1))));

    let result = run_program(program(vec![stmt]), &interner);

    assert_eq!(
        runtime_error(result.outcome),
        EvalErrorKind::UndefinedVariable {
            name: "b".to_string()
        }
    );
    assert!(result.stderr.starts_with("error[E6003]: undefined variable `b`\n  --> line 3\n"));
}

#[test]
fn overflow_is_fatal() {
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let stmt = t.decl("big", Some(t.bin(BinaryOp::Mul, t.int(i64::MAX), t.int(2))));

    let result = run_program(program(vec![stmt]), &interner);

    assert_eq!(
        runtime_error(result.outcome),
        EvalErrorKind::IntegerOverflow {
            operation: "multiplication"
        }
    );
    assert!(result.stderr.starts_with("error[E6005]"));
}

#[test]
fn error_after_progress_still_prints_nothing() {
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let stmts = vec![
        t.decl("ok", Some(t.int(1))),
        t.assign("ok", t.bin(BinaryOp::Div, t.var("ok"), t.int(0))),
    ];

    let result = run_program(program(stmts), &interner);

    assert!(!result.outcome.is_success());
    assert_eq!(result.stdout, "");
}

#[test]
fn error_after_closed_scope_prints_no_table() {
    // var x = 1;
    // { x = 2; }
    // x = x / 0;
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let stmts = vec![
        t.decl("x", Some(t.int(1))),
        make_block_stmt(t.block(vec![t.assign("x", t.int(2))])),
        t.assign("x", t.bin(BinaryOp::Div, t.var("x"), t.int(0))),
    ];

    let result = run_program(program(stmts), &interner);

    assert_eq!(runtime_error(result.outcome), EvalErrorKind::DivisionByZero);
    assert_eq!(result.stdout, "");
}

#[test]
fn branch_local_is_undefined_after_if() {
    // if (1) { var y = 1; } else { var y = 2; }
    // var z = y;
    let interner = StringInterner::new();
    let mut t = TreeBuilder::new(&interner);
    t.at(1);
    let branch = make_if_else(
        t.int(1),
        t.block(vec![t.decl("y", Some(t.int(1)))]),
        t.block(vec![t.decl("y", Some(t.int(2)))]),
        t.line(),
    );
    t.at(2);
    let read = t.decl("z", Some(t.var("y")));

    let result = run_program(program(vec![branch, read]), &interner);

    assert_eq!(
        runtime_error(result.outcome),
        EvalErrorKind::UndefinedVariable {
            name: "y".to_string()
        }
    );
    assert!(result.stderr.starts_with("error[E6003]: undefined variable `y`\n  --> line 2\n"));
    assert_eq!(result.stdout, "");
}

#[test]
fn syntax_failure_skips_evaluation() {
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    // Would divide by zero if it ran.
    let frontend = FrontendOutput {
        program: Some(program(vec![t.decl("x", Some(t.bin(BinaryOp::Div, t.int(1), t.int(0))))])),
        syntax_failed: true,
        semantic_failed: false,
    };

    let result = run_with(frontend, &interner, &RunOptions::default());

    assert_eq!(result.outcome, RunOutcome::FrontendFailed);
    assert_eq!(result.outcome.status(), 1);
    assert_eq!(result.stdout, "");
    assert_eq!(result.stderr, "error[E1001]: syntax error\n  = note: evaluation skipped\n");
}

#[test]
fn semantic_failure_skips_evaluation() {
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let frontend = FrontendOutput {
        program: Some(program(vec![t.decl("x", None)])),
        syntax_failed: false,
        semantic_failed: true,
    };

    let result = run_with(frontend, &interner, &RunOptions::default());

    assert_eq!(result.outcome, RunOutcome::FrontendFailed);
    assert_eq!(result.stdout, "");
    assert!(result.stderr.starts_with("error[E2001]: semantic error"));
}

#[test]
fn syntax_failure_without_tree() {
    let interner = StringInterner::new();
    let frontend = FrontendOutput {
        program: None,
        syntax_failed: true,
        semantic_failed: false,
    };

    let result = run_with(frontend, &interner, &RunOptions::default());

    assert_eq!(result.outcome, RunOutcome::FrontendFailed);
}
