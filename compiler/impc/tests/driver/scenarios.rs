//! Whole programs that run to completion.

use pretty_assertions::assert_eq;

use crate::common::{
    final_table, program, run_program, run_symbols, run_with, table_count, TreeBuilder,
};
use imp_eval::EvalMode;
use imp_ir::build::{make_block_stmt, make_do_while, make_for, make_if, make_if_else, make_while};
use imp_ir::{BinaryOp, SharedInterner, StringInterner};
use impc::{FrontendOutput, RunOptions, RunOutcome};

#[test]
fn declare_then_increment() {
    // var x = 5;
    // x = x + 1;
    let interner = StringInterner::new();
    let mut t = TreeBuilder::new(&interner);
    t.at(1);
    let first = t.decl("x", Some(t.int(5)));
    t.at(2);
    let second = t.assign("x", t.bin(BinaryOp::Add, t.var("x"), t.int(1)));

    let result = run_program(program(vec![first, second]), &interner);

    assert_eq!(result.outcome, RunOutcome::Success);
    assert_eq!(
        result.stdout,
        "\
PROGRAM
  VAR_DECL(x)
    INT(5)
  ASSIGN(x)
    BINOP(+)
      IDENT(x)
      INT(1)
SYMBOL TABLE
name = x, value = 6, scope = 0
"
    );
    assert_eq!(result.stderr, "");
}

#[test]
fn inner_declaration_shadows_without_touching_outer() {
    // var x = 1;
    // { var x = 2; }
    let interner = StringInterner::new();
    let mut t = TreeBuilder::new(&interner);
    t.at(1);
    let outer = t.decl("x", Some(t.int(1)));
    t.at(2);
    let inner = t.decl("x", Some(t.int(2)));
    let block = make_block_stmt(t.block(vec![inner]));

    let result = run_program(program(vec![outer, block]), &interner);

    assert_eq!(result.outcome, RunOutcome::Success);
    assert_eq!(
        result.stdout,
        "\
PROGRAM
  VAR_DECL(x)
    INT(1)
  BLOCK
    VAR_DECL(x)
      INT(2)
SYMBOL TABLE
name = x, value = 1, scope = 0
SYMBOL TABLE
name = x, value = 1, scope = 0
"
    );
}

#[test]
fn symbol_table_printed_at_each_scope_exit() {
    // var x = 1;
    // { var y = 2; { x = 3; } x = 4; }
    // x = 5;
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let stmts = vec![
        t.decl("x", Some(t.int(1))),
        make_block_stmt(t.block(vec![
            t.decl("y", Some(t.int(2))),
            make_block_stmt(t.block(vec![t.assign("x", t.int(3))])),
            t.assign("x", t.int(4)),
        ])),
        t.assign("x", t.int(5)),
    ];

    let result = run_symbols(program(stmts), &interner);

    assert_eq!(result.outcome, RunOutcome::Success);
    assert_eq!(
        result.stdout,
        "\
SYMBOL TABLE
name = x, value = 3, scope = 0
SYMBOL TABLE
name = x, value = 4, scope = 0
SYMBOL TABLE
name = x, value = 5, scope = 0
"
    );
}

#[test]
fn branch_locals_are_gone_after_if() {
    // if (1) { var y = 1; } else { var y = 2; }
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let stmt = make_if_else(
        t.int(1),
        t.block(vec![t.decl("y", Some(t.int(1)))]),
        t.block(vec![t.decl("y", Some(t.int(2)))]),
        t.line(),
    );

    let result = run_symbols(program(vec![stmt]), &interner);

    assert_eq!(result.outcome, RunOutcome::Success);
    // One table when the taken branch closes, one at the end; `y` in neither.
    assert_eq!(result.stdout, "SYMBOL TABLE\nSYMBOL TABLE\n");
}

#[test]
fn integer_division_truncates() {
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let stmt = t.decl("q", Some(t.bin(BinaryOp::Div, t.int(7), t.int(2))));

    let result = run_symbols(program(vec![stmt]), &interner);

    assert_eq!(result.stdout, "SYMBOL TABLE\nname = q, value = 3, scope = 0\n");
}

#[test]
fn comparisons_store_zero_or_one() {
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let stmts = vec![
        t.decl("le", Some(t.bin(BinaryOp::LtEq, t.int(3), t.int(3)))),
        t.decl("eq", Some(t.bin(BinaryOp::Eq, t.int(2), t.int(3)))),
        t.decl("ne", Some(t.bin(BinaryOp::NotEq, t.int(2), t.int(3)))),
    ];

    let result = run_symbols(program(stmts), &interner);

    assert_eq!(
        result.stdout,
        "\
SYMBOL TABLE
name = le, value = 1, scope = 0
name = eq, value = 0, scope = 0
name = ne, value = 1, scope = 0
"
    );
}

#[test]
fn while_loop_computes_factorial() {
    // var n = 5; var f = 1;
    // while (n > 1) { f = f * n; n = n - 1; }
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let stmts = vec![
        t.decl("n", Some(t.int(5))),
        t.decl("f", Some(t.int(1))),
        make_while(
            t.bin(BinaryOp::Gt, t.var("n"), t.int(1)),
            t.block(vec![
                t.assign("f", t.bin(BinaryOp::Mul, t.var("f"), t.var("n"))),
                t.assign("n", t.bin(BinaryOp::Sub, t.var("n"), t.int(1))),
            ]),
            t.line(),
        ),
    ];

    let result = run_symbols(program(stmts), &interner);

    // Four iterations, each closing the body scope, plus the final table.
    assert_eq!(table_count(&result.stdout), 5);
    assert!(result.stdout.starts_with(
        "\
SYMBOL TABLE
name = n, value = 4, scope = 0
name = f, value = 5, scope = 0
"
    ));
    assert_eq!(
        final_table(&result.stdout),
        "\
SYMBOL TABLE
name = n, value = 1, scope = 0
name = f, value = 120, scope = 0
"
    );
}

#[test]
fn for_and_do_while_loops() {
    // var s = 0;
    // for (var i = 1; i <= 4; i = i + 1) { s = s + i; }
    // var d = 0;
    // do { d = d + 1; } while (d < 0);
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let stmts = vec![
        t.decl("s", Some(t.int(0))),
        make_for(
            Some(t.decl("i", Some(t.int(1)))),
            t.bin(BinaryOp::LtEq, t.var("i"), t.int(4)),
            Some(t.assign("i", t.bin(BinaryOp::Add, t.var("i"), t.int(1)))),
            t.block(vec![t.assign("s", t.bin(BinaryOp::Add, t.var("s"), t.var("i")))]),
            t.line(),
        ),
        t.decl("d", Some(t.int(0))),
        make_do_while(
            t.block(vec![t.assign("d", t.bin(BinaryOp::Add, t.var("d"), t.int(1)))]),
            t.bin(BinaryOp::Lt, t.var("d"), t.int(0)),
            t.line(),
        ),
    ];

    let result = run_symbols(program(stmts), &interner);

    // Four `for` bodies and one `do` body.
    assert_eq!(table_count(&result.stdout), 6);
    assert_eq!(
        final_table(&result.stdout),
        "\
SYMBOL TABLE
name = s, value = 10, scope = 0
name = i, value = 5, scope = 0
name = d, value = 1, scope = 0
"
    );
}

#[test]
fn legacy_chain_mode_skips_after_nested_control_flow() {
    // var a = 0;
    // { if (1) { a = 1; } a = 2; }
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let build = || {
        program(vec![
            t.decl("a", Some(t.int(0))),
            make_block_stmt(t.block(vec![
                make_if(t.int(1), t.block(vec![t.assign("a", t.int(1))]), t.line()),
                t.assign("a", t.int(2)),
            ])),
        ])
    };
    let symbols_only = RunOptions::default().with_dumps(impc::DumpSelection::SymbolsOnly);

    let sequential = run_with(FrontendOutput::parsed(build()), &interner, &symbols_only);
    assert_eq!(
        final_table(&sequential.stdout),
        "SYMBOL TABLE\nname = a, value = 2, scope = 0\n"
    );

    let legacy = run_with(
        FrontendOutput::parsed(build()),
        &interner,
        &symbols_only.with_mode(EvalMode::LegacyChain),
    );
    assert_eq!(
        final_table(&legacy.stdout),
        "SYMBOL TABLE\nname = a, value = 1, scope = 0\n"
    );
}

#[test]
fn dumps_can_be_turned_off() {
    let interner = StringInterner::new();
    let t = TreeBuilder::new(&interner);
    let options = RunOptions::default().with_dumps(impc::DumpSelection::Off);

    let result = run_with(
        FrontendOutput::parsed(program(vec![t.decl("x", None)])),
        &interner,
        &options,
    );

    assert_eq!(result.outcome, RunOutcome::Success);
    assert_eq!(result.stdout, "");
}

#[test]
fn tree_built_on_another_thread() {
    let interner = SharedInterner::new();
    let parser_side = interner.clone();
    let tree = std::thread::spawn(move || {
        let t = TreeBuilder::new(&parser_side);
        program(vec![t.decl("answer", Some(t.int(42)))])
    })
    .join()
    .unwrap();

    let result = run_symbols(tree, &interner);

    assert_eq!(result.stdout, "SYMBOL TABLE\nname = answer, value = 42, scope = 0\n");
}
