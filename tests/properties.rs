//! Property-based tests for the lexer, parser, evaluator and graph exporter.
//!
//! These check that:
//! 1. The lexer is total and deterministic on arbitrary input
//! 2. The whole pipeline never panics
//! 3. Well-formed programs evaluate deterministically
//! 4. The exported graph mirrors the AST exactly

use proptest::prelude::*;
use scoobylang::{
    ast::{Node, Program},
    ast_to_graph, evaluate, parse, run, tokenize,
};

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random ASCII strings, including characters the lexer rejects.
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,300}").unwrap()
}

/// Generate token soup that looks like the language.
fn source_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(source_token(), 0..60).prop_map(|tokens| tokens.join(" "))
}

fn source_token() -> impl Strategy<Value = String> {
    prop_oneof![Just("int".to_string()),
                Just("print".to_string()),
                Just("x".to_string()),
                Just("y".to_string()),
                Just("=".to_string()),
                Just(";".to_string()),
                Just("(".to_string()),
                Just(")".to_string()),
                Just("+".to_string()),
                Just("-".to_string()),
                Just("*".to_string()),
                Just("/".to_string()),
                Just("\"text\"".to_string()),
                Just("\n".to_string()),
                Just("// comment\n".to_string()),
                (0u32..1000).prop_map(|n| n.to_string())]
}

/// Generate an arithmetic expression over `a`, `b` and small literals.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![Just("a".to_string()),
                           Just("b".to_string()),
                           (0u32..50).prop_map(|n| n.to_string())];
    leaf.prop_recursive(4, 32, 2, |inner| {
            (inner.clone(), prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")], inner)
                .prop_map(|(l, op, r)| format!("({l} {op} {r})"))
        })
}

/// Generate a well-formed program using only declared variables.
fn valid_program() -> impl Strategy<Value = String> {
    prop::collection::vec(expression(), 1..8).prop_map(|exprs| {
                                                   let mut source = String::from("int a = 3;\nint b = 7;\n");
                                                   for expr in exprs {
                                                       source.push_str(&format!("a = {expr};\nprint a;\n"));
                                                   }
                                                   source
                                               })
}

fn count_nodes(node: Node<'_>) -> usize {
    1 + node.children().into_iter().map(count_nodes).sum::<usize>()
}

fn program_of(source: &str) -> Option<Program> {
    parse(source).ok().map(|analysis| analysis.program)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// The lexer never panics and always gives the same answer.
    #[test]
    fn lexer_is_total_and_deterministic(source in arbitrary_source_string()) {
        let first = tokenize(&source);
        let second = tokenize(&source);
        prop_assert_eq!(first, second);
    }

    /// Every token and error position lies inside the source.
    #[test]
    fn positions_are_within_the_source(source in source_like_string()) {
        let lines = source.split('\n').count();
        let lexed = tokenize(&source);
        for token in &lexed.tokens {
            prop_assert!(token.line >= 1 && token.line <= lines);
            prop_assert!(token.column >= 1);
        }
    }

    /// Full pipeline: lex -> parse -> eval should never panic.
    #[test]
    fn full_pipeline_never_panics(source in source_like_string()) {
        let _ = run(&source);
    }

    /// Valid programs evaluate deterministically.
    #[test]
    fn evaluation_is_deterministic(source in valid_program()) {
        let program = program_of(&source);
        prop_assert!(program.is_some(), "failed to parse:\n{}", source);
        let program = program.unwrap();
        prop_assert_eq!(evaluate(&program), evaluate(&program));
    }

    /// The graph has one node per AST node and one edge per parent-child link.
    #[test]
    fn graph_mirrors_the_tree(source in valid_program()) {
        let program = program_of(&source).unwrap();
        let graph = ast_to_graph(&program);
        let nodes = count_nodes(Node::Program(&program));

        prop_assert_eq!(graph.nodes.len(), nodes);
        prop_assert_eq!(graph.edges.len(), nodes - 1);

        let mut children: Vec<_> = graph.edges.iter().map(|e| e.child).collect();
        children.sort_unstable();
        children.dedup();
        prop_assert_eq!(children.len(), nodes - 1);
        prop_assert!(!children.contains(&0));
    }
}
