use super::*;

#[test]
fn compile_is_default_and_allows_io() {
    assert_eq!(EvalMode::default(), EvalMode::Compile);
    assert!(EvalMode::Compile.allows_io());
}

#[test]
fn sandboxed_forbids_io() {
    assert!(!EvalMode::Sandboxed.allows_io());
}
