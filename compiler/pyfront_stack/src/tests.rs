use super::ensure_sufficient_stack;

#[test]
fn returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 42), 42);
    let parsed: Result<i32, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(parsed, Ok(7));
}

#[test]
fn deep_recursion_does_not_overflow() {
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(100_000), 100_000);
}
