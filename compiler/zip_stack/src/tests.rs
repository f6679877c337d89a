use super::*;

/// Mirrors the shape of a nested grouping: one frame per level.
fn nesting_depth(levels: u32) -> u32 {
    ensure_sufficient_stack(|| {
        if levels == 0 {
            0
        } else {
            nesting_depth(levels - 1) + 1
        }
    })
}

#[test]
fn shallow_nesting_passes_through() {
    assert_eq!(nesting_depth(16), 16);
}

#[test]
fn deep_nesting_does_not_overflow() {
    assert_eq!(nesting_depth(200_000), 200_000);
}

#[test]
fn result_values_propagate() {
    let outcome: Result<u32, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(outcome, Err("boom".to_string()));
}
