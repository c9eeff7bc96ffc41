use super::*;

#[test]
fn test_ids_are_dense_from_zero() {
    for (i, spec) in FUNCTIONS.iter().enumerate() {
        assert_eq!(spec.id as usize, i, "{} out of place", spec.name);
    }
}

#[test]
fn test_arity_bounds() {
    assert!(FUNCTIONS.iter().all(|spec| spec.arity <= 2));
}

#[test]
fn test_known_entries() {
    assert_eq!(arity_of(0), Ok(0));
    assert_eq!(symbol_of(0), Ok("255"));
    assert_eq!(arity_of(2), Ok(1));
    assert_eq!(symbol_of(2), Ok("INV"));
    assert_eq!(arity_of(5), Ok(2));
    assert_eq!(symbol_of(5), Ok("AND"));
    assert_eq!(symbol_of(15), Ok("MIN"));
}

#[test]
fn test_lookup_returns_full_spec() {
    let spec = lookup(7).unwrap();
    assert_eq!(spec.name, "b_xor");
    assert_eq!(spec.arity, 2);
    assert_eq!(spec.symbol, "XOR");
}

#[test]
fn test_unknown_function() {
    assert_eq!(arity_of(16), Err(UnknownFunction { id: 16 }));
    assert_eq!(symbol_of(u32::MAX), Err(UnknownFunction { id: u32::MAX }));
}

#[test]
fn test_unknown_function_message() {
    let err = lookup(42).unwrap_err();
    assert_eq!(err.to_string(), "unknown function id 42 (table has 16 functions)");
}
