use cas_expr::symbolic::expr::{add, constant, multiply, variable, Expr};
use proptest::prelude::*;

/// Expressions with small integer constants, up to three levels deep.
///
/// Integer constants keep every evaluation at an integer point exact, so values can be compared
/// with `==` after rewriting.
pub fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (-3i32..=3).prop_map(|n| constant(n as f64)),
        Just(variable()),
    ];

    leaf.prop_recursive(
        3, // levels deep
        32, // max size
        2, // items per collection
        |inner| prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| add(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| multiply(l, r)),
            // bias towards the shapes the linear term rules look for
            (-3i32..=3).prop_map(|n| multiply(constant(n as f64), variable())),
        ]
    )
}
