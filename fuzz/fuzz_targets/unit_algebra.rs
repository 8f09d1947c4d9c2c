//! Fuzz the unit algebra: random operation chains must keep exact
//! exponents, and compatibility must gate conversion.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use dimensa_core::{convert, inv, mul, pow, scale, unity, BaseDimension, ExactRational, Unit};

#[derive(Arbitrary, Debug)]
enum Op {
    Base(u8),
    Scale(f64),
    Mul(u8),
    Inv,
    Pow(i8, u8),
}

fuzz_target!(|input: (Vec<Op>, f64)| {
    let (ops, quantity) = input;
    let mut stack: Vec<Unit> = vec![unity()];

    for op in ops.into_iter().take(16) {
        let top = *stack.last().unwrap_or(&unity());
        let next = match op {
            Op::Base(i) => {
                let axis = BaseDimension::all()[i as usize % BaseDimension::COUNT];
                Unit::base(axis)
            }
            Op::Scale(f) => scale(f, &top),
            Op::Mul(i) => mul(&top, &stack[i as usize % stack.len()]),
            Op::Inv => inv(&top),
            Op::Pow(n, d) => {
                // Small powers keep exponents inside i64 over 16 steps
                let r = ExactRational::over((n % 3) as i64, (d % 3) as i64 + 1);
                let powered = pow(&top, r);
                assert_eq!(powered.dimension(), top.dimension().pow(r));
                powered
            }
        };
        assert!(mul(&next, &inv(&next)).dimension().is_dimensionless());
        stack.push(next);
    }

    let a = stack[0];
    for b in &stack {
        assert_eq!(convert(quantity, &a, b).is_some(), a.is_compatible(b));
    }
});
