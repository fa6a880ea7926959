//! Function-call table for the infix front end.

use calc_ir::Op;

/// A callable extended operator.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Callee {
    pub op: Op,
    pub min_args: usize,
    pub max_args: usize,
}

impl Callee {
    const fn fixed(op: Op) -> Self {
        Callee {
            op,
            min_args: op.arity(),
            max_args: op.arity(),
        }
    }
}

/// Look up a call target by name. Names are case-sensitive.
///
/// `rand` resolves so the parser can report it as unimplemented rather
/// than unknown.
pub(crate) fn lookup(name: &str) -> Option<Callee> {
    let callee = match name {
        "abs" => Callee::fixed(Op::Abs),
        "binomial" => Callee::fixed(Op::Binomial),
        "ceil" => Callee::fixed(Op::Ceil),
        "denom" => Callee::fixed(Op::Denom),
        "div" => Callee::fixed(Op::Div),
        // Modulus is optional.
        "exp" => Callee {
            op: Op::Exp,
            min_args: 2,
            max_args: 3,
        },
        "floor" => Callee::fixed(Op::Floor),
        "frac" => Callee::fixed(Op::Frac),
        "gcd" => Callee::fixed(Op::Gcd),
        "inv" => Callee::fixed(Op::Inv),
        "mod" => Callee::fixed(Op::Mod),
        "modinv" => Callee::fixed(Op::ModInverse),
        "mulrange" => Callee::fixed(Op::MulRange),
        "num" => Callee::fixed(Op::Num),
        "rand" => Callee::fixed(Op::Rand),
        "trunc" => Callee::fixed(Op::Trunc),
        _ => return None,
    };
    Some(callee)
}
