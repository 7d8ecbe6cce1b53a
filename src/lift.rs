use crate::parser::Parser;
use crate::result::{ParseResult, Success};

/// Runs a tuple of parsers in order and combines their values with an N-ary function
///
/// This is the flat form of applying a curried function through nested
/// [`ap`](fn@crate::ap) calls: parsers run left to right on the threaded input and
/// the first failure is returned without running the rest.
pub struct Lift<F, Ps> {
    function: F,
    parsers: Ps,
}

impl<F, Ps> Lift<F, Ps> {
    pub fn new(function: F, parsers: Ps) -> Self {
        Lift { function, parsers }
    }
}

macro_rules! impl_lift {
    ($($parser_ty:ident $parser:ident $value:ident),+) => {
        impl<'code, F, R, $($parser_ty),+> Parser<'code> for Lift<F, ($($parser_ty,)+)>
        where
            $($parser_ty: Parser<'code>,)+
            F: Fn($($parser_ty::Output),+) -> R,
        {
            type Output = R;

            fn parse(&self, input: &'code str) -> ParseResult<'code, R> {
                let ($($parser,)+) = &self.parsers;
                let rest = input;
                $(let Success { value: $value, rest } = $parser.parse(rest)?;)+
                Ok(Success::new((self.function)($($value),+), rest))
            }
        }
    };
}

impl_lift!(PA pa a, PB pb b);
impl_lift!(PA pa a, PB pb b, PC pc c);
impl_lift!(PA pa a, PB pb b, PC pc c, PD pd d);
impl_lift!(PA pa a, PB pb b, PC pc c, PD pd d, PE pe e);

/// Combine two parsers with a binary function
pub fn lift2<'code, F, R, PA, PB>(function: F, pa: PA, pb: PB) -> Lift<F, (PA, PB)>
where
    PA: Parser<'code>,
    PB: Parser<'code>,
    F: Fn(PA::Output, PB::Output) -> R,
{
    Lift::new(function, (pa, pb))
}

/// Combine three parsers with a ternary function
pub fn lift3<'code, F, R, PA, PB, PC>(
    function: F,
    pa: PA,
    pb: PB,
    pc: PC,
) -> Lift<F, (PA, PB, PC)>
where
    PA: Parser<'code>,
    PB: Parser<'code>,
    PC: Parser<'code>,
    F: Fn(PA::Output, PB::Output, PC::Output) -> R,
{
    Lift::new(function, (pa, pb, pc))
}

/// Combine four parsers with a quaternary function
pub fn lift4<'code, F, R, PA, PB, PC, PD>(
    function: F,
    pa: PA,
    pb: PB,
    pc: PC,
    pd: PD,
) -> Lift<F, (PA, PB, PC, PD)>
where
    PA: Parser<'code>,
    PB: Parser<'code>,
    PC: Parser<'code>,
    PD: Parser<'code>,
    F: Fn(PA::Output, PB::Output, PC::Output, PD::Output) -> R,
{
    Lift::new(function, (pa, pb, pc, pd))
}

/// Combine five parsers with a quinary function
pub fn lift5<'code, F, R, PA, PB, PC, PD, PE>(
    function: F,
    pa: PA,
    pb: PB,
    pc: PC,
    pd: PD,
    pe: PE,
) -> Lift<F, (PA, PB, PC, PD, PE)>
where
    PA: Parser<'code>,
    PB: Parser<'code>,
    PC: Parser<'code>,
    PD: Parser<'code>,
    PE: Parser<'code>,
    F: Fn(PA::Output, PB::Output, PC::Output, PD::Output, PE::Output) -> R,
{
    Lift::new(function, (pa, pb, pc, pd, pe))
}
