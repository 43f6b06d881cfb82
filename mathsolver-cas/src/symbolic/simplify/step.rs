use std::fmt;

/// Represents a single rule applied while bringing an expression into canonical form, or while
/// applying trigonometric identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a + (b + c) = a + b + c`
    FlattenSum,

    /// `a*(b*c) = a*b*c`
    FlattenProduct,

    /// Sums and products of a single operand are the operand itself.
    Unwrap,

    /// `0 + a = a`
    AddZero,

    /// `2 + 3 = 5`
    AddNumbers,

    /// `2a + 3a = 5a`
    CombineLikeTerms,

    /// `0*a = 0`
    MultiplyZero,

    /// `1*a = a`
    MultiplyOne,

    /// `2*3 = 6`
    MultiplyNumbers,

    /// `a^b*a^c = a^(b+c)`
    CombineLikeFactors,

    /// `2(a + b) = 2a + 2b`
    DistributeNumber,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `1^a = 1`
    OnePower,

    /// `0^a = 0`
    ZeroPower,

    /// `2^3 = 8`
    PowerNumbers,

    /// `sqrt(8) = 2*sqrt(2)`
    ExtractRoot,

    /// `(-4)^(1/2) = (-1)^(1/2)*4^(1/2)`
    NegativeBase,

    /// `(a^b)^c = a^(b*c)`
    PowerOfPower,

    /// `(a*b)^c = a^c*b^c`
    DistributePower,

    /// `i^2 = -1`
    ImaginaryPower,

    /// `E^log(a) = a`
    ExpLog,

    /// `log(1) = 0`, `log(E) = 1`
    LogValue,

    /// `abs(-2) = 2`
    AbsValue,

    /// `sin(pi/6) = 1/2`
    TrigValue,

    /// `sin(-a) = -sin(a)`, `cos(-a) = cos(a)`
    TrigParity,

    /// `asin(1) = pi/2`
    InverseTrigValue,

    /// `sin(0.5) = 0.479425538604203`
    EvaluateCall,

    /// `sin(a)^2 + cos(a)^2 = 1`
    Pythagorean,

    /// `1 - sin(a)^2 = cos(a)^2`
    PythagoreanComplement,

    /// `sin(a)/cos(a) = tan(a)`
    Tangent,

    /// `tan(a)*cos(a) = sin(a)`
    TangentCosine,

    /// `2*sin(a)*cos(a) = sin(2a)`
    DoubleAngleSine,

    /// `cos(a)^2 - sin(a)^2 = cos(2a)`
    DoubleAngleCosine,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::FlattenSum => "a + (b + c) = a + b + c",
            Self::FlattenProduct => "a*(b*c) = a*b*c",
            Self::Unwrap => "unwrap single operand",
            Self::AddZero => "0 + a = a",
            Self::AddNumbers => "add numbers",
            Self::CombineLikeTerms => "combine like terms",
            Self::MultiplyZero => "0*a = 0",
            Self::MultiplyOne => "1*a = a",
            Self::MultiplyNumbers => "multiply numbers",
            Self::CombineLikeFactors => "a^b*a^c = a^(b + c)",
            Self::DistributeNumber => "n*(a + b) = n*a + n*b",
            Self::PowerZero => "a^0 = 1",
            Self::PowerOne => "a^1 = a",
            Self::OnePower => "1^a = 1",
            Self::ZeroPower => "0^a = 0",
            Self::PowerNumbers => "evaluate numeric power",
            Self::ExtractRoot => "extract perfect powers from root",
            Self::NegativeBase => "(-a)^b = (-1)^b*a^b",
            Self::PowerOfPower => "(a^b)^c = a^(b*c)",
            Self::DistributePower => "(a*b)^c = a^c*b^c",
            Self::ImaginaryPower => "i^2 = -1",
            Self::ExpLog => "exp(log(a)) = a",
            Self::LogValue => "evaluate logarithm",
            Self::AbsValue => "evaluate absolute value",
            Self::TrigValue => "evaluate trigonometric function at special angle",
            Self::TrigParity => "odd / even symmetry of function",
            Self::InverseTrigValue => "evaluate inverse trigonometric function",
            Self::EvaluateCall => "evaluate function numerically",
            Self::Pythagorean => "sin(a)^2 + cos(a)^2 = 1",
            Self::PythagoreanComplement => "1 - sin(a)^2 = cos(a)^2",
            Self::Tangent => "sin(a)/cos(a) = tan(a)",
            Self::TangentCosine => "tan(a)*cos(a) = sin(a)",
            Self::DoubleAngleSine => "2*sin(a)*cos(a) = sin(2*a)",
            Self::DoubleAngleCosine => "cos(a)^2 - sin(a)^2 = cos(2*a)",
        };
        write!(f, "{}", description)
    }
}
