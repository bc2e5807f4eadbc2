/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// `2+3 = 5`
    /// `2^10 = 1024`
    /// `1/0 = inf`
    /// etc.
    FoldConstants,

    /// `sin(0) = 0`
    /// `exp(0) = 1`
    /// etc.
    FoldFunction,

    /// `-(0) = 0`
    /// `-(2) = -2`
    NegateNumber,

    /// `--a = a`
    DoubleNegation,

    /// `2+a = a+2`
    /// `2*a = a*2`
    MoveLiteralRight,

    /// `a+0 = a`
    /// `0+a = a`
    AddZero,

    /// `a+(-2) = a-2`
    /// `a+(-b) = a-b`
    AddNegative,

    /// `(-a)+b = b-a`
    AddNegativeFirst,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `a-(-2) = a+2`
    SubtractNegative,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `(-a)*b = -(a*b)`
    /// `a*(-b) = -(a*b)`
    MultiplyNegative,

    /// `(2/a)*b = 2*(b/a)`
    /// `a*(2/b) = 2*(a/b)`
    /// `(2/a)*3 = (2*3)/a`
    ExtractNumerator,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,

    /// `(-a)/b = -(a/b)`
    /// `a/(-b) = -(a/b)`
    DivideNegative,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `(x+a)+b = (b+a)+x`
    /// `(x*a)*b = (b*a)*x`
    RegroupVariable,

    /// `(a-b)+c = (a+c)-b`
    RegroupDifferencePlus,

    /// `(a-b)-c = a-(b+c)`
    RegroupDifferenceMinus,

    /// `(a+b)-c = a-(c-b)`
    RegroupSumMinus,
}
