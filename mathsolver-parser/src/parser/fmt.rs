use std::fmt::{Display, Formatter, Result};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Writes `\left(` and `\right)` around the LaTeX form of the given value.
pub fn fmt_paren<T: Latex + ?Sized>(f: &mut Formatter, value: &T) -> Result {
    write!(f, "\\left(")?;
    value.fmt_latex(f)?;
    write!(f, "\\right)")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Half;

    impl Latex for Half {
        fn fmt_latex(&self, f: &mut Formatter) -> Result {
            write!(f, "\\frac{{1}}{{2}}")
        }
    }

    #[test]
    fn display_wrapper() {
        assert_eq!(Half.as_display().to_string(), "\\frac{1}{2}");
    }

    #[test]
    fn parenthesized() {
        struct Wrapped;

        impl Latex for Wrapped {
            fn fmt_latex(&self, f: &mut Formatter) -> Result {
                fmt_paren(f, &Half)
            }
        }

        assert_eq!(Wrapped.as_display().to_string(), "\\left(\\frac{1}{2}\\right)");
    }
}
