//! Functions to construct [`Integer`]s, [`Rational`]s, [`Float`]s, and [`Complex`] numbers from
//! various types.

use rug::{
    float::ParseFloatError,
    integer::ParseIntegerError,
    Assign,
    Complex,
    Float,
    Integer,
    Rational,
};

/// The number of bits of precision to use when computing values.
pub const PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates an [`Integer`] from a string slice of decimal digits.
pub fn int_from_str(s: &str) -> Result<Integer, ParseIntegerError> {
    Integer::from_str_radix(s, 10)
}

/// Creates a [`Rational`] with the given numerator and denominator. **Panics if the denominator
/// is zero.**
pub fn rational(numerator: i64, denominator: i64) -> Rational {
    Rational::from((numerator, denominator))
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Creates a [`Float`] from a string slice. Literals such as `.5` and `5.` are accepted.
pub fn float_from_str(s: &str) -> Result<Float, ParseFloatError> {
    let mut owned = String::with_capacity(s.len() + 2);
    if s.starts_with('.') {
        owned.push('0');
    }
    owned.push_str(s);
    if s.ends_with('.') {
        owned.push('0');
    }
    Float::parse(&owned).map(|parsed| Float::with_val(PRECISION, parsed))
}

/// Creates a [`Complex`] with the given value.
pub fn complex<T>(n: T) -> Complex
where
    Complex: Assign<T>,
{
    Complex::with_val(PRECISION, n)
}

/// The largest trial divisor used by [`factorize`].
const TRIAL_DIVISION_LIMIT: u32 = 1_000_000;

/// The largest magnitude of an integer whose divisors are listed by [`divisors`].
const MAX_DIVISORS_OF: u64 = 1_000_000_000_000;

/// Returns the prime factorization of the absolute value of the given integer, as a list of
/// `(prime, multiplicity)` pairs in ascending order of primes.
///
/// Trial division stops at 10^6. If a cofactor larger than that remains, it is reported as a
/// single factor with multiplicity 1, whether or not it is prime.
pub fn factorize(n: &Integer) -> Vec<(Integer, u32)> {
    let mut n = n.clone().abs();
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }

    let mut divisor = 2u32;
    while divisor <= TRIAL_DIVISION_LIMIT && Integer::from(divisor) * divisor <= n {
        let mut count = 0;
        while n.is_divisible_u(divisor) {
            n /= divisor;
            count += 1;
        }
        if count > 0 {
            factors.push((int(divisor), count));
        }
        divisor += if divisor == 2 { 1 } else { 2 };
    }

    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

/// Returns the positive divisors of the given integer in ascending order.
///
/// Returns [`None`] if the integer is zero, or too large to be factored completely.
pub fn divisors(n: &Integer) -> Option<Vec<Integer>> {
    if *n == 0 || n.clone().abs() > MAX_DIVISORS_OF {
        return None;
    }

    let mut divisors = vec![int(1)];
    for (prime, count) in factorize(n) {
        let mut next = Vec::with_capacity(divisors.len() * (count as usize + 1));
        for divisor in &divisors {
            let mut power = int(1);
            for _ in 0..=count {
                next.push(Integer::from(divisor * &power));
                power *= &prime;
            }
        }
        divisors = next;
    }
    divisors.sort();
    Some(divisors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn prime_factorization() {
        assert_eq!(factorize(&int(360)), vec![(int(2), 3), (int(3), 2), (int(5), 1)]);
        assert_eq!(factorize(&int(-49)), vec![(int(7), 2)]);
        assert!(factorize(&int(1)).is_empty());
    }

    #[test]
    fn divisors_ascending() {
        let found = divisors(&int(-12)).unwrap();
        assert_eq!(found, [1, 2, 3, 4, 6, 12].map(int).to_vec());
        assert_eq!(divisors(&int(0)), None);
    }

    #[test]
    fn decimal_literals() {
        assert_float_absolute_eq!(float_from_str("3.25").unwrap().to_f64(), 3.25);
        assert_float_absolute_eq!(float_from_str(".5").unwrap().to_f64(), 0.5);
        assert_float_absolute_eq!(float_from_str("7.").unwrap().to_f64(), 7.0);
    }

    #[test]
    fn rational_is_reduced() {
        assert_eq!(rational(6, -4), Rational::from((-3, 2)));
    }

    #[test]
    fn big_integer() {
        let n = int_from_str("123456789012345678901234567890").unwrap();
        assert_eq!(n.to_string(), "123456789012345678901234567890");
    }
}
