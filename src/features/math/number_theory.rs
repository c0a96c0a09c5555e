use num_bigint::BigUint;
use num_traits::{One, Zero};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("input must not be empty")]
    EmptyInput,
}

/// First `n` terms starting 0, 1. Terms are exact at any length.
pub fn fibonacci(n: u64) -> Vec<BigUint> {
    let mut series = Vec::with_capacity(n.min(4096) as usize);
    let (mut a, mut b) = (BigUint::zero(), BigUint::one());
    for _ in 0..n {
        let next = &a + &b;
        series.push(std::mem::replace(&mut a, std::mem::replace(&mut b, next)));
    }
    series
}

pub fn is_prime(value: i64) -> bool {
    if value < 2 {
        return false;
    }

    let mut divisor = 2i64;
    while divisor <= value / divisor {
        if value % divisor == 0 {
            return false;
        }
        divisor += 1;
    }

    true
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn hcf(values: &[u64]) -> Result<u64, MathError> {
    let (first, rest) = values.split_first().ok_or(MathError::EmptyInput)?;
    Ok(rest.iter().fold(*first, |acc, value| gcd(acc, *value)))
}

pub fn lcm_two(a: &BigUint, b: &BigUint) -> BigUint {
    let divisor = big_gcd(a.clone(), b.clone());
    if divisor.is_zero() {
        return BigUint::zero();
    }
    a / &divisor * b
}

pub fn lcm(values: &[u64]) -> Result<BigUint, MathError> {
    let (first, rest) = values.split_first().ok_or(MathError::EmptyInput)?;
    Ok(rest.iter().fold(BigUint::from(*first), |acc, value| {
        lcm_two(&acc, &BigUint::from(*value))
    }))
}

fn big_gcd(mut a: BigUint, mut b: BigUint) -> BigUint {
    while !b.is_zero() {
        let remainder = &a % &b;
        a = std::mem::replace(&mut b, remainder);
    }
    a
}
