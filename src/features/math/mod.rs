pub mod number_theory;

pub use number_theory::{MathError, fibonacci, gcd, hcf, is_prime, lcm, lcm_two};
