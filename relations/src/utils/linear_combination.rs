#![allow(clippy::suspicious_arithmetic_impl)]

use ark_ff::Field;
use ark_std::{
    ops::{Add, AddAssign, Deref, Mul, MulAssign, Neg, Sub},
    vec,
    vec::Vec,
};
use core::cmp::Ordering;

use super::variable::Variable;

/// A linear combination of variables according to associated coefficients.
///
/// Terms are kept sorted by [`Variable`] and each variable appears at most
/// once, which lets two combinations be merged in a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinearCombination<F: Field>(pub Vec<(F, Variable)>);

/// Generate a `LinearCombination` from arithmetic expressions involving
/// `Variable`s.
#[macro_export]
macro_rules! lc {
    // Empty input
    () => { $crate::r1cs::LinearCombination::zero() };

    // List of (coeff, var) pairs: lc![(a, b), (c, d), ...]
    ($(($coeff:expr, $var:expr)),+ $(,)?) => { $crate::r1cs::LinearCombination::from_sum_coeff_vars(&[$(($coeff, $var)),*]) };

    // List of variables: lc![a, b, c, ...]
    ($($var:expr),+ $(,)?) => { $crate::r1cs::LinearCombination::sum_vars(&[$($var),*]) };
}

impl<F: Field> LinearCombination<F> {
    /// Create a new empty linear combination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty linear combination.
    pub fn zero() -> Self {
        Self::new()
    }

    /// Restore the sorted, duplicate-free form by combining the coefficients
    /// of identical variables.
    pub fn compactify(&mut self) {
        if self.0.len() <= 1 {
            return;
        }
        self.0.sort_unstable_by_key(|e| e.1);

        let mut write_index = 0;
        for read_index in 1..self.0.len() {
            if self.0[write_index].1 == self.0[read_index].1 {
                let add_coeff = self.0[read_index].0;
                self.0[write_index].0 += add_coeff;
            } else {
                write_index += 1;
                self.0[write_index] = self.0[read_index];
            }
        }
        self.0.truncate(write_index + 1);
    }

    /// Create a new linear combination from the sum of many variables.
    pub fn sum_vars(variables: &[Variable]) -> Self {
        let mut lc = LinearCombination(variables.iter().map(|&var| (F::one(), var)).collect());
        lc.0.retain(|(_, var)| !var.is_zero());
        lc.compactify();
        lc
    }

    /// Create a new linear combination from the sum of many (coefficient, variable) pairs.
    pub fn from_sum_coeff_vars(terms: &[(F, Variable)]) -> Self {
        let mut lc = LinearCombination(terms.to_vec());
        lc.0.retain(|(_, var)| !var.is_zero());
        lc.compactify();
        lc
    }

    /// Negate the coefficients of all variables in `self`.
    #[inline]
    pub fn negate_in_place(&mut self) {
        self.0.iter_mut().for_each(|(coeff, _)| *coeff = -(*coeff));
    }

    /// Get the location of a variable in `self`: `Ok` with its position if
    /// present, `Err` with the position that keeps `self` sorted otherwise.
    #[inline]
    pub fn get_var_loc(&self, search_var: &Variable) -> Result<usize, usize> {
        self.0.binary_search_by_key(search_var, |&(_, var)| var)
    }

    /// Evaluate `self` under `assignment`. Returns `None` as soon as one of
    /// the variables is unassigned.
    pub fn evaluate(&self, assignment: impl Fn(Variable) -> Option<F>) -> Option<F> {
        self.0.iter().try_fold(F::zero(), |acc, &(coeff, var)| {
            assignment(var).map(|value| acc + coeff * value)
        })
    }
}

impl<F: Field> Deref for LinearCombination<F> {
    type Target = Vec<(F, Variable)>;

    #[inline]
    fn deref(&self) -> &Vec<(F, Variable)> {
        &self.0
    }
}

impl<F: Field> From<(F, Variable)> for LinearCombination<F> {
    #[inline]
    fn from(input: (F, Variable)) -> Self {
        if input.0.is_zero() || input.1.is_zero() {
            LinearCombination::zero()
        } else {
            LinearCombination(vec![input])
        }
    }
}

impl<F: Field> From<Variable> for LinearCombination<F> {
    #[inline]
    fn from(var: Variable) -> Self {
        LinearCombination::from((F::one(), var))
    }
}

impl<F: Field> AddAssign<(F, Variable)> for LinearCombination<F> {
    #[inline]
    fn add_assign(&mut self, (coeff, var): (F, Variable)) {
        if var.is_zero() {
            return;
        }
        match self.get_var_loc(&var) {
            Ok(found) => self.0[found].0 += &coeff,
            Err(not_found) => self.0.insert(not_found, (coeff, var)),
        }
    }
}

impl<F: Field> Add<(F, Variable)> for LinearCombination<F> {
    type Output = Self;

    #[inline]
    fn add(mut self, coeff_var: (F, Variable)) -> Self {
        self += coeff_var;
        self
    }
}

impl<F: Field> Sub<(F, Variable)> for LinearCombination<F> {
    type Output = Self;

    #[inline]
    fn sub(self, (coeff, var): (F, Variable)) -> Self {
        self + (-coeff, var)
    }
}

impl<F: Field> Add<Variable> for LinearCombination<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Variable) -> LinearCombination<F> {
        self + (F::one(), other)
    }
}

impl<F: Field> Sub<Variable> for LinearCombination<F> {
    type Output = LinearCombination<F>;

    #[inline]
    fn sub(self, other: Variable) -> LinearCombination<F> {
        self - (F::one(), other)
    }
}

impl<F: Field> Neg for LinearCombination<F> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self {
        self.negate_in_place();
        self
    }
}

impl<F: Field> MulAssign<F> for LinearCombination<F> {
    #[inline]
    fn mul_assign(&mut self, scalar: F) {
        self.0.iter_mut().for_each(|(coeff, _)| *coeff *= &scalar);
    }
}

impl<F: Field> Mul<F> for LinearCombination<F> {
    type Output = Self;

    #[inline]
    fn mul(mut self, scalar: F) -> Self {
        self *= scalar;
        self
    }
}

impl<F: Field> Mul<F> for &LinearCombination<F> {
    type Output = LinearCombination<F>;

    #[inline]
    fn mul(self, scalar: F) -> LinearCombination<F> {
        self.clone() * scalar
    }
}

/// Merge two sorted combinations. Terms only present in `other` go through
/// `push_fn`; terms present in both go through `combine_fn`.
fn op_impl<F: Field, F1, F2>(
    cur: &LinearCombination<F>,
    other: &LinearCombination<F>,
    push_fn: F1,
    combine_fn: F2,
) -> LinearCombination<F>
where
    F1: Fn(F) -> F,
    F2: Fn(F, F) -> F,
{
    let mut new_vec = Vec::with_capacity(cur.len() + other.len());
    let mut i = 0;
    let mut j = 0;
    while i < cur.len() && j < other.len() {
        let (self_coeff, self_var) = cur[i];
        let (other_coeff, other_var) = other[j];
        match self_var.cmp(&other_var) {
            Ordering::Greater => {
                new_vec.push((push_fn(other_coeff), other_var));
                j += 1;
            },
            Ordering::Less => {
                new_vec.push((self_coeff, self_var));
                i += 1;
            },
            Ordering::Equal => {
                new_vec.push((combine_fn(self_coeff, other_coeff), self_var));
                i += 1;
                j += 1;
            },
        }
    }
    new_vec.extend_from_slice(&cur[i..]);
    new_vec.extend(other[j..].iter().map(|&(coeff, var)| (push_fn(coeff), var)));
    LinearCombination(new_vec)
}

impl<F: Field> Add<&LinearCombination<F>> for &LinearCombination<F> {
    type Output = LinearCombination<F>;

    fn add(self, other: &LinearCombination<F>) -> LinearCombination<F> {
        if other.0.is_empty() {
            return self.clone();
        } else if self.0.is_empty() {
            return other.clone();
        }
        op_impl(self, other, |coeff| coeff, |cur, other| cur + other)
    }
}

impl<'a, F: Field> Add<&'a LinearCombination<F>> for LinearCombination<F> {
    type Output = LinearCombination<F>;

    fn add(self, other: &'a LinearCombination<F>) -> LinearCombination<F> {
        if other.0.is_empty() {
            return self;
        }
        &self + other
    }
}

impl<F: Field> Add<LinearCombination<F>> for LinearCombination<F> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.0.is_empty() {
            return other;
        }
        self + &other
    }
}

impl<F: Field> Sub<&LinearCombination<F>> for &LinearCombination<F> {
    type Output = LinearCombination<F>;

    fn sub(self, other: &LinearCombination<F>) -> LinearCombination<F> {
        if other.0.is_empty() {
            return self.clone();
        } else if self.0.is_empty() {
            return -other.clone();
        }
        op_impl(self, other, |coeff| -coeff, |cur, other| cur - other)
    }
}

impl<'a, F: Field> Sub<&'a LinearCombination<F>> for LinearCombination<F> {
    type Output = LinearCombination<F>;

    fn sub(self, other: &'a LinearCombination<F>) -> LinearCombination<F> {
        if other.0.is_empty() {
            return self;
        }
        &self - other
    }
}

impl<F: Field> Sub<LinearCombination<F>> for LinearCombination<F> {
    type Output = LinearCombination<F>;

    fn sub(self, other: LinearCombination<F>) -> LinearCombination<F> {
        if self.0.is_empty() {
            return -other;
        }
        self - &other
    }
}

impl<F: Field> Add<(F, &LinearCombination<F>)> for &LinearCombination<F> {
    type Output = LinearCombination<F>;

    fn add(self, (mul_coeff, other): (F, &LinearCombination<F>)) -> LinearCombination<F> {
        if other.0.is_empty() {
            return self.clone();
        } else if self.0.is_empty() {
            return other * mul_coeff;
        }
        op_impl(
            self,
            other,
            |coeff| mul_coeff * coeff,
            |cur, other| cur + mul_coeff * other,
        )
    }
}

impl<'a, F: Field> Add<(F, &'a LinearCombination<F>)> for LinearCombination<F> {
    type Output = LinearCombination<F>;

    fn add(self, (mul_coeff, other): (F, &'a LinearCombination<F>)) -> LinearCombination<F> {
        if other.0.is_empty() {
            return self;
        }
        &self + (mul_coeff, other)
    }
}

impl<F: Field> Sub<(F, &LinearCombination<F>)> for &LinearCombination<F> {
    type Output = LinearCombination<F>;

    fn sub(self, (coeff, other): (F, &LinearCombination<F>)) -> LinearCombination<F> {
        self + (-coeff, other)
    }
}
