/// Variables in a constraint system.
///
/// The derived ordering places `Zero` before `One` before every witness,
/// and witnesses by allocation index. Linear combinations stay sorted by it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Variable {
    /// Represents the "zero" constant.
    Zero,
    /// Represents the "one" constant.
    One,
    /// Represents a private witness variable.
    Witness(usize),
}

impl Variable {
    /// Is `self` the zero variable?
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Variable::Zero)
    }

    /// The column of `self` in the constraint matrices: the constant one
    /// lives in column 0 and witness `i` in column `i + 1`. The zero
    /// variable has no column.
    #[inline(always)]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Variable::Zero => None,
            Variable::One => Some(0),
            Variable::Witness(i) => Some(*i + 1),
        }
    }
}
