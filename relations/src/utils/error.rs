use core::fmt;

/// This is an error that could occur during circuit synthesis.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SynthesisError {
    /// During synthesis, we lacked knowledge of a variable assignment.
    AssignmentMissing,
    /// Two bit vectors of different widths were compared.
    WidthMismatch {
        /// Width of the left-hand operand.
        left: usize,
        /// Width of the right-hand operand.
        right: usize,
    },
    /// A bit decomposition was requested that does not fit in the field's
    /// capacity, so the decomposition would not be unique.
    WidthOverflow {
        /// The requested number of bits.
        width: usize,
        /// The largest width the field can decompose unambiguously.
        capacity: usize,
    },
}

impl ark_std::error::Error for SynthesisError {}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            SynthesisError::AssignmentMissing => write!(f, "assignment couldn't be computed"),
            SynthesisError::WidthMismatch { left, right } => {
                write!(f, "cannot compare bit vectors of widths {left} and {right}")
            },
            SynthesisError::WidthOverflow { width, capacity } => write!(
                f,
                "decomposition into {width} bits exceeds the field capacity of {capacity} bits"
            ),
        }
    }
}
