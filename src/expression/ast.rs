/// The four arithmetic operations allowed between two tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// Search order. Changing it changes which of several equally close results wins.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
            Operation::Div => '/',
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operation::Add | Operation::Mul)
    }
}

/// One entry of an expression trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A starting tile that already equals the target
    Literal(u32),
    /// `lhs op rhs`, consuming both operands and producing a new tile
    Apply { lhs: u32, op: Operation, rhs: u32 },
}

impl Step {
    pub fn apply(lhs: u32, op: Operation, rhs: u32) -> Self {
        Step::Apply { lhs, op, rhs }
    }

    /// The tile this step produces, or `None` if the operation is not allowed
    pub fn value(&self) -> Option<u32> {
        match *self {
            Step::Literal(value) => Some(value),
            Step::Apply { lhs, op, rhs } => op.apply(lhs, rhs),
        }
    }
}
