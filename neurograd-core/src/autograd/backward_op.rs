/// The closed set of operations a node can record.
///
/// The kind is kept for diagnostics only: the local derivatives are computed
/// once, when the node is built, and stored next to each predecessor.
/// Composite operations (negation, subtraction, division) are expressed
/// through these primitives and therefore record `Mul`, `Add` or `Pow`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Add,
    Mul,
    /// Power with a constant exponent. No gradient flows to the exponent.
    Pow { exponent: f64 },
    Relu,
    Sigmoid,
    Ln,
    Exp,
    Abs,
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Mul => "mul",
            Op::Pow { .. } => "pow",
            Op::Relu => "relu",
            Op::Sigmoid => "sigmoid",
            Op::Ln => "ln",
            Op::Exp => "exp",
            Op::Abs => "abs",
        }
    }

    /// Number of predecessors a node of this kind records.
    pub fn arity(&self) -> usize {
        match self {
            Op::Add | Op::Mul => 2,
            _ => 1,
        }
    }
}
