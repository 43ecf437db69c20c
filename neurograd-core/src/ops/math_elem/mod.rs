pub mod abs;
pub mod exp;
pub mod ln;

pub use abs::abs_op;
pub use exp::exp_op;
pub use ln::ln_op;
