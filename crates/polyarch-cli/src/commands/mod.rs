pub mod check;
pub mod enumerate;
pub mod expand;
pub mod unroll;
