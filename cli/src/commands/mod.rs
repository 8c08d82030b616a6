pub mod ascii;
pub mod convert;
pub mod eval;
pub mod panels;
