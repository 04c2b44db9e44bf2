pub mod peg_logos;
pub mod pretty;
#[cfg(test)]
pub mod random;
pub mod span;
