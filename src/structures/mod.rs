pub mod bijection;
pub mod permutations;
pub mod symmetric;
