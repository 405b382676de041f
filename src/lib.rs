pub mod algebra;
pub mod structures;
pub mod utils;

pub use algebra::group::{Group, GroupError};

pub use structures::bijection::Bijection;
pub use structures::permutations::permutations;
pub use structures::symmetric::{bijection_group, BijectionGroup};
pub use utils::factorial;
