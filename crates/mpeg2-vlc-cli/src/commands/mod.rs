pub mod intra;
pub mod motion;
pub mod non_intra;
