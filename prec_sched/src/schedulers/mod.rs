pub mod lcl;
pub mod tabu;
