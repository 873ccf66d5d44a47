mod categories;
mod common;
mod global_factors;
mod normalizer;
