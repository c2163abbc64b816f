//! Fixed lookup tables of the wage survey.

pub mod industry;

pub use industry::{Industry, industry_labels};
