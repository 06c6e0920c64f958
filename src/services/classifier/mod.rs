pub mod inference;
pub mod labels;
pub mod model;
