pub mod adapter;
pub mod apply;
pub mod memory;
pub mod plan;
