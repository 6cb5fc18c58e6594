pub mod heap;
pub mod values;
