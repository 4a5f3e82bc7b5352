pub mod audience;
pub mod concept;
