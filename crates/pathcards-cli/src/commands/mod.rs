//! Command implementations.

pub mod compare;
pub mod sif;

pub use self::compare::execute_compare;
pub use self::sif::execute_sif;
