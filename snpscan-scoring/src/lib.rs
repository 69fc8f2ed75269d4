pub mod aggregate;
pub mod conditions;
pub mod consts;
pub mod scan;
pub mod scorer;

// re-exports
pub use aggregate::*;
pub use conditions::*;
pub use scan::*;
pub use scorer::*;
