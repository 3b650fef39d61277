pub mod driver;
pub mod fixture;

pub use driver::LogicDriver;
