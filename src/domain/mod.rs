pub mod product;

pub use product::{Metafields, ProductRecord};
