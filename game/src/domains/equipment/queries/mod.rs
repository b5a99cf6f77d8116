pub use attributes::*;

mod attributes;
