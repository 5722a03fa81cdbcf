pub use ormic_core::schema::*;
