//! A small async ORM: declare models, persist records to a relational store,
//! and optionally keep a bounded cache of fetched records per model.
//!
//! ```no_run
//! use ormic::{values, Db, Model, Type};
//!
//! # async fn run() -> ormic::Result<()> {
//! let user: Model = Model::builder("User")
//!     .field("id", Type::I64)
//!     .field("name", Type::String)
//!     .build()?
//!     .into();
//!
//! let db = Db::builder()
//!     .register(&user)
//!     .cache(true, 100)
//!     .connect("sqlite::memory:")
//!     .await?;
//!
//! let mut alice = user.record(values! { id: 1, name: "alice" })?;
//! alice.save().await?;
//!
//! let found = user.fetch(values! { id: 1 }).await?;
//! assert_eq!(found.as_ref(), Some(&alice));
//! # drop(db);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub use db::{Db, Fetch, Rows};

pub mod driver;

mod model;
pub use model::Model;

mod record;
pub use record::Record;

pub mod schema;

pub use ormic_core::{
    bail, err,
    stmt::{Primitive, Type, Value, ValueRecord},
    Error, Result,
};

/// Builds the `(field, value)` pairs taken by record constructors and
/// lookups.
///
/// ```
/// let values = ormic::values! { id: 1, name: "alice" };
/// assert_eq!(values[1], ("name", ormic::Value::from("alice")));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<(&'static str, $crate::Value)>::new()
    };
    ( $( $name:ident : $value:expr ),+ $(,)? ) => {
        ::std::vec![ $( (::std::stringify!($name), $crate::Value::from($value)) ),+ ]
    };
}
