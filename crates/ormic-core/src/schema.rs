mod builder;
pub use builder::ModelBuilder;

mod field;
pub use field::{Field, FieldTy};

mod model;
pub use model::{FieldDescription, Model, ModelDescription, ModelId};

mod type_map;
pub use type_map::TypeMap;
