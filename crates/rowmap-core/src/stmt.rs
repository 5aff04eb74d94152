mod condition;
pub use condition::{Condition, ConditionValue, FieldMap};

mod options;
pub use options::{Projection, QueryOptions};

mod value;
pub use value::Value;

mod values;
pub use values::Values;
