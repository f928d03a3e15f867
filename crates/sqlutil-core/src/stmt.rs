mod insert;
pub use insert::{Insert, OnConflict, Returning};

mod select;
pub use select::{Projection, Select};

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::Type;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
