mod column;
pub(crate) use column::Column;

mod diagnostics;
pub(crate) use diagnostics::Diagnostics;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::Model;

mod model_attr;
pub(crate) use model_attr::ModelAttr;
