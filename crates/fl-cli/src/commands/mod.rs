pub mod check;
pub mod dispatch;
pub mod measure;
pub mod missions;
pub mod replay;
pub mod schema;
pub mod shared;
pub mod taxonomy;
