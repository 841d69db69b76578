pub mod line;
pub mod station;

pub use line::{Line, LineDetail, LineEdit, NewLine};
pub use station::Station;
