pub mod iris;
pub mod prepare;
pub mod record;

pub use iris::{load_iris, parse_iris};
pub use prepare::{prepare, train_test_split, Dataset, MinMaxScaler};
pub use record::Record;
