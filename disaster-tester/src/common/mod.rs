pub mod scenario;
pub mod util;

pub use util::{parse_seeds, read_catalog, sample_catalog, split_csv};
