pub mod catalog;
pub mod classification;
pub mod constants;
pub mod crs;
pub mod iau_errors;
pub mod output;
pub mod record;

pub use catalog::{CrsEntry, IauCatalog, Publication};
pub use crs::{CrsDescriptor, CrsKind};
pub use iau_errors::IauWktError;
pub use output::{save_as, OutputFormat};
