pub mod banks;
pub mod categorize;
pub mod email;
pub mod models;
pub mod pipeline;

pub use banks::Bank;
pub use categorize::{Categorizer, ClassifierConfig};
pub use email::{EmailMessage, EmailSource, FetchFilter};
pub use models::{DateRange, RawTransaction, Transaction};
