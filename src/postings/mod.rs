pub mod amount;
pub mod parser;
pub mod types;

pub use amount::{Amount, format_amount};
pub use parser::{InputFormat, parse};
pub use types::{Posting, WORLD, account_label};
