/// 金額表示フォーマット
pub mod format;

pub use format::{format_amount, DigitGrouping};
