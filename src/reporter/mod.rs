pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::aggregator::OverallResult;

pub trait Reporter {
    fn report(&self, result: &OverallResult) -> String;
}
