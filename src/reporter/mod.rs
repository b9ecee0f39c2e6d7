pub mod text;

use crate::scanner::ScanResult;

pub trait Reporter {
    fn report(&self, result: &ScanResult) -> String;
}
