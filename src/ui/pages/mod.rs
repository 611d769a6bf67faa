pub mod about;
pub mod estimator;
pub mod rates;

pub use about::AboutPage;
pub use estimator::{BreakdownDefault, EstimatorPage};
pub use rates::RatesPage;
