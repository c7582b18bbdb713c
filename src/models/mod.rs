pub mod extreme;
pub mod metric;
pub mod month;
pub mod observation;
pub mod year;

pub use extreme::{Direction, Extreme, ExtremeSource};
pub use metric::Metric;
pub use month::MonthAggregate;
pub use observation::Observation;
pub use year::{YearAggregate, YearPolicy};
