pub mod descriptor;

pub use descriptor::{FigureType, MetricDescriptor, Units};
