mod chart;
mod view;

pub use chart::EnergyComparisonChart;
pub use view::EnergyComparison;
