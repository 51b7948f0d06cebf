pub mod odds_legend;

pub use odds_legend::OddsLegend;
