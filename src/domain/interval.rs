use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Bar interval of the primary chart.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Display, EnumIter,
)]
pub enum Timeframe {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    // The interval code we pass into the chart API (not the display name)
    pub fn api_code(&self) -> &'static str {
        match self {
            Timeframe::Daily => "1d",
            Timeframe::Weekly => "1wk",
            Timeframe::Monthly => "1mo",
        }
    }
}

/// How much history the primary chart requests.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Display, EnumIter,
)]
pub enum HistoryPeriod {
    #[default]
    #[strum(serialize = "1y")]
    OneYear,
    #[strum(serialize = "2y")]
    TwoYears,
    #[strum(serialize = "5y")]
    FiveYears,
    #[strum(serialize = "max")]
    Max,
}

impl HistoryPeriod {
    pub fn api_code(&self) -> &'static str {
        match self {
            HistoryPeriod::OneYear => "1y",
            HistoryPeriod::TwoYears => "2y",
            HistoryPeriod::FiveYears => "5y",
            HistoryPeriod::Max => "max",
        }
    }
}

/// Coarser resolution used by the higher-timeframe dashboard.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Display, EnumIter,
)]
pub enum HtfResolution {
    #[default]
    Weekly,
    Monthly,
    Quarterly,
}

impl HtfResolution {
    pub fn api_code(&self) -> &'static str {
        match self {
            HtfResolution::Weekly => "1wk",
            HtfResolution::Monthly => "1mo",
            HtfResolution::Quarterly => "3mo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn api_codes_match_the_chart_endpoint_vocabulary() {
        assert_eq!(Timeframe::Daily.api_code(), "1d");
        assert_eq!(Timeframe::Weekly.api_code(), "1wk");
        assert_eq!(Timeframe::Monthly.api_code(), "1mo");
        assert_eq!(HistoryPeriod::Max.api_code(), "max");
        assert_eq!(HtfResolution::Quarterly.api_code(), "3mo");
    }

    #[test]
    fn every_variant_is_reachable_from_the_ui_iterators() {
        assert_eq!(Timeframe::iter().count(), 3);
        assert_eq!(HistoryPeriod::iter().count(), 4);
        assert_eq!(HtfResolution::iter().count(), 3);
    }
}
