// Define the CandleType enum
#[derive(Debug, PartialEq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

// Define the Candle struct with all its properties
pub struct Candle {
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
}

// Implement methods for the Candle struct
impl Candle {
    // A constructor for convenience
    pub fn new(open_price: f64, high_price: f64, low_price: f64, close_price: f64) -> Self {
        Candle {
            open_price,
            high_price,
            low_price,
            close_price,
        }
    }

    // A method to determine the type of candle
    pub fn get_type(&self) -> CandleType {
        if self.close_price >= self.open_price {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open_price, self.close_price),
            CandleType::Bearish => (self.close_price, self.open_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doji_counts_as_bullish() {
        // close == open resolves to Bullish by convention
        let candle = Candle::new(10.0, 11.0, 9.0, 10.0);
        assert_eq!(candle.get_type(), CandleType::Bullish);
        assert_eq!(candle.body_range(), (10.0, 10.0));
    }

    #[test]
    fn body_range_is_ordered_for_bearish_candles() {
        let candle = Candle::new(12.0, 12.5, 9.5, 10.0);
        assert_eq!(candle.get_type(), CandleType::Bearish);
        assert_eq!(candle.body_range(), (10.0, 12.0));
    }
}
