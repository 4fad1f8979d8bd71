//! Products Data

/// Default and maximum number of products returned by a listing.
pub const MAX_LIST_COUNT: i64 = 10;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Bounded slice of the products table, ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    count: i64,
    start: i64,
}

impl ListWindow {
    /// Build a window from raw query values.
    ///
    /// A missing or out-of-range `count` falls back to [`MAX_LIST_COUNT`]; a
    /// missing or negative `start` becomes zero.
    #[must_use]
    pub fn new(count: Option<i64>, start: Option<i64>) -> Self {
        let count = count
            .filter(|count| (1..=MAX_LIST_COUNT).contains(count))
            .unwrap_or(MAX_LIST_COUNT);

        let start = start.unwrap_or_default().max(0);

        Self { count, start }
    }

    #[must_use]
    pub fn count(&self) -> i64 {
        self.count
    }

    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self::new(None, None)
    }
}
