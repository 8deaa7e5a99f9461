//! Inclusive numeric range filters

/// Upper default for popularity ranges (streams, views)
pub const MAX_POPULARITY_BOUND: f64 = 500_000_000.0;

/// Columns that accept a `min`/`max` range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeField {
    Danceability,
    Energy,
    Valence,
    Streams,
    Views,
}

impl RangeField {
    pub const ALL: [RangeField; 5] = [
        RangeField::Danceability,
        RangeField::Energy,
        RangeField::Valence,
        RangeField::Streams,
        RangeField::Views,
    ];

    pub fn column(self) -> &'static str {
        match self {
            RangeField::Danceability => "danceability",
            RangeField::Energy => "energy",
            RangeField::Valence => "valence",
            RangeField::Streams => "stream",
            RangeField::Views => "views",
        }
    }

    /// Bounds applied when the caller leaves a side unconstrained
    pub fn default_bounds(self) -> (f64, f64) {
        match self {
            RangeField::Danceability | RangeField::Energy | RangeField::Valence => (0.0, 1.0),
            RangeField::Streams | RangeField::Views => (0.0, MAX_POPULARITY_BOUND),
        }
    }
}

/// `min <= column <= max`, both ends inclusive
///
/// `min > max` is kept as given and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    pub field: RangeField,
    pub min: f64,
    pub max: f64,
}

impl RangeFilter {
    pub fn new(field: RangeField, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// The field's default range
    pub fn unconstrained(field: RangeField) -> Self {
        let (min, max) = field.default_bounds();
        Self { field, min, max }
    }

    /// Build from raw request values; unparsable bounds use the defaults
    pub fn from_params(field: RangeField, min: Option<&str>, max: Option<&str>) -> Self {
        let (default_min, default_max) = field.default_bounds();
        Self {
            field,
            min: parse_bound(min, default_min),
            max: parse_bound(max, default_max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// A reversed range can never match a row
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

fn parse_bound(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}
