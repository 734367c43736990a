use serde_json::Value;

/// Field of the points API response holding the `[address, rawPoints]` pairs.
pub const POINTS_FIELD: &str = "addressToPointsSorted";

/// Lenient view over the untrusted points API response.
///
/// `pairs` is `None` when the response is not an object or the points field is
/// missing or not an array. Individual pairs never fail to parse; whatever can
/// be salvaged from them is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPointsPayload {
    pub pairs: Option<Vec<RawPointsPair>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawPointsPair {
    pub address: String,
    /// Numeric string or JSON number in the 10^24 fixed-point unit.
    pub raw_points: Value,
}

impl RawPointsPayload {
    pub fn from_value(value: &Value) -> Self {
        let pairs = value
            .get(POINTS_FIELD)
            .and_then(Value::as_array)
            .map(|items| items.iter().map(RawPointsPair::from_value).collect());

        Self { pairs }
    }

    pub fn is_absent(&self) -> bool {
        self.pairs.is_none()
    }

    pub fn len(&self) -> usize {
        self.pairs.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&Value> for RawPointsPayload {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

impl RawPointsPair {
    pub fn new(address: impl Into<String>, raw_points: impl Into<Value>) -> Self {
        Self {
            address: address.into(),
            raw_points: raw_points.into(),
        }
    }

    fn from_value(item: &Value) -> Self {
        let Some(parts) = item.as_array() else {
            return Self::new("", Value::Null);
        };

        let address = match parts.first() {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Self {
            address,
            raw_points: parts.get(1).cloned().unwrap_or(Value::Null),
        }
    }
}
