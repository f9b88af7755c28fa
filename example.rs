// Sample input for `complex-lint` (the default `--path`).

use std::fmt;

#[derive(Debug)]
pub struct InvalidValue(i64);

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid data value: {}", self.0)
    }
}

pub struct Batch {
    pub values: Vec<i64>,
    pub strict: bool,
}

pub fn process_data(data: &[i64]) -> Result<Vec<i64>, InvalidValue> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut result = Vec::with_capacity(data.len());
    for value in data {
        let processed = process_single_value(*value)?;
        result.push(processed);
    }

    Ok(result)
}

fn process_single_value(value: i64) -> Result<i64, InvalidValue> {
    match value {
        v if v > 100 => Ok(v - 100),
        v if v > 50 => Ok(v * 2),
        v if v > 0 => Ok(v * 3),
        _ => Err(InvalidValue(value)),
    }
}

impl Batch {
    pub fn checked_total(&self, limit: i64) -> (i64, bool) {
        let mut total = 0;
        for value in &self.values {
            total += value;
            if self.strict && total > limit {
                return (total, false);
            }
        }
        (total, true)
    }
}
