use crate::domain::model::ArrayReport;
use crate::utils::error::{DrillError, Result};
use std::io::BufRead;

/// Largest element, or `None` when `values` is empty.
pub fn max(values: &[i64]) -> Option<i64> {
    values.iter().copied().max()
}

/// Sum of all elements; an empty slice sums to 0. Overflow is an error.
pub fn sum(values: &[i64]) -> Result<i64> {
    values.iter().try_fold(0i64, |acc, &v| {
        acc.checked_add(v).ok_or_else(|| {
            DrillError::processing(format!("sum overflowed i64 while adding {}", v))
        })
    })
}

/// Reads whitespace separated integers, across as many lines as needed,
/// until `count` values are collected. Anything after the last needed token
/// on that line is ignored, including bytes that are not valid UTF-8.
pub fn read_integers<R: BufRead>(mut reader: R, count: usize) -> Result<Vec<i64>> {
    let mut values = Vec::with_capacity(count);
    let mut line = Vec::new();

    while values.len() < count {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(DrillError::input(format!(
                "expected {} integers but input ended after {}",
                count,
                values.len()
            )));
        }

        let tokens = line
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty());

        for token in tokens {
            if values.len() == count {
                tracing::debug!("Ignoring extra input after {} integers", count);
                break;
            }
            values.push(parse_token(token)?);
        }
    }

    Ok(values)
}

fn parse_token(token: &[u8]) -> Result<i64> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse::<i64>().ok())
        .ok_or_else(|| {
            DrillError::input(format!(
                "'{}' is not an integer",
                String::from_utf8_lossy(token)
            ))
        })
}

pub fn prompt(count: usize) -> String {
    format!("Enter {} integers separated by spaces: ", count)
}

impl ArrayReport {
    pub fn from_values(values: Vec<i64>) -> Result<Self> {
        let max = max(&values).ok_or_else(|| DrillError::input("no integers to summarise"))?;
        let sum = sum(&values)?;
        Ok(Self { values, max, sum })
    }

    pub fn render(&self) -> String {
        format!(
            "max in the array is : {}\nSum of the array is : {}",
            self.max, self.sum
        )
    }
}
