use serde::{Deserialize, Serialize};

/// Errors from thermal matrix ingestion.
///
/// A ragged matrix means corrupted upstream data, so it fails loudly
/// instead of being silently tolerated.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ThermalError {
    #[error("ragged temperature matrix: row {row} has {len} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Rectangular matrix of raw temperature readings, one per thermal pixel.
///
/// Rectangularity is validated on construction (and on deserialization);
/// all other shape assumptions in this crate lean on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct TemperatureMatrix {
    rows: Vec<Vec<f64>>,
}

impl TemperatureMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ThermalError> {
        let expected = rows.first().map_or(0, Vec::len);
        for (row, data) in rows.iter().enumerate() {
            if data.len() != expected {
                return Err(ThermalError::RaggedMatrix {
                    row,
                    len: data.len(),
                    expected,
                });
            }
        }
        Ok(Self { rows })
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Observed `(min, max)` over all readings, `None` for an empty matrix.
    ///
    /// NaN readings contaminate the result, matching the engine-wide
    /// NaN-propagation behavior.
    pub fn observed_range(&self) -> Option<(f64, f64)> {
        let mut it = self.rows.iter().flatten().copied();
        let first = it.next()?;
        let mut min = first;
        let mut max = first;
        for v in it {
            if v < min || v.is_nan() {
                min = v;
            }
            if v > max || v.is_nan() {
                max = v;
            }
        }
        Some((min, max))
    }
}

impl TryFrom<Vec<Vec<f64>>> for TemperatureMatrix {
    type Error = ThermalError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<TemperatureMatrix> for Vec<Vec<f64>> {
    fn from(m: TemperatureMatrix) -> Self {
        m.rows
    }
}

/// Max/min raw temperature within a probe window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbeStats {
    pub max: f64,
    pub min: f64,
}

/// Max/min raw temperature in the square window of `radius` pixels around
/// `center = (x, y)` (column, row), clamped to the matrix bounds.
///
/// Returns `None` when the window lies entirely outside the matrix (or
/// the matrix is empty). `center` may itself be out of bounds as long as
/// the window still overlaps the matrix.
pub fn probe(matrix: &TemperatureMatrix, center: (i64, i64), radius: i32) -> Option<ProbeStats> {
    let (rows, cols) = matrix.dims();
    if rows == 0 || cols == 0 {
        return None;
    }

    let r = i64::from(radius.max(0));
    let (cx, cy) = center;
    if cx + r < 0 || cy + r < 0 || cx - r >= cols as i64 || cy - r >= rows as i64 {
        return None;
    }

    let x0 = (cx - r).max(0) as usize;
    let x1 = ((cx + r).min(cols as i64 - 1)) as usize;
    let y0 = (cy - r).max(0) as usize;
    let y1 = ((cy + r).min(rows as i64 - 1)) as usize;

    let mut stats: Option<ProbeStats> = None;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let v = matrix.value(y, x);
            stats = Some(match stats {
                None => ProbeStats { max: v, min: v },
                Some(s) => ProbeStats {
                    max: s.max.max(v),
                    min: s.min.min(v),
                },
            });
        }
    }
    stats
}
