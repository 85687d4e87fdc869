//! Evaluated output sequences.

/// Axis-aligned extent of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x value.
    pub min_x: f64,
    /// Largest x value.
    pub max_x: f64,
    /// Smallest y value.
    pub min_y: f64,
    /// Largest y value.
    pub max_y: f64,
}

impl Bounds {
    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grow each side by `fraction` of the extent on that axis.
    ///
    /// A zero-width axis is grown by `fraction` of one unit so flat curves
    /// still get a visible band.
    pub fn padded(&self, fraction: f64) -> Self {
        let pad_x = if self.width() > 0.0 { self.width() * fraction } else { fraction.max(f64::EPSILON) };
        let pad_y = if self.height() > 0.0 { self.height() * fraction } else { fraction.max(f64::EPSILON) };
        Self {
            min_x: self.min_x - pad_x,
            max_x: self.max_x + pad_x,
            min_y: self.min_y - pad_y,
            max_y: self.max_y + pad_y,
        }
    }

    /// Expand the shorter axis symmetrically so both axes share one scale.
    pub fn squared(&self) -> Self {
        let half = self.width().max(self.height()) / 2.0;
        let cx = (self.min_x + self.max_x) / 2.0;
        let cy = (self.min_y + self.max_y) / 2.0;
        Self {
            min_x: cx - half,
            max_x: cx + half,
            min_y: cy - half,
            max_y: cy + half,
        }
    }
}

/// Paired x/y sequences returned by an evaluator.
///
/// Both sequences always have the same length and contain only finite values.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Samples {
    /// Horizontal coordinates.
    pub xs: Vec<f64>,
    /// Vertical coordinates.
    pub ys: Vec<f64>,
}

impl Samples {
    /// Empty sample set with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    /// Append a point if both coordinates are finite.
    ///
    /// Returns whether the point was kept.
    #[inline]
    pub fn push_finite(&mut self, x: f64, y: f64) -> bool {
        if x.is_finite() && y.is_finite() {
            self.xs.push(x);
            self.ys.push(y);
            true
        } else {
            false
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether no point survived evaluation.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate `(x, y)` pairs.
    pub fn points(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Extent of the samples, `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.points();
        let (x0, y0) = points.next()?;
        let init = Bounds {
            min_x: x0,
            max_x: x0,
            min_y: y0,
            max_y: y0,
        };
        Some(points.fold(init, |b, (x, y)| Bounds {
            min_x: b.min_x.min(x),
            max_x: b.max_x.max(x),
            min_y: b.min_y.min(y),
            max_y: b.max_y.max(y),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_non_finite_pairs_together() {
        let mut s = Samples::default();
        assert!(s.push_finite(1.0, 2.0));
        assert!(!s.push_finite(f64::NAN, 2.0));
        assert!(!s.push_finite(1.0, f64::INFINITY));
        assert_eq!(s.len(), 1);
        assert_eq!(s.xs.len(), s.ys.len());
    }

    #[test]
    fn bounds_cover_all_points() {
        let s = Samples {
            xs: vec![-1.0, 3.0, 0.5],
            ys: vec![2.0, -4.0, 0.0],
        };
        let b = s.bounds().expect("non-empty");
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (-1.0, 3.0, -4.0, 2.0));
        assert!(Samples::default().bounds().is_none());
    }

    #[test]
    fn squared_bounds_share_scale() {
        let b = Bounds {
            min_x: 0.0,
            max_x: 4.0,
            min_y: 0.0,
            max_y: 2.0,
        }
        .squared();
        assert_eq!(b.width(), b.height());
        assert_eq!((b.min_y, b.max_y), (-1.0, 3.0));
    }
}
