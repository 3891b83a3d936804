// Author: Dustin Pilgrim
// License: MIT

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// A fixed width:height ratio. Both sides are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct AspectRatio {
    w: u32,
    h: u32,
}

impl AspectRatio {
    pub const SQUARE: Self = Self { w: 1, h: 1 };

    pub fn new(w: u32, h: u32) -> Result<Self, SelectionError> {
        if w == 0 || h == 0 {
            return Err(SelectionError::InvalidRatio {
                width: w,
                height: h,
            });
        }
        Ok(Self { w, h })
    }

    pub fn width_units(&self) -> u32 {
        self.w
    }

    pub fn height_units(&self) -> u32 {
        self.h
    }

    /// Adjusts a requested `(w, h)` so that `w / h` matches this ratio.
    ///
    /// The side that makes the requested shape wider (or taller) than the
    /// ratio allows is recomputed from the other one. Exact matches are
    /// returned untouched. Wide ratios compare with width as the driving
    /// side, tall ratios with height.
    pub fn fit(&self, w: i32, h: i32) -> (i32, i32) {
        let rw = i64::from(self.w);
        let rh = i64::from(self.h);
        let (w64, h64) = (i64::from(w), i64::from(h));

        // Results never exceed the inputs, so narrowing back is lossless.
        let width_from_height = || (h64 * rw / rh) as i32;
        let height_from_width = || (w64 * rh / rw) as i32;

        if rw >= rh {
            // rw/rh against w/h, cross-multiplied
            match (rw * h64).cmp(&(w64 * rh)) {
                Ordering::Greater => (w, height_from_width()),
                Ordering::Less => (width_from_height(), h),
                Ordering::Equal => (w, h),
            }
        } else {
            // rh/rw against h/w
            match (rh * w64).cmp(&(h64 * rw)) {
                Ordering::Greater => (width_from_height(), h),
                Ordering::Less => (w, height_from_width()),
                Ordering::Equal => (w, h),
            }
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl TryFrom<(u32, u32)> for AspectRatio {
    type Error = SelectionError;

    fn try_from((w, h): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(w, h)
    }
}

impl From<AspectRatio> for (u32, u32) {
    fn from(r: AspectRatio) -> Self {
        (r.w, r.h)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.w, self.h)
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    /// Parses `"W:H"`, e.g. `"16:9"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("expected W:H, got \"{s}\""))?;
        let w: u32 = w
            .trim()
            .parse()
            .map_err(|_| format!("invalid ratio width \"{}\"", w.trim()))?;
        let h: u32 = h
            .trim()
            .parse()
            .map_err(|_| format!("invalid ratio height \"{}\"", h.trim()))?;
        Self::new(w, h).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(w: u32, h: u32) -> AspectRatio {
        AspectRatio::new(w, h).unwrap()
    }

    #[test]
    fn rejects_zero_sides() {
        assert_eq!(
            AspectRatio::new(0, 3),
            Err(SelectionError::InvalidRatio { width: 0, height: 3 })
        );
        assert!(AspectRatio::new(4, 0).is_err());
        assert!(AspectRatio::new(0, 0).is_err());
    }

    #[test]
    fn square_ratio_leaves_square_alone() {
        assert_eq!(ratio(1, 1).fit(100, 100), (100, 100));
    }

    #[test]
    fn square_ratio_shrinks_wide_request_to_height() {
        assert_eq!(ratio(1, 1).fit(100, 50), (50, 50));
    }

    #[test]
    fn square_ratio_shrinks_tall_request_to_width() {
        assert_eq!(ratio(1, 1).fit(40, 90), (40, 40));
    }

    #[test]
    fn wide_ratio_shrinks_height() {
        assert_eq!(ratio(2, 1).fit(100, 100), (100, 50));
    }

    #[test]
    fn tall_ratio_shrinks_width() {
        assert_eq!(ratio(1, 2).fit(100, 100), (50, 100));
        assert_eq!(ratio(1, 2).fit(100, 400), (100, 200));
    }

    #[test]
    fn exact_match_is_untouched() {
        assert_eq!(ratio(16, 9).fit(160, 90), (160, 90));
        assert_eq!(ratio(3, 4).fit(30, 40), (30, 40));
    }

    #[test]
    fn zero_height_request_collapses() {
        assert_eq!(ratio(4, 3).fit(120, 0), (0, 0));
        assert_eq!(ratio(3, 4).fit(0, 120), (0, 0));
        assert_eq!(ratio(3, 4).fit(0, 0), (0, 0));
    }

    #[test]
    fn serde_round_trip_and_validation() {
        let r = ratio(16, 9);
        let bytes = postcard::to_allocvec(&r).unwrap();
        assert_eq!(postcard::from_bytes::<AspectRatio>(&bytes).unwrap(), r);

        let zero = postcard::to_allocvec(&(0u32, 9u32)).unwrap();
        assert!(postcard::from_bytes::<AspectRatio>(&zero).is_err());
    }

    #[test]
    fn parses_and_displays() {
        let r: AspectRatio = " 16 : 9 ".parse().unwrap();
        assert_eq!(r, ratio(16, 9));
        assert_eq!(r.to_string(), "16:9");
        assert!("16x9".parse::<AspectRatio>().is_err());
        assert!("0:9".parse::<AspectRatio>().is_err());
    }
}
