use std::fmt;
use std::str::FromStr;

use super::RevealError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Resolves against `basis`, the root's width for left/right and its
    /// height for top/bottom.
    #[cfg(test)]
    pub fn resolve(self, basis: f64) -> f64 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => basis * pct / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{}px", px),
            Length::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

impl FromStr for Length {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, unit): (&str, fn(f64) -> Length) = if let Some(n) = s.strip_suffix("px") {
            (n, Length::Px)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, Length::Percent)
        } else {
            (s, Length::Px)
        };
        let value: f64 = number.parse().map_err(|_| ())?;
        if !value.is_finite() {
            return Err(());
        }
        // unitless lengths are only valid for zero, as in CSS
        if number.len() == s.len() && value != 0.0 {
            return Err(());
        }
        Ok(unit(value))
    }
}

/// Grows (positive) or shrinks (negative) the viewport before intersection
/// is computed. Same syntax as the CSS `margin` shorthand, limited to `px`
/// and `%`.
#[derive(Debug, Clone, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    #[cfg(test)]
    pub fn uniform(length: Length) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }

    /// The root rectangle of a `width` x `height` viewport after the margin
    /// is applied.
    #[cfg(test)]
    pub fn inset_rect(&self, width: f64, height: f64) -> Rect {
        Rect {
            left: -self.left.resolve(width),
            top: -self.top.resolve(height),
            right: width + self.right.resolve(width),
            bottom: height + self.bottom.resolve(height),
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        // 0px 0px -10% 0px
        Self {
            top: Length::Px(0.0),
            right: Length::Px(0.0),
            bottom: Length::Percent(-10.0),
            left: Length::Px(0.0),
        }
    }
}

impl FromStr for RootMargin {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RevealError::InvalidRootMargin(s.to_string());
        let lengths = s
            .split_whitespace()
            .map(|part| part.parse::<Length>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        let [top, right, bottom, left] = match lengths.as_slice() {
            [all] => [*all; 4],
            [vertical, horizontal] => [*vertical, *horizontal, *vertical, *horizontal],
            [top, horizontal, bottom] => [*top, *horizontal, *bottom, *horizontal],
            [top, right, bottom, left] => [*top, *right, *bottom, *left],
            _ => return Err(invalid()),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Axis-aligned box used to model intersection geometry.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

#[cfg(test)]
impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Edge-adjacent rectangles count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    /// Share of `target`'s area that falls inside `self`.
    pub fn intersection_ratio(&self, target: &Rect) -> f64 {
        let area = target.area();
        if area == 0.0 {
            return if self.intersects(target) { 1.0 } else { 0.0 };
        }
        let overlap = Rect::new(
            self.left.max(target.left),
            self.top.max(target.top),
            self.right.min(target.right),
            self.bottom.min(target.bottom),
        );
        overlap.area() / area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::DEFAULT_ROOT_MARGIN;

    #[test]
    fn default_matches_the_documented_string() {
        assert_eq!(
            DEFAULT_ROOT_MARGIN.parse::<RootMargin>().unwrap(),
            RootMargin::default()
        );
        assert_eq!(RootMargin::default().to_string(), DEFAULT_ROOT_MARGIN);
    }

    #[test]
    fn shorthand_expands_like_css() {
        let one: RootMargin = "10px".parse().unwrap();
        assert_eq!(one, RootMargin::uniform(Length::Px(10.0)));

        let two: RootMargin = "5% 0".parse().unwrap();
        assert_eq!(two.top, Length::Percent(5.0));
        assert_eq!(two.bottom, Length::Percent(5.0));
        assert_eq!(two.left, Length::Px(0.0));

        let three: RootMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(
            (three.top, three.right, three.bottom, three.left),
            (Length::Px(1.0), Length::Px(2.0), Length::Px(3.0), Length::Px(2.0))
        );

        let four: RootMargin = "  -1px 2%   3px 4px ".parse().unwrap();
        assert_eq!(four.to_string(), "-1px 2% 3px 4px");
    }

    #[test]
    fn rejects_malformed_margins() {
        for bad in ["", "10", "10em", "1px 2px 3px 4px 5px", "px", "NaNpx", "infpx"] {
            assert_eq!(
                bad.parse::<RootMargin>(),
                Err(RevealError::InvalidRootMargin(bad.to_string())),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn inset_rect_applies_percentages_per_axis() {
        let margin: RootMargin = "10% 20px -10% 5%".parse().unwrap();
        let rect = margin.inset_rect(1000.0, 800.0);
        assert_eq!(rect, Rect::new(-50.0, -80.0, 1020.0, 720.0));
    }

    #[test]
    fn intersection_ratio_is_fraction_of_target() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(root.intersection_ratio(&Rect::new(0.0, 50.0, 100.0, 150.0)), 0.5);
        assert_eq!(root.intersection_ratio(&Rect::new(10.0, 10.0, 20.0, 20.0)), 1.0);
        assert_eq!(root.intersection_ratio(&Rect::new(0.0, 200.0, 10.0, 210.0)), 0.0);
        assert!(root.intersects(&Rect::new(0.0, 100.0, 10.0, 110.0)));
    }
}
