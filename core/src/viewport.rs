pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
    #[default]
    Mobile,
    Desktop,
}

impl ViewportClass {
    /// Widths that are not numbers classify as mobile.
    pub fn from_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            ViewportClass::Desktop
        } else {
            ViewportClass::Mobile
        }
    }

    pub fn is_desktop(self) -> bool {
        matches!(self, ViewportClass::Desktop)
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewportClass::Mobile => "mobile",
            ViewportClass::Desktop => "desktop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(f64::NAN), ViewportClass::Mobile);
    }
}
