use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Priority(pub f64);

impl Priority {
    pub const ZERO: Self = Priority(0.0);
    pub const INFINITY: Self = Priority(f64::INFINITY);
    pub const NEG_INFINITY: Self = Priority(f64::NEG_INFINITY);

    #[inline(always)]
    pub const fn to_f64(self) -> f64 {
        self.0
    }
}

impl Debug for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for Priority {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Priority {
    #[inline(always)]
    fn from(value: f64) -> Self {
        Priority(value)
    }
}

impl From<f32> for Priority {
    #[inline(always)]
    fn from(value: f32) -> Self {
        Priority(value as f64)
    }
}

impl From<Priority> for f64 {
    #[inline(always)]
    fn from(value: Priority) -> Self {
        value.0
    }
}

#[test]
fn priority_total_order() {
    assert!(Priority(1.0) < Priority(3.0));
    assert!(Priority(-1.0) < Priority(0.0));
    assert!(Priority(-0.0) < Priority(0.0));
    assert!(Priority::NEG_INFINITY < Priority(f64::MIN));
    assert!(Priority(f64::MAX) < Priority::INFINITY);
    assert!(Priority::INFINITY < Priority(f64::NAN));
    assert_eq!(Priority(2.5), Priority(2.5));
    assert_eq!(Priority(f64::NAN), Priority(f64::NAN));
}

#[test]
fn priority_conversions() {
    assert_eq!(Priority::from(0.0f64), Priority::ZERO);
    assert_eq!(Priority::from(f64::INFINITY), Priority::INFINITY);
    assert_eq!(Priority::from(f64::NEG_INFINITY), Priority::NEG_INFINITY);
    for i in -100..100 {
        let val = (i as f64) * 0.1;
        assert_eq!(f64::from(Priority::from(val)).to_bits(), val.to_bits());
    }
    assert_eq!(
        f64::from(Priority::from(f64::NAN)).to_bits(),
        f64::NAN.to_bits()
    );
}
