//! Capability set required by decorators and the driver.

use std::fmt;

/// An element that can be displayed and priced.
///
/// The display representation is what the logging decorator records; the
/// price feeds the filter decorator and the driver's total.
pub trait Element: fmt::Display {
    fn price(&self) -> f64;
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn price(&self) -> f64 {
        (**self).price()
    }
}

impl<E: Element + ?Sized> Element for &E {
    fn price(&self) -> f64 {
        (**self).price()
    }
}

/// Plain labelled price, handy for tests and ad-hoc sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Priced {
    pub label: String,
    pub price: f64,
}

impl Priced {
    pub fn new(label: impl Into<String>, price: f64) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

impl fmt::Display for Priced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.label, self.price)
    }
}

impl Element for Priced {
    fn price(&self) -> f64 {
        self.price
    }
}
