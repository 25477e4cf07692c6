use crate::utils::error::{DrillError, Result};
use std::f64::consts::PI;

pub trait Shape {
    fn area(&self) -> f64;
}

fn check_dimension(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DrillError::input(format!(
            "{} must be a finite, non-negative number, got {}",
            name, value
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    height: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(height: f64, width: f64) -> Result<Self> {
        Ok(Self {
            height: check_dimension("height", height)?,
            width: check_dimension("width", width)?,
        })
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.height * self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: check_dimension("radius", radius)?,
        })
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}
