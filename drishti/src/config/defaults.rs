//! Default value functions for serde deserialization.

use crate::filter::BlurKernel;

pub fn p_hit() -> f64 {
    3.0
}

pub fn p_miss() -> f64 {
    1.0
}

pub fn blurring() -> f64 {
    0.12
}

pub fn kernel() -> BlurKernel {
    BlurKernel::Cross
}
