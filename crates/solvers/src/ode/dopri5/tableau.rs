//! Dormand–Prince 5(4) coefficients.
//!
//! `B` gives the fifth-order solution that is propagated; `E = B − B̂` gives
//! the difference to the embedded fourth-order solution, used as the local
//! error estimate. The seventh stage is evaluated at the new point and reused
//! as the first stage of the next step.

pub(super) const C2: f64 = 1.0 / 5.0;
pub(super) const C3: f64 = 3.0 / 10.0;
pub(super) const C4: f64 = 4.0 / 5.0;
pub(super) const C5: f64 = 8.0 / 9.0;

pub(super) const A21: f64 = 1.0 / 5.0;
pub(super) const A31: f64 = 3.0 / 40.0;
pub(super) const A32: f64 = 9.0 / 40.0;
pub(super) const A41: f64 = 44.0 / 45.0;
pub(super) const A42: f64 = -56.0 / 15.0;
pub(super) const A43: f64 = 32.0 / 9.0;
pub(super) const A51: f64 = 19372.0 / 6561.0;
pub(super) const A52: f64 = -25360.0 / 2187.0;
pub(super) const A53: f64 = 64448.0 / 6561.0;
pub(super) const A54: f64 = -212.0 / 729.0;
pub(super) const A61: f64 = 9017.0 / 3168.0;
pub(super) const A62: f64 = -355.0 / 33.0;
pub(super) const A63: f64 = 46732.0 / 5247.0;
pub(super) const A64: f64 = 49.0 / 176.0;
pub(super) const A65: f64 = -5103.0 / 18656.0;

pub(super) const B1: f64 = 35.0 / 384.0;
pub(super) const B3: f64 = 500.0 / 1113.0;
pub(super) const B4: f64 = 125.0 / 192.0;
pub(super) const B5: f64 = -2187.0 / 6784.0;
pub(super) const B6: f64 = 11.0 / 84.0;

const B_HAT1: f64 = 5179.0 / 57600.0;
const B_HAT3: f64 = 7571.0 / 16695.0;
const B_HAT4: f64 = 393.0 / 640.0;
const B_HAT5: f64 = -92097.0 / 339200.0;
const B_HAT6: f64 = 187.0 / 2100.0;
const B_HAT7: f64 = 1.0 / 40.0;

pub(super) const E1: f64 = B1 - B_HAT1;
pub(super) const E3: f64 = B3 - B_HAT3;
pub(super) const E4: f64 = B4 - B_HAT4;
pub(super) const E5: f64 = B5 - B_HAT5;
pub(super) const E6: f64 = B6 - B_HAT6;
pub(super) const E7: f64 = -B_HAT7;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rows_sum_to_nodes() {
        assert_relative_eq!(A21, C2);
        assert_relative_eq!(A31 + A32, C3);
        assert_relative_eq!(A41 + A42 + A43, C4, epsilon = 1e-15);
        assert_relative_eq!(A51 + A52 + A53 + A54, C5, epsilon = 1e-14);
        assert_relative_eq!(A61 + A62 + A63 + A64 + A65, 1.0, epsilon = 1e-14);
    }

    #[test]
    fn weights_are_consistent() {
        assert_relative_eq!(B1 + B3 + B4 + B5 + B6, 1.0, epsilon = 1e-15);
        assert_relative_eq!(E1 + E3 + E4 + E5 + E6 + E7, 0.0, epsilon = 1e-15);
    }
}
