//! Periodic terms for the Moon (Meeus, Astronomical Algorithms, tables 47.A and 47.B)
//!
//! Columns are parallel: row `i` of every column belongs to term `i`. Amplitudes
//! are in 0.000001 degree for longitude and latitude and in 0.001 km for distance.

// Table 47.A: longitude and distance, multipliers of D, M, M', F

/// Multiplier of D, mean elongation
#[rustfmt::skip]
pub const LON_D: [i32; 60] = [
    0, 2, 2, 0, 0, 0, 2, 2, 2, 2, 0, 1, 0, 2, 0,
    0, 4, 0, 4, 2, 2, 1, 1, 2, 2, 4, 2, 0, 2, 2,
    1, 2, 0, 0, 2, 2, 2, 4, 0, 3, 2, 4, 0, 2, 2,
    2, 4, 0, 4, 1, 2, 0, 1, 3, 4, 2, 0, 1, 2, 2,
];

/// Multiplier of M, Sun's mean anomaly
#[rustfmt::skip]
pub const LON_M: [i32; 60] = [
    0, 0, 0, 0, 1, 0, 0, -1, 0, -1, 1, 0, 1, 0, 0,
    0, 0, 0, 0, 1, 1, 0, 1, -1, 0, 0, 0, 1, 0, -1,
    0, -2, 1, 2, -2, 0, 0, -1, 0, 0, 1, -1, 2, 2, 1,
    -1, 0, 0, -1, 0, 1, 0, 1, 0, 0, -1, 2, 1, 0, 0,
];

/// Multiplier of M', Moon's mean anomaly
#[rustfmt::skip]
pub const LON_MP: [i32; 60] = [
    1, -1, 0, 2, 0, 0, -2, -1, 1, 0, -1, 0, 1, 0, 1,
    1, -1, 3, -2, -1, 0, -1, 0, 1, 2, 0, -3, -2, -1, -2,
    1, 0, 2, 0, -1, 1, 0, -1, 2, -1, 1, -2, -1, -1, -2,
    0, 1, 4, 0, -2, 0, 2, 1, -2, -3, 2, 1, -1, 3, -1,
];

/// Multiplier of F, argument of latitude
#[rustfmt::skip]
pub const LON_F: [i32; 60] = [
    0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, -2, 2,
    -2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0,
    0, 0, 0, 0, 0, -2, 2, 0, 2, 0, 0, 0, 0, 0, 0,
    -2, 0, 0, 0, 0, -2, -2, 0, 0, 0, 0, 0, 0, 0, -2,
];

/// Σl sine amplitudes
#[rustfmt::skip]
pub const LON_SIN: [f64; 60] = [
    6288774.0, 1274027.0, 658314.0, 213618.0, -185116.0, -114332.0, 58793.0, 57066.0,
    53322.0, 45758.0, -40923.0, -34720.0, -30383.0, 15327.0, -12528.0, 10980.0,
    10675.0, 10034.0, 8548.0, -7888.0, -6766.0, -5163.0, 4987.0, 4036.0,
    3994.0, 3861.0, 3665.0, -2689.0, -2602.0, 2390.0, -2348.0, 2236.0,
    -2120.0, -2069.0, 2048.0, -1773.0, -1595.0, 1215.0, -1110.0, -892.0,
    -810.0, 759.0, -713.0, -700.0, 691.0, 596.0, 549.0, 537.0,
    520.0, -487.0, -399.0, -381.0, 351.0, -340.0, 330.0, 327.0,
    -323.0, 299.0, 294.0, 0.0,
];

/// Σr cosine amplitudes
#[rustfmt::skip]
pub const DIST_COS: [f64; 60] = [
    -20905355.0, -3699111.0, -2955968.0, -569925.0, 48888.0, -3149.0, 246158.0, -152138.0,
    -170733.0, -204586.0, -129620.0, 108743.0, 104755.0, 10321.0, 0.0, 79661.0,
    -34782.0, -23210.0, -21636.0, 24208.0, 30824.0, -8379.0, -16675.0, -12831.0,
    -10445.0, -11650.0, 14403.0, -7003.0, 0.0, 10056.0, 6322.0, -9884.0,
    5751.0, 0.0, -4950.0, 4130.0, 0.0, -3958.0, 0.0, 3258.0,
    2616.0, -1897.0, -2117.0, 2354.0, 0.0, 0.0, -1423.0, -1117.0,
    -1571.0, -1739.0, 0.0, -4421.0, 0.0, 0.0, 0.0, 0.0,
    1165.0, 0.0, 0.0, 8752.0,
];

// Table 47.B: latitude

/// Multiplier of D
#[rustfmt::skip]
pub const LAT_D: [i32; 60] = [
    0, 0, 0, 2, 2, 2, 2, 0, 2, 0, 2, 2, 2, 2, 2,
    2, 2, 0, 4, 0, 0, 0, 1, 0, 0, 0, 1, 0, 4, 4,
    0, 4, 2, 2, 2, 2, 0, 2, 2, 2, 2, 4, 2, 2, 0,
    2, 1, 1, 0, 2, 1, 2, 0, 4, 4, 1, 4, 1, 4, 2,
];

/// Multiplier of M
#[rustfmt::skip]
pub const LAT_M: [i32; 60] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 1, -1,
    -1, -1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0,
    0, 0, 0, 0, -1, 0, 0, 0, 0, 1, 1, 0, -1, -2, 0,
    1, 1, 1, 1, 1, 0, -1, 1, 0, -1, 0, 0, 0, -1, -2,
];

/// Multiplier of M'
#[rustfmt::skip]
pub const LAT_MP: [i32; 60] = [
    0, 1, 1, 0, -1, -1, 0, 2, 1, 2, 0, -2, 1, 0, -1,
    0, -1, -1, -1, 0, 0, -1, 0, 1, 1, 0, 0, 3, 0, -1,
    1, -2, 0, 2, 1, -2, 3, 2, -3, -1, 0, 0, 1, 0, 1,
    1, 0, 0, -2, -1, 1, -2, 2, -2, -1, 1, 1, -1, 0, 0,
];

/// Multiplier of F
#[rustfmt::skip]
pub const LAT_F: [i32; 60] = [
    1, 1, -1, -1, 1, -1, 1, 1, -1, -1, -1, -1, 1, -1, 1,
    1, -1, -1, -1, 1, 3, 1, 1, 1, -1, -1, -1, 1, -1, 1,
    -3, 1, -3, -1, -1, 1, -1, 1, -1, 1, 1, 1, 1, -1, 3,
    -1, -1, 1, -1, -1, 1, -1, 1, -1, -1, -1, -1, -1, -1, 1,
];

/// Σb sine amplitudes
#[rustfmt::skip]
pub const LAT_SIN: [f64; 60] = [
    5128122.0, 280602.0, 277693.0, 173237.0, 55413.0, 46271.0, 32573.0, 17198.0,
    9266.0, 8822.0, 8216.0, 4324.0, 4200.0, -3359.0, 2463.0, 2211.0,
    2065.0, -1870.0, 1828.0, -1794.0, -1749.0, -1565.0, -1491.0, -1475.0,
    -1410.0, -1344.0, -1335.0, 1107.0, 1021.0, 833.0, 777.0, 671.0,
    607.0, 596.0, 491.0, -451.0, 439.0, 422.0, 421.0, -366.0,
    -351.0, 331.0, 315.0, 302.0, -283.0, -229.0, 223.0, 223.0,
    -220.0, -220.0, -185.0, 181.0, -177.0, 176.0, 166.0, -164.0,
    132.0, -119.0, 115.0, 107.0,
];
