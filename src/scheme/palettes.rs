//! Static palette tables.
//!
//! The rainbow and sunset palettes are reproduced from Paul Tol's colour
//! schemes notes (<https://personal.sron.nl/~pault/>), YlOrBr from the
//! ColorBrewer sequential set. Values are fixed data; changing them changes
//! the rendered output, so they are kept verbatim.

use super::Rgb;

/// Qualitative rainbow, dark purple through red. Eight discrete classes.
pub const DISCRETE_RAINBOW: &[Rgb] = &[
    Rgb::new(136, 46, 114), // #882E72
    Rgb::new(25, 101, 176), // #1965B0
    Rgb::new(123, 175, 222), // #7BAFDE
    Rgb::new(78, 178, 101), // #4EB265
    Rgb::new(202, 224, 171), // #CAE0AB
    Rgb::new(247, 240, 86), // #F7F056
    Rgb::new(238, 128, 38), // #EE8026
    Rgb::new(220, 5, 12), // #DC050C
];

/// Interpolatable "smooth rainbow", pale lilac through dark brown-red.
pub const SMOOTH_RAINBOW: &[Rgb] = &[
    Rgb::new(232, 236, 251), // #E8ECFB
    Rgb::new(221, 216, 239), // #DDD8EF
    Rgb::new(209, 193, 225), // #D1C1E1
    Rgb::new(195, 168, 209), // #C3A8D1
    Rgb::new(181, 143, 194), // #B58FC2
    Rgb::new(167, 120, 180), // #A778B4
    Rgb::new(155, 98, 167), // #9B62A7
    Rgb::new(140, 78, 153), // #8C4E99
    Rgb::new(111, 76, 155), // #6F4C9B
    Rgb::new(96, 89, 169), // #6059A9
    Rgb::new(85, 104, 184), // #5568B8
    Rgb::new(78, 121, 197), // #4E79C5
    Rgb::new(77, 138, 198), // #4D8AC6
    Rgb::new(78, 150, 188), // #4E96BC
    Rgb::new(84, 158, 179), // #549EB3
    Rgb::new(89, 165, 169), // #59A5A9
    Rgb::new(96, 171, 158), // #60AB9E
    Rgb::new(105, 177, 144), // #69B190
    Rgb::new(119, 183, 125), // #77B77D
    Rgb::new(140, 188, 104), // #8CBC68
    Rgb::new(166, 190, 84), // #A6BE54
    Rgb::new(190, 188, 72), // #BEBC48
    Rgb::new(209, 181, 65), // #D1B541
    Rgb::new(221, 170, 60), // #DDAA3C
    Rgb::new(228, 156, 57), // #E49C39
    Rgb::new(231, 140, 53), // #E78C35
    Rgb::new(230, 121, 50), // #E67932
    Rgb::new(228, 99, 45), // #E4632D
    Rgb::new(223, 72, 40), // #DF4828
    Rgb::new(218, 34, 34), // #DA2222
    Rgb::new(184, 34, 30), // #B8221E
    Rgb::new(149, 33, 27), // #95211B
    Rgb::new(114, 30, 23), // #721E17
    Rgb::new(82, 26, 19), // #521A13
];

/// Diverging sunset, deep blue through off-white to dark red.
pub const SUNSET: &[Rgb] = &[
    Rgb::new(54, 75, 154), // #364B9A
    Rgb::new(74, 123, 183), // #4A7BB7
    Rgb::new(110, 166, 205), // #6EA6CD
    Rgb::new(152, 202, 225), // #98CAE1
    Rgb::new(194, 228, 239), // #C2E4EF
    Rgb::new(234, 236, 204), // #EAECCC
    Rgb::new(254, 218, 139), // #FEDA8B
    Rgb::new(253, 179, 102), // #FDB366
    Rgb::new(246, 126, 75), // #F67E4B
    Rgb::new(221, 61, 45), // #DD3D2D
    Rgb::new(165, 0, 38), // #A50026
];

/// Sequential light yellow to dark brown. Eight discrete classes.
pub const YLORBR: &[Rgb] = &[
    Rgb::new(255, 247, 188), // #FFF7BC
    Rgb::new(254, 227, 145), // #FEE391
    Rgb::new(254, 196, 79), // #FEC44F
    Rgb::new(251, 154, 41), // #FB9A29
    Rgb::new(236, 112, 20), // #EC7014
    Rgb::new(204, 76, 2), // #CC4C02
    Rgb::new(153, 52, 4), // #993404
    Rgb::new(102, 37, 6), // #662506
];

/// Warm half of the sunset palette; the top classes saturate at its darkest
/// red so everything beyond a terabyte reads as "large".
pub const PARTIAL_SUNSET: &[Rgb] = &[
    Rgb::new(254, 218, 139), // #FEDA8B
    Rgb::new(253, 179, 102), // #FDB366
    Rgb::new(246, 126, 75), // #F67E4B
    Rgb::new(221, 61, 45), // #DD3D2D
    Rgb::new(165, 0, 38), // #A50026
    Rgb::new(165, 0, 38), // #A50026
    Rgb::new(165, 0, 38), // #A50026
    Rgb::new(165, 0, 38), // #A50026
];
