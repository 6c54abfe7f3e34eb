//! The xterm 256-color catalog.
//!
//! Indices 0-15 are the standard and bright system colors, 16-231 the
//! 6x6x6 cube, 232-255 the grayscale ramp. Hex strings are uppercase
//! without a leading `#`.

use serde::Serialize;

use crate::colorspace::Rgb;

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    /// Terminal palette index.
    pub id: u8,
    pub hex: &'static str,
    pub rgb: Rgb,
}

impl Color {
    /// Name of the system color for ids 0-15, `None` otherwise.
    pub const fn name16(&self) -> Option<&'static str> {
        let name = match self.id {
            0 => "Black",
            1 => "Red",
            2 => "Green",
            3 => "Yellow",
            4 => "Blue",
            5 => "Purple",
            6 => "Cyan",
            7 => "White",
            8 => "Black (Bright)",
            9 => "Red (Bright)",
            10 => "Green (Bright)",
            11 => "Yellow (Bright)",
            12 => "Blue (Bright)",
            13 => "Purple (Bright)",
            14 => "Cyan (Bright)",
            15 => "White (Bright)",
            _ => return None,
        };
        Some(name)
    }
}

const fn entry(id: u8, hex: &'static str, r: u8, g: u8, b: u8) -> Color {
    Color {
        id,
        hex,
        rgb: Rgb::new(r, g, b),
    }
}

/// All 256 terminal colors in palette order.
pub static CATALOG: [Color; 256] = [
    entry(0, "000000", 0, 0, 0),
    entry(1, "800000", 128, 0, 0),
    entry(2, "008000", 0, 128, 0),
    entry(3, "808000", 128, 128, 0),
    entry(4, "000080", 0, 0, 128),
    entry(5, "800080", 128, 0, 128),
    entry(6, "008080", 0, 128, 128),
    entry(7, "C0C0C0", 192, 192, 192),
    entry(8, "808080", 128, 128, 128),
    entry(9, "FF0000", 255, 0, 0),
    entry(10, "00FF00", 0, 255, 0),
    entry(11, "FFFF00", 255, 255, 0),
    entry(12, "0000FF", 0, 0, 255),
    entry(13, "FF00FF", 255, 0, 255),
    entry(14, "00FFFF", 0, 255, 255),
    entry(15, "FFFFFF", 255, 255, 255),
    entry(16, "000000", 0, 0, 0),
    entry(17, "00005F", 0, 0, 95),
    entry(18, "000087", 0, 0, 135),
    entry(19, "0000AF", 0, 0, 175),
    entry(20, "0000D7", 0, 0, 215),
    entry(21, "0000FF", 0, 0, 255),
    entry(22, "005F00", 0, 95, 0),
    entry(23, "005F5F", 0, 95, 95),
    entry(24, "005F87", 0, 95, 135),
    entry(25, "005FAF", 0, 95, 175),
    entry(26, "005FD7", 0, 95, 215),
    entry(27, "005FFF", 0, 95, 255),
    entry(28, "008700", 0, 135, 0),
    entry(29, "00875F", 0, 135, 95),
    entry(30, "008787", 0, 135, 135),
    entry(31, "0087AF", 0, 135, 175),
    entry(32, "0087D7", 0, 135, 215),
    entry(33, "0087FF", 0, 135, 255),
    entry(34, "00AF00", 0, 175, 0),
    entry(35, "00AF5F", 0, 175, 95),
    entry(36, "00AF87", 0, 175, 135),
    entry(37, "00AFAF", 0, 175, 175),
    entry(38, "00AFD7", 0, 175, 215),
    entry(39, "00AFFF", 0, 175, 255),
    entry(40, "00D700", 0, 215, 0),
    entry(41, "00D75F", 0, 215, 95),
    entry(42, "00D787", 0, 215, 135),
    entry(43, "00D7AF", 0, 215, 175),
    entry(44, "00D7D7", 0, 215, 215),
    entry(45, "00D7FF", 0, 215, 255),
    entry(46, "00FF00", 0, 255, 0),
    entry(47, "00FF5F", 0, 255, 95),
    entry(48, "00FF87", 0, 255, 135),
    entry(49, "00FFAF", 0, 255, 175),
    entry(50, "00FFD7", 0, 255, 215),
    entry(51, "00FFFF", 0, 255, 255),
    entry(52, "5F0000", 95, 0, 0),
    entry(53, "5F005F", 95, 0, 95),
    entry(54, "5F0087", 95, 0, 135),
    entry(55, "5F00AF", 95, 0, 175),
    entry(56, "5F00D7", 95, 0, 215),
    entry(57, "5F00FF", 95, 0, 255),
    entry(58, "5F5F00", 95, 95, 0),
    entry(59, "5F5F5F", 95, 95, 95),
    entry(60, "5F5F87", 95, 95, 135),
    entry(61, "5F5FAF", 95, 95, 175),
    entry(62, "5F5FD7", 95, 95, 215),
    entry(63, "5F5FFF", 95, 95, 255),
    entry(64, "5F8700", 95, 135, 0),
    entry(65, "5F875F", 95, 135, 95),
    entry(66, "5F8787", 95, 135, 135),
    entry(67, "5F87AF", 95, 135, 175),
    entry(68, "5F87D7", 95, 135, 215),
    entry(69, "5F87FF", 95, 135, 255),
    entry(70, "5FAF00", 95, 175, 0),
    entry(71, "5FAF5F", 95, 175, 95),
    entry(72, "5FAF87", 95, 175, 135),
    entry(73, "5FAFAF", 95, 175, 175),
    entry(74, "5FAFD7", 95, 175, 215),
    entry(75, "5FAFFF", 95, 175, 255),
    entry(76, "5FD700", 95, 215, 0),
    entry(77, "5FD75F", 95, 215, 95),
    entry(78, "5FD787", 95, 215, 135),
    entry(79, "5FD7AF", 95, 215, 175),
    entry(80, "5FD7D7", 95, 215, 215),
    entry(81, "5FD7FF", 95, 215, 255),
    entry(82, "5FFF00", 95, 255, 0),
    entry(83, "5FFF5F", 95, 255, 95),
    entry(84, "5FFF87", 95, 255, 135),
    entry(85, "5FFFAF", 95, 255, 175),
    entry(86, "5FFFD7", 95, 255, 215),
    entry(87, "5FFFFF", 95, 255, 255),
    entry(88, "870000", 135, 0, 0),
    entry(89, "87005F", 135, 0, 95),
    entry(90, "870087", 135, 0, 135),
    entry(91, "8700AF", 135, 0, 175),
    entry(92, "8700D7", 135, 0, 215),
    entry(93, "8700FF", 135, 0, 255),
    entry(94, "875F00", 135, 95, 0),
    entry(95, "875F5F", 135, 95, 95),
    entry(96, "875F87", 135, 95, 135),
    entry(97, "875FAF", 135, 95, 175),
    entry(98, "875FD7", 135, 95, 215),
    entry(99, "875FFF", 135, 95, 255),
    entry(100, "878700", 135, 135, 0),
    entry(101, "87875F", 135, 135, 95),
    entry(102, "878787", 135, 135, 135),
    entry(103, "8787AF", 135, 135, 175),
    entry(104, "8787D7", 135, 135, 215),
    entry(105, "8787FF", 135, 135, 255),
    entry(106, "87AF00", 135, 175, 0),
    entry(107, "87AF5F", 135, 175, 95),
    entry(108, "87AF87", 135, 175, 135),
    entry(109, "87AFAF", 135, 175, 175),
    entry(110, "87AFD7", 135, 175, 215),
    entry(111, "87AFFF", 135, 175, 255),
    entry(112, "87D700", 135, 215, 0),
    entry(113, "87D75F", 135, 215, 95),
    entry(114, "87D787", 135, 215, 135),
    entry(115, "87D7AF", 135, 215, 175),
    entry(116, "87D7D7", 135, 215, 215),
    entry(117, "87D7FF", 135, 215, 255),
    entry(118, "87FF00", 135, 255, 0),
    entry(119, "87FF5F", 135, 255, 95),
    entry(120, "87FF87", 135, 255, 135),
    entry(121, "87FFAF", 135, 255, 175),
    entry(122, "87FFD7", 135, 255, 215),
    entry(123, "87FFFF", 135, 255, 255),
    entry(124, "AF0000", 175, 0, 0),
    entry(125, "AF005F", 175, 0, 95),
    entry(126, "AF0087", 175, 0, 135),
    entry(127, "AF00AF", 175, 0, 175),
    entry(128, "AF00D7", 175, 0, 215),
    entry(129, "AF00FF", 175, 0, 255),
    entry(130, "AF5F00", 175, 95, 0),
    entry(131, "AF5F5F", 175, 95, 95),
    entry(132, "AF5F87", 175, 95, 135),
    entry(133, "AF5FAF", 175, 95, 175),
    entry(134, "AF5FD7", 175, 95, 215),
    entry(135, "AF5FFF", 175, 95, 255),
    entry(136, "AF8700", 175, 135, 0),
    entry(137, "AF875F", 175, 135, 95),
    entry(138, "AF8787", 175, 135, 135),
    entry(139, "AF87AF", 175, 135, 175),
    entry(140, "AF87D7", 175, 135, 215),
    entry(141, "AF87FF", 175, 135, 255),
    entry(142, "AFAF00", 175, 175, 0),
    entry(143, "AFAF5F", 175, 175, 95),
    entry(144, "AFAF87", 175, 175, 135),
    entry(145, "AFAFAF", 175, 175, 175),
    entry(146, "AFAFD7", 175, 175, 215),
    entry(147, "AFAFFF", 175, 175, 255),
    entry(148, "AFD700", 175, 215, 0),
    entry(149, "AFD75F", 175, 215, 95),
    entry(150, "AFD787", 175, 215, 135),
    entry(151, "AFD7AF", 175, 215, 175),
    entry(152, "AFD7D7", 175, 215, 215),
    entry(153, "AFD7FF", 175, 215, 255),
    entry(154, "AFFF00", 175, 255, 0),
    entry(155, "AFFF5F", 175, 255, 95),
    entry(156, "AFFF87", 175, 255, 135),
    entry(157, "AFFFAF", 175, 255, 175),
    entry(158, "AFFFD7", 175, 255, 215),
    entry(159, "AFFFFF", 175, 255, 255),
    entry(160, "D70000", 215, 0, 0),
    entry(161, "D7005F", 215, 0, 95),
    entry(162, "D70087", 215, 0, 135),
    entry(163, "D700AF", 215, 0, 175),
    entry(164, "D700D7", 215, 0, 215),
    entry(165, "D700FF", 215, 0, 255),
    entry(166, "D75F00", 215, 95, 0),
    entry(167, "D75F5F", 215, 95, 95),
    entry(168, "D75F87", 215, 95, 135),
    entry(169, "D75FAF", 215, 95, 175),
    entry(170, "D75FD7", 215, 95, 215),
    entry(171, "D75FFF", 215, 95, 255),
    entry(172, "D78700", 215, 135, 0),
    entry(173, "D7875F", 215, 135, 95),
    entry(174, "D78787", 215, 135, 135),
    entry(175, "D787AF", 215, 135, 175),
    entry(176, "D787D7", 215, 135, 215),
    entry(177, "D787FF", 215, 135, 255),
    entry(178, "D7AF00", 215, 175, 0),
    entry(179, "D7AF5F", 215, 175, 95),
    entry(180, "D7AF87", 215, 175, 135),
    entry(181, "D7AFAF", 215, 175, 175),
    entry(182, "D7AFD7", 215, 175, 215),
    entry(183, "D7AFFF", 215, 175, 255),
    entry(184, "D7D700", 215, 215, 0),
    entry(185, "D7D75F", 215, 215, 95),
    entry(186, "D7D787", 215, 215, 135),
    entry(187, "D7D7AF", 215, 215, 175),
    entry(188, "D7D7D7", 215, 215, 215),
    entry(189, "D7D7FF", 215, 215, 255),
    entry(190, "D7FF00", 215, 255, 0),
    entry(191, "D7FF5F", 215, 255, 95),
    entry(192, "D7FF87", 215, 255, 135),
    entry(193, "D7FFAF", 215, 255, 175),
    entry(194, "D7FFD7", 215, 255, 215),
    entry(195, "D7FFFF", 215, 255, 255),
    entry(196, "FF0000", 255, 0, 0),
    entry(197, "FF005F", 255, 0, 95),
    entry(198, "FF0087", 255, 0, 135),
    entry(199, "FF00AF", 255, 0, 175),
    entry(200, "FF00D7", 255, 0, 215),
    entry(201, "FF00FF", 255, 0, 255),
    entry(202, "FF5F00", 255, 95, 0),
    entry(203, "FF5F5F", 255, 95, 95),
    entry(204, "FF5F87", 255, 95, 135),
    entry(205, "FF5FAF", 255, 95, 175),
    entry(206, "FF5FD7", 255, 95, 215),
    entry(207, "FF5FFF", 255, 95, 255),
    entry(208, "FF8700", 255, 135, 0),
    entry(209, "FF875F", 255, 135, 95),
    entry(210, "FF8787", 255, 135, 135),
    entry(211, "FF87AF", 255, 135, 175),
    entry(212, "FF87D7", 255, 135, 215),
    entry(213, "FF87FF", 255, 135, 255),
    entry(214, "FFAF00", 255, 175, 0),
    entry(215, "FFAF5F", 255, 175, 95),
    entry(216, "FFAF87", 255, 175, 135),
    entry(217, "FFAFAF", 255, 175, 175),
    entry(218, "FFAFD7", 255, 175, 215),
    entry(219, "FFAFFF", 255, 175, 255),
    entry(220, "FFD700", 255, 215, 0),
    entry(221, "FFD75F", 255, 215, 95),
    entry(222, "FFD787", 255, 215, 135),
    entry(223, "FFD7AF", 255, 215, 175),
    entry(224, "FFD7D7", 255, 215, 215),
    entry(225, "FFD7FF", 255, 215, 255),
    entry(226, "FFFF00", 255, 255, 0),
    entry(227, "FFFF5F", 255, 255, 95),
    entry(228, "FFFF87", 255, 255, 135),
    entry(229, "FFFFAF", 255, 255, 175),
    entry(230, "FFFFD7", 255, 255, 215),
    entry(231, "FFFFFF", 255, 255, 255),
    entry(232, "080808", 8, 8, 8),
    entry(233, "121212", 18, 18, 18),
    entry(234, "1C1C1C", 28, 28, 28),
    entry(235, "262626", 38, 38, 38),
    entry(236, "303030", 48, 48, 48),
    entry(237, "3A3A3A", 58, 58, 58),
    entry(238, "444444", 68, 68, 68),
    entry(239, "4E4E4E", 78, 78, 78),
    entry(240, "585858", 88, 88, 88),
    entry(241, "626262", 98, 98, 98),
    entry(242, "6C6C6C", 108, 108, 108),
    entry(243, "767676", 118, 118, 118),
    entry(244, "808080", 128, 128, 128),
    entry(245, "8A8A8A", 138, 138, 138),
    entry(246, "949494", 148, 148, 148),
    entry(247, "9E9E9E", 158, 158, 158),
    entry(248, "A8A8A8", 168, 168, 168),
    entry(249, "B2B2B2", 178, 178, 178),
    entry(250, "BCBCBC", 188, 188, 188),
    entry(251, "C6C6C6", 198, 198, 198),
    entry(252, "D0D0D0", 208, 208, 208),
    entry(253, "DADADA", 218, 218, 218),
    entry(254, "E4E4E4", 228, 228, 228),
    entry(255, "EEEEEE", 238, 238, 238),
];

/// Look up a catalog entry by palette index.
pub fn by_id(id: u8) -> &'static Color {
    &CATALOG[usize::from(id)]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_positions() {
        for (i, color) in CATALOG.iter().enumerate() {
            assert_eq!(usize::from(color.id), i);
        }
    }

    #[test]
    fn hex_agrees_with_rgb() {
        for color in &CATALOG {
            let expected = format!("{:02X}{:02X}{:02X}", color.rgb.r, color.rgb.g, color.rgb.b);
            assert_eq!(color.hex, expected, "id {}", color.id);
        }
    }

    #[test]
    fn only_system_colors_have_names() {
        assert_eq!(by_id(9).name16(), Some("Red (Bright)"));
        assert_eq!(by_id(0).name16(), Some("Black"));
        assert_eq!(by_id(15).name16(), Some("White (Bright)"));
        assert!(CATALOG[16..].iter().all(|c| c.name16().is_none()));
    }

    #[test]
    fn cube_and_ramp_values() {
        assert_eq!(by_id(16).hex, "000000");
        assert_eq!(by_id(196).hex, "FF0000");
        assert_eq!(by_id(231).hex, "FFFFFF");
        assert_eq!(by_id(232).hex, "080808");
        assert_eq!(by_id(255).hex, "EEEEEE");
    }
}
