//! Static codepoint tables used by the width and visibility queries.
//!
//! Every table is checked for ordering when it is built in `const`
//! context, so an edit that breaks the sort order fails to compile.

use super::ranges::{CharRange, RangeTable};

const fn r(lo: u32, hi: u32) -> CharRange {
    CharRange::new(lo, hi)
}

const DOUBLE_WIDTH_RANGES: &[CharRange] = &[
    r(0x1100, 0x115F), r(0x11A3, 0x11A7), r(0x11FA, 0x11FF),
    r(0x2329, 0x232A), r(0x2E80, 0x2E99), r(0x2E9B, 0x2EF3),
    r(0x2F00, 0x2FD5), r(0x2FF0, 0x2FFB), r(0x3000, 0x3029),
    r(0x3030, 0x303E), r(0x3041, 0x3096), r(0x309B, 0x30FF),
    r(0x3105, 0x312D), r(0x3131, 0x318E), r(0x3190, 0x31B7),
    r(0x31C0, 0x31E3), r(0x31F0, 0x321E), r(0x3220, 0x3247),
    r(0x3250, 0x32FE), r(0x3300, 0x4DBF), r(0x4E00, 0xA48C),
    r(0xA490, 0xA4C6), r(0xA960, 0xA97C), r(0xAC00, 0xD7A3),
    r(0xD7B0, 0xD7C6), r(0xD7CB, 0xD7FB), r(0xF900, 0xFAFF),
    r(0xFE10, 0xFE19), r(0xFE30, 0xFE52), r(0xFE54, 0xFE66),
    r(0xFE68, 0xFE6B), r(0xFF01, 0xFF60), r(0xFFE0, 0xFFE6),
    r(0x1F200, 0x1F200), r(0x1F210, 0x1F231), r(0x1F240, 0x1F248),
    r(0x20000, 0x2FFFF),
];

/// Wide and fullwidth characters (CJK, Hangul, fullwidth forms).
pub static DOUBLE_WIDTH: RangeTable<'static> =
    RangeTable::from_sorted("double-width", DOUBLE_WIDTH_RANGES);

const ZERO_WIDTH_RANGES: &[CharRange] = &[
    r(0x0300, 0x036F), r(0x0483, 0x0489), r(0x0591, 0x05BD),
    r(0x05BF, 0x05BF), r(0x05C1, 0x05C2), r(0x05C4, 0x05C5),
    r(0x05C7, 0x05C7), r(0x0610, 0x061A), r(0x064B, 0x065E),
    r(0x0670, 0x0670), r(0x06D6, 0x06DC), r(0x06DE, 0x06E4),
    r(0x06E7, 0x06E8), r(0x06EA, 0x06ED), r(0x0711, 0x0711),
    r(0x0730, 0x074A), r(0x07A6, 0x07B0), r(0x07EB, 0x07F3),
    r(0x0816, 0x0819), r(0x081B, 0x0823), r(0x0825, 0x0827),
    r(0x0829, 0x082D), r(0x0900, 0x0903), r(0x093C, 0x093C),
    r(0x093E, 0x094E), r(0x0951, 0x0955), r(0x0962, 0x0963),
    r(0x0981, 0x0983), r(0x09BC, 0x09BC), r(0x09BE, 0x09C4),
    r(0x09C7, 0x09C8), r(0x09CB, 0x09CD), r(0x09D7, 0x09D7),
    r(0x09E2, 0x09E3), r(0x0A01, 0x0A03), r(0x0A3C, 0x0A3C),
    r(0x0A3E, 0x0A42), r(0x0A47, 0x0A48), r(0x0A4B, 0x0A4D),
    r(0x0A51, 0x0A51), r(0x0A70, 0x0A71), r(0x0A75, 0x0A75),
    r(0x0A81, 0x0A83), r(0x0ABC, 0x0ABC), r(0x0ABE, 0x0AC5),
    r(0x0AC7, 0x0AC9), r(0x0ACB, 0x0ACD), r(0x0AE2, 0x0AE3),
    r(0x0B01, 0x0B03), r(0x0B3C, 0x0B3C), r(0x0B3E, 0x0B44),
    r(0x0B47, 0x0B48), r(0x0B4B, 0x0B4D), r(0x0B56, 0x0B57),
    r(0x0B62, 0x0B63), r(0x0B82, 0x0B82), r(0x0BBE, 0x0BC2),
    r(0x0BC6, 0x0BC8), r(0x0BCA, 0x0BCD), r(0x0BD7, 0x0BD7),
    r(0x0C01, 0x0C03), r(0x0C3E, 0x0C44), r(0x0C46, 0x0C48),
    r(0x0C4A, 0x0C4D), r(0x0C55, 0x0C56), r(0x0C62, 0x0C63),
    r(0x0C82, 0x0C83), r(0x0CBC, 0x0CBC), r(0x0CBE, 0x0CC4),
    r(0x0CC6, 0x0CC8), r(0x0CCA, 0x0CCD), r(0x0CD5, 0x0CD6),
    r(0x0CE2, 0x0CE3), r(0x0D02, 0x0D03), r(0x0D3E, 0x0D44),
    r(0x0D46, 0x0D48), r(0x0D4A, 0x0D4D), r(0x0D57, 0x0D57),
    r(0x0D62, 0x0D63), r(0x0D82, 0x0D83), r(0x0DCA, 0x0DCA),
    r(0x0DCF, 0x0DD4), r(0x0DD6, 0x0DD6), r(0x0DD8, 0x0DDF),
    r(0x0DF2, 0x0DF3), r(0x0E31, 0x0E31), r(0x0E34, 0x0E3A),
    r(0x0E47, 0x0E4E), r(0x0EB1, 0x0EB1), r(0x0EB4, 0x0EB9),
    r(0x0EBB, 0x0EBC), r(0x0EC8, 0x0ECD), r(0x0F18, 0x0F19),
    r(0x0F35, 0x0F35), r(0x0F37, 0x0F37), r(0x0F39, 0x0F39),
    r(0x0F3E, 0x0F3F), r(0x0F71, 0x0F84), r(0x0F86, 0x0F87),
    r(0x0F90, 0x0F97), r(0x0F99, 0x0FBC), r(0x0FC6, 0x0FC6),
    r(0x102B, 0x103E), r(0x1056, 0x1059), r(0x105E, 0x1060),
    r(0x1062, 0x1064), r(0x1067, 0x106D), r(0x1071, 0x1074),
    r(0x1082, 0x108D), r(0x108F, 0x108F), r(0x109A, 0x109D),
    r(0x135F, 0x135F), r(0x1712, 0x1714), r(0x1732, 0x1734),
    r(0x1752, 0x1753), r(0x1772, 0x1773), r(0x17B6, 0x17D3),
    r(0x17DD, 0x17DD), r(0x180B, 0x180D), r(0x18A9, 0x18A9),
    r(0x1920, 0x192B), r(0x1930, 0x193B), r(0x19B0, 0x19C0),
    r(0x19C8, 0x19C9), r(0x1A17, 0x1A1B), r(0x1A55, 0x1A5E),
    r(0x1A60, 0x1A7C), r(0x1A7F, 0x1A7F), r(0x1B00, 0x1B04),
    r(0x1B34, 0x1B44), r(0x1B6B, 0x1B73), r(0x1B80, 0x1B82),
    r(0x1BA1, 0x1BAA), r(0x1C24, 0x1C37), r(0x1CD0, 0x1CD2),
    r(0x1CD4, 0x1CE8), r(0x1CED, 0x1CED), r(0x1CF2, 0x1CF2),
    r(0x1DC0, 0x1DE6), r(0x1DFD, 0x1DFF), r(0x200B, 0x200F),
    r(0x20D0, 0x20F0), r(0x2CEF, 0x2CF1), r(0x2DE0, 0x2DFF),
    r(0x302A, 0x302F), r(0x3099, 0x309A), r(0xA66F, 0xA672),
    r(0xA67C, 0xA67D), r(0xA6F0, 0xA6F1), r(0xA802, 0xA802),
    r(0xA806, 0xA806), r(0xA80B, 0xA80B), r(0xA823, 0xA827),
    r(0xA880, 0xA881), r(0xA8B4, 0xA8C4), r(0xA8E0, 0xA8F1),
    r(0xA926, 0xA92D), r(0xA947, 0xA953), r(0xA980, 0xA983),
    r(0xA9B3, 0xA9C0), r(0xAA29, 0xAA36), r(0xAA43, 0xAA43),
    r(0xAA4C, 0xAA4D), r(0xAA7B, 0xAA7B), r(0xAAB0, 0xAAB0),
    r(0xAAB2, 0xAAB4), r(0xAAB7, 0xAAB8), r(0xAABE, 0xAABF),
    r(0xAAC1, 0xAAC1), r(0xABE3, 0xABEA), r(0xABEC, 0xABED),
    r(0xFB1E, 0xFB1E), r(0xFE00, 0xFE0F), r(0xFE20, 0xFE26),
    r(0x101FD, 0x101FD), r(0x10A01, 0x10A03), r(0x10A05, 0x10A06),
    r(0x10A0C, 0x10A0F), r(0x10A38, 0x10A3A), r(0x10A3F, 0x10A3F),
    r(0x11080, 0x11082), r(0x110B0, 0x110BA), r(0x1D165, 0x1D169),
    r(0x1D16D, 0x1D172), r(0x1D17B, 0x1D182), r(0x1D185, 0x1D18B),
    r(0x1D1AA, 0x1D1AD), r(0x1D242, 0x1D244), r(0xE0100, 0xE01EF),
];

/// Combining marks and zero-width formatting characters.
pub static ZERO_WIDTH: RangeTable<'static> =
    RangeTable::from_sorted("zero-width", ZERO_WIDTH_RANGES);

const NONPRINTABLE_RANGES: &[CharRange] = &[
    r(0x0000, 0x001F), r(0x0080, 0x009F), r(0x0300, 0x036F),
    r(0x0379, 0x0379), r(0x0380, 0x0383), r(0x038D, 0x038D),
    r(0x0483, 0x0489), r(0x0527, 0x0530), r(0x0558, 0x0558),
    r(0x0588, 0x0588), r(0x058C, 0x05BD), r(0x05C1, 0x05C2),
    r(0x05C5, 0x05C5), r(0x05C8, 0x05CF), r(0x05EC, 0x05EF),
    r(0x05F6, 0x0605), r(0x0611, 0x061A), r(0x061D, 0x061D),
    r(0x064B, 0x065F), r(0x06D6, 0x06E4), r(0x06E8, 0x06E8),
    r(0x06EB, 0x06ED), r(0x070F, 0x070F), r(0x0730, 0x074C),
    r(0x07A7, 0x07B0), r(0x07B3, 0x07BF), r(0x07EC, 0x07F3),
    r(0x07FC, 0x07FF), r(0x0817, 0x0819), r(0x081C, 0x0823),
    r(0x0826, 0x0827), r(0x082A, 0x082F), r(0x0840, 0x0903),
    r(0x093B, 0x093C), r(0x093F, 0x094F), r(0x0952, 0x0957),
    r(0x0963, 0x0963), r(0x0974, 0x0978), r(0x0981, 0x0984),
    r(0x098E, 0x098E), r(0x0992, 0x0992), r(0x09B1, 0x09B1),
    r(0x09B4, 0x09B5), r(0x09BB, 0x09BC), r(0x09BF, 0x09CD),
    r(0x09D0, 0x09DB), r(0x09E2, 0x09E5), r(0x09FD, 0x0A04),
    r(0x0A0C, 0x0A0E), r(0x0A12, 0x0A12), r(0x0A31, 0x0A31),
    r(0x0A37, 0x0A37), r(0x0A3B, 0x0A58), r(0x0A5F, 0x0A65),
    r(0x0A71, 0x0A71), r(0x0A76, 0x0A84), r(0x0A92, 0x0A92),
    r(0x0AB1, 0x0AB1), r(0x0ABA, 0x0ABC), r(0x0ABF, 0x0ACF),
    r(0x0AD2, 0x0ADF), r(0x0AE3, 0x0AE5), r(0x0AF2, 0x0B04),
    r(0x0B0E, 0x0B0E), r(0x0B12, 0x0B12), r(0x0B31, 0x0B31),
    r(0x0B3A, 0x0B3C), r(0x0B3F, 0x0B5B), r(0x0B62, 0x0B65),
    r(0x0B73, 0x0B82), r(0x0B8B, 0x0B8D), r(0x0B96, 0x0B98),
    r(0x0B9D, 0x0B9D), r(0x0BA1, 0x0BA2), r(0x0BA6, 0x0BA7),
    r(0x0BAC, 0x0BAD), r(0x0BBB, 0x0BCF), r(0x0BD2, 0x0BE5),
    r(0x0BFC, 0x0C04), r(0x0C11, 0x0C11), r(0x0C34, 0x0C34),
    r(0x0C3B, 0x0C3C), r(0x0C3F, 0x0C57), r(0x0C5B, 0x0C5F),
    r(0x0C63, 0x0C65), r(0x0C71, 0x0C77), r(0x0C81, 0x0C84),
    r(0x0C91, 0x0C91), r(0x0CB4, 0x0CB4), r(0x0CBB, 0x0CBC),
    r(0x0CBF, 0x0CDD), r(0x0CE2, 0x0CE5), r(0x0CF3, 0x0D04),
    r(0x0D11, 0x0D11), r(0x0D3A, 0x0D3C), r(0x0D3F, 0x0D5F),
    r(0x0D63, 0x0D65), r(0x0D77, 0x0D78), r(0x0D81, 0x0D84),
    r(0x0D98, 0x0D99), r(0x0DBC, 0x0DBC), r(0x0DBF, 0x0DBF),
    r(0x0DC8, 0x0DF3), r(0x0DF6, 0x0E00), r(0x0E34, 0x0E3E),
    r(0x0E48, 0x0E4E), r(0x0E5D, 0x0E80), r(0x0E85, 0x0E86),
    r(0x0E8B, 0x0E8C), r(0x0E8F, 0x0E93), r(0x0EA0, 0x0EA0),
    r(0x0EA6, 0x0EA6), r(0x0EA9, 0x0EA9), r(0x0EB1, 0x0EB1),
    r(0x0EB5, 0x0EBC), r(0x0EBF, 0x0EBF), r(0x0EC7, 0x0ECF),
    r(0x0EDB, 0x0EDB), r(0x0EDF, 0x0EFF), r(0x0F19, 0x0F19),
    r(0x0F37, 0x0F37), r(0x0F3E, 0x0F3F), r(0x0F6D, 0x0F84),
    r(0x0F87, 0x0F87), r(0x0F8D, 0x0FBD), r(0x0FCD, 0x0FCD),
    r(0x0FDA, 0x0FFF), r(0x102C, 0x103E), r(0x1057, 0x1059),
    r(0x105F, 0x1060), r(0x1063, 0x1064), r(0x1068, 0x106D),
    r(0x1072, 0x1074), r(0x1083, 0x108D), r(0x109A, 0x109D),
    r(0x10C7, 0x10CF), r(0x10FE, 0x10FF), r(0x124E, 0x124F),
    r(0x1259, 0x1259), r(0x125F, 0x125F), r(0x128E, 0x128F),
    r(0x12B6, 0x12B7), r(0x12C1, 0x12C1), r(0x12C7, 0x12C7),
    r(0x1311, 0x1311), r(0x1317, 0x1317), r(0x135C, 0x135F),
    r(0x137E, 0x137F), r(0x139B, 0x139F), r(0x13F6, 0x13FF),
    r(0x169E, 0x169F), r(0x16F2, 0x16FF), r(0x1712, 0x171F),
    r(0x1733, 0x1734), r(0x1738, 0x173F), r(0x1753, 0x175F),
    r(0x1771, 0x177F), r(0x17B5, 0x17D3), r(0x17DE, 0x17DF),
    r(0x17EB, 0x17EF), r(0x17FB, 0x17FF), r(0x180C, 0x180D),
    r(0x181A, 0x181F), r(0x1879, 0x187F), r(0x18AB, 0x18AF),
    r(0x18F7, 0x18FF), r(0x191E, 0x193F), r(0x1942, 0x1943),
    r(0x196F, 0x196F), r(0x1976, 0x197F), r(0x19AD, 0x19C0),
    r(0x19C9, 0x19CF), r(0x19DC, 0x19DD), r(0x1A18, 0x1A1D),
    r(0x1A56, 0x1A7F), r(0x1A8B, 0x1A8F), r(0x1A9B, 0x1A9F),
    r(0x1AAF, 0x1B04), r(0x1B35, 0x1B44), r(0x1B4D, 0x1B4F),
    r(0x1B6C, 0x1B73), r(0x1B7E, 0x1B82), r(0x1BA2, 0x1BAD),
    r(0x1BBB, 0x1BFF), r(0x1C25, 0x1C3A), r(0x1C4B, 0x1C4C),
    r(0x1C81, 0x1CD2), r(0x1CD5, 0x1CE8), r(0x1CF2, 0x1CFF),
    r(0x1DC1, 0x1DFF), r(0x1F17, 0x1F17), r(0x1F1F, 0x1F1F),
    r(0x1F47, 0x1F47), r(0x1F4F, 0x1F4F), r(0x1F5A, 0x1F5A),
    r(0x1F5E, 0x1F5E), r(0x1F7F, 0x1F7F), r(0x1FC5, 0x1FC5),
    r(0x1FD5, 0x1FD5), r(0x1FF0, 0x1FF1), r(0x1FFF, 0x1FFF),
    r(0x200C, 0x200F), r(0x2029, 0x202E), r(0x2061, 0x206F),
    r(0x2073, 0x2073), r(0x2095, 0x209F), r(0x20BA, 0x20FF),
    r(0x218B, 0x218F), r(0x23EA, 0x23FF), r(0x2428, 0x243F),
    r(0x244C, 0x245F), r(0x26E2, 0x26E2), r(0x26E5, 0x26E7),
    r(0x2705, 0x2705), r(0x270B, 0x270B), r(0x274C, 0x274C),
    r(0x2753, 0x2755), r(0x2760, 0x2760), r(0x2796, 0x2797),
    r(0x27BF, 0x27BF), r(0x27CD, 0x27CF), r(0x2B4E, 0x2B4F),
    r(0x2B5B, 0x2BFF), r(0x2C5F, 0x2C5F), r(0x2CF0, 0x2CF8),
    r(0x2D27, 0x2D2F), r(0x2D67, 0x2D6E), r(0x2D71, 0x2D7F),
    r(0x2D98, 0x2D9F), r(0x2DAF, 0x2DAF), r(0x2DBF, 0x2DBF),
    r(0x2DCF, 0x2DCF), r(0x2DDF, 0x2DFF), r(0x2E33, 0x2E7F),
    r(0x2EF4, 0x2EFF), r(0x2FD7, 0x2FEF), r(0x2FFD, 0x2FFF),
    r(0x302B, 0x302F), r(0x3097, 0x309A), r(0x3101, 0x3104),
    r(0x312F, 0x3130), r(0x31B8, 0x31BF), r(0x31E5, 0x31EF),
    r(0x32FF, 0x32FF), r(0x4DB7, 0x4DBF), r(0x9FCD, 0x9FFF),
    r(0xA48E, 0xA48F), r(0xA4C8, 0xA4CF), r(0xA62D, 0xA63F),
    r(0xA661, 0xA661), r(0xA670, 0xA672), r(0xA675, 0xA67D),
    r(0xA699, 0xA69F), r(0xA6F1, 0xA6F1), r(0xA6F9, 0xA6FF),
    r(0xA78E, 0xA7FA), r(0xA806, 0xA806), r(0xA823, 0xA827),
    r(0xA82D, 0xA82F), r(0xA83B, 0xA83F), r(0xA879, 0xA881),
    r(0xA8B5, 0xA8CD), r(0xA8DB, 0xA8F1), r(0xA8FD, 0xA8FF),
    r(0xA927, 0xA92D), r(0xA948, 0xA95E), r(0xA97E, 0xA983),
    r(0xA9B4, 0xA9C0), r(0xA9DA, 0xA9DD), r(0xA9E1, 0xA9FF),
    r(0xAA2A, 0xAA3F), r(0xAA4C, 0xAA4F), r(0xAA5B, 0xAA5B),
    r(0xAA7C, 0xAA7F), r(0xAAB2, 0xAAB4), r(0xAAB8, 0xAAB8),
    r(0xAABF, 0xAABF), r(0xAAC3, 0xAADA), r(0xAAE1, 0xABBF),
    r(0xABE4, 0xABEA), r(0xABED, 0xABEF), r(0xABFB, 0xABFF),
    r(0xD7A5, 0xD7AF), r(0xD7C8, 0xD7CA), r(0xD7FD, 0xF8FF),
    r(0xFA2F, 0xFA2F), r(0xFA6F, 0xFA6F), r(0xFADB, 0xFAFF),
    r(0xFB08, 0xFB12), r(0xFB19, 0xFB1C), r(0xFB37, 0xFB37),
    r(0xFB3F, 0xFB3F), r(0xFB45, 0xFB45), r(0xFBB3, 0xFBD2),
    r(0xFD41, 0xFD4F), r(0xFD91, 0xFD91), r(0xFDC9, 0xFDEF),
    r(0xFDFF, 0xFE0F), r(0xFE1B, 0xFE2F), r(0xFE67, 0xFE67),
    r(0xFE6D, 0xFE6F), r(0xFEFD, 0xFF00), r(0xFFC0, 0xFFC1),
    r(0xFFC9, 0xFFC9), r(0xFFD1, 0xFFD1), r(0xFFD9, 0xFFD9),
    r(0xFFDE, 0xFFDF), r(0xFFEF, 0xFFFB), r(0xFFFF, 0xFFFF),
    r(0x10027, 0x10027), r(0x1003E, 0x1003E), r(0x1004F, 0x1004F),
    r(0x1005F, 0x1007F), r(0x100FC, 0x100FF), r(0x10104, 0x10106),
    r(0x10135, 0x10136), r(0x1018C, 0x1018F), r(0x1019D, 0x101CF),
    r(0x101FE, 0x1027F), r(0x1029E, 0x1029F), r(0x102D2, 0x102FF),
    r(0x10324, 0x1032F), r(0x1034C, 0x1037F), r(0x103C4, 0x103C7),
    r(0x103D7, 0x103FF), r(0x1049F, 0x1049F), r(0x104AB, 0x107FF),
    r(0x10807, 0x10807), r(0x10836, 0x10836), r(0x1083A, 0x1083B),
    r(0x1083E, 0x1083E), r(0x10860, 0x108FF), r(0x1091D, 0x1091E),
    r(0x1093B, 0x1093E), r(0x10941, 0x109FF), r(0x10A02, 0x10A0F),
    r(0x10A18, 0x10A18), r(0x10A35, 0x10A3F), r(0x10A49, 0x10A4F),
    r(0x10A5A, 0x10A5F), r(0x10A81, 0x10AFF), r(0x10B37, 0x10B38),
    r(0x10B57, 0x10B57), r(0x10B74, 0x10B77), r(0x10B81, 0x10BFF),
    r(0x10C4A, 0x10E5F), r(0x10E80, 0x11082), r(0x110B1, 0x110BA),
    r(0x110C2, 0x11FFF), r(0x12370, 0x123FF), r(0x12464, 0x1246F),
    r(0x12475, 0x12FFF), r(0x13430, 0x1CFFF), r(0x1D0F7, 0x1D0FF),
    r(0x1D128, 0x1D128), r(0x1D166, 0x1D169), r(0x1D16E, 0x1D182),
    r(0x1D186, 0x1D18B), r(0x1D1AB, 0x1D1AD), r(0x1D1DF, 0x1D1FF),
    r(0x1D243, 0x1D244), r(0x1D247, 0x1D2FF), r(0x1D358, 0x1D35F),
    r(0x1D373, 0x1D3FF), r(0x1D49D, 0x1D49D), r(0x1D4A1, 0x1D4A1),
    r(0x1D4A4, 0x1D4A4), r(0x1D4A8, 0x1D4A8), r(0x1D4BA, 0x1D4BA),
    r(0x1D4C4, 0x1D4C4), r(0x1D50B, 0x1D50C), r(0x1D51D, 0x1D51D),
    r(0x1D53F, 0x1D53F), r(0x1D547, 0x1D549), r(0x1D6A6, 0x1D6A7),
    r(0x1D7CD, 0x1D7CD), r(0x1D801, 0x1EFFF), r(0x1F02D, 0x1F02F),
    r(0x1F095, 0x1F0FF), r(0x1F10C, 0x1F10F), r(0x1F130, 0x1F130),
    r(0x1F133, 0x1F13C), r(0x1F140, 0x1F141), r(0x1F144, 0x1F145),
    r(0x1F148, 0x1F149), r(0x1F150, 0x1F156), r(0x1F159, 0x1F15E),
    r(0x1F161, 0x1F178), r(0x1F17D, 0x1F17E), r(0x1F181, 0x1F189),
    r(0x1F18F, 0x1F18F), r(0x1F192, 0x1F1FF), r(0x1F202, 0x1F20F),
    r(0x1F233, 0x1F23F), r(0x1F24A, 0x1FFFF), r(0x2A6D8, 0x2A6FF),
    r(0x2B736, 0x2F7FF), r(0x2FA1F, 0x10FFFF),
];

/// Controls, unassigned and otherwise unrenderable codepoints.
pub static NONPRINTABLE: RangeTable<'static> =
    RangeTable::from_sorted("nonprintable", NONPRINTABLE_RANGES);
/// All static tables, in lookup order.
pub fn all() -> [&'static RangeTable<'static>; 3] {
    [&DOUBLE_WIDTH, &ZERO_WIDTH, &NONPRINTABLE]
}
