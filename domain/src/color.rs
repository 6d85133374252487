use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("aqua", Rgb::new(0x00, 0xff, 0xff)),
    ("beige", Rgb::new(0xf5, 0xf5, 0xdc)),
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("brown", Rgb::new(0xa5, 0x2a, 0x2a)),
    ("coral", Rgb::new(0xff, 0x7f, 0x50)),
    ("crimson", Rgb::new(0xdc, 0x14, 0x3c)),
    ("cyan", Rgb::new(0x00, 0xff, 0xff)),
    ("darkgreen", Rgb::new(0x00, 0x64, 0x00)),
    ("darkred", Rgb::new(0x8b, 0x00, 0x00)),
    ("fuchsia", Rgb::new(0xff, 0x00, 0xff)),
    ("gold", Rgb::new(0xff, 0xd7, 0x00)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("grey", Rgb::new(0x80, 0x80, 0x80)),
    ("khaki", Rgb::new(0xf0, 0xe6, 0x8c)),
    ("lemonchiffon", Rgb::new(0xff, 0xfa, 0xcd)),
    ("lime", Rgb::new(0x00, 0xff, 0x00)),
    ("limegreen", Rgb::new(0x32, 0xcd, 0x32)),
    ("magenta", Rgb::new(0xff, 0x00, 0xff)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("olive", Rgb::new(0x80, 0x80, 0x00)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
    ("orangered", Rgb::new(0xff, 0x45, 0x00)),
    ("peachpuff", Rgb::new(0xff, 0xda, 0xb9)),
    ("pink", Rgb::new(0xff, 0xc0, 0xcb)),
    ("plum", Rgb::new(0xdd, 0xa0, 0xdd)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("salmon", Rgb::new(0xfa, 0x80, 0x72)),
    ("silver", Rgb::new(0xc0, 0xc0, 0xc0)),
    ("tan", Rgb::new(0xd2, 0xb4, 0x8c)),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("tomato", Rgb::new(0xff, 0x63, 0x47)),
    ("violet", Rgb::new(0xee, 0x82, 0xee)),
    ("wheat", Rgb::new(0xf5, 0xde, 0xb3)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
    ("yellowgreen", Rgb::new(0x9a, 0xcd, 0x32)),
];

/// Resolves a CSS colour string (`#rgb`, `#rrggbb` or a named colour) for the
/// row swatch. Names are matched case-insensitively, as browsers do.
pub fn parse_css_color(color: &str) -> Option<Rgb> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

    let color = color.trim();
    if let Some(caps) = re.captures(color) {
        let hex = &caps[1];
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        return if hex.len() == 3 {
            let expand = |c: &str| channel(&c.repeat(2));
            Some(Rgb::new(
                expand(&hex[0..1])?,
                expand(&hex[1..2])?,
                expand(&hex[2..3])?,
            ))
        } else {
            Some(Rgb::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            ))
        };
    }

    let name = color.to_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, rgb)| *rgb)
}
