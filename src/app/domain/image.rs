use super::color::Color;

/// Font family written into exported clouds and used by the on-screen view.
pub const CLOUD_FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// A word positioned on the canvas. `x`/`y` is the top-left corner of its
/// bounding box, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub count: usize,
    pub font_size: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub color: Color,
}

impl PlacedWord {
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn intersects(&self, other: &PlacedWord) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A rendered word cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudImage {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub words: Vec<PlacedWord>,
}

impl CloudImage {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            words: Vec::new(),
        }
    }

    /// Encode as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        svg.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            self.background
        ));
        for word in &self.words {
            // Baseline sits at roughly 80% of the box for Latin fonts
            let baseline = word.y + (word.height as f32 * 0.8).round() as i32;
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
                word.x,
                baseline,
                CLOUD_FONT_FAMILY,
                word.font_size,
                word.color,
                escape_xml(&word.text)
            ));
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x: i32, y: i32, width: u32, height: u32) -> PlacedWord {
        PlacedWord {
            text: text.to_string(),
            count: 1,
            font_size: 10,
            x,
            y,
            width,
            height,
            color: Color::BLACK,
        }
    }

    #[test]
    fn test_intersects() {
        let a = word("a", 0, 0, 10, 10);
        assert!(a.intersects(&word("b", 5, 5, 10, 10)));
        // touching edges do not overlap
        assert!(!a.intersects(&word("c", 10, 0, 10, 10)));
        assert!(!a.intersects(&word("d", 0, 20, 10, 10)));
    }

    #[test]
    fn test_svg_contains_background_and_words() {
        let mut image = CloudImage::new(200, 100, Color::WHITE);
        image.words.push(PlacedWord {
            color: Color::rgb(255, 0, 0),
            font_size: 24,
            ..word("hello", 10, 20, 60, 24)
        });

        let svg = image.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"200\" height=\"100\""));
        assert!(svg.contains("fill=\"#ffffff\""));
        assert!(svg.contains("font-size=\"24\" fill=\"#ff0000\">hello</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_escapes_text() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }
}
