//! ZPL II command builder
//!
//! Provides a fluent API for building ZPL label documents.
//! All field data is routed through `^FH` hex escaping so values containing
//! ZPL control characters cannot break out of their field.

/// Hex-escape indicator used with `^FH` in every field this builder emits.
const HEX_INDICATOR: char = '_';

/// Escape field data for use after `^FH_^FD`.
///
/// The caret, tilde and the escape indicator itself are control syntax in
/// ZPL; they and ASCII control bytes are replaced with `_XX` hex pairs.
/// Non-ASCII characters are escaped byte-wise, which the printer decodes
/// back into the original UTF-8 sequence.
pub fn escape_field_data(data: &str) -> String {
    let mut out = String::with_capacity(data.len());
    for byte in data.bytes() {
        match byte {
            b'^' | b'~' | b'_' => push_hex(&mut out, byte),
            0x00..=0x1F | 0x7F => push_hex(&mut out, byte),
            0x80..=0xFF => push_hex(&mut out, byte),
            _ => out.push(byte as char),
        }
    }
    out
}

fn push_hex(out: &mut String, byte: u8) {
    out.push(HEX_INDICATOR);
    out.push_str(&format!("{byte:02X}"));
}

/// ZPL II document builder
///
/// Builds a complete label format, opened with `^XA` and closed with `^XZ`.
/// Geometry is in printer dots (8 dots/mm on 203 dpi printers).
pub struct ZplBuilder {
    buf: String,
}

impl ZplBuilder {
    /// Create a new builder with the format-start marker already written
    pub fn new() -> Self {
        let mut buf = String::with_capacity(1024);
        buf.push_str("^XA\n");
        Self { buf }
    }

    // === Label Geometry ===

    /// Set the print width in dots (`^PW`)
    pub fn print_width(&mut self, dots: u32) -> &mut Self {
        self.buf.push_str(&format!("^PW{dots}\n"));
        self
    }

    /// Set the label length in dots (`^LL`)
    pub fn label_length(&mut self, dots: u32) -> &mut Self {
        self.buf.push_str(&format!("^LL{dots}\n"));
        self
    }

    // === Fields ===

    /// Place a single-line text field
    ///
    /// Uses the scalable `^A0` font in normal orientation with the given
    /// character height and width in dots.
    pub fn text_field(&mut self, x: u32, y: u32, height: u32, width: u32, data: &str) -> &mut Self {
        self.buf.push_str(&format!(
            "^FO{x},{y}^A0N,{height},{width}^FH{HEX_INDICATOR}^FD{}^FS\n",
            escape_field_data(data)
        ));
        self
    }

    /// Place a wrapping text block (`^FB`)
    ///
    /// Text wraps within `block_width` dots for at most `max_lines` lines,
    /// left-justified. Overflow beyond the last line is dropped by the
    /// printer.
    #[allow(clippy::too_many_arguments)]
    pub fn text_block(
        &mut self,
        x: u32,
        y: u32,
        height: u32,
        width: u32,
        block_width: u32,
        max_lines: u32,
        data: &str,
    ) -> &mut Self {
        self.buf.push_str(&format!(
            "^FO{x},{y}^A0N,{height},{width}\n^FB{block_width},{max_lines},0,L,0\n^FH{HEX_INDICATOR}^FD{}^FS\n",
            escape_field_data(data)
        ));
        self
    }

    /// Place a QR code field (`^BQ`, model 2)
    ///
    /// Magnification: 1-10. Data is emitted with the `QA,` automatic-mode
    /// prefix the Zebra firmware expects.
    pub fn qr_code(&mut self, x: u32, y: u32, magnification: u8, data: &str) -> &mut Self {
        let magnification = magnification.clamp(1, 10);
        self.buf.push_str(&format!(
            "^FO{x},{y}\n^BQN,2,{magnification}\n^FH{HEX_INDICATOR}^FDQA,{}^FS\n",
            escape_field_data(data)
        ));
        self
    }

    // === Build ===

    /// Close the format with `^XZ` and return the complete document
    pub fn build(mut self) -> String {
        self.buf.push_str("^XZ\n");
        self.buf
    }
}

impl Default for ZplBuilder {
    fn default() -> Self {
        Self::new()
    }
}
