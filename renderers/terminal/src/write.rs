use std::io::Write;

use crossterm::{
    QueueableCommand,
    style::{Color, PrintStyledContent, StyledContent, Stylize, style},
};
use draft_renderers_core::{ListIndicator, Style};
use unicode_width::UnicodeWidthStr;

use crate::{
    Appearance, Error, Node, Span, TextKind,
    appearance::{ColorScheme, parse_color},
};

const CODE_INDENT: usize = 4;

/// Widest list indent written, half of an 80 column terminal. Deeper items
/// keep their number but stop moving right.
const MAX_LIST_INDENT: usize = 40;

/// Text attributes resolved for one piece of output.
#[derive(Clone, Copy, Debug, Default)]
struct Paint {
    color: Option<Color>,
    bold: bool,
    italic: bool,
    underline: bool,
    crossed_out: bool,
}

impl Paint {
    fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Layer a caller style override on top.
    fn with_style(mut self, style: Option<&Style>) -> Self {
        let Some(style) = style else {
            return self;
        };
        if let Some(color) = style.color.as_deref().and_then(parse_color) {
            self.color = Some(color);
        }
        self.bold = style.bold.unwrap_or(self.bold);
        self.italic = style.italic.unwrap_or(self.italic);
        self.underline = style.underline.unwrap_or(self.underline);
        self
    }

    fn with_span(mut self, span: &Span, colors: &ColorScheme) -> Self {
        self.bold |= span.has_style("BOLD");
        self.italic |= span.has_style("ITALIC");
        self.underline |= span.has_style("UNDERLINE");
        self.crossed_out |= span.has_style("STRIKETHROUGH");
        if span.has_style("CODE") {
            self.color = Some(colors.inline_code);
        }
        if span.link.is_some() {
            self.color = Some(colors.link);
            self.underline = true;
        }
        self
    }
}

/// Writes a rendered node tree as terminal text.
pub(crate) struct NodeWriter<'a> {
    appearance: &'a Appearance,
}

impl<'a> NodeWriter<'a> {
    pub(crate) fn new(appearance: &'a Appearance) -> Self {
        Self { appearance }
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub(crate) fn write<W: Write>(&self, w: &mut W, node: &Node) -> Result<(), Error> {
        match node {
            Node::Group { children, .. } => {
                for child in children {
                    self.write(w, child)?;
                }
            }
            Node::Row { children, .. } => {
                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        write!(w, " ")?;
                    }
                    self.write_inline(w, child)?;
                }
                writeln!(w)?;
            }
            Node::Separator { .. } => writeln!(w)?,
            Node::Text { kind, spans, style } => self.write_text(w, *kind, spans, style.as_ref())?,
            Node::Quote { spans, style } => {
                let marker = if self.appearance.capabilities.unicode {
                    "│ "
                } else {
                    "> "
                };
                let prefix = self.paint(marker, Paint::color(self.appearance.colors.quote));
                let paint = Paint::default().with_style(style.as_ref());
                self.write_lines(w, spans, paint, &prefix, &prefix)?;
            }
            Node::ListItem {
                indicator,
                margin,
                spans,
                style,
                marker_style,
            } => {
                let margin = usize::try_from(*margin)
                    .unwrap_or(usize::MAX)
                    .min(MAX_LIST_INDENT);
                let marker = self.marker(indicator);
                let marker_paint = Paint::color(self.appearance.colors.marker)
                    .with_style(marker_style.as_ref());
                let first = format!(
                    "{}{} ",
                    " ".repeat(margin),
                    self.paint(&marker, marker_paint)
                );
                let rest = " ".repeat(margin.saturating_add(marker.width()).saturating_add(1));
                let paint = Paint::default().with_style(style.as_ref());
                self.write_lines(w, spans, paint, &first, &rest)?;
            }
            Node::Indicator { .. } | Node::Embed(_) => {
                self.write_inline(w, node)?;
                writeln!(w)?;
            }
            Node::Raw(block) => {
                tracing::warn!(key = %block.key, "skipping atomic block without an embed renderer");
            }
        }
        Ok(())
    }

    fn write_text<W: Write>(
        &self,
        w: &mut W,
        kind: TextKind,
        spans: &[Span],
        style: Option<&Style>,
    ) -> Result<(), Error> {
        match kind {
            TextKind::Paragraph => {
                self.write_lines(w, spans, Paint::default().with_style(style), "", "")
            }
            TextKind::Code => {
                let indent = " ".repeat(CODE_INDENT);
                let paint = Paint::default().with_style(style);
                self.write_lines(w, spans, paint, &indent, &indent)
            }
            TextKind::Header(level) => {
                if self.appearance.capabilities.color {
                    let paint = Paint {
                        bold: true,
                        ..Paint::color(self.appearance.colors.header(level))
                    }
                    .with_style(style);
                    self.write_lines(w, spans, paint, "", "")
                } else {
                    let prefix = format!("{} ", "#".repeat(usize::from(level)));
                    self.write_lines(w, spans, Paint::default(), &prefix, &prefix)
                }
            }
        }
    }

    /// Write spans line by line, starting the first line with `first` and
    /// every following line with `rest`.
    fn write_lines<W: Write>(
        &self,
        w: &mut W,
        spans: &[Span],
        paint: Paint,
        first: &str,
        rest: &str,
    ) -> Result<(), Error> {
        let spans = if self.appearance.capabilities.osc8_links {
            spans.to_vec()
        } else {
            annotate_links(spans)
        };
        for (index, line) in split_lines(&spans).iter().enumerate() {
            let prefix = if index == 0 { first } else { rest };
            write!(w, "{prefix}")?;
            for span in line {
                self.write_span(w, span, paint)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn write_span<W: Write>(&self, w: &mut W, span: &Span, paint: Paint) -> Result<(), Error> {
        let link = span
            .link
            .as_deref()
            .filter(|_| self.appearance.capabilities.osc8_links);
        if let Some(url) = link {
            write!(w, "\x1b]8;;{url}\x1b\\")?;
        }
        self.print(w, &span.text, paint.with_span(span, &self.appearance.colors))?;
        if link.is_some() {
            write!(w, "\x1b]8;;\x1b\\")?;
        }
        Ok(())
    }

    fn write_inline<W: Write>(&self, w: &mut W, node: &Node) -> Result<(), Error> {
        match node {
            Node::Indicator { indicator, style } => {
                let paint =
                    Paint::color(self.appearance.colors.marker).with_style(style.as_ref());
                self.print(w, &self.marker(indicator), paint)?;
            }
            Node::Embed(label) => write!(w, "{label}")?,
            Node::Group { .. }
            | Node::Row { .. }
            | Node::Separator { .. }
            | Node::Text { .. }
            | Node::Quote { .. }
            | Node::ListItem { .. }
            | Node::Raw(_) => write!(w, "{}", node.text())?,
        }
        Ok(())
    }

    fn marker(&self, indicator: &ListIndicator) -> String {
        match indicator {
            ListIndicator::Bullet if self.appearance.capabilities.unicode => "•".to_string(),
            ListIndicator::Bullet => "*".to_string(),
            ListIndicator::Number { value, separator } => format!("{value}{separator}"),
        }
    }

    fn print<W: Write>(&self, w: &mut W, text: &str, paint: Paint) -> Result<(), Error> {
        if self.appearance.capabilities.color {
            w.queue(PrintStyledContent(styled(text, paint)))?;
        } else {
            write!(w, "{text}")?;
        }
        Ok(())
    }

    /// `text` with `paint` applied, or unchanged when color is disabled.
    fn paint(&self, text: &str, paint: Paint) -> String {
        if self.appearance.capabilities.color {
            styled(text, paint).to_string()
        } else {
            text.to_string()
        }
    }
}

fn styled(text: &str, paint: Paint) -> StyledContent<&str> {
    let mut content = style(text);
    if paint.bold {
        content = content.bold();
    }
    if paint.italic {
        content = content.italic();
    }
    if paint.underline {
        content = content.underlined();
    }
    if paint.crossed_out {
        content = content.crossed_out();
    }
    if let Some(color) = paint.color {
        content = content.with(color);
    }
    content
}

/// Append ` <url>` after the last span of each link.
fn annotate_links(spans: &[Span]) -> Vec<Span> {
    let mut annotated = Vec::with_capacity(spans.len());
    let mut iter = spans.iter().peekable();
    while let Some(span) = iter.next() {
        annotated.push(span.clone());
        if let Some(url) = &span.link {
            let continues = iter.peek().is_some_and(|next| next.entity == span.entity);
            if !continues {
                annotated.push(Span {
                    text: format!(" <{url}>"),
                    ..Span::default()
                });
            }
        }
    }
    annotated
}

/// Split spans on soft newlines. Always yields at least one (possibly empty) line.
fn split_lines(spans: &[Span]) -> Vec<Vec<Span>> {
    let mut lines = vec![Vec::new()];
    for span in spans {
        for (index, part) in span.text.split('\n').enumerate() {
            if index > 0 {
                lines.push(Vec::new());
            }
            if part.is_empty() {
                continue;
            }
            if let Some(line) = lines.last_mut() {
                line.push(Span {
                    text: part.to_string(),
                    ..span.clone()
                });
            }
        }
    }
    lines
}
