use std::fmt::Write;

use ial_parser::Ial;

use crate::{Error, Render, RenderOptions};

/// The three attribute groups, merged across every list on a block.
#[derive(Debug, Default)]
struct Merged<'a> {
    anchor: Option<&'a str>,
    class: String,
    attr: String,
}

impl<'a> Merged<'a> {
    fn push(&mut self, ial: &'a Ial, options: &RenderOptions) {
        if ial.has_id() {
            if let Some(previous) = self.anchor
                && options.warn_on_anchor_overwrite
            {
                tracing::warn!(
                    %previous,
                    id = %ial.id,
                    "anchor replaced by a later inline attribute list"
                );
            }
            self.anchor = Some(ial.id.as_str());
        }
        for class in &ial.classes {
            if !self.class.is_empty() {
                self.class.push(' ');
            }
            self.class.push_str(class);
        }
        for (key, value) in &ial.attributes {
            if !self.attr.is_empty() {
                self.attr.push(' ');
            }
            // Writing into a `String` cannot fail.
            let _ = write!(self.attr, "{key}=\"{value}\"");
        }
    }
}

impl Render for [Ial] {
    type Error = Error;

    #[tracing::instrument(level = "trace", skip_all, fields(ials = self.len()))]
    fn render<W: Write>(&self, w: &mut W, options: &RenderOptions) -> Result<(), Self::Error> {
        let mut merged = Merged::default();
        for ial in self {
            merged.push(ial, options);
        }
        if let Some(anchor) = merged.anchor {
            write!(w, " anchor=\"{anchor}\"")?;
        }
        if !merged.class.is_empty() {
            write!(w, " class=\"{}\"", merged.class)?;
        }
        if !merged.attr.is_empty() {
            write!(w, " {}", merged.attr)?;
        }
        Ok(())
    }
}
