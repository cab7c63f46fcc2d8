// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bandwidth-optimized image renditions.

use vitrine_dom::{Document, DomError, NodeId};

/// Produces an optimized replacement for an authored image.
pub trait ImageOptimizer {
    /// Build a detached replacement subtree for the image at `src`.
    fn optimize(&self, doc: &mut Document, src: &str, alt: &str) -> Result<NodeId, DomError>;
}

/// One responsive rendition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Media query; `None` for the unconditional rendition.
    pub media: Option<String>,
    /// Requested width in pixels.
    pub width: u32,
}

/// Builds a `<picture>` with WebP sources per breakpoint, fallbacks in the
/// original format, and a final `<img>`.
#[derive(Clone, Debug)]
pub struct PictureOptimizer {
    /// Renditions, widest first. The last one backs the `<img>`.
    pub breakpoints: Vec<Breakpoint>,
    /// Load eagerly instead of lazily.
    pub eager: bool,
}

impl Default for PictureOptimizer {
    fn default() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint {
                    media: Some("(min-width: 600px)".to_owned()),
                    width: 2000,
                },
                Breakpoint {
                    media: None,
                    width: 750,
                },
            ],
            eager: false,
        }
    }
}

impl ImageOptimizer for PictureOptimizer {
    fn optimize(&self, doc: &mut Document, src: &str, alt: &str) -> Result<NodeId, DomError> {
        let path = url_path(src);
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && !ext.contains('/'))
            .unwrap_or("jpg");
        let picture = doc.create_element("picture");

        for br in &self.breakpoints {
            let source = doc.create_element("source");
            if let Some(media) = &br.media {
                doc.set_attr(source, "media", media)?;
            }
            doc.set_attr(source, "type", "image/webp")?;
            doc.set_attr(
                source,
                "srcset",
                &format!("{path}?width={}&format=webply&optimize=medium", br.width),
            )?;
            doc.append_child(picture, source)?;
        }

        let last = self.breakpoints.len().saturating_sub(1);
        for (i, br) in self.breakpoints.iter().enumerate() {
            let rendition = format!("{path}?width={}&format={ext}&optimize=medium", br.width);
            if i < last {
                let source = doc.create_element("source");
                if let Some(media) = &br.media {
                    doc.set_attr(source, "media", media)?;
                }
                doc.set_attr(source, "srcset", &rendition)?;
                doc.append_child(picture, source)?;
            } else {
                let img = doc.create_element("img");
                doc.set_attr(img, "loading", if self.eager { "eager" } else { "lazy" })?;
                doc.set_attr(img, "alt", alt)?;
                doc.set_attr(img, "src", &rendition)?;
                doc.append_child(picture, img)?;
            }
        }
        Ok(picture)
    }
}

/// Path component of an absolute or root-relative URL.
fn url_path(src: &str) -> &str {
    let rest = match src.split_once("://") {
        Some((_, after_scheme)) => after_scheme
            .find('/')
            .map_or("/", |i| &after_scheme[i..]),
        None => src,
    };
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_dom::outer_html;

    #[test]
    fn url_path_strips_origin_and_query() {
        assert_eq!(
            url_path("https://main--site--org.aem.page/media_1a2b.jpeg?width=750&format=jpeg"),
            "/media_1a2b.jpeg"
        );
        assert_eq!(url_path("/media_1.png#frag"), "/media_1.png");
        assert_eq!(url_path("https://example.com"), "/");
    }

    #[test]
    fn default_breakpoints_markup() {
        let mut doc = Document::new();
        let picture = PictureOptimizer::default()
            .optimize(&mut doc, "https://example.com/media_1.png?x=1", "Trees")
            .unwrap();
        assert_eq!(
            outer_html(&doc, picture),
            concat!(
                r#"<picture>"#,
                r#"<source media="(min-width: 600px)" type="image/webp" srcset="/media_1.png?width=2000&amp;format=webply&amp;optimize=medium">"#,
                r#"<source type="image/webp" srcset="/media_1.png?width=750&amp;format=webply&amp;optimize=medium">"#,
                r#"<source media="(min-width: 600px)" srcset="/media_1.png?width=2000&amp;format=png&amp;optimize=medium">"#,
                r#"<img loading="lazy" alt="Trees" src="/media_1.png?width=750&amp;format=png&amp;optimize=medium">"#,
                r#"</picture>"#
            )
        );
    }
}
