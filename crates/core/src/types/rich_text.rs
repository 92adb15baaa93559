//! Portable Text rich content.
//!
//! Only the subset the storefront renders is modelled: `normal`, `h3` and
//! `h4` block styles, `strong`/`em`/`link` marks, and bullet or numbered
//! lists. Unknown block types (embedded images, custom objects) are dropped
//! while deserializing; unknown styles fall back to `normal`.
//!
//! Rendering to HTML happens in templates so that every text run goes
//! through the template engine's escaping. [`RichText::nodes`] groups blocks
//! into the paragraph/list structure templates iterate over.

use serde::{Deserialize, Deserializer, Serialize};

/// Paragraph style of a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    #[default]
    Normal,
    H3,
    H4,
    #[serde(other)]
    Other,
}

/// List flavor of a list-item block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

/// Annotation referenced from span marks (currently only links).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// A run of text with decorator and annotation marks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// A text block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default)]
    pub style: BlockStyle,
    #[serde(default)]
    pub list_item: Option<ListKind>,
    #[serde(default)]
    pub mark_defs: Vec<MarkDef>,
    #[serde(default)]
    pub children: Vec<Span>,
}

impl Block {
    /// A `normal` block holding a single unmarked span.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            children: vec![Span {
                text: text.into(),
                marks: Vec::new(),
            }],
            ..Self::default()
        }
    }

    /// Plain text of the block with marks stripped.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.children.iter().map(|span| span.text.as_str()).collect()
    }

    fn segments(&self) -> Vec<Segment> {
        self.children
            .iter()
            .map(|span| {
                let mut segment = Segment {
                    text: span.text.clone(),
                    ..Segment::default()
                };
                for mark in &span.marks {
                    match mark.as_str() {
                        "strong" => segment.strong = true,
                        "em" => segment.em = true,
                        key => {
                            if let Some(href) = self
                                .mark_defs
                                .iter()
                                .find(|def| def.key == key)
                                .and_then(|def| def.href.clone())
                            {
                                segment.external = href.starts_with("http");
                                segment.href = Some(href);
                            }
                        }
                    }
                }
                segment
            })
            .collect()
    }
}

/// A span resolved against its block's mark definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub strong: bool,
    pub em: bool,
    pub href: Option<String>,
    /// Links starting with `http` open in a new tab.
    pub external: bool,
}

/// Render-ready grouping of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Paragraph(Vec<Segment>),
    Heading3(Vec<Segment>),
    Heading4(Vec<Segment>),
    List {
        kind: ListKind,
        items: Vec<Vec<Segment>>,
    },
}

/// Ordered sequence of Portable Text blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RichText(Vec<Block>);

impl RichText {
    #[must_use]
    pub const fn new(blocks: Vec<Block>) -> Self {
        Self(blocks)
    }

    /// One `normal` block per paragraph.
    #[must_use]
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(paragraphs.into_iter().map(Block::paragraph).collect())
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.0
    }

    /// `true` when there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|block| block.plain_text().trim().is_empty())
    }

    /// Group consecutive list items of the same kind into lists.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node> {
        let mut nodes: Vec<Node> = Vec::new();

        for block in &self.0 {
            let segments = block.segments();
            match block.list_item {
                Some(kind) => match nodes.last_mut() {
                    Some(Node::List {
                        kind: current,
                        items,
                    }) if *current == kind => items.push(segments),
                    _ => nodes.push(Node::List {
                        kind,
                        items: vec![segments],
                    }),
                },
                None => nodes.push(match block.style {
                    BlockStyle::H3 => Node::Heading3(segments),
                    BlockStyle::H4 => Node::Heading4(segments),
                    BlockStyle::Normal | BlockStyle::Other => Node::Paragraph(segments),
                }),
            }
        }

        nodes
    }
}

#[derive(Deserialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
enum RawBlock {
    Block(Block),
    #[serde(other)]
    Unsupported,
}

impl<'de> Deserialize<'de> for RichText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Vec<RawBlock>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self(
            raw.into_iter()
                .filter_map(|block| match block {
                    RawBlock::Block(block) => Some(block),
                    RawBlock::Unsupported => None,
                })
                .collect(),
        ))
    }
}
