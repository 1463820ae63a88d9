//! The recursive content block.

use serde::{Deserialize, Serialize};

use super::styles::{
    CalloutStyle, GapSize, HeadingLevel, InfoBoxStyle, ListStyle, SpacingSize, StepNumber,
};

/// One node of a document tree.
///
/// The fields shared by every block live here; what differs per kind lives in
/// [`BlockKind`]. Any kind may carry children. `children: None` means the node
/// is not used as a container, which is distinct from an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    /// Optional stable identifier (anchor)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Kind-specific payload, including the `type` tag
    #[serde(flatten)]
    pub kind: BlockKind,

    /// Child blocks, in reading order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ContentBlock>>,

    /// Opaque styling annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Closed set of block kinds with their kind-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    #[serde(rename = "text")]
    Text { text: String },

    #[serde(rename = "inline-code")]
    InlineCode { code: String },

    #[serde(rename = "link")]
    Link {
        href: String,
        text: String,
        #[serde(default, skip_serializing_if = "is_false")]
        external: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rel: Option<String>,
    },

    #[serde(rename = "heading")]
    Heading { level: HeadingLevel, text: String },

    #[serde(rename = "paragraph")]
    Paragraph {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    #[serde(rename = "codeblock")]
    CodeBlock {
        language: String,
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },

    #[serde(rename = "list")]
    List { style: ListStyle },

    #[serde(rename = "listitem")]
    ListItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    #[serde(rename = "section")]
    Section {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "is_false")]
        border: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        spacing: Option<SpacingSize>,
    },

    #[serde(rename = "step")]
    Step {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        number: Option<StepNumber>,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },

    #[serde(rename = "infobox")]
    InfoBox {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<InfoBoxStyle>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },

    #[serde(rename = "callout")]
    Callout {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<CalloutStyle>,
    },

    #[serde(rename = "card")]
    Card {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        href: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        #[serde(default, skip_serializing_if = "is_false")]
        external: bool,
    },

    #[serde(rename = "grid")]
    Grid {
        columns: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gap: Option<GapSize>,
    },

    #[serde(rename = "tabs")]
    Tabs,

    #[serde(rename = "tab")]
    Tab { title: String },

    #[serde(rename = "page")]
    Page,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl BlockKind {
    /// Wire name of this kind (the `type` tag).
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Text { .. } => "text",
            BlockKind::InlineCode { .. } => "inline-code",
            BlockKind::Link { .. } => "link",
            BlockKind::Heading { .. } => "heading",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::CodeBlock { .. } => "codeblock",
            BlockKind::List { .. } => "list",
            BlockKind::ListItem { .. } => "listitem",
            BlockKind::Section { .. } => "section",
            BlockKind::Step { .. } => "step",
            BlockKind::InfoBox { .. } => "infobox",
            BlockKind::Callout { .. } => "callout",
            BlockKind::Card { .. } => "card",
            BlockKind::Grid { .. } => "grid",
            BlockKind::Tabs => "tabs",
            BlockKind::Tab { .. } => "tab",
            BlockKind::Page => "page",
        }
    }

    /// Inline kinds render within a line of text; all others are block-level.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            BlockKind::Text { .. } | BlockKind::InlineCode { .. } | BlockKind::Link { .. }
        )
    }
}

impl ContentBlock {
    /// Create a block of the given kind with no id, children or styling.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: None,
            kind,
            children: None,
            class_name: None,
        }
    }

    /// Create a page root.
    pub fn page(children: Vec<ContentBlock>) -> Self {
        Self::new(BlockKind::Page).with_children(children)
    }

    /// Create a plain text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Text { text: text.into() })
    }

    /// Create an inline code span.
    pub fn inline_code(code: impl Into<String>) -> Self {
        Self::new(BlockKind::InlineCode { code: code.into() })
    }

    /// Create an internal link.
    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(BlockKind::Link {
            href: href.into(),
            text: text.into(),
            external: false,
            rel: None,
        })
    }

    /// Create a link to another site.
    pub fn external_link(
        href: impl Into<String>,
        text: impl Into<String>,
        rel: Option<String>,
    ) -> Self {
        Self::new(BlockKind::Link {
            href: href.into(),
            text: text.into(),
            external: true,
            rel,
        })
    }

    /// Create a heading. The level is clamped into 1-6.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading {
            level: HeadingLevel::clamped(level),
            text: text.into(),
        })
    }

    /// Create a paragraph made of inline children.
    pub fn paragraph(children: Vec<ContentBlock>) -> Self {
        Self::new(BlockKind::Paragraph { text: None }).with_children(children)
    }

    /// Create a paragraph holding a single string.
    pub fn paragraph_text(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph {
            text: Some(text.into()),
        })
    }

    /// Create a fenced code sample.
    pub fn code_block(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(BlockKind::CodeBlock {
            language: language.into(),
            code: code.into(),
            title: None,
        })
    }

    /// Create a list.
    pub fn list(style: ListStyle, items: Vec<ContentBlock>) -> Self {
        Self::new(BlockKind::List { style }).with_children(items)
    }

    /// Create a list item holding a single string.
    pub fn list_item(text: impl Into<String>) -> Self {
        Self::new(BlockKind::ListItem {
            text: Some(text.into()),
        })
    }

    /// Create a section, optionally titled.
    pub fn section(title: Option<&str>, children: Vec<ContentBlock>) -> Self {
        Self::new(BlockKind::Section {
            title: title.map(str::to_string),
            border: false,
            spacing: None,
        })
        .with_children(children)
    }

    /// Create a numbered step.
    pub fn step(number: impl Into<StepNumber>, title: impl Into<String>) -> Self {
        Self::new(BlockKind::Step {
            number: Some(number.into()),
            title: title.into(),
            description: None,
        })
    }

    /// Create an info box.
    pub fn info_box(style: InfoBoxStyle, children: Vec<ContentBlock>) -> Self {
        Self::new(BlockKind::InfoBox {
            style: Some(style),
            title: None,
        })
        .with_children(children)
    }

    /// Create a callout.
    pub fn callout(style: CalloutStyle, children: Vec<ContentBlock>) -> Self {
        Self::new(BlockKind::Callout { style: Some(style) }).with_children(children)
    }

    /// Create a navigation card.
    pub fn card(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(BlockKind::Card {
            title: title.into(),
            description: None,
            href: href.into(),
            icon: None,
            external: false,
        })
    }

    /// Create a grid layout.
    pub fn grid(columns: u32, children: Vec<ContentBlock>) -> Self {
        Self::new(BlockKind::Grid { columns, gap: None }).with_children(children)
    }

    /// Create a tab strip.
    pub fn tabs(tabs: Vec<ContentBlock>) -> Self {
        Self::new(BlockKind::Tabs).with_children(tabs)
    }

    /// Create a single tab.
    pub fn tab(title: impl Into<String>, children: Vec<ContentBlock>) -> Self {
        Self::new(BlockKind::Tab {
            title: title.into(),
        })
        .with_children(children)
    }

    /// Set an explicit id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the children.
    pub fn with_children(mut self, children: Vec<ContentBlock>) -> Self {
        self.children = Some(children);
        self
    }

    /// Set the styling annotation.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Wire name of this block's kind.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Check if this block is a page root.
    pub fn is_page(&self) -> bool {
        matches!(self.kind, BlockKind::Page)
    }

    /// Explicit id, treating an empty string as absent.
    pub fn explicit_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Children as a slice; empty when the block is not a container.
    pub fn children(&self) -> &[ContentBlock] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Check if the block carries at least one child.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Textual payload carried directly by this block, if any.
    ///
    /// Covers the kinds whose text is read as body copy; titles of containers
    /// are not included.
    pub fn own_text(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Text { text }
            | BlockKind::Link { text, .. }
            | BlockKind::Heading { text, .. } => Some(text),
            BlockKind::InlineCode { code } => Some(code),
            BlockKind::Paragraph { text } | BlockKind::ListItem { text } => text.as_deref(),
            _ => None,
        }
    }

    /// Number of blocks in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ContentBlock::node_count)
            .sum::<usize>()
    }

    /// Depth of this subtree (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ContentBlock::depth)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_heading() {
        let json = r#"{"type":"heading","level":2,"text":"Getting Started"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();

        assert_eq!(block.kind_name(), "heading");
        assert!(block.id.is_none());
        assert!(block.children.is_none());
        match block.kind {
            BlockKind::Heading { level, text } => {
                assert_eq!(level.get(), 2);
                assert_eq!(text, "Getting Started");
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_shared_fields() {
        let json = r#"{
            "type": "section",
            "id": "install",
            "title": "Installation",
            "className": "mt-8",
            "children": [{"type": "text", "text": "hi"}]
        }"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();

        assert_eq!(block.explicit_id(), Some("install"));
        assert_eq!(block.class_name.as_deref(), Some("mt-8"));
        assert_eq!(block.children().len(), 1);
        assert!(matches!(
            block.kind,
            BlockKind::Section { border: false, .. }
        ));
    }

    #[test]
    fn test_deserialize_unit_kinds() {
        let page: ContentBlock = serde_json::from_str(r#"{"type":"page","children":[]}"#).unwrap();
        assert!(page.is_page());
        assert_eq!(page.children, Some(Vec::new()));

        let tabs: ContentBlock = serde_json::from_str(r#"{"type":"tabs"}"#).unwrap();
        assert_eq!(tabs.kind, BlockKind::Tabs);
        assert!(tabs.children.is_none());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = serde_json::from_str::<ContentBlock>(r#"{"type":"video","src":"x"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_heading_level_out_of_range_rejected() {
        let err = serde_json::from_str::<ContentBlock>(r#"{"type":"heading","level":9,"text":"x"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let block = ContentBlock::link("/docs/", "Docs");
        let json = serde_json::to_string(&block).unwrap();

        assert!(json.contains("\"type\":\"link\""));
        assert!(!json.contains("external"));
        assert!(!json.contains("children"));
        assert!(!json.contains("className"));
    }

    #[test]
    fn test_step_number_variants() {
        let json = r#"{"type":"step","number":"A","title":"Prepare"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        match block.kind {
            BlockKind::Step { number, title, .. } => {
                assert_eq!(number, Some(StepNumber::Label("A".to_string())));
                assert_eq!(title, "Prepare");
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_step_number_accepts_any_json_number() {
        let json = r#"{"type":"step","number":-1,"title":"Undo"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        match &block.kind {
            BlockKind::Step { number, .. } => {
                assert_eq!(number.as_ref().map(ToString::to_string).as_deref(), Some("-1"));
            }
            other => panic!("unexpected kind {:?}", other),
        }

        let json = r#"{"type":"step","number":1.5,"title":"Half"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert!(serde_json::to_string(&block).unwrap().contains("\"number\":1.5"));
    }

    #[test]
    fn test_empty_id_is_absent() {
        let block = ContentBlock::heading(2, "x").with_id("");
        assert!(block.explicit_id().is_none());
    }

    #[test]
    fn test_own_text() {
        assert_eq!(ContentBlock::text("a").own_text(), Some("a"));
        assert_eq!(ContentBlock::inline_code("ls").own_text(), Some("ls"));
        assert_eq!(ContentBlock::card("Install", "/install").own_text(), None);
        assert_eq!(
            ContentBlock::paragraph(vec![ContentBlock::text("a")]).own_text(),
            None
        );
    }

    #[test]
    fn test_tree_shape() {
        let page = ContentBlock::page(vec![
            ContentBlock::heading(2, "A"),
            ContentBlock::list(
                ListStyle::Ordered,
                vec![ContentBlock::list_item("one"), ContentBlock::list_item("two")],
            ),
        ]);

        assert_eq!(page.node_count(), 5);
        assert_eq!(page.depth(), 3);
        assert!(page.has_children());
    }
}
