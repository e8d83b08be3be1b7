use std::cell::RefCell;

use draft_model::{BlockType, ContentBlock, EntityMap, ListKind, RawContentState};
use draft_renderers_core::{
    AtomicHandler, AtomicRender, BlockLeaf, BlockRenderer, CustomBlockHandler, CustomStyles,
    Error, LeafRenderer, ListIndicator, ListItemLeaf, NodeKey, Options, RenderContext, Style,
    TextProps, style::names,
};
use pretty_assertions::assert_eq;

/// Leaf renderer that flattens every node into a one-line outline.
#[derive(Default)]
struct Outline {
    keys: RefCell<Vec<NodeKey>>,
    props: RefCell<Vec<TextProps>>,
    separator_styles: RefCell<Vec<Option<Style>>>,
}

impl Outline {
    fn record(&self, leaf: &BlockLeaf<'_>) {
        self.props.borrow_mut().push(leaf.text_props.clone());
    }
}

impl LeafRenderer for Outline {
    type Node = String;

    fn text(&self, leaf: &BlockLeaf<'_>) -> String {
        self.record(leaf);
        format!("text:{}", leaf.block.text)
    }

    fn quote(&self, leaf: &BlockLeaf<'_>) -> String {
        self.record(leaf);
        format!("quote:{}", leaf.block.text)
    }

    fn unordered_item(&self, item: &ListItemLeaf<'_>) -> String {
        self.record(&item.leaf);
        format!("• {} @{}", item.leaf.block.text, item.margin_left)
    }

    fn ordered_item(&self, item: &ListItemLeaf<'_>) -> String {
        self.record(&item.leaf);
        let marker = self.indicator(&item.indicator, item.leaf.custom_styles);
        format!("{marker} {} @{}", item.leaf.block.text, item.margin_left)
    }

    fn indicator(&self, indicator: &ListIndicator, _styles: &CustomStyles) -> String {
        match indicator {
            ListIndicator::Bullet => "•".to_string(),
            ListIndicator::Number { value, separator } => format!("{value}{separator}"),
        }
    }

    fn separator(&self, key: NodeKey, style: Option<&Style>) -> String {
        self.keys.borrow_mut().push(key);
        self.separator_styles.borrow_mut().push(style.cloned());
        "--".to_string()
    }

    fn group(&self, key: NodeKey, separator: Option<String>, content: Option<String>) -> String {
        self.keys.borrow_mut().push(key);
        let content = content.unwrap_or_else(|| "<empty>".to_string());
        match separator {
            Some(separator) => format!("{separator} {content}"),
            None => content,
        }
    }

    fn row(&self, key: NodeKey, indicator: Option<String>, embed: String) -> String {
        self.keys.borrow_mut().push(key);
        match indicator {
            Some(indicator) => format!("[{indicator} {embed}]"),
            None => format!("[{embed}]"),
        }
    }

    fn passthrough(&self, block: &ContentBlock) -> String {
        format!("raw:{}", block.key)
    }
}

fn embed(block: &ContentBlock, _entity_map: &EntityMap) -> AtomicRender<String> {
    AtomicRender::new(format!("embed:{}", block.key))
        .in_list(block.data_str("oldType").and_then(ListKind::from_tag))
}

fn block(key: &str, tag: &str, text: &str) -> ContentBlock {
    ContentBlock::new(key, BlockType::from(tag), text)
}

fn ol(text: &str) -> ContentBlock {
    block(text, "ordered-list-item", text)
}

fn ul(text: &str) -> ContentBlock {
    block(text, "unordered-list-item", text)
}

fn atomic(key: &str, old_type: Option<&str>) -> ContentBlock {
    let block = block(key, "atomic", "");
    match old_type {
        Some(old_type) => block.with_data("oldType", serde_json::Value::from(old_type)),
        None => block,
    }
}

fn render_with(
    blocks: Vec<ContentBlock>,
    options: &Options,
    atomic_handler: Option<&dyn AtomicHandler<String>>,
    custom_handler: Option<&dyn CustomBlockHandler<String>>,
) -> Result<Vec<String>, Error> {
    let leaf = Outline::default();
    let mut renderer = BlockRenderer::new(&leaf, options);
    if let Some(handler) = atomic_handler {
        renderer = renderer.with_atomic_handler(handler);
    }
    if let Some(handler) = custom_handler {
        renderer = renderer.with_custom_block_handler(handler);
    }
    Ok(renderer
        .render(&RawContentState::new(blocks))?
        .unwrap_or_default())
}

fn render(blocks: Vec<ContentBlock>) -> Result<Vec<String>, Error> {
    render_with(blocks, &Options::default(), Some(&embed), None)
}

#[test]
#[tracing_test::traced_test]
fn absent_blocks_render_nothing() -> Result<(), Error> {
    let leaf = Outline::default();
    let options = Options::default();
    let nodes = BlockRenderer::new(&leaf, &options).render(&RawContentState::default())?;
    assert_eq!(nodes, None);
    assert!(logs_contain("nothing to render"));
    Ok(())
}

#[test]
fn empty_blocks_render_empty_sequence() -> Result<(), Error> {
    let leaf = Outline::default();
    let options = Options::default();
    let nodes = BlockRenderer::new(&leaf, &options).render(&RawContentState::new(vec![]))?;
    assert_eq!(nodes, Some(vec![]));
    Ok(())
}

#[rstest::rstest]
#[case(1)]
#[case(3)]
#[case(12)]
fn ordered_run_counts_from_one(#[case] n: usize) -> Result<(), Error> {
    let blocks = (1..=n).map(|i| ol(&format!("item{i}"))).collect();
    let expected: Vec<String> = (1..=n).map(|i| format!("{i}. item{i} @8")).collect();
    assert_eq!(render(blocks)?, expected);
    Ok(())
}

#[test]
fn nested_items_restart_under_each_parent() -> Result<(), Error> {
    let blocks = vec![
        ol("a"),
        ol("b").with_depth(1),
        ol("c").with_depth(1),
        ol("d"),
        ol("e").with_depth(1),
    ];
    assert_eq!(
        render(blocks)?,
        vec!["1. a @8", "1. b @16", "2. c @16", "2. d @8", "1. e @16"]
    );
    Ok(())
}

#[test]
fn depth_two_shares_the_nested_sequence() -> Result<(), Error> {
    let blocks = vec![ol("a"), ol("b").with_depth(1), ol("c").with_depth(2)];
    assert_eq!(render(blocks)?, vec!["1. a @8", "1. b @16", "2. c @24"]);
    Ok(())
}

#[test]
fn switching_list_kinds_separates_once() -> Result<(), Error> {
    let blocks = vec![ul("a"), ul("b"), ol("c"), ol("d"), ul("e")];
    assert_eq!(
        render(blocks)?,
        vec!["• a @8", "• b @8", "-- 1. c @8", "2. d @8", "-- • e @8"]
    );
    Ok(())
}

#[rstest::rstest]
#[case::paragraph("unstyled")]
#[case::header("header-two")]
#[case::code("code-block")]
#[case::quote("blockquote")]
fn non_list_block_closes_the_run(#[case] tag: &str) -> Result<(), Error> {
    let blocks = vec![
        ol("a"),
        ol("b"),
        block("x", tag, "x"),
        block("y", tag, "y"),
        ol("c"),
    ];
    let nodes = render(blocks)?;
    assert_eq!(nodes.iter().filter(|n| n.starts_with("--")).count(), 1);
    assert!(nodes.get(2).is_some_and(|n| n.starts_with("-- ")));
    assert_eq!(nodes.get(4).map(String::as_str), Some("1. c @8"));
    Ok(())
}

#[test]
fn repeated_renders_number_identically() -> Result<(), Error> {
    let blocks = vec![ol("a"), ol("b").with_depth(1), ul("c"), ol("d")];
    let first = render(blocks.clone())?;
    let second = render(blocks)?;
    assert_eq!(first, second);
    assert_eq!(first, vec!["1. a @8", "1. b @16", "-- • c @8", "-- 1. d @8"]);
    Ok(())
}

#[test]
fn ordered_embed_continues_the_numbering() -> Result<(), Error> {
    let blocks = vec![
        ol("a"),
        atomic("img", Some("ordered-list-item")),
        ol("b"),
    ];
    assert_eq!(render(blocks)?, vec!["1. a @8", "[2. embed:img]", "3. b @8"]);
    Ok(())
}

#[test]
fn unordered_embed_keeps_the_run_open() -> Result<(), Error> {
    let blocks = vec![
        ul("a"),
        atomic("img", Some("unordered-list-item")),
        ul("b"),
        block("p", "unstyled", "p"),
    ];
    assert_eq!(
        render(blocks)?,
        vec!["• a @8", "[• embed:img]", "• b @8", "-- text:p"]
    );
    Ok(())
}

#[test]
fn mixed_interleaving() -> Result<(), Error> {
    let blocks = vec![
        ul("a"),
        atomic("img", Some("unordered-list-item")),
        ol("b").with_depth(2),
        ol("c"),
    ];
    assert_eq!(
        render(blocks)?,
        vec!["• a @8", "[• embed:img]", "-- 1. b @24", "1. c @8"]
    );
    Ok(())
}

#[test]
fn plain_embed_closes_the_run() -> Result<(), Error> {
    let blocks = vec![ol("a"), atomic("img", None), atomic("img2", None)];
    assert_eq!(
        render(blocks)?,
        vec!["1. a @8", "-- [embed:img]", "[embed:img2]"]
    );
    Ok(())
}

#[test]
#[tracing_test::traced_test]
fn atomic_without_handler_passes_through() -> Result<(), Error> {
    let blocks = vec![ol("a"), atomic("img", Some("ordered-list-item")), ol("b")];
    let nodes = render_with(blocks, &Options::default(), None, None)?;
    assert_eq!(nodes, vec!["1. a @8", "raw:img", "2. b @8"]);
    assert!(logs_contain("no atomic handler configured"));
    Ok(())
}

#[test]
fn atomic_without_handler_fails_in_strict_mode() {
    let options = Options::builder().strict(true).build();
    let result = render_with(vec![ol("a"), atomic("img", None)], &options, None, None);
    assert_eq!(
        result,
        Err(Error::MissingAtomicHandler {
            key: "img".to_string()
        })
    );
}

#[test]
fn unknown_block_without_handler_is_a_placeholder() -> Result<(), Error> {
    let blocks = vec![
        block("k1", "x-gallery", "g"),
        ul("a"),
        block("k2", "x-gallery", "g"),
    ];
    assert_eq!(render(blocks)?, vec!["<empty>", "• a @8", "-- <empty>"]);
    Ok(())
}

#[test]
fn unknown_block_with_handler_is_passed_through() -> Result<(), Error> {
    let custom = |block: &ContentBlock, context: &RenderContext<'_>| {
        format!(
            "custom:{}:{}:{}",
            block.block_type,
            block.key,
            context.options.ordered_list_separator()
        )
    };
    let options = Options::builder().ordered_list_separator(")").build();
    let blocks = vec![ol("a"), block("k1", "x-gallery", "g"), ol("b")];
    let nodes = render_with(blocks, &options, Some(&embed), Some(&custom))?;
    assert_eq!(nodes, vec!["1) a @8", "custom:x-gallery:k1:)", "1) b @8"]);
    Ok(())
}

#[test]
fn output_length_matches_input() -> Result<(), Error> {
    let blocks = vec![
        block("h", "header-one", "Title"),
        ul("a"),
        ul("b").with_depth(1),
        atomic("img", Some("ordered-list-item")),
        ol("c"),
        block("q", "blockquote", "quote"),
        block("z", "x-unknown", ""),
        atomic("raw", None),
        block("p", "paragraph", "end"),
    ];
    let len = blocks.len();
    assert_eq!(render(blocks)?.len(), len);
    Ok(())
}

#[test]
fn node_keys_are_never_reused() -> Result<(), Error> {
    let leaf = Outline::default();
    let options = Options::default();
    let content = RawContentState::new(vec![ol("a"), block("p", "unstyled", "p"), ul("b")]);
    let renderer = BlockRenderer::new(&leaf, &options);
    renderer.render(&content)?;
    renderer.render(&content)?;

    let mut keys = leaf.keys.borrow().clone();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
    Ok(())
}

#[test]
fn text_props_carry_the_block_key() -> Result<(), Error> {
    let mut props = TextProps::new();
    props.insert("selectable".to_string(), serde_json::Value::Bool(true));
    props.insert(
        "blockKey".to_string(),
        serde_json::Value::from("caller-value"),
    );
    let options = Options::builder().text_props(props).build();
    let leaf = Outline::default();
    let content = RawContentState::new(vec![block("k1", "unstyled", "a"), ul("k2")]);
    BlockRenderer::new(&leaf, &options).render(&content)?;

    let seen = leaf.props.borrow();
    let keys: Vec<Option<&str>> = seen
        .iter()
        .map(|p| p.get("blockKey").and_then(serde_json::Value::as_str))
        .collect();
    assert_eq!(keys, vec![Some("k1"), Some("k2")]);
    assert!(
        seen.iter()
            .all(|p| p.get("selectable") == Some(&serde_json::Value::Bool(true)))
    );
    Ok(())
}

#[test]
fn separator_receives_the_view_after_list_style() -> Result<(), Error> {
    let style = Style {
        color: Some("dark_grey".to_string()),
        ..Style::default()
    };
    let options = Options::builder()
        .custom_styles(CustomStyles::new().with(names::VIEW_AFTER_LIST, style.clone()))
        .build();
    let leaf = Outline::default();
    let content = RawContentState::new(vec![ul("a"), block("p", "unstyled", "p")]);
    BlockRenderer::new(&leaf, &options).render(&content)?;
    assert_eq!(*leaf.separator_styles.borrow(), vec![Some(style)]);
    Ok(())
}

#[test]
fn list_margin_follows_configuration() -> Result<(), Error> {
    let styles = CustomStyles::new().with(
        names::ORDERED_LIST_ITEM_NUMBER,
        Style {
            margin_left: Some(2),
            ..Style::default()
        },
    );
    let options = Options::builder()
        .depth_margin(4)
        .custom_styles(styles)
        .build();
    let blocks = vec![ul("a"), ul("b").with_depth(1), ol("c"), ol("d").with_depth(1)];
    let nodes = render_with(blocks, &options, None, None)?;
    assert_eq!(nodes, vec!["• a @4", "• b @8", "-- 1. c @2", "1. d @4"]);
    Ok(())
}
