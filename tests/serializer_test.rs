//! Tests for the serialization semantics: indentation, filtering, extraction.

use treesnap::{DataNode, MemoryNode, Printer, Value, TEXT_CONTENT};

fn leaf(id: &str) -> MemoryNode {
    MemoryNode::new().with_attribute("data-id", id)
}

#[test]
fn given_nested_tree_when_printing_then_two_spaces_per_level() {
    // Arrange
    let root = MemoryNode::new()
        .with_child(leaf("a").with_child(leaf("b").with_child(leaf("c"))))
        .with_child(leaf("d"));
    let printer = Printer::builder().attribute_name("data-id").build().unwrap();

    // Act / Assert
    assert_eq!(printer.print_node(&root), "\na\n  b\n    c\nd\n");
}

#[test]
fn given_filtered_middle_level_when_printing_then_descendants_keep_relative_indent() {
    // Arrange: a -> noise -> b; noise is elided.
    let root = MemoryNode::new().with_child(
        leaf("a").with_child(leaf("noise").with_child(leaf("b"))),
    );
    let printer = Printer::builder()
        .attribute_name("data-id")
        .filter(|value: &Value, _| value.as_text() != Some("noise"))
        .build()
        .unwrap();

    // Act / Assert: b sits one level under a, its nearest retained ancestor.
    assert_eq!(printer.print_node(&root), "\na\n  b\n");
}

#[test]
fn given_filtered_siblings_when_printing_then_survivors_join_cleanly() {
    // Arrange
    let root = MemoryNode::new()
        .with_child(leaf("keep-1"))
        .with_child(leaf("drop"))
        .with_child(leaf("keep-2"));
    let printer = Printer::builder()
        .attribute_name("data-id")
        .filter(|value: &Value, _| value.as_text() != Some("drop"))
        .build()
        .unwrap();

    // Act / Assert: no blank row where the elided sibling used to be.
    assert_eq!(printer.print_node(&root), "\nkeep-1\nkeep-2\n");
}

#[test]
fn given_filter_on_node_shape_when_printing_then_node_argument_is_usable() {
    // Arrange: elide branch nodes, keep leaves.
    let root = MemoryNode::new()
        .with_child(leaf("branch").with_child(leaf("inner")))
        .with_child(leaf("lone"));
    let printer = Printer::builder()
        .attribute_name("data-id")
        .filter(|_, node: &MemoryNode| !node.has_children())
        .build()
        .unwrap();

    // Act / Assert
    assert_eq!(printer.print_node(&root), "\ninner\nlone\n");
}

#[test]
fn given_no_filter_when_printing_then_falsy_values_still_print() {
    // Arrange: numeric zero, empty text, and an absent attribute.
    let root = MemoryNode::new()
        .with_child(MemoryNode::new().with_attribute("data-ord", 0))
        .with_child(MemoryNode::new().with_attribute("data-ord", ""))
        .with_child(MemoryNode::new());
    let printer = Printer::builder().attribute_name("data-ord").build().unwrap();

    // Act / Assert: default retention ignores value truthiness.
    assert_eq!(printer.print_node(&root), "\n0\n\nnull\n");
}

#[test]
fn given_text_content_property_when_printing_then_first_child_text_wins() {
    // Arrange
    let root = MemoryNode::new().with_child(
        MemoryNode::new()
            .with_property(TEXT_CONTENT, "aggregated")
            .with_text("first child text"),
    );
    let printer = Printer::builder()
        .property_name(TEXT_CONTENT)
        .build()
        .unwrap();

    // Act / Assert
    assert_eq!(printer.print_node(&root), "\nfirst child text\n");
}

#[test]
fn given_text_content_node_without_child_text_when_printing_then_null_line() {
    // Arrange: the child carries no text node at all.
    let root = MemoryNode::new().with_child(MemoryNode::new());
    let printer = Printer::builder()
        .property_name(TEXT_CONTENT)
        .build()
        .unwrap();

    // Act / Assert: the missing read renders as null rather than failing.
    assert_eq!(printer.print_node(&root), "\nnull\n");
}

#[test]
fn given_plain_property_when_printing_then_property_value_used() {
    // Arrange
    let root = MemoryNode::new()
        .with_child(MemoryNode::new().with_property("title", "alpha"))
        .with_child(
            MemoryNode::new()
                .with_property("title", "beta")
                .with_child(MemoryNode::new().with_property("title", "gamma")),
        );
    let printer = Printer::builder().property_name("title").build().unwrap();

    // Act / Assert
    assert_eq!(printer.print_node(&root), "\nalpha\nbeta\n  gamma\n");
}

#[test]
fn given_retained_branch_with_elided_subtree_when_printing_then_line_without_block() {
    // Arrange
    let root = MemoryNode::new()
        .with_child(leaf("kept").with_child(leaf("drop-1")).with_child(leaf("drop-2")));
    let printer = Printer::builder()
        .attribute_name("data-id")
        .filter(|value: &Value, _| {
            value.as_text().is_some_and(|text| !text.starts_with("drop"))
        })
        .build()
        .unwrap();

    // Act / Assert
    assert_eq!(printer.print_node(&root), "\nkept\n");
}

#[test]
fn given_format_and_filter_when_printing_then_filter_sees_raw_value() {
    // Arrange: format would hide the distinction the filter relies on.
    let root = MemoryNode::new()
        .with_child(MemoryNode::new().with_attribute("data-ord", 1))
        .with_child(MemoryNode::new().with_attribute("data-ord", 2));
    let printer = Printer::builder()
        .attribute_name("data-ord")
        .filter(|value: &Value, _| *value != Value::Int(2))
        .format(|value| format!("#{value}"))
        .build()
        .unwrap();

    // Act / Assert
    assert_eq!(printer.print_node(&root), "\n#1\n");
}

#[test]
fn given_deep_elided_chain_when_printing_then_leaf_surfaces_at_top() {
    // Arrange: every intermediate level is elided.
    let root = MemoryNode::new().with_child(
        leaf("x1").with_child(leaf("x2").with_child(leaf("x3").with_child(leaf("keep")))),
    );
    let printer = Printer::builder()
        .attribute_name("data-id")
        .filter(|value: &Value, _| value.as_text() == Some("keep"))
        .build()
        .unwrap();

    // Act / Assert: no elided ancestor consumed an indentation level.
    assert_eq!(printer.print_node(&root), "\nkeep\n");
}
