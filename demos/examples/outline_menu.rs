// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline menu.
//!
//! Build a two-level sample menu, expand groups, and select a leaf.
//!
//! Run:
//! - `cargo run -p stepwise_demos --example outline_menu`

use stepwise_outline::{OutlineFlattener, OutlineItem, OutlineRow, Selection};
use tracing::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    List,
    Grid,
    TwoColumn,
    DistinctSections,
    AdaptiveSections,
    NestedGroups,
    Mountains,
    InsertionSort,
}

fn print_rows(title: &str, rows: &[OutlineRow]) {
    println!("-- {title}");
    for row in rows {
        let marker = match (row.is_leaf, row.expanded) {
            (true, _) => ' ',
            (false, true) => 'v',
            (false, false) => '>',
        };
        println!("{}{marker} {}", "  ".repeat(row.depth), row.label);
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .try_init();

    let per_section = OutlineItem::group("Per-Section Layout")
        .child(OutlineItem::leaf("Distinct Sections", Screen::DistinctSections))
        .child(OutlineItem::leaf("Adaptive Sections", Screen::AdaptiveSections));
    let per_section_id = per_section.id();

    let getting_started = OutlineItem::group("Getting Started")
        .child(OutlineItem::leaf("List", Screen::List))
        .child(OutlineItem::leaf("Grid", Screen::Grid))
        .child(OutlineItem::leaf("Two-Column Grid", Screen::TwoColumn))
        .child(per_section);
    let getting_started_id = getting_started.id();

    let layouts = OutlineItem::group("Compositional Layout")
        .child(getting_started)
        .child(
            OutlineItem::group("Advanced Layouts")
                .child(OutlineItem::leaf("Nested Groups", Screen::NestedGroups)),
        );
    let layouts_id = layouts.id();

    let sort_leaf = OutlineItem::leaf("Insertion Sort Visualization", Screen::InsertionSort);
    let sort_id = sort_leaf.id();
    let diffable = OutlineItem::group("Diffable Data Source")
        .child(OutlineItem::leaf("Mountains Search", Screen::Mountains))
        .child(sort_leaf);

    let mut menu = OutlineFlattener::new([layouts, diffable]).expect("menu identities are unique");
    print_rows("initial", &menu.flatten());

    menu.toggle(layouts_id).expect("known id");
    menu.toggle(getting_started_id).expect("known id");
    print_rows("after expanding two groups", &menu.flatten());

    // Expanding a group under a collapsed ancestor is remembered but not shown.
    menu.toggle(layouts_id).expect("known id");
    menu.toggle(per_section_id).expect("known id");
    print_rows("layouts collapsed again", &menu.flatten());

    // Jump straight to a deep item, as a search result would.
    let opened = menu.reveal(sort_id).expect("known id");
    println!("reveal expanded {opened} ancestor(s)");
    print_rows("after reveal", &menu.flatten());

    match menu.select(sort_id).expect("known id") {
        Selection::Activated(Some(screen)) => println!("open screen: {screen:?}"),
        other => println!("unexpected selection: {other:?}"),
    }
}
