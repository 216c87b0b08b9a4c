use datatable_lib::render::{COLLAPSE_LABEL, EXPAND_LABEL, NO_DATA};
use datatable_lib::{
    Body, Column, Content, DataTable, HitTarget, LayoutConfig, LineRole, Row, SortDirection, Span,
    TableOptions, Tone, Value,
};

fn gear_table() -> DataTable {
    DataTable::new(vec![
        Column::new("slot", "Slot"),
        Column::new("item", "Item").filterable(false),
        Column::new("have", "Have")
            .sortable(false)
            .render(|value, _| match value {
                Value::Bool(true) => Content::styled(Span::new("Yes").tone(Tone::Success)),
                _ => Content::styled(Span::new("No").tone(Tone::Danger)),
            }),
    ])
    .with_options(TableOptions::new().expandable(true))
    .with_expansion(|row| Content::text(format!("Source: {}", row.text("details"))))
    .with_rows(vec![
        Row::new()
            .set("slot", "Head")
            .set("item", "Crown")
            .set("have", true)
            .set("details", "Raid"),
        Row::new().set("slot", "Feet").set("item", "Boots").set("have", false),
    ])
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_header_cells() {
    let mut table = gear_table();
    table.click_header("slot");
    table.set_filter("slot", "he");

    let rendered = table.render();
    let header = rendered.header.expect("header");
    assert_eq!(header.len(), 3);

    assert_eq!(header[0].label, "Slot");
    assert_eq!(header[0].sort, Some(SortDirection::Ascending));
    assert_eq!(header[0].indicator(), Some("↑"));
    let filter = header[0].filter.as_ref().expect("filter box");
    assert_eq!(filter.placeholder, "Filter Slot...");
    assert_eq!(filter.value, "he");

    assert_eq!(header[1].indicator(), Some("↕"));
    assert!(header[1].filter.is_none());

    assert_eq!(header[2].sort, None);
    assert!(header[2].filter.is_some());
}

#[test]
fn test_headerless_has_no_header() {
    let table = gear_table().with_options(TableOptions::new().headerless(true));
    assert!(table.render().header.is_none());
}

#[test]
fn test_global_flags_hide_affordances() {
    let table = gear_table().with_options(TableOptions::new().sortable(false).filterable(false));
    let header = table.render().header.expect("header");
    assert!(header.iter().all(|c| c.sort.is_none() && c.filter.is_none()));
}

#[test]
fn test_cells_use_renderer_or_text() {
    let rendered = gear_table().render();
    let rows = rendered.body.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells[0].plain(), "Head");
    assert_eq!(rows[0].cells[2].plain(), "Yes");
    assert_eq!(rows[0].cells[2].lines[0].spans[0].tone, Tone::Success);
    assert_eq!(rows[1].cells[2].plain(), "No");
}

#[test]
fn test_missing_field_renders_empty() {
    let table = DataTable::new(vec![Column::new("a", "A"), Column::new("b", "B")])
        .with_rows(vec![Row::new().set("a", "x").set("b", Value::Null), Row::new()]);
    let rendered = table.render();
    for row in rendered.body.rows() {
        assert!(row.cells[1].is_empty());
    }
}

#[test]
fn test_toggle_only_on_expandable_rows() {
    let mut table = gear_table();
    let rendered = table.render();
    assert!(rendered.toggle_column);
    let rows = rendered.body.rows();
    let toggle = rows[0].toggle.expect("toggle");
    assert!(!toggle.expanded);
    assert_eq!(toggle.glyph(), "▶");
    assert_eq!(toggle.label(), EXPAND_LABEL);
    assert!(rows[1].toggle.is_none());

    table.toggle_row(0);
    let rendered = table.render();
    let row = &rendered.body.rows()[0];
    let toggle = row.toggle.expect("toggle");
    assert_eq!(toggle.glyph(), "▼");
    assert_eq!(toggle.label(), COLLAPSE_LABEL);
    assert_eq!(row.expansion.as_ref().map(|c| c.plain()).as_deref(), Some("Source: Raid"));
}

#[test]
fn test_empty_body_spans_all_columns() {
    let mut table = gear_table();
    table.set_filter("slot", "nothing");
    let rendered = table.render();
    assert_eq!(
        rendered.body,
        Body::Empty {
            message: NO_DATA,
            span: 4
        }
    );
    assert_eq!(rendered.footer, None);
}

#[test]
fn test_footer_counts_after_filtering() {
    let mut table = gear_table();
    table.set_filter("slot", "feet");
    assert_eq!(table.render().footer.as_deref(), Some("Showing 1 of 2 rows"));

    let table = gear_table().with_options(TableOptions::new().footerless(true));
    assert_eq!(table.render().footer, None);
}

// ============================================================================
// Text layout
// ============================================================================

#[test]
fn test_plain_text_layout() {
    let table = DataTable::new(vec![Column::new("n", "N").filterable(false)])
        .with_rows(vec![Row::new().set("n", 1), Row::new().set("n", 22)]);
    let text = table.to_text(&LayoutConfig::default());
    let expected = "\
┌─────┐
│ N ↕ │
├─────┤
│ 1   │
│ 22  │
└─────┘
Showing 2 of 2 rows";
    assert_eq!(text, expected);
}

#[test]
fn test_compact_layout_has_no_padding() {
    let table = DataTable::new(vec![Column::new("a", "A"), Column::new("b", "B")])
        .with_options(
            TableOptions::new()
                .sortable(false)
                .filterable(false)
                .compact(true)
                .footerless(true),
        )
        .with_rows(vec![Row::new().set("a", "x").set("b", "yy")]);
    let text = table.to_text(&LayoutConfig::default());
    let expected = "\
┌─┬──┐
│A│B │
├─┼──┤
│x│yy│
└─┴──┘";
    assert_eq!(text, expected);
}

#[test]
fn test_empty_layout_shows_placeholder() {
    let table = DataTable::new(vec![Column::new("a", "A")])
        .with_options(TableOptions::new().sortable(false).filterable(false));
    let layout = table.layout(&LayoutConfig::default());
    let empty = layout
        .lines
        .iter()
        .find(|l| l.role == LineRole::Empty)
        .expect("placeholder line");
    assert!(empty.line.plain().contains(NO_DATA));
}

#[test]
fn test_filtered_out_table_shows_whole_placeholder() {
    let mut table = DataTable::new(vec![Column::new("slot", "Slot")])
        .with_rows(vec![Row::new().set("slot", "Head")]);
    table.set_filter("slot", "zzz");
    let layout = table.layout(&LayoutConfig::default());

    assert!(layout.to_plain().contains("No data found"));
    for line in &layout.lines {
        assert_eq!(line.line.width(), layout.width);
    }
}

#[test]
fn test_expansion_panel_is_not_clipped() {
    let mut table = DataTable::new(vec![Column::new("a", "A")])
        .with_options(TableOptions::new().expandable(true).footerless(true))
        .with_expansion(|_| Content::text("Source: Sunken Vault"))
        .with_rows(vec![Row::new().set("a", "x").set("details", true)]);
    table.toggle_row(0);
    let layout = table.layout(&LayoutConfig::default());

    let panel = layout
        .lines
        .iter()
        .find(|l| matches!(l.role, LineRole::Expansion { .. }))
        .expect("panel line");
    assert!(panel.line.plain().contains("Source: Sunken Vault"));
    assert!(layout.lines.iter().all(|l| l.line.width() == layout.width));
}

#[test]
fn test_layout_respects_max_width() {
    let table = DataTable::new(vec![Column::new("a", "A"), Column::new("b", "B")]).with_rows(vec![
        Row::new()
            .set("a", "a very long piece of text that will not fit")
            .set("b", "short"),
    ]);
    let layout = table.layout(&LayoutConfig::default().max_width(30));
    assert!(layout.width <= 30);
    for line in &layout.lines {
        if line.role != LineRole::Footer {
            assert_eq!(line.line.width(), layout.width);
        }
    }
    assert!(layout.to_plain().contains('…'));
}

#[test]
fn test_striped_rows_alternate() {
    let table = DataTable::new(vec![Column::new("n", "N")])
        .with_rows((0..3).map(|i| Row::new().set("n", i)).collect());
    let layout = table.layout(&LayoutConfig::default());
    let stripes: Vec<bool> = layout
        .lines
        .iter()
        .filter_map(|l| match l.role {
            LineRole::Row { stripe, .. } => Some(stripe),
            _ => None,
        })
        .collect();
    assert_eq!(stripes, [false, true, false]);
}

#[test]
fn test_multiline_cells_and_expansion_lines() {
    let mut table = DataTable::new(vec![Column::new("a", "A")])
        .with_options(TableOptions::new().expandable(true))
        .with_expansion(|_| Content::text("one\ntwo"))
        .with_rows(vec![Row::new().set("a", "x\ny").set("details", true)]);
    table.toggle_row(0);
    let layout = table.layout(&LayoutConfig::default());
    let rows = layout
        .lines
        .iter()
        .filter(|l| matches!(l.role, LineRole::Row { position: 0, .. }))
        .count();
    let panels = layout
        .lines
        .iter()
        .filter(|l| matches!(l.role, LineRole::Expansion { position: 0 }))
        .count();
    assert_eq!(rows, 2);
    assert_eq!(panels, 2);
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_routes_clicks() {
    let table = gear_table();
    let layout = table.layout(&LayoutConfig::default());

    let header_y = layout
        .lines
        .iter()
        .position(|l| l.role == LineRole::Header)
        .expect("header line");
    // "│   │ Slot ↕ │" -> toggle segment is 1 wide plus padding, slot starts at x=6
    assert_eq!(
        layout.hit_test(6, header_y),
        Some(&HitTarget::Header("slot".into()))
    );
    assert_eq!(layout.hit_test(0, header_y), None);

    let filter_y = header_y + 1;
    assert_eq!(
        layout.hit_test(6, filter_y),
        Some(&HitTarget::Filter("slot".into()))
    );

    let row0 = layout.row_line(0).expect("row 0");
    assert_eq!(layout.hit_test(2, row0), Some(&HitTarget::Toggle(0)));
    assert_eq!(layout.hit_test(8, row0), Some(&HitTarget::Row(0)));

    let row1 = layout.row_line(1).expect("row 1");
    assert_eq!(layout.hit_test(2, row1), Some(&HitTarget::Row(1)));
}

#[test]
fn test_into_content_nests_table() {
    let nested = DataTable::new(vec![Column::new("source", "Source")])
        .with_options(
            TableOptions::new()
                .sortable(false)
                .filterable(false)
                .compact(true)
                .footerless(true),
        )
        .with_rows(vec![Row::new().set("source", "Vendor")]);
    let content = nested.layout(&LayoutConfig::default()).into_content();
    assert_eq!(content.height(), 5);
    assert_eq!(content.lines[3].plain(), "│Vendor│");
}
