//! Edge case tests: boundary geometry, degenerate shapes, and odd documents

// =============================================================================
// Out-of-Bounds Geometry
// =============================================================================

mod out_of_bounds {
    use scrawl::prelude::*;

    fn drag(editor: &mut Editor, from: Pos, to: Pos) {
        editor.drag_begin(from);
        editor.drag_update(to);
        editor.drag_end(to);
    }

    #[test]
    fn test_rectangle_partially_off_canvas_clips() {
        let mut editor = Editor::with_size(10, 5);
        editor.set_active_tool(ToolKind::Rectangle);
        drag(&mut editor, Pos::new(7, 2), Pos::new(15, 8));

        assert_eq!(editor.canvas().get_char(7, 2, Layer::Draw), Some('┌'));
        assert_eq!(editor.canvas().get_char(9, 2, Layer::Draw), Some('─'));
        assert_eq!(editor.canvas().get_char(7, 4, Layer::Draw), Some('│'));
        // Interior stays empty, the canvas keeps its size
        assert_eq!(editor.canvas().get_char(8, 3, Layer::Draw), Some(' '));
        assert_eq!(editor.canvas().width(), 10);
        assert_eq!(editor.canvas().height(), 5);
    }

    #[test]
    fn test_rectangle_fully_off_canvas_draws_nothing() {
        let mut editor = Editor::with_size(10, 5);
        editor.set_active_tool(ToolKind::Rectangle);
        drag(&mut editor, Pos::new(20, 20), Pos::new(30, 28));

        assert_eq!(editor.canvas().grid(Layer::Draw).occupied_cells(), 0);
    }

    #[test]
    fn test_line_into_negative_space_keeps_visible_part() {
        let mut editor = Editor::with_size(10, 5);
        editor.set_active_tool(ToolKind::Line);
        drag(&mut editor, Pos::new(3, 2), Pos::new(-4, 2));

        for x in 0..4 {
            assert_eq!(editor.canvas().get_char(x, 2, Layer::Draw), Some('─'));
        }
        assert_eq!(editor.canvas().grid(Layer::Draw).occupied_cells(), 4);
    }

    #[test]
    fn test_fill_seed_outside_canvas_is_ignored() {
        let mut editor = Editor::with_size(8, 4);
        editor.set_active_tool(ToolKind::Fill);
        editor.click(Pos::new(20, 20), ClickButton::Primary);

        assert_eq!(editor.canvas().grid(Layer::Draw).occupied_cells(), 0);
    }

    #[test]
    fn test_text_straddling_the_right_edge_clips() {
        let mut editor = Editor::with_size(6, 3);
        editor.set_active_tool(ToolKind::Text);
        editor.text_mut().set_text("overflow");
        editor.click(Pos::new(3, 1), ClickButton::Primary);
        editor.commit().unwrap();

        assert_eq!(editor.canvas().get_char(5, 1, Layer::Draw), Some('e'));
        assert_eq!(editor.canvas().get_char(6, 1, Layer::Draw), None);
        assert_eq!(editor.canvas().content(), "\n   ove\n");
    }

    #[test]
    fn test_move_drop_clips_at_the_edge() {
        let mut editor = Editor::with_size(8, 4);
        editor.set_active_tool(ToolKind::Text);
        editor.text_mut().set_text("ab");
        editor.click(Pos::new(5, 2), ClickButton::Primary);
        editor.commit().unwrap();

        editor.set_active_tool(ToolKind::Select);
        drag(&mut editor, Pos::new(5, 2), Pos::new(6, 2));
        // Move two cells right; 'b' falls off the canvas
        drag(&mut editor, Pos::new(6, 2), Pos::new(8, 2));

        assert_eq!(editor.canvas().get_char(7, 2, Layer::Draw), Some('a'));
        assert_eq!(editor.canvas().get_char(5, 2, Layer::Draw), Some(' '));
        assert_eq!(editor.canvas().grid(Layer::Draw).occupied_cells(), 1);

        // The clipped glyph comes back on undo
        assert_eq!(editor.undo().as_deref(), Some("Move"));
        assert_eq!(editor.canvas().get_char(5, 2, Layer::Draw), Some('a'));
        assert_eq!(editor.canvas().get_char(6, 2, Layer::Draw), Some('b'));
    }
}

// =============================================================================
// Degenerate Shapes
// =============================================================================

mod degenerate_shapes {
    use scrawl::prelude::*;

    fn drag(editor: &mut Editor, from: Pos, to: Pos) {
        editor.drag_begin(from);
        editor.drag_update(to);
        editor.drag_end(to);
    }

    #[test]
    fn test_single_cell_outline_rectangle_is_empty() {
        let mut editor = Editor::with_size(10, 5);
        editor.set_active_tool(ToolKind::Rectangle);
        drag(&mut editor, Pos::new(3, 3), Pos::new(3, 3));

        assert_eq!(editor.canvas().grid(Layer::Draw).occupied_cells(), 0);
    }

    #[test]
    fn test_single_cell_filled_rectangle_stamps_once() {
        let mut editor = Editor::with_size(10, 5);
        editor.set_active_tool(ToolKind::Rectangle);
        editor.rectangle_mut().set_mode(RectMode::Filled);
        drag(&mut editor, Pos::new(3, 3), Pos::new(3, 3));

        assert_eq!(editor.canvas().get_char(3, 3, Layer::Draw), Some('#'));
        assert_eq!(editor.canvas().grid(Layer::Draw).occupied_cells(), 1);
    }

    #[test]
    fn test_one_column_rectangle_draws_nothing() {
        let mut editor = Editor::with_size(10, 5);
        editor.set_active_tool(ToolKind::Rectangle);
        drag(&mut editor, Pos::new(3, 0), Pos::new(3, 4));

        assert_eq!(editor.canvas().grid(Layer::Draw).occupied_cells(), 0);
    }

    #[test]
    fn test_zero_length_cartesian_line_is_one_glyph() {
        let mut editor = Editor::with_size(10, 5);
        editor.set_active_tool(ToolKind::Line);
        editor.drag_begin(Pos::new(4, 2));
        editor.drag_end(Pos::new(4, 2));

        assert_eq!(editor.canvas().get_char(4, 2, Layer::Draw), Some('│'));
        assert_eq!(editor.canvas().grid(Layer::Draw).occupied_cells(), 1);
    }

    #[test]
    fn test_zero_length_step_line_draws_nothing() {
        let mut editor = Editor::with_size(10, 5);
        editor.set_active_tool(ToolKind::Line);
        editor.line_mut().set_kind(LineKind::Step);
        editor.drag_begin(Pos::new(4, 2));
        editor.drag_end(Pos::new(4, 2));

        assert_eq!(editor.canvas().grid(Layer::Draw).occupied_cells(), 0);
    }

    #[test]
    fn test_header_table_with_one_row_omits_divider() {
        let mut editor = Editor::with_size(10, 5);
        editor.set_active_tool(ToolKind::Table);
        editor.table_mut().set_model(TableModel::new(
            vec![vec!["only".to_string()]],
            1,
            DividerMode::HeaderDivided,
        ));
        editor.click(Pos::new(0, 0), ClickButton::Primary);
        editor.commit().unwrap();

        assert_eq!(editor.canvas().content(), "┌────┐\n│only│\n└────┘\n");
    }

    #[test]
    fn test_tree_single_line_has_no_connectors() {
        let mut editor = Editor::with_size(10, 5);
        editor.set_active_tool(ToolKind::Tree);
        editor.tree_mut().set_text("solo");
        editor.click(Pos::new(0, 0), ClickButton::Primary);
        editor.commit().unwrap();

        assert_eq!(editor.canvas().content(), "solo\n");
    }
}

// =============================================================================
// Unicode Content
// =============================================================================

mod unicode_content {
    use scrawl::prelude::*;

    fn drag(editor: &mut Editor, from: Pos, to: Pos) {
        editor.drag_begin(from);
        editor.drag_update(to);
        editor.drag_end(to);
    }

    #[test]
    fn test_cjk_text_occupies_one_cell_per_glyph() {
        let mut editor = Editor::with_size(10, 4);
        editor.set_active_tool(ToolKind::Text);
        editor.text_mut().set_text("日本");
        editor.click(Pos::new(2, 1), ClickButton::Primary);
        editor.commit().unwrap();

        assert_eq!(editor.canvas().get_char(2, 1, Layer::Draw), Some('日'));
        assert_eq!(editor.canvas().get_char(3, 1, Layer::Draw), Some('本'));
        assert_eq!(editor.canvas().get_char(4, 1, Layer::Draw), Some(' '));
    }

    #[test]
    fn test_wide_glyph_slot_still_draws() {
        let mut editor = Editor::with_size(10, 4);
        editor.canvas_mut().set_primary_char('語');
        editor.set_active_tool(ToolKind::Freehand);
        editor.drag_begin(Pos::new(1, 1));
        editor.drag_end(Pos::new(1, 1));

        assert_eq!(editor.canvas().get_char(1, 1, Layer::Draw), Some('語'));
    }

    #[test]
    fn test_double_style_box_round_trips() {
        let mut editor = Editor::with_size(12, 5);
        editor.set_style_by_name("double").unwrap();
        editor.set_active_tool(ToolKind::Rectangle);
        drag(&mut editor, Pos::new(0, 0), Pos::new(6, 3));

        let saved = editor.canvas().content();
        assert!(saved.contains('╔'));
        assert_eq!(scrawl::open(&saved).canvas().content(), saved);
    }

    #[test]
    fn test_mixed_width_document_counts_cells_not_columns() {
        let editor = scrawl::open("日本\nabcd");
        assert_eq!(editor.canvas().width(), 4);
        assert_eq!(editor.canvas().content(), "日本\nabcd\n");
    }
}

// =============================================================================
// History Boundaries
// =============================================================================

mod history_boundaries {
    use scrawl::prelude::*;

    fn drag(editor: &mut Editor, from: Pos, to: Pos) {
        editor.drag_begin(from);
        editor.drag_update(to);
        editor.drag_end(to);
    }

    #[test]
    fn test_undo_and_redo_on_fresh_editor_are_none() {
        let mut editor = Editor::new();
        assert_eq!(editor.undo(), None);
        assert_eq!(editor.redo(), None);
    }

    #[test]
    fn test_new_gesture_discards_redo() {
        let mut editor = Editor::with_size(12, 6);
        editor.set_active_tool(ToolKind::Rectangle);
        drag(&mut editor, Pos::new(0, 0), Pos::new(5, 3));
        editor.undo();

        drag(&mut editor, Pos::new(1, 1), Pos::new(6, 4));
        assert_eq!(editor.redo(), None);
        assert_eq!(editor.canvas().get_char(1, 1, Layer::Draw), Some('┌'));
    }

    #[test]
    fn test_abandoned_drag_leaves_no_change() {
        let mut editor = Editor::with_size(12, 6);
        editor.set_active_tool(ToolKind::Rectangle);
        editor.drag_begin(Pos::new(0, 0));
        editor.drag_update(Pos::new(5, 3));

        assert_eq!(editor.undo(), None);
        assert_eq!(editor.canvas().content(), "");
    }

    #[test]
    fn test_undo_walks_back_through_clear() {
        let mut editor = Editor::with_size(12, 6);
        editor.set_active_tool(ToolKind::Rectangle);
        drag(&mut editor, Pos::new(0, 0), Pos::new(5, 3));
        editor.canvas_mut().clear(Layer::Draw);

        assert_eq!(editor.canvas().history().undo_label(), Some("Clear Screen"));
        assert_eq!(editor.undo().as_deref(), Some("Clear Screen"));
        assert_eq!(editor.canvas().history().undo_label(), Some("Rectangle"));
        assert_eq!(editor.undo().as_deref(), Some("Rectangle"));
        assert_eq!(editor.canvas().content(), "");
    }
}

// =============================================================================
// Document Loading
// =============================================================================

mod document_loading {
    use scrawl::prelude::*;

    #[test]
    fn test_empty_string_gives_minimal_canvas() {
        let editor = scrawl::open("");
        assert_eq!(editor.canvas().width(), 1);
        assert_eq!(editor.canvas().height(), 1);
        assert_eq!(editor.canvas().content(), "");
    }

    #[test]
    fn test_whitespace_only_document_saves_as_empty() {
        let editor = scrawl::open("   \n  ");
        assert_eq!(editor.canvas().width(), 3);
        assert_eq!(editor.canvas().height(), 2);
        assert_eq!(editor.canvas().content(), "");
    }

    #[test]
    fn test_load_replaces_document_and_history() {
        let mut editor = Editor::with_size(12, 6);
        editor.set_active_tool(ToolKind::Rectangle);
        editor.drag_begin(Pos::new(0, 0));
        editor.drag_end(Pos::new(5, 3));

        editor.canvas_mut().load("new");
        assert_eq!(editor.canvas().content(), "new\n");
        assert_eq!(editor.undo(), None);
    }

    #[test]
    fn test_oversized_content_clips_to_canvas_limits() {
        let mut text = "x".repeat(120);
        for _ in 0..59 {
            text.push('\n');
            text.push('y');
        }
        let editor = scrawl::open(&text);

        assert_eq!(editor.canvas().width(), 100);
        assert_eq!(editor.canvas().height(), 50);
        assert_eq!(editor.canvas().get_char(99, 0, Layer::Draw), Some('x'));
        assert_eq!(editor.canvas().get_char(0, 49, Layer::Draw), Some('y'));
        assert_eq!(editor.canvas().content().lines().count(), 50);
    }
}
