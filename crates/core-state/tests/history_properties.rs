//! Property checks for the edit/history core: undo restores the exact
//! pre-edit document, redo restores the post-edit one, history depth stays
//! bounded, and any fresh edit invalidates redo.

use core_state::{EditError, EditorState, UNDO_HISTORY_MAX};
use core_text::{Line, Style};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    InsertLine(usize, String, u8),
    DeleteLine(usize),
    InsertChar(char),
    DeleteChar,
    Replace(String, String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..8, "[a-c]{0,6}", 0u8..8).prop_map(|(p, t, s)| Op::InsertLine(p, t, s)),
        (1usize..8).prop_map(Op::DeleteLine),
        proptest::char::range('a', 'e').prop_map(Op::InsertChar),
        Just(Op::DeleteChar),
        ("[a-c]{1,2}", "[x-z]{0,2}").prop_map(|(s, r)| Op::Replace(s, r)),
    ]
}

fn apply(st: &mut EditorState, op: &Op) -> bool {
    match op {
        Op::InsertLine(p, t, s) => st
            .insert_line(*p, Line::new(t.clone(), Style::from_bits_truncate(*s)))
            .is_ok(),
        Op::DeleteLine(p) => st.delete_line(*p).is_ok(),
        Op::InsertChar(c) => st.insert_char(*c).is_ok(),
        Op::DeleteChar => st.delete_char().is_ok(),
        Op::Replace(s, r) => st.replace(s, r).is_ok(),
    }
}

fn seeded(rows: &[String]) -> EditorState {
    let mut st = EditorState::default();
    st.load(rows.iter().cloned());
    st
}

proptest! {
    #[test]
    fn undo_restores_and_redo_reapplies(
        rows in proptest::collection::vec("[a-c]{0,5}", 0..5),
        ops in proptest::collection::vec(op_strategy(), 1..20),
    ) {
        let mut st = seeded(&rows);
        for op in &ops {
            let before = st.buffer().clone();
            let depth_before = st.undo_depth();
            if apply(&mut st, op) {
                let after = st.buffer().clone();
                prop_assert_eq!(st.redo_depth(), 0);
                prop_assert_eq!(st.redo(), Err(EditError::NothingToRedo));
                st.undo().unwrap();
                prop_assert_eq!(st.buffer(), &before);
                st.redo().unwrap();
                prop_assert_eq!(st.buffer(), &after);
            } else {
                prop_assert_eq!(st.buffer(), &before);
                prop_assert_eq!(st.undo_depth(), depth_before);
            }
            prop_assert!(st.undo_depth() <= UNDO_HISTORY_MAX);
            let cur = st.cursor();
            if !st.buffer().is_empty() {
                prop_assert!(cur.line < st.buffer().line_count());
                prop_assert!(cur.col <= st.buffer().line_char_len(cur.line));
            }
        }
    }

    #[test]
    fn insert_then_delete_restores_document(
        rows in proptest::collection::vec("[a-c]{0,5}", 0..6),
        text in "[a-z]{0,8}",
        pick in 0usize..100,
    ) {
        let mut st = seeded(&rows);
        let position = pick % (rows.len() + 1) + 1;
        let before = st.buffer().clone();
        st.insert_line(position, Line::new(text, Style::BOLD)).unwrap();
        st.delete_line(position).unwrap();
        prop_assert_eq!(st.buffer(), &before);
    }

    #[test]
    fn history_never_exceeds_bound(edits in 0usize..40) {
        let mut st = seeded(&[]);
        for i in 0..edits {
            st.insert_line(1, Line::plain(i.to_string())).unwrap();
        }
        prop_assert_eq!(st.undo_depth(), edits.min(UNDO_HISTORY_MAX));
        if edits > UNDO_HISTORY_MAX {
            // Oldest retained snapshot was taken just before edit `edits - UNDO_HISTORY_MAX`.
            let oldest = st.oldest_snapshot().unwrap();
            prop_assert_eq!(oldest.buffer.line_count(), edits - UNDO_HISTORY_MAX);
        }
    }
}
