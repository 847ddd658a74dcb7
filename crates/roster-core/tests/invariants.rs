//! Property tests: random message sequences never break the cross-module
//! consistency rules.

mod common;

use proptest::prelude::*;

use roster_core::{
    Controller, DeleteMessage, EditMessage, LoadError, LoadMessage, Message, PaginationMessage,
    Record, RecordField, RecordId, SearchMessage, SelectAllState, SelectionMessage, page_count,
};

/// Ids 1..=20, so some messages target records that do not exist.
fn arb_id() -> impl Strategy<Value = RecordId> {
    (1u64..=20).prop_map(RecordId::from)
}

fn arb_field() -> impl Strategy<Value = RecordField> {
    prop::sample::select(RecordField::ALL.to_vec())
}

fn arb_query() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "", "admin", "member", "kumar", "(", "[a-c]", "mailinator", "^j", "zzz",
    ])
    .prop_map(String::from)
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(any::<bool>(), 15).prop_map(|keep| {
        common::users()
            .into_iter()
            .zip(keep)
            .filter_map(|(record, keep)| keep.then_some(record))
            .collect()
    })
}

fn arb_message() -> impl Strategy<Value = Message> {
    prop_oneof![
        arb_records().prop_map(|records| Message::loaded(Ok(records))),
        Just(Message::loaded(Err(LoadError::network("connection refused")))),
        Just(Message::Load(LoadMessage::Requested)),
        arb_query().prop_map(Message::search),
        Just(Message::Search(SearchMessage::Cleared)),
        (0usize..6).prop_map(|page| Message::Pagination(PaginationMessage::GoToPage(page))),
        Just(Message::Pagination(PaginationMessage::NextPage)),
        Just(Message::Pagination(PaginationMessage::PreviousPage)),
        Just(Message::Pagination(PaginationMessage::LastPage)),
        prop::sample::select(vec![0usize, 1, 5, 10, 20, 25])
            .prop_map(|limit| Message::Pagination(PaginationMessage::RowLimitChanged(limit))),
        arb_id().prop_map(Message::toggle),
        any::<bool>()
            .prop_map(|checked| Message::Selection(SelectionMessage::SelectAllClicked { checked })),
        arb_id().prop_map(Message::toggle_edit),
        (arb_id(), arb_field(), "[a-z@. ]{0,12}")
            .prop_map(|(id, field, value)| Message::draft(id, field, value)),
        arb_id().prop_map(|id| Message::Edit(EditMessage::Discarded(id))),
        arb_id().prop_map(Message::delete),
        Just(Message::Delete(DeleteMessage::Selected)),
    ]
}

fn assert_consistent(controller: &Controller) {
    let state = controller.state();
    let store = state.store();

    for id in state.selection().iter() {
        assert!(store.contains(id), "selected id {id} not in store");
    }
    for id in state.edits().editing_ids() {
        assert!(store.contains(id), "edited id {id} not in store");
    }

    let pages = page_count(state.active_len(), state.pagination().row_limit());
    let page = state.pagination().current_page();
    assert!((1..=pages).contains(&page), "page {page} outside 1..={pages}");

    let visible = state.visible_ids();
    assert!(visible.len() <= state.pagination().row_limit().get());
    if state.active_len() > 0 {
        assert!(!visible.is_empty());
    }
    if visible.is_empty() {
        assert_eq!(state.select_all_state(), SelectAllState::Unchecked);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_state_stays_consistent(messages in prop::collection::vec(arb_message(), 1..60)) {
        let mut controller = common::loaded_controller();
        for message in messages {
            controller.update(message);
            assert_consistent(&controller);
        }
    }

    #[test]
    fn prop_commit_never_resurrects(ids in prop::collection::vec(arb_id(), 1..10)) {
        let mut controller = common::loaded_controller();
        for id in &ids {
            controller.update(Message::toggle_edit(id.clone()));
            controller.update(Message::delete(id.clone()));
            controller.update(Message::toggle_edit(id.clone()));
            prop_assert!(!controller.state().store().contains(id));
            prop_assert!(!controller.state().edits().is_editing(id));
        }
    }

    #[test]
    fn prop_bulk_delete_removes_exactly_selected(
        picks in prop::collection::btree_set(1u64..=15, 0..15),
    ) {
        let mut controller = common::loaded_controller();
        for pick in &picks {
            controller.update(Message::toggle(*pick));
        }
        controller.update(Message::Delete(DeleteMessage::Selected));

        let state = controller.state();
        prop_assert_eq!(state.store().len(), 15 - picks.len());
        prop_assert!(state.selection().is_empty());
        for pick in &picks {
            prop_assert!(!state.store().contains(&RecordId::from(*pick)));
        }
    }
}
