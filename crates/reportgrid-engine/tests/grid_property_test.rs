//! Property-based tests for grid command sequences

use proptest::prelude::*;
use reportgrid_core::{Column, Row, RowKey};
use reportgrid_engine::{DataResponse, Grid, GridCommand, GridConfig};

fn local_grid(rows: usize, page_size: usize) -> Grid {
	let config = GridConfig::local(vec![
		Column::new("key", "Key").sortable(true),
		Column::new("label", "Label").sortable(true),
	])
	.searchable(["label"])
	.selectable(true)
	.page_size(page_size);
	let mut grid = Grid::new(config).unwrap();
	let data = (0..rows)
		.map(|i| {
			Row::new()
				.with("key", i as i64)
				.with("label", format!("row {}", i % 7))
		})
		.collect();
	grid.set_data(data).unwrap();
	grid
}

fn command() -> impl Strategy<Value = GridCommand> {
	prop_oneof![
		"[0-9 a-z]{0,3}".prop_map(GridCommand::SetSearchText),
		Just(GridCommand::ClearSearch),
		prop_oneof![Just("key"), Just("label"), Just("missing")]
			.prop_map(|k| GridCommand::ToggleSort(k.to_string())),
		(-3i64..20).prop_map(GridCommand::GoToPage),
		(1usize..12).prop_map(GridCommand::SetPageSize),
		Just(GridCommand::ToggleSelectAllVisible),
		(0i64..60, 0usize..12, any::<bool>()).prop_map(|(key, visible_index, shift)| {
			GridCommand::ToggleRowSelection {
				key: RowKey::from(key),
				visible_index,
				shift,
			}
		}),
	]
}

// ============================================================================
// Property-Based Tests: Local grid
// ============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	/// Whatever the command sequence, the page stays in range and the visible
	/// slice matches the page arithmetic.
	#[test]
	fn prop_page_invariants_hold(
		rows in 0usize..60,
		page_size in 1usize..12,
		commands in prop::collection::vec(command(), 0..25),
	) {
		let mut grid = local_grid(rows, page_size);
		for command in commands {
			let request = grid.apply(command).unwrap();
			prop_assert!(request.is_none());

			let view = grid.view();
			let total = view.total_rows;
			let size = view.page_size;
			prop_assert_eq!(view.total_pages, total.div_ceil(size));
			prop_assert!(view.current_page >= 1);
			prop_assert!(view.current_page <= view.total_pages.max(1));
			prop_assert_eq!(
				view.rows.len(),
				size.min(total.saturating_sub((view.current_page - 1) * size))
			);
		}
	}

	/// Search, sort and page-size commands always land on page 1.
	#[test]
	fn prop_resetting_commands_return_to_first_page(
		rows in 1usize..60,
		page in 1i64..20,
		reset in prop_oneof![
			"[a-z]{0,2}".prop_map(GridCommand::SetSearchText),
			Just(GridCommand::ToggleSort("label".to_string())),
			(1usize..12).prop_map(GridCommand::SetPageSize),
		],
	) {
		let mut grid = local_grid(rows, 3);
		grid.apply(GridCommand::GoToPage(page)).unwrap();
		grid.apply(reset).unwrap();
		prop_assert_eq!(grid.state().current_page(), 1);
	}

	/// Select-all twice restores the selection of every row, on and off the page.
	#[test]
	fn prop_select_all_twice_is_identity(
		rows in 1usize..40,
		picks in prop::collection::vec(0i64..40, 0..10),
		page in 1i64..10,
	) {
		let mut grid = local_grid(rows, 5);
		for key in picks {
			grid.apply(GridCommand::ToggleRowSelection {
				key: RowKey::from(key),
				visible_index: 0,
				shift: false,
			}).unwrap();
		}
		grid.apply(GridCommand::GoToPage(page)).unwrap();

		let mut before: Vec<RowKey> = grid.state().selection().iter().cloned().collect();
		let visible = grid.visible_keys();
		let all_visible_selected = visible
			.iter()
			.all(|k| grid.state().selection().is_selected(k));

		grid.apply(GridCommand::ToggleSelectAllVisible).unwrap();
		for key in &visible {
			prop_assert_eq!(grid.state().selection().is_selected(key), !all_visible_selected);
		}

		if !all_visible_selected {
			grid.apply(GridCommand::ToggleSelectAllVisible).unwrap();
			before.retain(|k| !visible.contains(k));
			let mut after: Vec<RowKey> = grid.state().selection().iter().cloned().collect();
			before.sort();
			after.sort();
			prop_assert_eq!(before, after);
		}
	}
}

// ============================================================================
// Property-Based Tests: Controlled grid
// ============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	/// Only the response to the latest request is applied, in any arrival order.
	#[test]
	fn prop_only_latest_response_applies(
		issued in 1usize..8,
		rotation in 0usize..8,
	) {
		let mut grid = Grid::new(GridConfig::controlled(vec![Column::new("n", "N")])).unwrap();
		let requests: Vec<_> = (0..issued).map(|_| grid.request_data()).collect();

		let mut arrival: Vec<usize> = (0..issued).collect();
		arrival.rotate_left(rotation % issued);

		let mut applied = Vec::new();
		for index in arrival {
			let response = DataResponse {
				rows: vec![Row::new().with("n", index as i64)],
				total_rows: 1,
				total_pages: 1,
			};
			if grid.receive(requests[index].seq, response).unwrap() {
				applied.push(index);
			}
		}

		prop_assert_eq!(applied, vec![issued - 1]);
		prop_assert_eq!(grid.view().rows[0].cells.clone(), vec![(issued - 1).to_string()]);
		prop_assert!(!grid.state().is_loading());
		prop_assert!(!grid.state().is_refreshing());
	}
}
