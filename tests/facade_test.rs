//! End-to-end tests through the facade crate

use reportgrid::prelude::*;
use rstest::*;
use serde_json::Value;
use std::sync::Arc;

#[fixture]
fn campaigns() -> Vec<Row> {
	(1..=12)
		.map(|id| {
			Row::new()
				.with("id", id)
				.with("campaign_id", format!("campaign-{id}"))
				.with("clicks", id * 10)
				.with("note", if id % 4 == 0 { Value::Null } else { "ok".into() })
		})
		.collect()
}

#[rstest]
fn test_local_dashboard_flow(campaigns: Vec<Row>) {
	let preferences = Preferences::new(Arc::new(MemoryStore::new()));
	let config = GridConfig::local(vec![
		Column::new("campaign_id", "Campaign").sortable(true),
		Column::new("clicks", "Clicks")
			.value_kind(ValueKind::Number)
			.sortable(true),
	])
	.row_key("id")
	.searchable(["campaign_id"])
	.selectable(true)
	.page_size(5);

	let mut grid = Grid::with_preferences(config, preferences.clone()).unwrap();
	grid.set_data(campaigns).unwrap();
	assert_eq!(grid.view().total_pages, 3);

	grid.apply(GridCommand::SetSearchText("campaign-1".into()))
		.unwrap();
	assert_eq!(grid.view().total_rows, 4);

	grid.apply(GridCommand::ToggleSort("clicks".into())).unwrap();
	grid.apply(GridCommand::ToggleSort("clicks".into())).unwrap();
	assert_eq!(grid.view().rows[0].cells, vec!["campaign-12", "120"]);

	grid.apply(GridCommand::SetPageSize(10)).unwrap();
	assert_eq!(preferences.page_size(), Some(10));

	let export = grid.export(ExportFormat::Json, Some("filtered")).unwrap();
	let parsed: Vec<Row> = serde_json::from_slice(&export.data).unwrap();
	assert_eq!(parsed.len(), 4);
	assert!(parsed[0].get("note").is_none());
}

#[rstest]
#[tokio::test]
async fn test_report_session_flow(campaigns: Vec<Row>) {
	let catalog = ReportCatalog::from_json_str(
		r#"{
			"metrics": [{"key": "clicks", "label": "Clicks", "type": "number", "sortable": true}],
			"dimensions": [{"key": "campaign", "label": "Campaign", "dbColumn": "campaign_id"}]
		}"#,
	)
	.unwrap();
	let builder = ReportBuilder::new(catalog).with_selection(vec![], vec!["campaign_id".into()]);
	let mut session = ReportSession::new(builder, InMemoryReportSource::new(campaigns)).unwrap();

	assert!(session.load().await.unwrap());
	assert_eq!(session.view().rows.len(), 5);

	assert!(session.set_metric("clicks", true).await.unwrap());
	let labels: Vec<_> = session
		.view()
		.columns
		.iter()
		.map(|c| c.label.clone())
		.collect();
	assert_eq!(labels, vec!["Clicks", "Campaign"]);

	session.set_dimension("campaign_id", false).await.unwrap();
	session.set_metric("clicks", false).await.unwrap();
	assert!(session.is_nothing_selected());
	assert!(session.view().rows.is_empty());
}
