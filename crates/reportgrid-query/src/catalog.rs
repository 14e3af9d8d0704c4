//! Metric and dimension field catalog

use crate::error::{QueryError, QueryResult};
use reportgrid_core::{Column, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selectable report field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
	/// Column key inside the grid
	pub key: String,
	/// Header label
	pub label: String,
	/// Name used by the data source; defaults to `key`
	#[serde(default, alias = "dbColumn", skip_serializing_if = "Option::is_none")]
	pub source_field: Option<String>,
	/// How values are displayed
	#[serde(default, alias = "type")]
	pub value_kind: ValueKind,
	/// Whether the data source can sort by this field
	#[serde(default)]
	pub sortable: bool,
}

impl FieldDefinition {
	/// Name under which this field is selected and sent to the data source
	pub fn selector(&self) -> &str {
		self.source_field.as_deref().unwrap_or(&self.key)
	}

	/// Grid column for this field
	pub fn to_column(&self) -> Column {
		Column::new(&self.key, &self.label)
			.value_kind(self.value_kind)
			.source_field(self.selector())
			.sortable(self.sortable)
	}
}

/// Every metric and dimension a report can include
///
/// Catalogs are loaded from JSON or TOML documents with `metrics` and
/// `dimensions` arrays. The legacy `dbColumn` and `type` spellings are
/// accepted for `sourceField` and `valueKind`.
///
/// ```
/// use reportgrid_query::ReportCatalog;
///
/// let catalog = ReportCatalog::from_toml_str(r#"
///     [[metrics]]
///     key = "clicks"
///     label = "Clicks"
///     valueKind = "number"
///     sortable = true
///
///     [[dimensions]]
///     key = "campaign"
///     label = "Campaign"
///     dbColumn = "campaign_id"
/// "#).unwrap();
///
/// assert_eq!(catalog.sortable_fields(), vec!["clicks"]);
/// assert_eq!(catalog.dimensions[0].selector(), "campaign_id");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportCatalog {
	/// Aggregated fields
	pub metrics: Vec<FieldDefinition>,
	/// Grouping fields
	pub dimensions: Vec<FieldDefinition>,
}

impl ReportCatalog {
	/// Parses a JSON catalog
	pub fn from_json_str(s: &str) -> QueryResult<Self> {
		let catalog: Self = serde_json::from_str(s)?;
		catalog.validate()?;
		Ok(catalog)
	}

	/// Parses a TOML catalog
	pub fn from_toml_str(s: &str) -> QueryResult<Self> {
		let catalog: Self = toml::from_str(s)?;
		catalog.validate()?;
		Ok(catalog)
	}

	/// Rejects catalogs where two fields share a key or a selector
	pub fn validate(&self) -> QueryResult<()> {
		let mut keys = HashSet::new();
		let mut selectors = HashSet::new();
		for field in self.fields() {
			if !keys.insert(field.key.as_str()) {
				return Err(QueryError::Catalog(format!(
					"duplicate field key '{}'",
					field.key
				)));
			}
			if !selectors.insert(field.selector()) {
				return Err(QueryError::Catalog(format!(
					"duplicate source field '{}'",
					field.selector()
				)));
			}
		}
		Ok(())
	}

	/// Metrics then dimensions, in catalog order
	pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
		self.metrics.iter().chain(self.dimensions.iter())
	}

	/// Looks up a field by key or selector
	pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
		self.fields()
			.find(|field| field.key == name || field.selector() == name)
	}

	/// Selectors of every sortable field
	pub fn sortable_fields(&self) -> Vec<&str> {
		self.fields()
			.filter(|field| field.sortable)
			.map(FieldDefinition::selector)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const CATALOG: &str = r#"{
		"metrics": [
			{"key": "clicks", "label": "Clicks", "type": "number", "sortable": true},
			{"key": "spend", "label": "Spend", "dbColumn": "total_spend"}
		],
		"dimensions": [
			{"key": "created", "label": "Created", "dbColumn": "sys_creation_date", "type": "date", "sortable": true}
		]
	}"#;

	#[test]
	fn test_json_catalog_accepts_legacy_names() {
		let catalog = ReportCatalog::from_json_str(CATALOG).unwrap();
		let created = catalog.field("sys_creation_date").unwrap();
		assert_eq!(created.key, "created");
		assert_eq!(created.value_kind, ValueKind::Date);
		assert_eq!(catalog.sortable_fields(), vec!["clicks", "sys_creation_date"]);
	}

	#[test]
	fn test_to_column() {
		let catalog = ReportCatalog::from_json_str(CATALOG).unwrap();
		let column = catalog.field("spend").unwrap().to_column();
		assert_eq!(column.key(), "spend");
		assert_eq!(column.source_field_name(), "total_spend");
		assert!(!column.is_sortable());
	}

	#[test]
	fn test_duplicate_keys_rejected() {
		let json = r#"{"metrics": [{"key": "a", "label": "A"}], "dimensions": [{"key": "a", "label": "A"}]}"#;
		assert!(matches!(
			ReportCatalog::from_json_str(json),
			Err(QueryError::Catalog(_))
		));
	}
}
