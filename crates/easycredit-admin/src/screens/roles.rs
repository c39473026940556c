//! Staff roles

use crate::screen::Screen;
use easycredit_client::{EnvelopeShape, Mutation};
use easycredit_tables::{
	Align, ColumnDescriptor, FilterConfig, Record, SortOrder, SortState, Value,
};
use serde::Deserialize;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Role {
	pub _id: String,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	/// `system` or `custom`
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub permissions: Vec<String>,
}

// Permissions are shown as a count
impl Record for Role {
	fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
		let value = match name {
			"_id" => Value::from(&self._id),
			"name" => Value::from(&self.name),
			"description" => Value::from(self.description.clone()),
			"type" => Value::from(&self.kind),
			"permissions" => Value::from(self.permissions.len() as u64),
			_ => return None,
		};
		Some(Cow::Owned(value))
	}
}

pub struct Roles;

impl Screen for Roles {
	type Record = Role;

	const NAME: &'static str = "Roles";
	const ENDPOINT: &'static str = "/admin/roles";
	const ENVELOPE: EnvelopeShape = EnvelopeShape::Bare;

	fn columns() -> Vec<ColumnDescriptor> {
		vec![
			ColumnDescriptor::new("name", "Role"),
			ColumnDescriptor::new("description", "Description"),
			ColumnDescriptor::new("type", "Type"),
			ColumnDescriptor::new("permissions", "Permissions").align(Align::Right),
		]
	}

	fn filter_config() -> FilterConfig {
		FilterConfig::searching(["name", "description"]).category_field("type")
	}

	fn default_sort() -> SortState {
		SortState::new("name", SortOrder::Asc)
	}
}

impl Roles {
	pub fn delete(id: &str) -> Mutation {
		Mutation::delete(format!("/admin/roles/{id}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_permission_count() {
		let role: Role = serde_json::from_value(serde_json::json!({
			"_id": "r1",
			"name": "Auditor",
			"type": "custom",
			"permissions": ["loans.read", "bills.read"]
		}))
		.unwrap();

		assert_eq!(role.field("permissions").unwrap().as_f64(), Some(2.0));
		assert_eq!(role.field("description").unwrap().into_owned(), Value::Null);
		assert_eq!(role.field("type").unwrap().into_owned(), Value::from("custom"));
		assert!(role.field("kind").is_none());
	}
}
