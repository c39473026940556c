//! Back office staff accounts

use crate::screen::Screen;
use chrono::{DateTime, Utc};
use easycredit_client::{EnvelopeShape, Mutation};
use easycredit_tables::{ColumnDescriptor, FilterConfig, SortOrder, SortState, record_fields};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StaffMember {
	pub _id: String,
	pub name: String,
	pub email: String,
	pub role: String,
	pub active: bool,
	#[serde(default, rename = "lastLogin")]
	pub last_login: Option<DateTime<Utc>>,
}

record_fields!(StaffMember {
	"_id" => _id,
	"name" => name,
	"email" => email,
	"role" => role,
	"active" => active,
	"lastLogin" => last_login,
});

pub struct Staff;

impl Screen for Staff {
	type Record = StaffMember;

	const NAME: &'static str = "Staff";
	const ENDPOINT: &'static str = "/admin/staff";
	const ENVELOPE: EnvelopeShape = EnvelopeShape::Data;

	fn columns() -> Vec<ColumnDescriptor> {
		vec![
			ColumnDescriptor::new("name", "Name"),
			ColumnDescriptor::new("email", "Email"),
			ColumnDescriptor::new("role", "Role"),
			ColumnDescriptor::new("active", "Active"),
			ColumnDescriptor::new("lastLogin", "Last login"),
		]
	}

	fn filter_config() -> FilterConfig {
		FilterConfig::searching(["name", "email"]).category_field("role")
	}

	fn default_sort() -> SortState {
		SortState::new("name", SortOrder::Asc)
	}
}

impl Staff {
	pub fn set_active(id: &str, active: bool) -> Mutation {
		Mutation::patch(format!("/admin/staff/{id}")).with_body(json!({ "active": active }))
	}
}
