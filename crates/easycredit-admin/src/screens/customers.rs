//! Customer accounts

use crate::screen::Screen;
use chrono::{DateTime, Utc};
use easycredit_client::{EnvelopeShape, Mutation};
use easycredit_tables::{ColumnDescriptor, FilterConfig, SortOrder, SortState, record_fields};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
	pub _id: String,
	pub name: String,
	pub email: String,
	#[serde(default)]
	pub phone: Option<String>,
	pub status: String,
	#[serde(default, rename = "kycStatus")]
	pub kyc_status: Option<String>,
	#[serde(default, rename = "createdAt")]
	pub created_at: Option<DateTime<Utc>>,
}

record_fields!(Customer {
	"_id" => _id,
	"name" => name,
	"email" => email,
	"phone" => phone,
	"status" => status,
	"kycStatus" => kyc_status,
	"createdAt" => created_at,
});

pub struct Customers;

impl Screen for Customers {
	type Record = Customer;

	const NAME: &'static str = "Customers";
	const ENDPOINT: &'static str = "/admin/customers";
	const ENVELOPE: EnvelopeShape = EnvelopeShape::Data;

	fn columns() -> Vec<ColumnDescriptor> {
		vec![
			ColumnDescriptor::new("name", "Name"),
			ColumnDescriptor::new("email", "Email"),
			ColumnDescriptor::new("phone", "Phone"),
			ColumnDescriptor::new("status", "Status"),
			ColumnDescriptor::new("kycStatus", "KYC"),
			ColumnDescriptor::new("createdAt", "Joined"),
		]
	}

	fn filter_config() -> FilterConfig {
		FilterConfig::searching(["name", "email", "phone"]).category_field("status")
	}

	fn default_sort() -> SortState {
		SortState::new("createdAt", SortOrder::Desc)
	}
}

impl Customers {
	pub fn block(id: &str) -> Mutation {
		Mutation::patch(format!("/admin/customers/{id}/block"))
	}

	pub fn unblock(id: &str) -> Mutation {
		Mutation::patch(format!("/admin/customers/{id}/unblock"))
	}
}
