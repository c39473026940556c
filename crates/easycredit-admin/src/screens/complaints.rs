//! Customer complaints

use crate::screen::Screen;
use chrono::{DateTime, Utc};
use easycredit_client::{EnvelopeShape, Mutation};
use easycredit_tables::{ColumnDescriptor, FilterConfig, SortOrder, SortState, record_fields};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Complaint {
	pub _id: String,
	#[serde(rename = "ticketNumber")]
	pub ticket_number: String,
	#[serde(rename = "customerName")]
	pub customer_name: String,
	pub subject: String,
	pub status: String,
	#[serde(default, rename = "createdAt")]
	pub created_at: Option<DateTime<Utc>>,
}

record_fields!(Complaint {
	"_id" => _id,
	"ticketNumber" => ticket_number,
	"customerName" => customer_name,
	"subject" => subject,
	"status" => status,
	"createdAt" => created_at,
});

pub struct Complaints;

impl Screen for Complaints {
	type Record = Complaint;

	const NAME: &'static str = "Complaints";
	const ENDPOINT: &'static str = "/admin/complaints";
	const ENVELOPE: EnvelopeShape = EnvelopeShape::Data;

	fn columns() -> Vec<ColumnDescriptor> {
		vec![
			ColumnDescriptor::new("ticketNumber", "Ticket"),
			ColumnDescriptor::new("customerName", "Customer"),
			ColumnDescriptor::new("subject", "Subject"),
			ColumnDescriptor::new("status", "Status"),
			ColumnDescriptor::new("createdAt", "Opened"),
		]
	}

	fn filter_config() -> FilterConfig {
		FilterConfig::searching(["ticketNumber", "customerName", "subject"]).category_field("status")
	}

	fn default_sort() -> SortState {
		SortState::new("createdAt", SortOrder::Desc)
	}
}

impl Complaints {
	pub fn resolve(id: &str, resolution: &str) -> Mutation {
		Mutation::patch(format!("/admin/complaints/{id}"))
			.with_body(json!({ "status": "resolved", "resolution": resolution }))
	}
}
