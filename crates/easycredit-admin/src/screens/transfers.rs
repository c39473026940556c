//! Money transfers (disbursements and repayments)

use crate::screen::Screen;
use chrono::{DateTime, Utc};
use easycredit_client::{EnvelopeShape, Mutation};
use easycredit_tables::{Align, ColumnDescriptor, FilterConfig, SortOrder, SortState, record_fields};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transfer {
	pub _id: String,
	pub reference: String,
	#[serde(rename = "senderName")]
	pub sender_name: String,
	#[serde(rename = "recipientName")]
	pub recipient_name: String,
	pub amount: f64,
	pub currency: String,
	/// `credit` or `debit`
	#[serde(rename = "type")]
	pub kind: String,
	pub status: String,
	#[serde(default, rename = "createdAt")]
	pub created_at: Option<DateTime<Utc>>,
}

record_fields!(Transfer {
	"_id" => _id,
	"reference" => reference,
	"senderName" => sender_name,
	"recipientName" => recipient_name,
	"amount" => amount,
	"currency" => currency,
	"type" => kind,
	"status" => status,
	"createdAt" => created_at,
});

pub struct Transfers;

impl Screen for Transfers {
	type Record = Transfer;

	const NAME: &'static str = "Transfers";
	const ENDPOINT: &'static str = "/admin/transactions";
	const ENVELOPE: EnvelopeShape = EnvelopeShape::NestedData;

	fn columns() -> Vec<ColumnDescriptor> {
		vec![
			ColumnDescriptor::new("reference", "Reference"),
			ColumnDescriptor::new("senderName", "From"),
			ColumnDescriptor::new("recipientName", "To"),
			ColumnDescriptor::new("amount", "Amount").align(Align::Right),
			ColumnDescriptor::new("currency", "Currency"),
			ColumnDescriptor::new("type", "Type"),
			ColumnDescriptor::new("status", "Status"),
			ColumnDescriptor::new("createdAt", "Date"),
		]
	}

	fn filter_config() -> FilterConfig {
		FilterConfig::searching(["reference", "senderName", "recipientName"]).category_field("type")
	}

	fn default_sort() -> SortState {
		SortState::new("createdAt", SortOrder::Desc)
	}
}

impl Transfers {
	pub fn reverse(id: &str) -> Mutation {
		Mutation::post(format!("/admin/transactions/{id}/reverse"))
	}
}
