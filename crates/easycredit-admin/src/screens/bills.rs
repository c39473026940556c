//! Repayment bills

use crate::screen::Screen;
use chrono::{DateTime, Utc};
use easycredit_client::{EnvelopeShape, Mutation};
use easycredit_tables::{Align, ColumnDescriptor, FilterConfig, SortOrder, SortState, record_fields};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bill {
	pub _id: String,
	#[serde(rename = "billNumber")]
	pub bill_number: String,
	#[serde(rename = "customerName")]
	pub customer_name: String,
	pub amount: f64,
	#[serde(default, rename = "dueDate")]
	pub due_date: Option<DateTime<Utc>>,
	pub status: String,
}

record_fields!(Bill {
	"_id" => _id,
	"billNumber" => bill_number,
	"customerName" => customer_name,
	"amount" => amount,
	"dueDate" => due_date,
	"status" => status,
});

pub struct Bills;

impl Screen for Bills {
	type Record = Bill;

	const NAME: &'static str = "Bills";
	const ENDPOINT: &'static str = "/admin/bills";
	const ENVELOPE: EnvelopeShape = EnvelopeShape::Data;

	fn columns() -> Vec<ColumnDescriptor> {
		vec![
			ColumnDescriptor::new("billNumber", "Bill #"),
			ColumnDescriptor::new("customerName", "Customer"),
			ColumnDescriptor::new("amount", "Amount").align(Align::Right),
			ColumnDescriptor::new("dueDate", "Due"),
			ColumnDescriptor::new("status", "Status"),
		]
	}

	fn filter_config() -> FilterConfig {
		FilterConfig::searching(["billNumber", "customerName"]).category_field("status")
	}

	fn default_sort() -> SortState {
		SortState::new("dueDate", SortOrder::Asc)
	}
}

impl Bills {
	pub fn mark_paid(id: &str) -> Mutation {
		Mutation::post(format!("/admin/bills/{id}/paid"))
	}
}
