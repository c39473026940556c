//! Loan applications
//!
//! Rows embed the applicant, so search and sort reach into it with dotted
//! field names (`applicant.name`).

use crate::screen::Screen;
use chrono::{DateTime, Utc};
use easycredit_client::{EnvelopeShape, Mutation};
use easycredit_tables::{Align, ColumnDescriptor, FilterConfig, SortOrder, SortState, record_fields};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoanApplicant {
	pub name: String,
	#[serde(default)]
	pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Loan {
	pub _id: String,
	pub applicant: LoanApplicant,
	pub amount: f64,
	#[serde(rename = "tenureMonths")]
	pub tenure_months: u32,
	#[serde(rename = "interestRate")]
	pub interest_rate: f64,
	pub status: String,
	#[serde(default, rename = "createdAt")]
	pub created_at: Option<DateTime<Utc>>,
}

record_fields!(Loan {
	"_id" => _id,
	"applicant.name" => applicant.name,
	"applicant.email" => applicant.email,
	"amount" => amount,
	"tenureMonths" => tenure_months,
	"interestRate" => interest_rate,
	"status" => status,
	"createdAt" => created_at,
});

pub struct Loans;

impl Screen for Loans {
	type Record = Loan;

	const NAME: &'static str = "Loans";
	const ENDPOINT: &'static str = "/admin/loans";
	const ENVELOPE: EnvelopeShape = EnvelopeShape::NestedData;

	fn columns() -> Vec<ColumnDescriptor> {
		vec![
			ColumnDescriptor::new("applicant.name", "Applicant"),
			ColumnDescriptor::new("amount", "Amount").align(Align::Right),
			ColumnDescriptor::new("tenureMonths", "Tenure (months)").align(Align::Right),
			ColumnDescriptor::new("interestRate", "Rate (%)").align(Align::Right),
			ColumnDescriptor::new("status", "Status").align(Align::Center),
			ColumnDescriptor::new("createdAt", "Applied"),
			ColumnDescriptor::new("", "Actions"),
		]
	}

	fn filter_config() -> FilterConfig {
		FilterConfig::searching(["applicant.name", "applicant.email"]).category_field("status")
	}

	fn default_sort() -> SortState {
		SortState::new("createdAt", SortOrder::Desc)
	}
}

impl Loans {
	pub fn approve(id: &str) -> Mutation {
		Self::set_status(id, "approved")
	}

	pub fn reject(id: &str) -> Mutation {
		Self::set_status(id, "rejected")
	}

	fn set_status(id: &str, status: &str) -> Mutation {
		Mutation::patch(format!("/admin/loans/{id}/status")).with_body(json!({ "status": status }))
	}
}
