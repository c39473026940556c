//! KYC document submissions

use crate::screen::Screen;
use chrono::{DateTime, Utc};
use easycredit_client::{EnvelopeShape, Mutation};
use easycredit_tables::{ColumnDescriptor, FilterConfig, SortOrder, SortState, record_fields};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KycSubmission {
	pub _id: String,
	#[serde(rename = "customerName")]
	pub customer_name: String,
	#[serde(rename = "documentType")]
	pub document_type: String,
	#[serde(rename = "documentNumber")]
	pub document_number: String,
	pub status: String,
	#[serde(default, rename = "submittedAt")]
	pub submitted_at: Option<DateTime<Utc>>,
}

record_fields!(KycSubmission {
	"_id" => _id,
	"customerName" => customer_name,
	"documentType" => document_type,
	"documentNumber" => document_number,
	"status" => status,
	"submittedAt" => submitted_at,
});

pub struct KycSubmissions;

impl Screen for KycSubmissions {
	type Record = KycSubmission;

	const NAME: &'static str = "KYC Submissions";
	const ENDPOINT: &'static str = "/admin/kyc";
	const ENVELOPE: EnvelopeShape = EnvelopeShape::NestedData;

	fn columns() -> Vec<ColumnDescriptor> {
		vec![
			ColumnDescriptor::new("customerName", "Customer"),
			ColumnDescriptor::new("documentType", "Document"),
			// Document numbers stay on screen only
			ColumnDescriptor::new("documentNumber", "Number").include_in_export(false),
			ColumnDescriptor::new("status", "Status"),
			ColumnDescriptor::new("submittedAt", "Submitted"),
		]
	}

	fn filter_config() -> FilterConfig {
		FilterConfig::searching(["customerName", "documentType"]).category_field("status")
	}

	fn default_sort() -> SortState {
		SortState::new("submittedAt", SortOrder::Desc)
	}
}

impl KycSubmissions {
	pub fn verify(id: &str) -> Mutation {
		Mutation::patch(format!("/admin/kyc/{id}")).with_body(json!({ "status": "verified" }))
	}

	pub fn reject(id: &str, reason: &str) -> Mutation {
		Mutation::patch(format!("/admin/kyc/{id}"))
			.with_body(json!({ "status": "rejected", "reason": reason }))
	}
}
