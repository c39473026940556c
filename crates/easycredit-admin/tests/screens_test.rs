use easycredit_admin::Screen;
use easycredit_admin::screens::*;
use easycredit_tables::{Record, Value};
use rstest::*;
use serde_json::json;

/// Every field a screen refers to must exist on its record
fn assert_fields_resolve<S: Screen>(sample: serde_json::Value) -> S::Record {
	let row: S::Record = serde_json::from_value(sample).unwrap();

	for column in S::columns().iter().filter(|c| c.is_sortable()) {
		assert!(
			row.field(&column.id).is_some(),
			"{}: column '{}' has no field",
			S::NAME,
			column.id
		);
	}
	let config = S::filter_config();
	for field in &config.searchable_fields {
		assert!(row.field(field).is_some(), "{}: searchable '{}'", S::NAME, field);
	}
	let category = config.category_field.as_deref().unwrap();
	assert!(row.field(category).is_some(), "{}: category '{}'", S::NAME, category);
	assert!(row.field(&S::default_sort().order_by).is_some());
	assert!(row.key(S::KEY_FIELD).is_some());
	row
}

#[rstest]
fn test_customers() {
	let row = assert_fields_resolve::<Customers>(json!({
		"_id": "c1",
		"name": "Ada Obi",
		"email": "ada@example.com",
		"status": "active",
		"createdAt": "2024-03-01T09:30:00Z"
	}));
	assert_eq!(row.field("phone").unwrap().into_owned(), Value::Null);
	assert_eq!(Customers::block("c1").path, "/admin/customers/c1/block");
}

#[rstest]
fn test_loans_nested_applicant() {
	let row = assert_fields_resolve::<Loans>(json!({
		"_id": "l1",
		"applicant": {"name": "Ada Obi", "email": "ada@example.com"},
		"amount": 2500,
		"tenureMonths": 12,
		"interestRate": 4.5,
		"status": "pending"
	}));
	assert_eq!(
		row.field("applicant.name").unwrap().into_owned(),
		Value::from("Ada Obi")
	);
	assert_eq!(row.field("amount").unwrap().as_f64(), Some(2500.0));
	assert_eq!(
		Loans::approve("l1").body,
		Some(json!({"status": "approved"}))
	);
}

#[rstest]
fn test_bills() {
	assert_fields_resolve::<Bills>(json!({
		"_id": "b1",
		"billNumber": "INV-001",
		"customerName": "Ada Obi",
		"amount": 120.5,
		"dueDate": "2024-04-01T00:00:00Z",
		"status": "unpaid"
	}));
}

#[rstest]
fn test_kyc_hides_document_number_from_export() {
	assert_fields_resolve::<KycSubmissions>(json!({
		"_id": "k1",
		"customerName": "Ada Obi",
		"documentType": "passport",
		"documentNumber": "A1234567",
		"status": "pending"
	}));
	let number = KycSubmissions::columns()
		.into_iter()
		.find(|c| c.id == "documentNumber")
		.unwrap();
	assert!(!number.is_exported());
	assert_eq!(KycSubmissions::export_stem(), "kyc_submissions");
}

#[rstest]
fn test_complaints() {
	assert_fields_resolve::<Complaints>(json!({
		"_id": "t1",
		"ticketNumber": "T-77",
		"customerName": "Ada Obi",
		"subject": "Late fee",
		"status": "open"
	}));
}

#[rstest]
fn test_roles() {
	assert_fields_resolve::<Roles>(json!({
		"_id": "r1",
		"name": "Auditor",
		"type": "custom",
		"permissions": ["loans.read"]
	}));
}

#[rstest]
fn test_staff() {
	let row = assert_fields_resolve::<Staff>(json!({
		"_id": "s1",
		"name": "Bola",
		"email": "bola@easycredit.example",
		"role": "support",
		"active": true
	}));
	assert_eq!(row.field("active").unwrap().into_owned(), Value::Bool(true));
}

#[rstest]
fn test_chat_sessions_unassigned() {
	let row = assert_fields_resolve::<ChatSessions>(json!({
		"_id": "ch1",
		"customerName": "Ada Obi",
		"status": "waiting"
	}));
	assert!(row.field("agentName").unwrap().is_null());
}

#[rstest]
fn test_transfers() {
	assert_fields_resolve::<Transfers>(json!({
		"_id": "tr1",
		"reference": "TRX-1",
		"senderName": "Easy Credit",
		"recipientName": "Ada Obi",
		"amount": 2500,
		"currency": "NGN",
		"type": "debit",
		"status": "completed"
	}));
}

#[rstest]
fn test_missing_required_field_is_rejected() {
	let result = serde_json::from_value::<Loan>(json!({"_id": "l1", "amount": 10}));
	assert!(result.is_err());
}
