//! Support chat sessions

use crate::screen::Screen;
use chrono::{DateTime, Utc};
use easycredit_client::{EnvelopeShape, Mutation};
use easycredit_tables::{ColumnDescriptor, FilterConfig, SortOrder, SortState, record_fields};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatSession {
	pub _id: String,
	#[serde(rename = "customerName")]
	pub customer_name: String,
	/// Unassigned sessions have no agent
	#[serde(default, rename = "agentName")]
	pub agent_name: Option<String>,
	pub status: String,
	#[serde(default, rename = "lastMessage")]
	pub last_message: Option<String>,
	#[serde(default, rename = "updatedAt")]
	pub updated_at: Option<DateTime<Utc>>,
}

record_fields!(ChatSession {
	"_id" => _id,
	"customerName" => customer_name,
	"agentName" => agent_name,
	"status" => status,
	"lastMessage" => last_message,
	"updatedAt" => updated_at,
});

pub struct ChatSessions;

impl Screen for ChatSessions {
	type Record = ChatSession;

	const NAME: &'static str = "Chat Sessions";
	const ENDPOINT: &'static str = "/admin/chats";
	const ENVELOPE: EnvelopeShape = EnvelopeShape::Data;

	fn columns() -> Vec<ColumnDescriptor> {
		vec![
			ColumnDescriptor::new("customerName", "Customer"),
			ColumnDescriptor::new("agentName", "Agent"),
			ColumnDescriptor::new("status", "Status"),
			ColumnDescriptor::new("lastMessage", "Last message"),
			ColumnDescriptor::new("updatedAt", "Updated"),
		]
	}

	fn filter_config() -> FilterConfig {
		FilterConfig::searching(["customerName", "agentName", "lastMessage"]).category_field("status")
	}

	fn default_sort() -> SortState {
		SortState::new("updatedAt", SortOrder::Desc)
	}
}

impl ChatSessions {
	pub fn close(id: &str) -> Mutation {
		Mutation::post(format!("/admin/chats/{id}/close"))
	}
}
