//! A list screen bound to its table state

use crate::error::{AdminError, AdminResult};
use crate::screen::Screen;
use easycredit_client::{ApiClient, Mutation, RequestContext};
use easycredit_conf::TableSettings;
use easycredit_tables::{
	ColumnDescriptor, ExportFile, ExportFormat, PageState, Pipeline, PipelineOutput, TableState,
	export,
};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// One open list screen
///
/// Holds the last fetched rows of `S` together with the user's sort, filter,
/// page and selection. Refreshing replaces the rows and keeps everything else.
///
/// `refresh` and `run_action` take `&mut self`, so two fetches for the same
/// page never overlap. Callers that share a page across tasks must serialize
/// access themselves; the last completed fetch wins.
pub struct ListPage<S: Screen> {
	state: TableState<S::Record>,
	pipeline: Pipeline,
	columns: Vec<ColumnDescriptor>,
	_screen: PhantomData<S>,
}

impl<S: Screen> ListPage<S> {
	/// Opens the screen with its default sort and page size
	pub fn new() -> Self {
		Self {
			state: TableState::new(S::default_sort()).with_key_field(S::KEY_FIELD),
			pipeline: Pipeline::new(S::filter_config()),
			columns: S::columns(),
			_screen: PhantomData,
		}
	}

	/// Opens the screen with the configured page size
	pub fn with_settings(settings: &TableSettings) -> AdminResult<Self> {
		let page_state = PageState::new(0, settings.rows_per_page)?;
		let mut page = Self::new();
		page.state = page.state.with_page(page_state);
		Ok(page)
	}

	pub fn state(&self) -> &TableState<S::Record> {
		&self.state
	}

	/// Mutable access for sort, filter, page and selection changes
	pub fn state_mut(&mut self) -> &mut TableState<S::Record> {
		&mut self.state
	}

	pub fn columns(&self) -> &[ColumnDescriptor] {
		&self.columns
	}

	pub fn pipeline(&self) -> &Pipeline {
		&self.pipeline
	}

	/// Refetches the rows and returns how many arrived
	///
	/// A page past the end of the new filtered rows is moved back to the last
	/// page that has rows.
	pub async fn refresh(&mut self, client: &ApiClient, ctx: &RequestContext) -> AdminResult<usize> {
		let rows = client
			.list::<S::Record>(ctx, S::ENDPOINT, S::ENVELOPE)
			.await?;
		let count = rows.len();
		let dropped = self.state.replace_rows(rows);
		self.state.clamp_page(&self.pipeline)?;

		tracing::info!(
			screen = S::NAME,
			rows = count,
			dropped_selection = dropped.len(),
			"refreshed list"
		);
		Ok(count)
	}

	/// Current page of the processed rows
	pub fn view(&self) -> AdminResult<PipelineOutput<'_, S::Record>> {
		Ok(self.state.view(&self.pipeline)?)
	}

	/// Selects every row on the current page
	pub fn select_page(&mut self) -> AdminResult<()> {
		Ok(self.state.select_page(&self.pipeline)?)
	}

	/// Exports every row passing the current filter, in sorted order
	pub fn export(&self, format: ExportFormat) -> AdminResult<ExportFile> {
		let rows = self.state.export_rows(&self.pipeline)?;
		Ok(export(format, &rows, &self.columns, &S::export_stem())?)
	}

	/// Keys of the selected rows, in selection order
	pub fn selected_ids(&self) -> Vec<String> {
		self.state.selection().keys().map(str::to_string).collect()
	}

	/// Sends `mutation` then refetches
	pub async fn run_action(
		&mut self,
		client: &ApiClient,
		ctx: &RequestContext,
		mutation: &Mutation,
	) -> AdminResult<Value> {
		let response = client.send(ctx, mutation).await?;
		tracing::info!(
			screen = S::NAME,
			method = %mutation.method,
			path = %mutation.path,
			"ran row action"
		);
		self.refresh(client, ctx).await?;
		Ok(response)
	}

	/// Sends `mutations` in order then refetches once
	///
	/// Stops at the first failure; rows changed before it are refetched all
	/// the same, and the failure is returned even if that refetch fails too.
	/// Returns the number of mutations sent.
	pub async fn run_bulk_action(
		&mut self,
		client: &ApiClient,
		ctx: &RequestContext,
		mutations: &[Mutation],
	) -> AdminResult<usize> {
		if mutations.is_empty() {
			return Err(AdminError::EmptySelection);
		}

		let mut sent = 0;
		let mut failure = None;
		for mutation in mutations {
			match client.send(ctx, mutation).await {
				Ok(_) => sent += 1,
				Err(err) => {
					tracing::warn!(
						screen = S::NAME,
						path = %mutation.path,
						error = %err,
						"bulk action stopped"
					);
					failure = Some(err);
					break;
				}
			}
		}

		match failure {
			Some(err) => {
				if let Err(refresh_err) = self.refresh(client, ctx).await {
					tracing::warn!(
						screen = S::NAME,
						error = %refresh_err,
						"refresh after failed bulk action failed"
					);
				}
				Err(err.into())
			}
			None => {
				self.refresh(client, ctx).await?;
				self.state.clear_selection();
				Ok(sent)
			}
		}
	}
}

impl<S: Screen> Default for ListPage<S> {
	fn default() -> Self {
		Self::new()
	}
}

impl<S: Screen> fmt::Debug for ListPage<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListPage")
			.field("screen", &S::NAME)
			.field("rows", &self.state.rows().len())
			.field("sort", self.state.sort())
			.field("filter", self.state.filter())
			.field("page", self.state.page())
			.finish()
	}
}
