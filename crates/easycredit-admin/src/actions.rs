//! Bulk row actions

use crate::error::{AdminError, AdminResult};
use easycredit_client::{Method, Mutation};
use serde_json::Value;

const ID_PLACEHOLDER: &str = "{id}";

/// Builds one mutation per id by substituting `{id}` in `path_template`
///
/// # Examples
///
/// ```
/// use easycredit_admin::bulk_mutation;
/// use easycredit_client::Method;
///
/// let mutations = bulk_mutation(Method::Patch, "/customers/{id}/block", ["a", "b"], None).unwrap();
/// assert_eq!(mutations[1].path, "/customers/b/block");
///
/// assert!(bulk_mutation(Method::Delete, "/roles", ["a"], None).is_err());
/// ```
pub fn bulk_mutation<I, S>(
	method: Method,
	path_template: &str,
	ids: I,
	body: Option<&Value>,
) -> AdminResult<Vec<Mutation>>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	if !path_template.contains(ID_PLACEHOLDER) {
		return Err(AdminError::MissingIdPlaceholder(path_template.to_string()));
	}

	Ok(ids
		.into_iter()
		.map(|id| Mutation {
			method,
			path: path_template.replace(ID_PLACEHOLDER, id.as_ref()),
			body: body.cloned(),
		})
		.collect())
}
